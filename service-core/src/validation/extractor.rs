use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;
use validator::ValidationErrors;

use crate::error::AppError;

/// JSON body extractor that rejects with `AppError`.
///
/// Malformed JSON or a wrong content type is rejected by axum's `Json`
/// (400/415); a well-formed body that does not convert into `T` becomes a
/// 422 with per-field detail.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: TryFrom<Value, Error = ValidationErrors> + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        let payload = T::try_from(value)?;
        Ok(ValidatedJson(payload))
    }
}
