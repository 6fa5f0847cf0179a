use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::validation::ValidatedJson;

use crate::models::{RecommendationRequest, RecommendationResponse};
use crate::services::record_recommendations;
use crate::startup::AppState;

#[tracing::instrument(skip(state, request), fields(user_id = %request.user_id, limit = request.limit))]
pub async fn content_recommendations(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let recommendations = state.recommender.recommend(&request)?;

    record_recommendations(state.recommender.name(), recommendations.len());
    tracing::info!(
        count = recommendations.len(),
        recommender = state.recommender.name(),
        "Generated recommendations"
    );

    Ok(Json(RecommendationResponse { recommendations }))
}
