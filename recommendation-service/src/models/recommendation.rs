use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service_core::validation::{coerce, ObjectFields};
use validator::ValidationErrors;

pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_EXCLUDE_INTERACTED: bool = true;

/// Body of `POST /content-recommendations`.
///
/// Only `limit` influences the response; the remaining fields are accepted
/// and validated but otherwise unused.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_id: String,
    pub preferences: Map<String, Value>,
    /// Unbounded; zero or negative yields no recommendations.
    pub limit: i64,
    pub exclude_interacted: bool,
}

impl TryFrom<Value> for RecommendationRequest {
    type Error = ValidationErrors;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut fields = ObjectFields::new(value)?;

        let user_id = fields.required("userId", coerce::string);
        let preferences = fields.optional("preferences", Map::new(), coerce::object);
        let limit = fields.optional("limit", DEFAULT_LIMIT, coerce::integer);
        let exclude_interacted = fields.optional(
            "excludeInteracted",
            DEFAULT_EXCLUDE_INTERACTED,
            coerce::boolean,
        );

        fields.finish()?;

        match (user_id, preferences, limit, exclude_interacted) {
            (Some(user_id), Some(preferences), Some(limit), Some(exclude_interacted)) => Ok(Self {
                user_id,
                preferences,
                limit,
                exclude_interacted,
            }),
            // finish() has already reported every field that failed to coerce
            _ => Err(ValidationErrors::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: String,
    pub score: f64,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}
