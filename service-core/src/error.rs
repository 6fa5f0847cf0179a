use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::UnsupportedMediaType(message),
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(message),
            _ => AppError::BadRequest(message),
        }
    }
}

/// One offending field in a validation error response.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

/// Flattens `ValidationErrors` into a list ordered by field name.
pub fn field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                field: field.to_string(),
                code: err.code.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    fields
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, details, fields) = match self {
            AppError::ValidationError(err) => {
                let fields = field_errors(&err);
                tracing::warn!(
                    fields = ?fields.iter().map(|f| f.field.as_str()).collect::<Vec<_>>(),
                    "Request failed validation"
                );
                let summary = fields
                    .iter()
                    .map(|f| format!("{}: {}", f.field, f.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Validation error".to_string(),
                    Some(summary),
                    Some(fields),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    "Bad request".to_string(),
                    Some(msg),
                    None,
                )
            }
            AppError::UnsupportedMediaType(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Unsupported media type".to_string(),
                Some(msg),
                None,
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Payload too large".to_string(),
                Some(msg),
                None,
            ),
            AppError::InternalError(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(format!("{:#}", err)),
                    None,
                )
            }
            AppError::ConfigError(err) => {
                tracing::error!("Configuration error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                    Some(err.to_string()),
                    None,
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
                fields,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    fn validation_errors() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let mut missing = ValidationError::new("missing");
        missing.message = Some("Field required".into());
        errors.add("userId", missing);
        let mut parsing = ValidationError::new("int_parsing");
        parsing.message = Some("Input should be a valid integer".into());
        errors.add("limit", parsing);
        errors
    }

    #[test]
    fn field_errors_are_sorted_by_field() {
        let fields = field_errors(&validation_errors());
        assert_eq!(
            fields,
            vec![
                FieldError {
                    field: "limit".to_string(),
                    code: "int_parsing".to_string(),
                    message: "Input should be a valid integer".to_string(),
                },
                FieldError {
                    field: "userId".to_string(),
                    code: "missing".to_string(),
                    message: "Field required".to_string(),
                },
            ]
        );
    }

    #[test]
    fn field_error_without_message_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("limit", ValidationError::new("int_type"));
        let fields = field_errors(&errors);
        assert_eq!(fields[0].message, "int_type");
    }

    #[test]
    fn validation_error_maps_to_unprocessable_entity() {
        let response = AppError::from(validation_errors()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("EOF while parsing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_maps_to_500() {
        let response = AppError::from(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
