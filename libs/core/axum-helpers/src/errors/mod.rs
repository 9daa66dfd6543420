pub mod handlers;
pub mod responses;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Inner part of the uniform error envelope.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// HTTP status code, repeated in the body for clients that log envelopes
    pub code: u16,
    /// Human-readable message or structured validation output
    #[schema(value_type = String)]
    pub message: serde_json::Value,
}

/// Uniform error envelope returned by every failing endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": {
///     "code": 400,
///     "message": "Invalid section"
///   }
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Wrap a status code and message into the uniform envelope.
///
/// Accepts a plain string or any structured value (e.g. per-field validation
/// errors). Pure formatting, no side effects.
pub fn decorate_error(status: StatusCode, message: impl Into<serde_json::Value>) -> ErrorResponse {
    ErrorResponse {
        error: ErrorBody {
            code: status.as_u16(),
            message: message.into(),
        },
    }
}

/// Application error type that converts into envelope-shaped HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Request validation failed")]
    Validation(serde_json::Value),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, serde_json::Value::String(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, serde_json::Value::String(msg))
            }
            AppError::Validation(details) => {
                tracing::info!("Validation error: {}", details);
                (StatusCode::BAD_REQUEST, details)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::Value::String("An internal error occurred".to_string()),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, serde_json::Value::String(msg))
            }
        };

        (status, Json(decorate_error(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_error_plain_string() {
        let envelope = decorate_error(StatusCode::BAD_REQUEST, "Invalid section");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["error"]["code"], 400);
        assert_eq!(json["error"]["message"], "Invalid section");
    }

    #[test]
    fn test_decorate_error_structured_message() {
        let details = serde_json::json!({"title": ["must not be empty"]});
        let envelope = decorate_error(StatusCode::BAD_REQUEST, details.clone());
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["error"]["code"], 400);
        assert_eq!(json["error"]["message"], details);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response = AppError::InternalServerError("pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
