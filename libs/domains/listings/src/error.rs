use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_helpers::decorate_error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Listing {0} not found")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Storage failure; the wire message is fixed, the cause goes to logs.
    #[error("Unable to process listing")]
    Database(String),
}

pub type ListingResult<T> = Result<T, ListingError>;

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ListingError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Listing {} not found", id))
            }
            ListingError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ListingError::Database(cause) => {
                tracing::error!("Listing persistence failure: {}", cause);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        (status, Json(decorate_error(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ListingError::NotFound(1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ListingError::Validation("Invalid section".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ListingError::Database("pool closed".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_database_error_hides_cause() {
        assert_eq!(
            ListingError::Database("password in dsn leaked".to_string()).to_string(),
            "Unable to process listing"
        );
    }
}
