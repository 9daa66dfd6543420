use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_helpers::decorate_error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("No such user")]
    NotFound,

    #[error("User with given email already exists")]
    DuplicateEmail,

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Storage or hashing failure; the wire message is fixed, the cause is
    /// kept for logs only.
    #[error("Unable to create user")]
    Storage(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            UserError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            UserError::DuplicateEmail => (StatusCode::BAD_REQUEST, self.to_string()),
            UserError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            UserError::Storage(cause) => {
                tracing::error!("User persistence failure: {}", cause);
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        (status, Json(decorate_error(status, message))).into_response()
    }
}
