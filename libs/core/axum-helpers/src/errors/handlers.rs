use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use super::decorate_error;

/// Fallback handler for unmatched routes.
pub async fn not_found(uri: Uri) -> Response {
    tracing::info!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Json(decorate_error(
            StatusCode::NOT_FOUND,
            format!("No route for {}", uri.path()),
        )),
    )
        .into_response()
}
