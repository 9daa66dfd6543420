//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Distinguishes the three ways a body can be unusable:
/// - not JSON at all (syntax error, wrong content type) → 400 with the fixed
///   message `"Invalid JSON format"`
/// - JSON that does not match the target shape (missing/mistyped field) →
///   400 with the deserializer's description of the offending field
/// - well-formed JSON failing `Validate` rules → 400 with per-field details
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedJson;
///
/// async fn create_listing(ValidatedJson(input): ValidatedJson<NewListing>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonSyntaxError(_) | JsonRejection::MissingJsonContentType(_) => {
                    AppError::BadRequest("Invalid JSON format".to_string()).into_response()
                }
                JsonRejection::JsonDataError(e) => {
                    AppError::BadRequest(e.body_text()).into_response()
                }
                other => AppError::BadRequest(other.body_text()).into_response(),
            })?;

        data.validate().map_err(|e| {
            let details = e
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let messages: Vec<serde_json::Value> = errors
                        .iter()
                        .map(|err| {
                            serde_json::json!({
                                "code": err.code,
                                "message": err.message,
                            })
                        })
                        .collect();
                    (field.to_string(), serde_json::json!(messages))
                })
                .collect::<serde_json::Map<_, _>>();

            AppError::Validation(serde_json::Value::Object(details)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        title: String,
    }

    async fn handler(ValidatedJson(p): ValidatedJson<Payload>) -> String {
        p.title
    }

    fn app() -> Router {
        Router::new().route("/", post(handler))
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_malformed_json_yields_fixed_message() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response.into_body()).await;
        assert_eq!(json["error"]["message"], "Invalid JSON format");
        assert_eq!(json["error"]["code"], 400);
    }

    #[tokio::test]
    async fn test_missing_field_yields_descriptive_message() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response.into_body()).await;
        let message = json["error"]["message"].as_str().unwrap();
        assert!(message.contains("title"));
    }

    #[tokio::test]
    async fn test_validation_failure_yields_field_details() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"title": ""}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response.into_body()).await;
        assert!(json["error"]["message"]["title"].is_array());
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"title": "Sofa"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
