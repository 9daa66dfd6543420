use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::errors::responses::{BadRequestResponse, NotFoundResponse};
use axum_helpers::ValidatedJson;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::UserResult;
use crate::models::{CreateUser, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, get_user),
    components(
        schemas(CreateUser, UserResponse, UserPayload),
        responses(BadRequestResponse, NotFoundResponse)
    ),
    tags(
        (name = "users", description = "User account endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_user))
        .route("/{email}", get(get_user))
        .with_state(shared_service)
}

/// Success envelope for user endpoints
#[derive(Debug, Serialize, ToSchema)]
struct UserPayload {
    data: UserResponse,
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = UserPayload),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserPayload { data: user.into() }),
    ))
}

/// Get a user by email
#[utoipa::path(
    get,
    path = "/{email}",
    tag = "users",
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User found", body = UserPayload),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(email): Path<String>,
) -> UserResult<Json<UserPayload>> {
    let user = service.get_user(&email).await?;
    Ok(Json(UserPayload { data: user.into() }))
}
