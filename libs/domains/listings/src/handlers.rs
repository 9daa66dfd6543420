use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::errors::responses::{BadRequestResponse, NotFoundResponse};
use axum_helpers::{IdPath, QueryParams, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ListingResult;
use crate::models::{ListingFilter, ListingResponse, NewListing, UpdateListing};
use crate::repository::ListingRepository;
use crate::service::ListingService;

/// OpenAPI documentation for the Listings API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_listings,
        create_listing,
        get_listing,
        update_listing,
        delete_listing,
    ),
    components(
        schemas(
            NewListing,
            UpdateListing,
            ListingResponse,
            ListingPayload,
            ListingsPayload,
            ListingCollection
        ),
        responses(BadRequestResponse, NotFoundResponse)
    ),
    tags(
        (name = "listings", description = "Classified-ad listing endpoints")
    )
)]
pub struct ApiDoc;

/// Create the listings router with all HTTP endpoints
pub fn router<R: ListingRepository + 'static>(service: ListingService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_listings).post(create_listing))
        .route(
            "/{id}",
            get(get_listing).put(update_listing).delete(delete_listing),
        )
        .with_state(shared_service)
}

/// Success envelope for a single listing
#[derive(Debug, Serialize, ToSchema)]
struct ListingPayload {
    data: ListingResponse,
}

/// Success envelope for a listing collection
#[derive(Debug, Serialize, ToSchema)]
struct ListingsPayload {
    data: ListingCollection,
}

#[derive(Debug, Serialize, ToSchema)]
struct ListingCollection {
    listings: Vec<ListingResponse>,
}

/// Create a new listing
#[utoipa::path(
    post,
    path = "",
    tag = "listings",
    request_body = NewListing,
    responses(
        (status = 201, description = "Listing created successfully", body = ListingPayload),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn create_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    ValidatedJson(input): ValidatedJson<NewListing>,
) -> ListingResult<impl IntoResponse> {
    let listing = service.create_listing(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ListingPayload {
            data: listing.into(),
        }),
    ))
}

/// Get a listing by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing found", body = ListingPayload),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    IdPath(id): IdPath,
) -> ListingResult<Json<ListingPayload>> {
    let listing = service.get_listing(id).await?;
    Ok(Json(ListingPayload {
        data: listing.into(),
    }))
}

/// List listings filtered by optional query parameters.
///
/// All filter keys are optional and combine conjunctively, e.g.
/// `/api/listings?section_id=1&city_id=1&days_back=30&excluded_user_id=1`.
#[utoipa::path(
    get,
    path = "",
    tag = "listings",
    params(ListingFilter),
    responses(
        (status = 200, description = "Matching listings", body = ListingsPayload),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn get_listings<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    QueryParams(filter): QueryParams<ListingFilter>,
) -> ListingResult<Json<ListingsPayload>> {
    let listings = service.get_listings(filter).await?;

    Ok(Json(ListingsPayload {
        data: ListingCollection {
            listings: listings.into_iter().map(Into::into).collect(),
        },
    }))
}

/// Update a listing with a partial payload
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = UpdateListing,
    responses(
        (status = 200, description = "Listing updated successfully", body = ListingPayload),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateListing>,
) -> ListingResult<Json<ListingPayload>> {
    let listing = service.update_listing(id, input).await?;
    Ok(Json(ListingPayload {
        data: listing.into(),
    }))
}

/// Delete a listing
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "listings",
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 204, description = "Listing deleted successfully"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    IdPath(id): IdPath,
) -> ListingResult<impl IntoResponse> {
    service.delete_listing(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
