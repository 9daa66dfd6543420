use utoipa::OpenApi;

/// Merged OpenAPI document for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Classifieds API",
        description = "CRUD API for classified-ad listings and users"
    ),
    nest(
        (path = "/api/listings", api = domain_listings::handlers::ApiDoc),
        (path = "/api/users", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
