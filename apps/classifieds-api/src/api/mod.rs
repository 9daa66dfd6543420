use axum::Router;

pub mod health;
pub mod listings;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Takes a reference to AppState and wires each domain: repository over the
/// shared pool → service → domain router with state applied.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest("/listings", listings::router(state))
        .nest("/users", users::router(state))
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks against the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
