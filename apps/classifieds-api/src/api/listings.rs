use axum::Router;
use domain_listings::{handlers, ListingService, PgListingRepository};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgListingRepository::new(state.db.clone());
    let service = ListingService::new(repository);
    handlers::router(service)
}
