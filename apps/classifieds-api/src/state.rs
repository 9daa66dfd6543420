use crate::config::Config;
use sea_orm::DatabaseConnection;

/// Shared application state handed to routers.
///
/// `DatabaseConnection` is an Arc'd pool internally, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
