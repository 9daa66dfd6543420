//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with the uniform error envelope so clients see a
//! consistent shape regardless of where a request failed.

pub mod id_path;
pub mod query;
pub mod validated_json;

pub use id_path::IdPath;
pub use query::QueryParams;
pub use validated_json::ValidatedJson;
