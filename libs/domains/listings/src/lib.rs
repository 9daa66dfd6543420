//! Listings Domain
//!
//! Classified-ad listings: creation, lookup, conjunctive filtering, partial
//! update, and deletion. A listing references a section (category), a city,
//! and an owning user; references are resolved eagerly before use.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← reference resolution, publication-window invariant
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← data access (trait + in-memory/Postgres impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entities, DTOs, wire mapping
//! └─────────────┘
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ListingError, ListingResult};
pub use models::{Listing, ListingFilter, ListingResponse, NewListing, UpdateListing};
pub use postgres::PgListingRepository;
pub use repository::{InMemoryListingRepository, ListingRepository};
pub use service::ListingService;
