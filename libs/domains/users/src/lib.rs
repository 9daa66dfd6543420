//! Users Domain
//!
//! Account records for listing owners: creation with at-rest password
//! hashing and lookup by email.
//!
//! Layering follows the workspace convention: handlers → service →
//! repository (trait + in-memory and Postgres implementations) → models.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, NewUser, User, UserResponse};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
