//! SeaORM table mappings for the listings domain.
//!
//! `sections`, `cities`, and `users` are read-side mappings: listings only
//! resolve references against them (the users table itself is owned by the
//! users domain).

pub mod cities;
pub mod listings;
pub mod sections;
pub mod users;
