//! Domain layer shared by the repository and API crates.
//!
//! Deliberately dependency-light: no sqlx, no axum. Holds the shared type
//! aliases, the domain error taxonomy, the ownership-based authorization
//! policy, and search/pagination helpers.

pub mod error;
pub mod policy;
pub mod search;
pub mod types;
