//! Request extractors for authentication and superuser gating.

pub mod auth;

pub use auth::{AuthUser, RequireSuperuser};
