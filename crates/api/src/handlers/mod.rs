//! HTTP handlers, one module per resource.

pub mod auth;
pub mod categories;
pub mod notes;
pub mod search;
pub mod tasks;
pub mod users;
