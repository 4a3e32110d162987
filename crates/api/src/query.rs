//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication.

use serde::Deserialize;

/// Generic list parameters (`?skip=&limit=&search=`).
///
/// Used by any handler that supports paginated listing with an optional
/// case-insensitive search term. Values are clamped via
/// `taskforge_core::search::{clamp_skip, clamp_limit}`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}
