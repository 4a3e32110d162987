//! Pagination and text-search helpers.
//!
//! This module lives in `core` (zero internal deps) so it can be used by both
//! the repository layer and any future CLI tooling.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows per list page.
///
/// Large enough to behave as "unbounded" for typical personal datasets.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum number of rows per list page.
pub const MAX_LIST_LIMIT: i64 = 1000;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Clamp a requested page size to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a requested skip/offset to be non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

/// Escape LIKE/ILIKE metacharacters in a user-supplied search term.
///
/// The result is meant to be wrapped in `%...%` by the caller; escaping here
/// keeps `%`, `_` and `\` in the term literal.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
