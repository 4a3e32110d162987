//! Shared response envelope types for API handlers.
//!
//! Collections use a `{ "data": [...], "count": n }` envelope where `count`
//! is the total number of matching rows before pagination. Delete and bulk
//! operations return a `{ "message": "..." }` confirmation.

use serde::Serialize;

/// Standard `{ "data": [...], "count": n }` collection envelope.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub data: Vec<T>,
    /// Total matching rows before pagination was applied.
    pub count: i64,
}

/// Standard `{ "message": "..." }` confirmation for delete/bulk operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
