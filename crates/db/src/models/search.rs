//! Search parameter types for the filter engine.

use serde::Deserialize;
use taskforge_core::types::Timestamp;

use crate::models::task::{TaskPriority, TaskStatus};

/// Composable task filter: every field is an optional predicate, AND-ed
/// together by `TaskRepo::search`. An empty set matches all rows visible to
/// the actor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskSearchParams {
    /// Case-insensitive substring match on the task title.
    pub title: Option<String>,
    /// Case-insensitive substring match on the linked category's title.
    pub category_title: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    /// Inclusive lower bound on `due_date`.
    pub start_date: Option<Timestamp>,
    /// Inclusive upper bound on `due_date`.
    pub end_date: Option<Timestamp>,
}
