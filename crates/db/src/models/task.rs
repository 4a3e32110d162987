//! Task entity model, status/priority enums, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskforge_core::types::Timestamp;
use uuid::Uuid;
use validator::Validate;

/// Task workflow state. Wire values match the `task_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    #[sqlx(rename = "Pending")]
    Pending,
    #[sqlx(rename = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    #[sqlx(rename = "Completed")]
    Completed,
    #[sqlx(rename = "Cancelled")]
    Cancelled,
}

/// Task priority. Wire values match the `task_priority` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_priority")]
pub enum TaskPriority {
    #[sqlx(rename = "High")]
    High,
    #[sqlx(rename = "Medium")]
    Medium,
    #[sqlx(rename = "Low")]
    Low,
}

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<Timestamp>,
    pub owner_id: Uuid,
    pub category_id: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A task joined to its (optional) category, as returned by list and search.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskWithCategory {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<Timestamp>,
    pub owner_id: Uuid,
    pub category_id: Option<Uuid>,
    /// Title of the linked category, if any.
    pub category_title: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task. `owner_id` is taken from the actor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `Pending` if omitted.
    pub status: Option<TaskStatus>,
    /// Defaults to `Medium` if omitted.
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Timestamp>,
    /// Must reference an existing, accessible category when set.
    pub category_id: Option<Uuid>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Timestamp>,
    /// Must reference an existing, accessible category when set.
    pub category_id: Option<Uuid>,
}
