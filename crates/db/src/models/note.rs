//! Note entity model and DTOs.
//!
//! A note always belongs to a task; deleting the task cascades to its notes.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskforge_core::types::Timestamp;
use uuid::Uuid;
use validator::Validate;

/// A note row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub task_id: Uuid,
    pub owner_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note. `owner_id` is taken from the actor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNote {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    /// Must reference an existing, accessible task.
    pub task_id: Uuid,
}

/// DTO for updating an existing note. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateNote {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Must reference an existing, accessible task when set.
    pub task_id: Option<Uuid>,
}
