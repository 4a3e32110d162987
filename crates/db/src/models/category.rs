//! Category entity model and DTOs.
//!
//! Category titles are unique per owner (`uq_categories_owner_title`); the
//! repository pre-checks on create and the constraint is the backstop.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskforge_core::types::Timestamp;
use uuid::Uuid;
use validator::Validate;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category. `owner_id` is taken from the actor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

/// DTO for updating an existing category. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}
