//! Repository for the `categories` table.

use sqlx::PgPool;
use taskforge_core::policy::Actor;
use taskforge_core::search::escape_like;
use uuid::Uuid;

use crate::error::{RepoError, RepoResult};
use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, owner_id, created_at, updated_at";

/// Provides authorization-scoped CRUD for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category owned by the actor, returning the created row.
    ///
    /// Fails with `Conflict` when the actor already has a category with the
    /// same title. The `uq_categories_owner_title` constraint is the backstop.
    pub async fn create(pool: &PgPool, actor: &Actor, input: &CreateCategory) -> RepoResult<Category> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE owner_id = $1 AND title = $2)",
        )
        .bind(actor.id)
        .bind(&input.title)
        .fetch_one(pool)
        .await?;
        if exists {
            return Err(RepoError::Conflict(format!(
                "Category with title '{}' already exists",
                input.title
            )));
        }

        let query = format!(
            "INSERT INTO categories (title, description, owner_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(actor.id)
            .fetch_one(pool)
            .await?;
        Ok(category)
    }

    /// Fetch a category by id: `NotFound` if absent, `PermissionDenied` if
    /// the actor is neither owner nor superuser.
    pub async fn find_by_id(pool: &PgPool, actor: &Actor, id: Uuid) -> RepoResult<Category> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound("Category not found"))?;
        if !actor.can_access(category.owner_id) {
            return Err(RepoError::PermissionDenied);
        }
        Ok(category)
    }

    /// List categories visible to the actor, newest first, with the total
    /// count over the same filter before pagination.
    ///
    /// `search` matches title OR description, case-insensitively.
    pub async fn list(
        pool: &PgPool,
        actor: &Actor,
        skip: i64,
        limit: i64,
        search: Option<&str>,
    ) -> RepoResult<(Vec<Category>, i64)> {
        let owner = actor.ownership_filter();
        let pattern = search.map(|s| format!("%{}%", escape_like(s)));

        let filter = "($1::uuid IS NULL OR owner_id = $1)
              AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)";

        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE {filter}
             ORDER BY created_at DESC
             OFFSET $3 LIMIT $4"
        );
        let categories = sqlx::query_as::<_, Category>(&query)
            .bind(owner)
            .bind(&pattern)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM categories WHERE {filter}");
        let count: i64 = sqlx::query_scalar(&count_query)
            .bind(owner)
            .bind(&pattern)
            .fetch_one(pool)
            .await?;

        Ok((categories, count))
    }

    /// Patch a category. Only non-`None` fields in `input` are applied;
    /// `updated_at` is stamped.
    pub async fn update(
        pool: &PgPool,
        actor: &Actor,
        id: Uuid,
        input: &UpdateCategory,
    ) -> RepoResult<Category> {
        // Existence then permission, same as find_by_id.
        Self::find_by_id(pool, actor, id).await?;

        let query = format!(
            "UPDATE categories SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(category)
    }

    /// Delete a category. Referencing tasks are unlinked (`ON DELETE SET NULL`).
    pub async fn delete(pool: &PgPool, actor: &Actor, id: Uuid) -> RepoResult<()> {
        Self::find_by_id(pool, actor, id).await?;

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
