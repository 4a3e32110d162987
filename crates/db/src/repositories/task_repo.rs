//! Repository for the `tasks` table.
//!
//! Carries the bulk operations (atomic all-or-nothing over a transaction)
//! and the task filter engine used by `/tasks/search`.

use sqlx::PgPool;
use taskforge_core::policy::Actor;
use taskforge_core::search::escape_like;
use uuid::Uuid;

use crate::error::{RepoError, RepoResult};
use crate::models::search::TaskSearchParams;
use crate::models::task::{CreateTask, Task, TaskStatus, TaskWithCategory, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, description, status, priority, due_date, owner_id, category_id, created_at, updated_at";

/// Column list for task-with-category joins (`tasks t LEFT JOIN categories c`).
const JOIN_COLUMNS: &str = "t.id, t.title, t.description, t.status, t.priority, t.due_date, \
    t.owner_id, t.category_id, c.title AS category_title, t.created_at, t.updated_at";

/// Provides authorization-scoped CRUD, bulk operations, and search for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task owned by the actor, returning the created row.
    ///
    /// When `category_id` is set, the category must exist (`NotFound`) and be
    /// accessible to the actor (`PermissionDenied`). Status defaults to
    /// `Pending`, priority to `Medium`.
    pub async fn create(pool: &PgPool, actor: &Actor, input: &CreateTask) -> RepoResult<Task> {
        if let Some(category_id) = input.category_id {
            let owner = Self::category_owner(pool, category_id).await?;
            if !actor.can_access(owner) {
                return Err(RepoError::PermissionDenied);
            }
        }

        let query = format!(
            "INSERT INTO tasks (title, description, status, priority, due_date, owner_id, category_id)
             VALUES ($1, $2, COALESCE($3, 'Pending'::task_status),
                     COALESCE($4, 'Medium'::task_priority), $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.priority)
            .bind(input.due_date)
            .bind(actor.id)
            .bind(input.category_id)
            .fetch_one(pool)
            .await?;
        Ok(task)
    }

    /// Fetch a task by id: `NotFound` if absent, `PermissionDenied` if the
    /// actor is neither owner nor superuser.
    pub async fn find_by_id(pool: &PgPool, actor: &Actor, id: Uuid) -> RepoResult<Task> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound("Task not found"))?;
        if !actor.can_access(task.owner_id) {
            return Err(RepoError::PermissionDenied);
        }
        Ok(task)
    }

    /// List tasks visible to the actor, newest first, joined to their
    /// category, with the total count over the same filter before pagination.
    ///
    /// `search` matches title OR description, case-insensitively.
    pub async fn list(
        pool: &PgPool,
        actor: &Actor,
        skip: i64,
        limit: i64,
        search: Option<&str>,
    ) -> RepoResult<(Vec<TaskWithCategory>, i64)> {
        let owner = actor.ownership_filter();
        let pattern = search.map(|s| format!("%{}%", escape_like(s)));

        let query = format!(
            "SELECT {JOIN_COLUMNS}
             FROM tasks t
             LEFT JOIN categories c ON t.category_id = c.id
             WHERE ($1::uuid IS NULL OR t.owner_id = $1)
               AND ($2::text IS NULL OR t.title ILIKE $2 OR t.description ILIKE $2)
             ORDER BY t.created_at DESC
             OFFSET $3 LIMIT $4"
        );
        let tasks = sqlx::query_as::<_, TaskWithCategory>(&query)
            .bind(owner)
            .bind(&pattern)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tasks
             WHERE ($1::uuid IS NULL OR owner_id = $1)
               AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)",
        )
        .bind(owner)
        .bind(&pattern)
        .fetch_one(pool)
        .await?;

        Ok((tasks, count))
    }

    /// Patch a task. Only non-`None` fields in `input` are applied;
    /// `updated_at` is stamped.
    ///
    /// A changed `category_id` must reference an existing category that the
    /// actor can access, same as on create.
    pub async fn update(
        pool: &PgPool,
        actor: &Actor,
        id: Uuid,
        input: &UpdateTask,
    ) -> RepoResult<Task> {
        Self::find_by_id(pool, actor, id).await?;

        if let Some(category_id) = input.category_id {
            let owner = Self::category_owner(pool, category_id).await?;
            if !actor.can_access(owner) {
                return Err(RepoError::PermissionDenied);
            }
        }

        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                priority = COALESCE($5, priority),
                due_date = COALESCE($6, due_date),
                category_id = COALESCE($7, category_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.priority)
            .bind(input.due_date)
            .bind(input.category_id)
            .fetch_one(pool)
            .await?;
        Ok(task)
    }

    /// Delete a task. Its notes are removed by cascade.
    pub async fn delete(pool: &PgPool, actor: &Actor, id: Uuid) -> RepoResult<()> {
        Self::find_by_id(pool, actor, id).await?;

        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Set the status of every task in `ids`, atomically.
    ///
    /// Ids with no matching row are ignored; an empty resolved set fails with
    /// `NotFound`. If the actor cannot access any resolved row, the whole
    /// batch fails with `PermissionDenied` and nothing is changed. Returns
    /// the number of updated rows.
    pub async fn bulk_update_status(
        pool: &PgPool,
        actor: &Actor,
        ids: &[Uuid],
        status: TaskStatus,
    ) -> RepoResult<u64> {
        let mut tx = pool.begin().await?;

        let owners: Vec<(Uuid, Uuid)> =
            sqlx::query_as("SELECT id, owner_id FROM tasks WHERE id = ANY($1) FOR UPDATE")
                .bind(ids)
                .fetch_all(&mut *tx)
                .await?;
        if owners.is_empty() {
            return Err(RepoError::NotFound("No tasks found"));
        }
        if owners.iter().any(|(_, owner_id)| !actor.can_access(*owner_id)) {
            // Early return drops the transaction, rolling back.
            return Err(RepoError::PermissionDenied);
        }

        let result =
            sqlx::query("UPDATE tasks SET status = $2, updated_at = NOW() WHERE id = ANY($1)")
                .bind(ids)
                .bind(status)
                .execute(&mut *tx)
                .await?;
        tx.commit().await?;

        tracing::debug!(
            requested = ids.len(),
            updated = result.rows_affected(),
            "bulk task status update committed"
        );
        Ok(result.rows_affected())
    }

    /// Delete every task in `ids`, atomically. Same partial-failure semantics
    /// as [`Self::bulk_update_status`]. Returns the number of deleted rows.
    pub async fn bulk_delete(pool: &PgPool, actor: &Actor, ids: &[Uuid]) -> RepoResult<u64> {
        let mut tx = pool.begin().await?;

        let owners: Vec<(Uuid, Uuid)> =
            sqlx::query_as("SELECT id, owner_id FROM tasks WHERE id = ANY($1) FOR UPDATE")
                .bind(ids)
                .fetch_all(&mut *tx)
                .await?;
        if owners.is_empty() {
            return Err(RepoError::NotFound("No tasks found"));
        }
        if owners.iter().any(|(_, owner_id)| !actor.can_access(*owner_id)) {
            return Err(RepoError::PermissionDenied);
        }

        let result = sqlx::query("DELETE FROM tasks WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Unlink a task from its category.
    ///
    /// Fails with `InvalidState` when the task has no category. The state
    /// check precedes the permission check, matching the single-resource
    /// operations' existence-first ordering.
    pub async fn remove_category(pool: &PgPool, actor: &Actor, id: Uuid) -> RepoResult<Task> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound("Task not found"))?;
        if task.category_id.is_none() {
            return Err(RepoError::InvalidState(
                "Task does not have an associated category",
            ));
        }
        if !actor.can_access(task.owner_id) {
            return Err(RepoError::PermissionDenied);
        }

        let query = format!(
            "UPDATE tasks SET category_id = NULL, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(task)
    }

    /// Filter-engine search: AND together every predicate present in
    /// `params` over tasks joined to their category. An empty predicate set
    /// matches all rows visible to the actor. Zero matches is an empty
    /// result, not an error.
    pub async fn search(
        pool: &PgPool,
        actor: &Actor,
        params: &TaskSearchParams,
    ) -> RepoResult<Vec<TaskWithCategory>> {
        let owner = actor.ownership_filter();
        let title = params
            .title
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)));
        let category_title = params
            .category_title
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)));

        let query = format!(
            "SELECT {JOIN_COLUMNS}
             FROM tasks t
             LEFT JOIN categories c ON t.category_id = c.id
             WHERE ($1::uuid IS NULL OR t.owner_id = $1)
               AND ($2::text IS NULL OR t.title ILIKE $2)
               AND ($3::text IS NULL OR c.title ILIKE $3)
               AND ($4::task_status IS NULL OR t.status = $4)
               AND ($5::task_priority IS NULL OR t.priority = $5)
               AND ($6::timestamptz IS NULL OR t.due_date >= $6)
               AND ($7::timestamptz IS NULL OR t.due_date <= $7)
             ORDER BY t.created_at DESC"
        );
        let tasks = sqlx::query_as::<_, TaskWithCategory>(&query)
            .bind(owner)
            .bind(&title)
            .bind(&category_title)
            .bind(params.status)
            .bind(params.priority)
            .bind(params.start_date)
            .bind(params.end_date)
            .fetch_all(pool)
            .await?;
        Ok(tasks)
    }

    /// Owner of the referenced category, or `NotFound`.
    async fn category_owner(pool: &PgPool, category_id: Uuid) -> RepoResult<Uuid> {
        sqlx::query_scalar("SELECT owner_id FROM categories WHERE id = $1")
            .bind(category_id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound("Category not found"))
    }
}
