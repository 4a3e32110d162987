//! Repository for the `notes` table.

use sqlx::PgPool;
use taskforge_core::policy::Actor;
use taskforge_core::search::escape_like;
use uuid::Uuid;

use crate::error::{RepoError, RepoResult};
use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, task_id, owner_id, created_at, updated_at";

/// Provides authorization-scoped CRUD and bulk delete for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note owned by the actor, returning the created row.
    ///
    /// The referenced task must exist (`NotFound`) and be accessible to the
    /// actor (`PermissionDenied`).
    pub async fn create(pool: &PgPool, actor: &Actor, input: &CreateNote) -> RepoResult<Note> {
        let owner = Self::task_owner(pool, input.task_id).await?;
        if !actor.can_access(owner) {
            return Err(RepoError::PermissionDenied);
        }

        let query = format!(
            "INSERT INTO notes (title, description, task_id, owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.task_id)
            .bind(actor.id)
            .fetch_one(pool)
            .await?;
        Ok(note)
    }

    /// Fetch a note by id: `NotFound` if absent, `PermissionDenied` if the
    /// actor is neither owner nor superuser.
    pub async fn find_by_id(pool: &PgPool, actor: &Actor, id: Uuid) -> RepoResult<Note> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound("Note not found"))?;
        if !actor.can_access(note.owner_id) {
            return Err(RepoError::PermissionDenied);
        }
        Ok(note)
    }

    /// List notes visible to the actor, newest first, with the total count
    /// over the same filter before pagination.
    pub async fn list(
        pool: &PgPool,
        actor: &Actor,
        skip: i64,
        limit: i64,
        search: Option<&str>,
    ) -> RepoResult<(Vec<Note>, i64)> {
        let owner = actor.ownership_filter();
        let pattern = search.map(|s| format!("%{}%", escape_like(s)));

        let filter = "($1::uuid IS NULL OR owner_id = $1)
              AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)";

        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE {filter}
             ORDER BY created_at DESC
             OFFSET $3 LIMIT $4"
        );
        let notes = sqlx::query_as::<_, Note>(&query)
            .bind(owner)
            .bind(&pattern)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        let count_query = format!("SELECT COUNT(*) FROM notes WHERE {filter}");
        let count: i64 = sqlx::query_scalar(&count_query)
            .bind(owner)
            .bind(&pattern)
            .fetch_one(pool)
            .await?;

        Ok((notes, count))
    }

    /// List all notes of one task.
    ///
    /// The task must exist (`NotFound`) and be accessible to the actor.
    pub async fn list_by_task(
        pool: &PgPool,
        actor: &Actor,
        task_id: Uuid,
    ) -> RepoResult<Vec<Note>> {
        let owner = Self::task_owner(pool, task_id).await?;
        if !actor.can_access(owner) {
            return Err(RepoError::PermissionDenied);
        }

        let query =
            format!("SELECT {COLUMNS} FROM notes WHERE task_id = $1 ORDER BY created_at DESC");
        let notes = sqlx::query_as::<_, Note>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await?;
        Ok(notes)
    }

    /// Patch a note. Only non-`None` fields in `input` are applied;
    /// `updated_at` is stamped. A changed `task_id` must reference an
    /// existing task that the actor can access, same as on create.
    pub async fn update(
        pool: &PgPool,
        actor: &Actor,
        id: Uuid,
        input: &UpdateNote,
    ) -> RepoResult<Note> {
        Self::find_by_id(pool, actor, id).await?;

        if let Some(task_id) = input.task_id {
            let owner = Self::task_owner(pool, task_id).await?;
            if !actor.can_access(owner) {
                return Err(RepoError::PermissionDenied);
            }
        }

        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                task_id = COALESCE($4, task_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.task_id)
            .fetch_one(pool)
            .await?;
        Ok(note)
    }

    /// Delete a note.
    pub async fn delete(pool: &PgPool, actor: &Actor, id: Uuid) -> RepoResult<()> {
        Self::find_by_id(pool, actor, id).await?;

        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete every note in `ids`, atomically.
    ///
    /// Ids with no matching row are ignored; an empty resolved set fails with
    /// `NotFound`. If the actor cannot access any resolved row, the whole
    /// batch fails with `PermissionDenied` and nothing is deleted. Returns
    /// the number of deleted rows.
    pub async fn bulk_delete(pool: &PgPool, actor: &Actor, ids: &[Uuid]) -> RepoResult<u64> {
        let mut tx = pool.begin().await?;

        let owners: Vec<(Uuid, Uuid)> =
            sqlx::query_as("SELECT id, owner_id FROM notes WHERE id = ANY($1) FOR UPDATE")
                .bind(ids)
                .fetch_all(&mut *tx)
                .await?;
        if owners.is_empty() {
            return Err(RepoError::NotFound("No notes found"));
        }
        if owners.iter().any(|(_, owner_id)| !actor.can_access(*owner_id)) {
            // Early return drops the transaction, rolling back.
            return Err(RepoError::PermissionDenied);
        }

        let result = sqlx::query("DELETE FROM notes WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Owner of the referenced task, or `NotFound`.
    async fn task_owner(pool: &PgPool, task_id: Uuid) -> RepoResult<Uuid> {
        sqlx::query_scalar("SELECT owner_id FROM tasks WHERE id = $1")
            .bind(task_id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound("Task not found"))
    }
}
