//! Repository for the `users` table.
//!
//! Users are managed by the auth collaborator, not by the ownership policy;
//! superuser gating for admin operations happens at the handler layer.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{RepoError, RepoResult};
use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, email, full_name, hashed_password, is_active, is_superuser, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with `Conflict` when the email is already registered.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> RepoResult<User> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(&input.email)
                .fetch_one(pool)
                .await?;
        if exists {
            return Err(RepoError::Conflict(
                "A user with this email already exists".into(),
            ));
        }

        let query = format!(
            "INSERT INTO users (email, full_name, hashed_password, is_superuser)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.full_name)
            .bind(&input.hashed_password)
            .bind(input.is_superuser)
            .fetch_one(pool)
            .await?;
        Ok(user)
    }

    /// Find a user by email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> RepoResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Find a user by id, failing with `NotFound` if absent.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> RepoResult<User> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound("User not found"))
    }

    /// List users with offset pagination, plus the total count.
    pub async fn list(pool: &PgPool, skip: i64, limit: i64) -> RepoResult<(Vec<User>, i64)> {
        let query = format!(
            "SELECT {COLUMNS} FROM users ORDER BY created_at DESC OFFSET $1 LIMIT $2"
        );
        let users = sqlx::query_as::<_, User>(&query)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok((users, count))
    }

    /// Delete a user by id. Cascades to all owned tasks, categories, notes.
    pub async fn delete(pool: &PgPool, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound("User not found"));
        }
        Ok(())
    }
}
