//! Repository for the `users` table.

use reelbase_core::roles::UserRole;
use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User, UserSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, username, email, password_hash, role, is_active, joined_at, created_at, updated_at";

/// Provides account operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new `regular` user, returning the created row.
    ///
    /// The account starts active because registration also logs the user in.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, is_active)
             VALUES ($1, $2, $3, true)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all users for moderation, newest first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT id, username, email, role AS user_type, is_active, joined_at
             FROM users
             ORDER BY joined_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Mark a user as logged in or out. Returns `true` if the row exists.
    pub async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Change a user's role. Returns `None` if no such user exists.
    pub async fn set_role(
        pool: &PgPool,
        id: DbId,
        role: UserRole,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("UPDATE users SET role = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(role.as_str())
            .fetch_optional(pool)
            .await
    }
}
