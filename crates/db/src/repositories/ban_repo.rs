//! Repository for `banned_users` and `unban_events`.
//!
//! Banning moves a user out of `users` into a snapshot row; unbanning moves
//! the latest snapshot back. Both run in a single transaction.

use reelbase_core::roles::ROLE_REGULAR;
use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::ban::{BanRecord, BannedUserListing};
use crate::models::user::User;

const COLUMNS: &str = "id, user_id, username, email, password_hash, role, joined_at, \
                       ban_reason, banned_by, banned_at";

const USER_COLUMNS: &str =
    "id, username, email, password_hash, role, is_active, joined_at, created_at, updated_at";

/// Snapshot filter: the user has no live account.
const CURRENTLY_BANNED: &str = "NOT EXISTS (SELECT 1 FROM users u WHERE u.id = b.user_id)";

pub struct BanRepo;

impl BanRepo {
    /// Snapshot `target` into `banned_users` and delete their account.
    ///
    /// The snapshot always records the `regular` role so an unbanned user
    /// never regains staff privileges. Deleting the account cascades to the
    /// user's reviews, watchlist and favourites.
    ///
    /// Returns `None` without storing a snapshot when the account no longer
    /// exists, i.e. a concurrent ban got there first.
    pub async fn ban(
        pool: &PgPool,
        target: &User,
        reason: &str,
        banned_by: DbId,
    ) -> Result<Option<BanRecord>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(target.id)
            .execute(&mut *tx)
            .await?;
        if deleted.rows_affected() != 1 {
            tx.rollback().await?;
            return Ok(None);
        }

        let insert = format!(
            "INSERT INTO banned_users
                (user_id, username, email, password_hash, role, joined_at, ban_reason, banned_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, BanRecord>(&insert)
            .bind(target.id)
            .bind(&target.username)
            .bind(&target.email)
            .bind(&target.password_hash)
            .bind(ROLE_REGULAR)
            .bind(target.joined_at)
            .bind(reason)
            .bind(banned_by)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(user_id = target.id, ban_id = record.id, "User snapshot stored");
        Ok(Some(record))
    }

    /// Latest snapshot for a user who is currently banned.
    pub async fn find_current(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<BanRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banned_users b
             WHERE b.user_id = $1 AND {CURRENTLY_BANNED}
             ORDER BY b.banned_at DESC, b.id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, BanRecord>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Latest ban of every currently-banned user, oldest ban first.
    pub async fn list_current(pool: &PgPool) -> Result<Vec<BannedUserListing>, sqlx::Error> {
        let query = format!(
            "SELECT * FROM (
                SELECT DISTINCT ON (b.user_id)
                    b.id, b.user_id, b.username, b.email, b.role AS user_type, b.joined_at,
                    b.ban_reason, b.banned_by, banner.username AS banner_name, b.banned_at
                FROM banned_users b
                LEFT JOIN users banner ON banner.id = b.banned_by
                WHERE {CURRENTLY_BANNED}
                ORDER BY b.user_id, b.banned_at DESC, b.id DESC
             ) latest
             ORDER BY banned_at ASC, id ASC"
        );
        sqlx::query_as::<_, BannedUserListing>(&query)
            .fetch_all(pool)
            .await
    }

    /// Restore a currently-banned user from their latest snapshot and record
    /// the unban. Returns `None` if the user is not currently banned.
    ///
    /// The account comes back under its original id with the `regular` role
    /// and stays inactive until the next login.
    pub async fn unban(
        pool: &PgPool,
        user_id: DbId,
        unbanned_by: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let find = format!(
            "SELECT {COLUMNS} FROM banned_users b
             WHERE b.user_id = $1 AND {CURRENTLY_BANNED}
             ORDER BY b.banned_at DESC, b.id DESC
             LIMIT 1
             FOR UPDATE"
        );
        let Some(record) = sqlx::query_as::<_, BanRecord>(&find)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let restore = format!(
            "INSERT INTO users (id, username, email, password_hash, role, is_active, joined_at)
             VALUES ($1, $2, $3, $4, $5, false, $6)
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&restore)
            .bind(record.user_id)
            .bind(&record.username)
            .bind(&record.email)
            .bind(&record.password_hash)
            .bind(ROLE_REGULAR)
            .bind(record.joined_at)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO unban_events (user_id, username, unbanned_by) VALUES ($1, $2, $3)",
        )
        .bind(record.user_id)
        .bind(&record.username)
        .bind(unbanned_by)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(user))
    }
}
