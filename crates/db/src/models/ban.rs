//! Ban snapshots and unban events.

use reelbase_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `banned_users`: the user as they were when banned.
#[derive(Debug, Clone, FromRow)]
pub struct BanRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub joined_at: Timestamp,
    pub ban_reason: String,
    pub banned_by: Option<DbId>,
    pub banned_at: Timestamp,
}

/// Currently-banned user as shown to moderators.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BannedUserListing {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub user_type: String,
    pub joined_at: Timestamp,
    pub ban_reason: String,
    pub banned_by: Option<DbId>,
    pub banner_name: Option<String>,
    pub banned_at: Timestamp,
}

/// A row from `unban_events`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UnbanEvent {
    pub id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub unbanned_by: Option<DbId>,
    pub unbanned_at: Timestamp,
}
