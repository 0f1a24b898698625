//! Moderation dashboard aggregates.

use reelbase_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlatformStats {
    pub active_users: i64,
    pub banned_users: i64,
    pub total_movies: i64,
    pub total_awards: i64,
    pub total_reviews: i64,
    pub total_people: i64,
}

/// One entry of a user's activity timeline.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityItem {
    /// `review`, `ban` or `unban`.
    pub activity_type: String,
    pub id: DbId,
    /// Movie for reviews, affected user for bans and unbans.
    pub subject_id: DbId,
    pub subject_name: String,
    pub rating: Option<i32>,
    pub detail: Option<String>,
    pub occurred_at: Timestamp,
}
