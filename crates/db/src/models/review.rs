//! Review entity model and DTOs.

use reelbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub review_text: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A review with its author's name and role.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    pub user_name: String,
    pub user_type: String,
}

/// A review as listed for moderators.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModerationReview {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub review: Review,
    pub user_name: String,
    pub user_type: String,
    pub movie_title: String,
}

#[derive(Debug, Clone)]
pub struct CreateReview {
    pub movie_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub review_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReview {
    pub rating: Option<i32>,
    pub review_text: Option<String>,
}
