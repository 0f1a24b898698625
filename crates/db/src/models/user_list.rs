//! Watchlist and favourites entries.

use reelbase_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::movie::MovieSummary;

/// The two per-user movie lists. Both share the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserList {
    Watchlist,
    Favourites,
}

impl UserList {
    pub fn table(self) -> &'static str {
        match self {
            UserList::Watchlist => "watchlist_entries",
            UserList::Favourites => "favourites",
        }
    }

    /// Name used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            UserList::Watchlist => "watchlist",
            UserList::Favourites => "favourites",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub added_at: Timestamp,
}

/// A listed movie with its summary and when it was added.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListedMovie {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub summary: MovieSummary,
    pub added_at: Timestamp,
}
