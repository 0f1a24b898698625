//! Repository for the watchlist and favourites tables.

use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::user_list::{ListEntry, ListedMovie, UserList};
use crate::repositories::movie_repo::SUMMARY_SOURCE;

pub struct UserListRepo;

impl UserListRepo {
    /// Add a movie to a user's list. Fails on the `uq_*_user_movie`
    /// constraint when already present.
    pub async fn add(
        pool: &PgPool,
        list: UserList,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<ListEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO {} (user_id, movie_id) VALUES ($1, $2)
             RETURNING id, user_id, movie_id, added_at",
            list.table()
        );
        sqlx::query_as::<_, ListEntry>(&query)
            .bind(user_id)
            .bind(movie_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        list: UserList,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<ListEntry>, sqlx::Error> {
        let query = format!(
            "SELECT id, user_id, movie_id, added_at FROM {}
             WHERE user_id = $1 AND movie_id = $2",
            list.table()
        );
        sqlx::query_as::<_, ListEntry>(&query)
            .bind(user_id)
            .bind(movie_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove a movie from a list, returning the removed entry.
    pub async fn remove(
        pool: &PgPool,
        list: UserList,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<ListEntry>, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE user_id = $1 AND movie_id = $2
             RETURNING id, user_id, movie_id, added_at",
            list.table()
        );
        sqlx::query_as::<_, ListEntry>(&query)
            .bind(user_id)
            .bind(movie_id)
            .fetch_optional(pool)
            .await
    }

    /// Movies on a user's list with their summaries, oldest addition first.
    pub async fn movies(
        pool: &PgPool,
        list: UserList,
        user_id: DbId,
    ) -> Result<Vec<ListedMovie>, sqlx::Error> {
        let query = format!(
            "SELECT s.*, l.added_at
             FROM {table} l
             JOIN {SUMMARY_SOURCE} ON s.id = l.movie_id
             WHERE l.user_id = $1
             ORDER BY l.added_at ASC, l.id ASC",
            table = list.table(),
        );
        sqlx::query_as::<_, ListedMovie>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
