//! Repository for `genres` and `movie_genres`.

use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::Genre;

pub struct GenreRepo;

impl GenreRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(pool)
            .await
    }

    pub async fn create(pool: &PgPool, name: &str) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Genres attached to a movie, by name.
    pub async fn list_for_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT g.id, g.name
             FROM movie_genres mg JOIN genres g ON g.id = mg.genre_id
             WHERE mg.movie_id = $1
             ORDER BY g.name",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Attach a genre to a movie, returning the genre.
    ///
    /// Fails with `uq_movie_genres_movie_genre` when already attached and with
    /// a foreign-key violation when either side does not exist.
    pub async fn add_to_movie(
        pool: &PgPool,
        movie_id: DbId,
        genre_id: DbId,
    ) -> Result<Genre, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "WITH link AS (
                INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2)
                RETURNING genre_id
             )
             SELECT g.id, g.name FROM genres g JOIN link ON link.genre_id = g.id",
        )
        .bind(movie_id)
        .bind(genre_id)
        .fetch_one(pool)
        .await
    }

    pub async fn remove_from_movie(
        pool: &PgPool,
        movie_id: DbId,
        genre_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1 AND genre_id = $2")
            .bind(movie_id)
            .bind(genre_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
