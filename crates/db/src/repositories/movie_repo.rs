//! Repository for the `movies` table and the public movie listings.

use reelbase_core::catalog::{MovieSort, SortOrder};
use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieSearch, MovieSummary, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, release_date, runtime, about, plot, mpaa_rating, budget, \
                       box_office, poster_url, trailer_url, created_at, updated_at";

/// Every movie with its review aggregate and genre list.
///
/// Aggregates come from correlated subqueries so that joining genres never
/// multiplies the review rows. Listings select from this as `s`.
pub(crate) const SUMMARY_SOURCE: &str = "(
    SELECT m.id, m.title, m.release_date, m.runtime, m.about, m.plot, m.mpaa_rating,
           m.budget, m.box_office, m.poster_url, m.trailer_url, m.created_at, m.updated_at,
           COALESCE((SELECT AVG(r.rating)::float8 FROM reviews r WHERE r.movie_id = m.id), 0)
               AS avg_rating,
           (SELECT COUNT(*) FROM reviews r WHERE r.movie_id = m.id) AS review_count,
           (SELECT STRING_AGG(g.name, ', ' ORDER BY g.name)
              FROM movie_genres mg JOIN genres g ON g.id = mg.genre_id
             WHERE mg.movie_id = m.id) AS genres
    FROM movies m
) s";

/// Provides CRUD operations and listings for movies.
pub struct MovieRepo;

impl MovieRepo {
    // -----------------------------------------------------------------------
    // Public listings
    // -----------------------------------------------------------------------

    /// Filtered, sorted listing. With a search term, exact (case-insensitive)
    /// title matches come first.
    pub async fn search(
        pool: &PgPool,
        filter: &MovieSearch,
        sort: MovieSort,
        order: SortOrder,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT * FROM {SUMMARY_SOURCE}
             WHERE ($1::text IS NULL OR s.title ILIKE '%' || $1 || '%')
               AND ($2::text IS NULL OR EXISTS (
                    SELECT 1 FROM movie_genres mg JOIN genres g ON g.id = mg.genre_id
                    WHERE mg.movie_id = s.id AND g.name ILIKE '%' || $2 || '%'))
               AND ($3::int IS NULL OR EXTRACT(YEAR FROM s.release_date)::int = $3)
             ORDER BY
               CASE WHEN $1::text IS NOT NULL AND LOWER(s.title) = LOWER($1) THEN 0 ELSE 1 END,
               {sort} {order} NULLS LAST,
               s.id",
            sort = sort.sql_expr(),
            order = order.as_sql(),
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(filter.search.as_deref())
            .bind(filter.genre.as_deref())
            .bind(filter.year)
            .fetch_all(pool)
            .await
    }

    /// Best-rated reviewed movies released in `year`.
    pub async fn featured(
        pool: &PgPool,
        year: i32,
        limit: i64,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT * FROM {SUMMARY_SOURCE}
             WHERE EXTRACT(YEAR FROM s.release_date)::int = $1 AND s.review_count > 0
             ORDER BY s.avg_rating DESC, s.review_count DESC, s.id
             LIMIT $2"
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(year)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Reviewed movies by average rating, then review count.
    pub async fn popular(pool: &PgPool, limit: i64) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT * FROM {SUMMARY_SOURCE}
             WHERE s.review_count > 0
             ORDER BY s.avg_rating DESC, s.review_count DESC, s.id
             LIMIT $1"
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Movies released during the last month, newest first.
    pub async fn new_releases(pool: &PgPool, limit: i64) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT * FROM {SUMMARY_SOURCE}
             WHERE s.release_date >= CURRENT_DATE - INTERVAL '1 month'
               AND s.release_date <= CURRENT_DATE
             ORDER BY s.release_date DESC, s.id
             LIMIT $1"
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Movies with a positive box office, highest first.
    pub async fn box_office(pool: &PgPool, limit: i64) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT * FROM {SUMMARY_SOURCE}
             WHERE s.box_office > 0
             ORDER BY s.box_office DESC, s.id
             LIMIT $1"
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Movies tagged with the named genre (case-insensitive), by title.
    pub async fn by_genre(
        pool: &PgPool,
        genre: &str,
        limit: i64,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT * FROM {SUMMARY_SOURCE}
             WHERE EXISTS (
                SELECT 1 FROM movie_genres mg JOIN genres g ON g.id = mg.genre_id
                WHERE mg.movie_id = s.id AND LOWER(g.name) = LOWER($1))
             ORDER BY s.title, s.id
             LIMIT $2"
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(genre)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Movies released in `year`, by title.
    pub async fn by_year(
        pool: &PgPool,
        year: i32,
        limit: i64,
    ) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT * FROM {SUMMARY_SOURCE}
             WHERE EXTRACT(YEAR FROM s.release_date)::int = $1
             ORDER BY s.title, s.id
             LIMIT $2"
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(year)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// A single movie with its aggregates.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieSummary>, sqlx::Error> {
        let query = format!("SELECT * FROM {SUMMARY_SOURCE} WHERE s.id = $1");
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies
                (title, release_date, runtime, about, plot, mpaa_rating, budget, box_office,
                 poster_url, trailer_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(input.runtime)
            .bind(&input.about)
            .bind(&input.plot)
            .bind(&input.mpaa_rating)
            .bind(input.budget)
            .bind(input.box_office)
            .bind(&input.poster_url)
            .bind(&input.trailer_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All movies, by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                release_date = COALESCE($3, release_date),
                runtime = COALESCE($4, runtime),
                about = COALESCE($5, about),
                plot = COALESCE($6, plot),
                mpaa_rating = COALESCE($7, mpaa_rating),
                budget = COALESCE($8, budget),
                box_office = COALESCE($9, box_office),
                poster_url = COALESCE($10, poster_url),
                trailer_url = COALESCE($11, trailer_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(input.runtime)
            .bind(&input.about)
            .bind(&input.plot)
            .bind(&input.mpaa_rating)
            .bind(input.budget)
            .bind(input.box_office)
            .bind(&input.poster_url)
            .bind(&input.trailer_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie and, by cascade, its credits, reviews and list entries.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
