//! Repository for the `reviews` table.

use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, ModerationReview, Review, ReviewWithAuthor, UpdateReview};

const COLUMNS: &str = "id, movie_id, user_id, rating, review_text, created_at, updated_at";

/// Same columns qualified with the `r` alias, for joins.
const R_COLUMNS: &str =
    "r.id, r.movie_id, r.user_id, r.rating, r.review_text, r.created_at, r.updated_at";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review. A second review by the same user for the same movie
    /// fails on `uq_reviews_user_movie`.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (movie_id, user_id, rating, review_text)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.movie_id)
            .bind(input.user_id)
            .bind(input.rating)
            .bind(&input.review_text)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether `user_id` has already reviewed `movie_id`.
    pub async fn exists_for(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE movie_id = $1 AND user_id = $2)",
        )
        .bind(movie_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Reviews of a movie with author name and role, newest first.
    pub async fn list_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {R_COLUMNS}, u.username AS user_name, u.role AS user_type
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.movie_id = $1
             ORDER BY r.created_at DESC, r.id DESC"
        );
        sqlx::query_as::<_, ReviewWithAuthor>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Every review with author and movie, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ModerationReview>, sqlx::Error> {
        let query = format!(
            "SELECT {R_COLUMNS}, u.username AS user_name, u.role AS user_type,
                    m.title AS movie_title
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             JOIN movies m ON m.id = r.movie_id
             ORDER BY r.created_at DESC, r.id DESC"
        );
        sqlx::query_as::<_, ModerationReview>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update rating and/or text. Returns `None` if the review does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!(
            "UPDATE reviews SET
                rating = COALESCE($2, rating),
                review_text = COALESCE($3, review_text)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(input.rating)
            .bind(&input.review_text)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
