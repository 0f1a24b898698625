//! Movie entity model, listing rows, and DTOs.

use chrono::NaiveDate;
use reelbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub about: Option<String>,
    pub plot: Option<String>,
    pub mpaa_rating: Option<String>,
    pub budget: Option<i64>,
    pub box_office: Option<i64>,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie with its review aggregate and comma-joined genre names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub movie: Movie,
    /// Average rating, 0 when the movie has no reviews.
    pub avg_rating: f64,
    pub review_count: i64,
    pub genres: Option<String>,
}

/// Filters for the public movie search listing.
#[derive(Debug, Clone, Default)]
pub struct MovieSearch {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub about: Option<String>,
    pub plot: Option<String>,
    pub mpaa_rating: Option<String>,
    pub budget: Option<i64>,
    pub box_office: Option<i64>,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
}

/// DTO for updating an existing movie. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub about: Option<String>,
    pub plot: Option<String>,
    pub mpaa_rating: Option<String>,
    pub budget: Option<i64>,
    pub box_office: Option<i64>,
    pub poster_url: Option<String>,
    pub trailer_url: Option<String>,
}
