//! Genre model and DTOs.

use reelbase_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
}

/// Body for attaching a genre to a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct AddMovieGenre {
    pub genre_id: DbId,
}
