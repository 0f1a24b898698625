//! Award entity model, award links, and display rows.

use reelbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Award {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAward {
    pub name: String,
    pub year: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAward {
    pub name: Option<String>,
    pub year: Option<i32>,
}

/// A human-readable award line shown on movie and person pages.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AwardText {
    pub award: String,
    /// Sort key only.
    #[serde(skip_serializing)]
    pub year: i32,
}

/// One winner of an award.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AwardWinner {
    /// `Movie`, `Actor` or `Director`.
    pub winner_type: String,
    pub winner_name: String,
    pub category: String,
    pub movie_title: String,
}

/// An award won by a movie or by someone for their work on it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieAward {
    pub link_id: DbId,
    pub award_id: DbId,
    pub award_name: String,
    pub year: i32,
    pub category: String,
    /// `Movie`, `Actor: <name>` or `Director: <name>`.
    pub award_type: String,
}

/// A row from `award_movies`, `award_actors` or `award_directors`.
/// `crew_id` is `None` for movie awards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AwardLink {
    pub id: DbId,
    pub award_id: DbId,
    pub movie_id: DbId,
    pub crew_id: Option<DbId>,
    pub category: String,
}

/// Body for linking an award to a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovieAward {
    pub award_id: DbId,
    pub movie_id: DbId,
    pub category: String,
}

/// Body for linking an award to a person for their work on a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePersonAward {
    pub award_id: DbId,
    pub movie_id: DbId,
    pub person_id: DbId,
    pub category: String,
}

/// What an award link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardTarget {
    Movie,
    Actor,
    Director,
}

impl AwardTarget {
    pub fn table(self) -> &'static str {
        match self {
            AwardTarget::Movie => "award_movies",
            AwardTarget::Actor => "award_actors",
            AwardTarget::Director => "award_directors",
        }
    }
}
