//! Crew (actor / director / writer) records and movie credits.

use reelbase_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The three capacities a person can be credited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewKind {
    Actor,
    Director,
    Writer,
}

impl CrewKind {
    /// Crew table holding one row per person in this capacity.
    pub fn table(self) -> &'static str {
        match self {
            CrewKind::Actor => "actors",
            CrewKind::Director => "directors",
            CrewKind::Writer => "writers",
        }
    }

    /// Junction table linking movies to crew rows. Actors go through
    /// `movie_roles`, which also carries the character name.
    pub fn link_table(self) -> &'static str {
        match self {
            CrewKind::Actor => "movie_roles",
            CrewKind::Director => "movie_directors",
            CrewKind::Writer => "movie_writers",
        }
    }

    /// Foreign key column in [`Self::link_table`] pointing at [`Self::table`].
    pub fn link_column(self) -> &'static str {
        match self {
            CrewKind::Actor => "actor_id",
            CrewKind::Director => "director_id",
            CrewKind::Writer => "writer_id",
        }
    }
}

/// A crew row joined with the person's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CrewMember {
    pub id: DbId,
    pub person_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: Option<String>,
}

/// An actor's role in a specific movie.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastMember {
    pub role_id: DbId,
    pub actor_id: DbId,
    pub person_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub photo_url: Option<String>,
    pub character_name: Option<String>,
}

/// A credit link as listed across all movies (admin overview).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CreditListing {
    pub id: DbId,
    pub movie_id: DbId,
    pub movie_title: String,
    pub crew_id: DbId,
    pub person_id: DbId,
    pub person_name: String,
    pub character_name: Option<String>,
}

/// A newly created credit link.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CreditLink {
    pub id: DbId,
    pub movie_id: DbId,
    pub crew_id: DbId,
    pub character_name: Option<String>,
}

/// Body for crediting a person on a movie.
#[derive(Debug, Clone, Deserialize)]
pub struct AddCredit {
    pub person_id: DbId,
    /// Only meaningful for acting roles.
    pub character_name: Option<String>,
}
