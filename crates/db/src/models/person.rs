//! Person entity model and DTOs.

use chrono::NaiveDate;
use reelbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `people` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub biography: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One movie a person is credited on.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonCredit {
    pub movie_id: DbId,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub poster_url: Option<String>,
    /// `actor`, `director` or `writer`.
    pub credit: String,
    pub character_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub biography: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePerson {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub birthplace: Option<String>,
    pub biography: Option<String>,
    pub photo_url: Option<String>,
}
