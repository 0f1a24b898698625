//! Repository for the `people` table.

use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person, PersonCredit, UpdatePerson};

const COLUMNS: &str = "id, first_name, last_name, birth_date, death_date, birthplace, \
                       biography, photo_url, created_at, updated_at";

pub struct PersonRepo;

impl PersonRepo {
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people
                (first_name, last_name, birth_date, death_date, birthplace, biography, photo_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.birth_date)
            .bind(input.death_date)
            .bind(&input.birthplace)
            .bind(&input.biography)
            .bind(&input.photo_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = $1");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All people ordered by last name, then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people ORDER BY last_name, first_name, id");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// People whose birthday (month and day) is today in UTC.
    pub async fn born_today(pool: &PgPool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM people
             WHERE birth_date IS NOT NULL
               AND EXTRACT(MONTH FROM birth_date) = EXTRACT(MONTH FROM NOW() AT TIME ZONE 'UTC')
               AND EXTRACT(DAY FROM birth_date) = EXTRACT(DAY FROM NOW() AT TIME ZONE 'UTC')
             ORDER BY last_name, first_name, id"
        );
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Every credit of a person, newest release first.
    pub async fn credits(pool: &PgPool, person_id: DbId) -> Result<Vec<PersonCredit>, sqlx::Error> {
        sqlx::query_as::<_, PersonCredit>(
            "SELECT m.id AS movie_id, m.title, m.release_date, m.poster_url,
                    'actor' AS credit, mr.character_name
             FROM movie_roles mr
             JOIN actors a ON a.id = mr.actor_id
             JOIN movies m ON m.id = mr.movie_id
             WHERE a.person_id = $1
             UNION ALL
             SELECT m.id, m.title, m.release_date, m.poster_url, 'director', NULL
             FROM movie_directors md
             JOIN directors d ON d.id = md.director_id
             JOIN movies m ON m.id = md.movie_id
             WHERE d.person_id = $1
             UNION ALL
             SELECT m.id, m.title, m.release_date, m.poster_url, 'writer', NULL
             FROM movie_writers mw
             JOIN writers w ON w.id = mw.writer_id
             JOIN movies m ON m.id = mw.movie_id
             WHERE w.person_id = $1
             ORDER BY release_date DESC NULLS LAST, title, credit",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await
    }

    /// Update a person. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE people SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                birth_date = COALESCE($4, birth_date),
                death_date = COALESCE($5, death_date),
                birthplace = COALESCE($6, birthplace),
                biography = COALESCE($7, biography),
                photo_url = COALESCE($8, photo_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.birth_date)
            .bind(input.death_date)
            .bind(&input.birthplace)
            .bind(&input.biography)
            .bind(&input.photo_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a person together with their crew rows and credits.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
