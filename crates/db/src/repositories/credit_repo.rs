//! Repository for crew tables (`actors`, `directors`, `writers`) and the
//! movie credit links (`movie_roles`, `movie_directors`, `movie_writers`).

use reelbase_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::credit::{CastMember, CreditLink, CreditListing, CrewKind, CrewMember};

pub struct CreditRepo;

impl CreditRepo {
    /// Every crew row of `kind` with the person's name.
    pub async fn list_crew(pool: &PgPool, kind: CrewKind) -> Result<Vec<CrewMember>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.person_id, p.first_name, p.last_name, p.photo_url
             FROM {table} c JOIN people p ON p.id = c.person_id
             ORDER BY p.last_name, p.first_name, c.id",
            table = kind.table(),
        );
        sqlx::query_as::<_, CrewMember>(&query).fetch_all(pool).await
    }

    /// All credit links of `kind` across every movie, by movie title.
    pub async fn list_all_credits(
        pool: &PgPool,
        kind: CrewKind,
    ) -> Result<Vec<CreditListing>, sqlx::Error> {
        let character = match kind {
            CrewKind::Actor => "l.character_name",
            _ => "NULL::text",
        };
        let query = format!(
            "SELECT l.id, l.movie_id, m.title AS movie_title, c.id AS crew_id, c.person_id,
                    p.first_name || ' ' || p.last_name AS person_name,
                    {character} AS character_name
             FROM {link} l
             JOIN movies m ON m.id = l.movie_id
             JOIN {table} c ON c.id = l.{column}
             JOIN people p ON p.id = c.person_id
             ORDER BY m.title, p.last_name, p.first_name, l.id",
            link = kind.link_table(),
            table = kind.table(),
            column = kind.link_column(),
        );
        sqlx::query_as::<_, CreditListing>(&query).fetch_all(pool).await
    }

    /// Cast of a movie in credit order.
    pub async fn cast_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<CastMember>, sqlx::Error> {
        sqlx::query_as::<_, CastMember>(
            "SELECT mr.id AS role_id, a.id AS actor_id, p.id AS person_id, p.first_name,
                    p.last_name, p.photo_url, mr.character_name
             FROM movie_roles mr
             JOIN actors a ON a.id = mr.actor_id
             JOIN people p ON p.id = a.person_id
             WHERE mr.movie_id = $1
             ORDER BY mr.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Directors or writers of a movie. `id` is the crew row id.
    pub async fn crew_for_movie(
        pool: &PgPool,
        kind: CrewKind,
        movie_id: DbId,
    ) -> Result<Vec<CrewMember>, sqlx::Error> {
        let query = format!(
            "SELECT c.id, c.person_id, p.first_name, p.last_name, p.photo_url
             FROM {link} l
             JOIN {table} c ON c.id = l.{column}
             JOIN people p ON p.id = c.person_id
             WHERE l.movie_id = $1
             ORDER BY l.id",
            link = kind.link_table(),
            table = kind.table(),
            column = kind.link_column(),
        );
        sqlx::query_as::<_, CrewMember>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Credit a person on a movie, creating their crew row on demand.
    ///
    /// Both inserts share one transaction so a failed link never leaves an
    /// orphan crew row behind.
    pub async fn add_credit(
        pool: &PgPool,
        kind: CrewKind,
        movie_id: DbId,
        person_id: DbId,
        character_name: Option<&str>,
    ) -> Result<CreditLink, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let crew_id = Self::ensure_crew(&mut *tx, kind, person_id).await?;

        let link = match kind {
            CrewKind::Actor => {
                sqlx::query_as::<_, CreditLink>(
                    "INSERT INTO movie_roles (movie_id, actor_id, character_name)
                     VALUES ($1, $2, $3)
                     RETURNING id, movie_id, actor_id AS crew_id, character_name",
                )
                .bind(movie_id)
                .bind(crew_id)
                .bind(character_name)
                .fetch_one(&mut *tx)
                .await?
            }
            _ => {
                let query = format!(
                    "INSERT INTO {link} (movie_id, {column}) VALUES ($1, $2)
                     RETURNING id, movie_id, {column} AS crew_id, NULL::text AS character_name",
                    link = kind.link_table(),
                    column = kind.link_column(),
                );
                sqlx::query_as::<_, CreditLink>(&query)
                    .bind(movie_id)
                    .bind(crew_id)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(link)
    }

    /// Remove a credit from a movie.
    ///
    /// For actors `key` is the role id (a person may play several roles);
    /// for directors and writers it is the crew row id.
    pub async fn remove_credit(
        pool: &PgPool,
        kind: CrewKind,
        movie_id: DbId,
        key: DbId,
    ) -> Result<bool, sqlx::Error> {
        let key_column = match kind {
            CrewKind::Actor => "id",
            _ => kind.link_column(),
        };
        let query = format!(
            "DELETE FROM {link} WHERE movie_id = $1 AND {key_column} = $2",
            link = kind.link_table(),
        );
        let result = sqlx::query(&query)
            .bind(movie_id)
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Return the crew row id for `person_id`, inserting it if missing.
    pub(crate) async fn ensure_crew(
        conn: &mut PgConnection,
        kind: CrewKind,
        person_id: DbId,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (person_id) VALUES ($1)
             ON CONFLICT ON CONSTRAINT uq_{table}_person_id
             DO UPDATE SET person_id = EXCLUDED.person_id
             RETURNING id",
            table = kind.table(),
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(person_id)
            .fetch_one(conn)
            .await
    }
}
