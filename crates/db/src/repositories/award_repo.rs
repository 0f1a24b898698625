//! Repository for `awards` and the award link tables.

use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::award::{
    Award, AwardLink, AwardTarget, AwardText, AwardWinner, CreateAward, CreateMovieAward,
    MovieAward, UpdateAward,
};
use crate::models::credit::CrewKind;
use crate::repositories::CreditRepo;

const COLUMNS: &str = "id, name, year, created_at, updated_at";

pub struct AwardRepo;

impl AwardRepo {
    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    pub async fn create(pool: &PgPool, input: &CreateAward) -> Result<Award, sqlx::Error> {
        let query = format!("INSERT INTO awards (name, year) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Award>(&query)
            .bind(&input.name)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Award>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM awards WHERE id = $1");
        sqlx::query_as::<_, Award>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All awards, most recent year first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Award>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM awards ORDER BY year DESC, name, id");
        sqlx::query_as::<_, Award>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAward,
    ) -> Result<Option<Award>, sqlx::Error> {
        let query = format!(
            "UPDATE awards SET
                name = COALESCE($2, name),
                year = COALESCE($3, year)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Award>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.year)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM awards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Display listings
    // -----------------------------------------------------------------------

    /// Awards won by a movie and by its cast and directors for that movie.
    ///
    /// `UNION` removes duplicate lines. Ordered by year, then text.
    pub async fn texts_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<AwardText>, sqlx::Error> {
        sqlx::query_as::<_, AwardText>(
            "SELECT am.category || ' - ' || a.name || ' (' || a.year || ')' AS award, a.year
             FROM award_movies am
             JOIN awards a ON a.id = am.award_id
             WHERE am.movie_id = $1
             UNION
             SELECT p.first_name || ' ' || p.last_name || ' won ' || a.name
                    || ' (' || a.year || ') for ' || ad.category || ' for this movie.', a.year
             FROM award_directors ad
             JOIN awards a ON a.id = ad.award_id
             JOIN directors d ON d.id = ad.director_id
             JOIN people p ON p.id = d.person_id
             WHERE ad.movie_id = $1
             UNION
             SELECT p.first_name || ' ' || p.last_name || ' won ' || a.name
                    || ' (' || a.year || ') for ' || aa.category || ' for this movie.', a.year
             FROM award_actors aa
             JOIN awards a ON a.id = aa.award_id
             JOIN actors ac ON ac.id = aa.actor_id
             JOIN people p ON p.id = ac.person_id
             WHERE aa.movie_id = $1
             ORDER BY year ASC, award ASC",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Awards a person won as director or actor, deduplicated, by year.
    pub async fn texts_for_person(
        pool: &PgPool,
        person_id: DbId,
    ) -> Result<Vec<AwardText>, sqlx::Error> {
        sqlx::query_as::<_, AwardText>(
            "SELECT ad.category || ' - ' || a.name || ' (' || a.year || ')' AS award, a.year
             FROM award_directors ad
             JOIN awards a ON a.id = ad.award_id
             JOIN directors d ON d.id = ad.director_id
             WHERE d.person_id = $1
             UNION
             SELECT aa.category || ' - ' || a.name || ' (' || a.year || ')', a.year
             FROM award_actors aa
             JOIN awards a ON a.id = aa.award_id
             JOIN actors ac ON ac.id = aa.actor_id
             WHERE ac.person_id = $1
             ORDER BY year ASC, award ASC",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await
    }

    /// Everyone and everything that won a given award.
    pub async fn winners(pool: &PgPool, award_id: DbId) -> Result<Vec<AwardWinner>, sqlx::Error> {
        sqlx::query_as::<_, AwardWinner>(
            "SELECT 'Movie' AS winner_type, m.title AS winner_name, am.category,
                    m.title AS movie_title
             FROM award_movies am
             JOIN movies m ON m.id = am.movie_id
             WHERE am.award_id = $1
             UNION ALL
             SELECT 'Actor', p.first_name || ' ' || p.last_name, aa.category, m.title
             FROM award_actors aa
             JOIN actors ac ON ac.id = aa.actor_id
             JOIN people p ON p.id = ac.person_id
             JOIN movies m ON m.id = aa.movie_id
             WHERE aa.award_id = $1
             UNION ALL
             SELECT 'Director', p.first_name || ' ' || p.last_name, ad.category, m.title
             FROM award_directors ad
             JOIN directors d ON d.id = ad.director_id
             JOIN people p ON p.id = d.person_id
             JOIN movies m ON m.id = ad.movie_id
             WHERE ad.award_id = $1
             ORDER BY winner_type, winner_name",
        )
        .bind(award_id)
        .fetch_all(pool)
        .await
    }

    /// Award links touching a movie, for the admin movie editor.
    pub async fn links_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<MovieAward>, sqlx::Error> {
        sqlx::query_as::<_, MovieAward>(
            "SELECT am.id AS link_id, a.id AS award_id, a.name AS award_name, a.year,
                    am.category, 'Movie' AS award_type
             FROM award_movies am
             JOIN awards a ON a.id = am.award_id
             WHERE am.movie_id = $1
             UNION ALL
             SELECT aa.id, a.id, a.name, a.year, aa.category,
                    'Actor: ' || p.first_name || ' ' || p.last_name
             FROM award_actors aa
             JOIN awards a ON a.id = aa.award_id
             JOIN actors ac ON ac.id = aa.actor_id
             JOIN people p ON p.id = ac.person_id
             WHERE aa.movie_id = $1
             UNION ALL
             SELECT ad.id, a.id, a.name, a.year, ad.category,
                    'Director: ' || p.first_name || ' ' || p.last_name
             FROM award_directors ad
             JOIN awards a ON a.id = ad.award_id
             JOIN directors d ON d.id = ad.director_id
             JOIN people p ON p.id = d.person_id
             WHERE ad.movie_id = $1
             ORDER BY year DESC, award_name",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Links
    // -----------------------------------------------------------------------

    /// Record that a movie won an award in a category.
    pub async fn link_movie(
        pool: &PgPool,
        input: &CreateMovieAward,
    ) -> Result<AwardLink, sqlx::Error> {
        sqlx::query_as::<_, AwardLink>(
            "INSERT INTO award_movies (award_id, movie_id, category)
             VALUES ($1, $2, $3)
             RETURNING id, award_id, movie_id, NULL::bigint AS crew_id, category",
        )
        .bind(input.award_id)
        .bind(input.movie_id)
        .bind(&input.category)
        .fetch_one(pool)
        .await
    }

    /// Record that a person won an award for their work on a movie, creating
    /// their actor or director row on demand. Writers have no award table, so
    /// anything other than [`CrewKind::Director`] is recorded as an actor award.
    pub async fn link_person(
        pool: &PgPool,
        kind: CrewKind,
        award_id: DbId,
        movie_id: DbId,
        person_id: DbId,
        category: &str,
    ) -> Result<AwardLink, sqlx::Error> {
        let (target, crew_kind) = match kind {
            CrewKind::Director => (AwardTarget::Director, CrewKind::Director),
            _ => (AwardTarget::Actor, CrewKind::Actor),
        };
        let table = target.table();
        let column = crew_kind.link_column();

        let mut tx = pool.begin().await?;
        let crew_id = CreditRepo::ensure_crew(&mut *tx, crew_kind, person_id).await?;

        let query = format!(
            "INSERT INTO {table} (award_id, {column}, movie_id, category)
             VALUES ($1, $2, $3, $4)
             RETURNING id, award_id, movie_id, {column} AS crew_id, category"
        );
        let link = sqlx::query_as::<_, AwardLink>(&query)
            .bind(award_id)
            .bind(crew_id)
            .bind(movie_id)
            .bind(category)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(link)
    }

    /// Delete an award link by id.
    pub async fn unlink(pool: &PgPool, target: AwardTarget, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", target.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
