//! Aggregates for the moderation dashboard.

use reelbase_core::types::DbId;
use sqlx::PgPool;

use crate::models::stats::{ActivityItem, PlatformStats};

pub struct StatsRepo;

impl StatsRepo {
    /// Platform-wide counts. `active_users` counts every account that is not
    /// banned, logged in or not. `banned_users` counts distinct users who are
    /// currently banned, not ban events.
    pub async fn platform(pool: &PgPool) -> Result<PlatformStats, sqlx::Error> {
        sqlx::query_as::<_, PlatformStats>(
            "SELECT
                (SELECT COUNT(*) FROM users) AS active_users,
                (SELECT COUNT(DISTINCT b.user_id) FROM banned_users b
                  WHERE NOT EXISTS (SELECT 1 FROM users u WHERE u.id = b.user_id))
                    AS banned_users,
                (SELECT COUNT(*) FROM movies) AS total_movies,
                (SELECT COUNT(*) FROM awards) AS total_awards,
                (SELECT COUNT(*) FROM reviews) AS total_reviews,
                (SELECT COUNT(*) FROM people) AS total_people",
        )
        .fetch_one(pool)
        .await
    }

    /// A user's reviews, newest first.
    pub async fn review_activity(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ActivityItem>, sqlx::Error> {
        sqlx::query_as::<_, ActivityItem>(
            "SELECT 'review' AS activity_type, r.id, m.id AS subject_id,
                    m.title AS subject_name, r.rating, r.review_text AS detail,
                    r.created_at AS occurred_at
             FROM reviews r
             JOIN movies m ON m.id = r.movie_id
             WHERE r.user_id = $1
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Bans and unbans performed by a staff member, newest first.
    pub async fn moderation_activity(
        pool: &PgPool,
        staff_id: DbId,
    ) -> Result<Vec<ActivityItem>, sqlx::Error> {
        sqlx::query_as::<_, ActivityItem>(
            "SELECT 'ban' AS activity_type, b.id, b.user_id AS subject_id,
                    b.username AS subject_name, NULL::int AS rating,
                    b.ban_reason AS detail, b.banned_at AS occurred_at
             FROM banned_users b
             WHERE b.banned_by = $1
             UNION ALL
             SELECT 'unban', e.id, e.user_id, e.username, NULL::int, NULL::text, e.unbanned_at
             FROM unban_events e
             WHERE e.unbanned_by = $1
             ORDER BY occurred_at DESC, id DESC",
        )
        .bind(staff_id)
        .fetch_all(pool)
        .await
    }
}
