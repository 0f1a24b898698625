//! Route definitions for the `/admin` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{admin_catalog as catalog, admin_users as users};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// Catalog routes require `admin` or `headadmin`; moderation routes require
/// staff; promote and demote require `admin`.
///
/// ```text
/// GET, POST    /movies                               list, create
/// PUT, DELETE  /movies/{id}                          update, delete
/// GET, POST    /movies/{id}/genres                   list, attach
/// DELETE       /movies/{id}/genres/{genre_id}        detach
/// GET, POST    /movies/{id}/roles                    cast, add role
/// DELETE       /movies/{id}/roles/{role_id}          remove role
/// GET, POST    /movies/{id}/directors                list, add
/// DELETE       /movies/{id}/directors/{director_id}  remove
/// GET, POST    /movies/{id}/writers                  list, add
/// DELETE       /movies/{id}/writers/{writer_id}      remove
/// GET          /movies/{id}/awards                   award links
///
/// GET, POST    /people                               list, create
/// PUT, DELETE  /people/{id}                          update, delete
///
/// GET, POST    /awards                               list, create
/// PUT, DELETE  /awards/{id}                          update, delete
/// GET          /awards/{id}/winners                  winners
/// POST         /award-movies | /award-actors | /award-directors
/// DELETE       /award-movies/{id} | /award-actors/{id} | /award-directors/{id}
///
/// GET, POST    /genres                               list, create
/// DELETE       /genres/{id}                          delete
///
/// GET          /actors | /directors | /writers       crew records
/// GET          /roles | /movie-directors | /movie-writers   all credits
///
/// GET          /users                                list users (staff)
/// POST         /ban-user | /unban-user               ban, unban (staff)
/// GET          /banned-users                         current bans (staff)
/// POST         /promote-user | /demote-user          role changes (admin)
/// GET          /reviews                              all reviews (staff)
/// DELETE       /reviews/{id}                         moderate review (staff)
/// GET          /stats                                dashboard counts (staff)
/// GET          /user-activity/{user_id}              activity feed (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Movies
        .route("/movies", get(catalog::list_movies).post(catalog::create_movie))
        .route(
            "/movies/{id}",
            put(catalog::update_movie).delete(catalog::delete_movie),
        )
        .route(
            "/movies/{id}/genres",
            get(catalog::movie_genres).post(catalog::add_movie_genre),
        )
        .route(
            "/movies/{id}/genres/{genre_id}",
            delete(catalog::remove_movie_genre),
        )
        .route(
            "/movies/{id}/roles",
            get(catalog::movie_roles).post(catalog::add_movie_role),
        )
        .route(
            "/movies/{id}/roles/{role_id}",
            delete(catalog::remove_movie_role),
        )
        .route(
            "/movies/{id}/directors",
            get(catalog::movie_directors).post(catalog::add_movie_director),
        )
        .route(
            "/movies/{id}/directors/{director_id}",
            delete(catalog::remove_movie_director),
        )
        .route(
            "/movies/{id}/writers",
            get(catalog::movie_writers).post(catalog::add_movie_writer),
        )
        .route(
            "/movies/{id}/writers/{writer_id}",
            delete(catalog::remove_movie_writer),
        )
        .route("/movies/{id}/awards", get(catalog::movie_awards))
        // People
        .route("/people", get(catalog::list_people).post(catalog::create_person))
        .route(
            "/people/{id}",
            put(catalog::update_person).delete(catalog::delete_person),
        )
        // Awards
        .route("/awards", get(catalog::list_awards).post(catalog::create_award))
        .route(
            "/awards/{id}",
            put(catalog::update_award).delete(catalog::delete_award),
        )
        .route("/awards/{id}/winners", get(catalog::award_winners))
        .route("/award-movies", post(catalog::link_movie_award))
        .route("/award-movies/{id}", delete(catalog::unlink_movie_award))
        .route("/award-actors", post(catalog::link_actor_award))
        .route("/award-actors/{id}", delete(catalog::unlink_actor_award))
        .route("/award-directors", post(catalog::link_director_award))
        .route("/award-directors/{id}", delete(catalog::unlink_director_award))
        // Genres
        .route("/genres", get(catalog::list_genres).post(catalog::create_genre))
        .route("/genres/{id}", delete(catalog::delete_genre))
        // Crew and credits
        .route("/actors", get(catalog::list_actors))
        .route("/directors", get(catalog::list_directors))
        .route("/writers", get(catalog::list_writers))
        .route("/roles", get(catalog::list_roles))
        .route("/movie-directors", get(catalog::list_movie_directors))
        .route("/movie-writers", get(catalog::list_movie_writers))
        // User moderation
        .route("/users", get(users::list_users))
        .route("/ban-user", post(users::ban_user))
        .route("/banned-users", get(users::list_banned_users))
        .route("/unban-user", post(users::unban_user))
        .route("/promote-user", post(users::promote_user))
        .route("/demote-user", post(users::demote_user))
        .route("/reviews", get(users::list_reviews))
        .route("/reviews/{id}", delete(users::delete_review))
        .route("/stats", get(users::stats))
        .route("/user-activity/{user_id}", get(users::user_activity))
}
