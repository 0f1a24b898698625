pub mod admin;
pub mod auth;
pub mod awards;
pub mod genres;
pub mod health;
pub mod movies;
pub mod people;
pub mod reviews;
pub mod user_lists;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register, /auth/login                public
/// /auth/logout, /auth/verify                 requires auth
///
/// /movies                                    search, rankings, detail (public)
/// /people                                    born today, detail, credits (public)
/// /genres                                    genre list (public)
/// /awards/movie/{id}, /awards/person/{id}    award texts (public)
///
/// /reviews                                   rate, check, list, edit, delete
/// /user                                      watchlist and favourites (auth)
///
/// /admin                                     catalog management and moderation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/movies", movies::router())
        .nest("/people", people::router())
        .nest("/genres", genres::router())
        .nest("/awards", awards::router())
        .nest("/reviews", reviews::router())
        .nest("/user", user_lists::router())
        .nest("/admin", admin::router())
}
