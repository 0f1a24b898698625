//! Route definitions for the public `/movies` listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET /               -> search_movies (?search, genre, year, sortBy, order)
/// GET /featured       -> featured_movies
/// GET /popular        -> popular_movies (?limit)
/// GET /new            -> new_releases (?limit)
/// GET /boxoffice      -> box_office_movies (?limit)
/// GET /genre/{name}   -> movies_by_genre (?limit)
/// GET /year/{year}    -> movies_by_year (?limit)
/// GET /{id}           -> get_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::search_movies))
        .route("/featured", get(movies::featured_movies))
        .route("/popular", get(movies::popular_movies))
        .route("/new", get(movies::new_releases))
        .route("/boxoffice", get(movies::box_office_movies))
        .route("/genre/{name}", get(movies::movies_by_genre))
        .route("/year/{year}", get(movies::movies_by_year))
        .route("/{id}", get(movies::get_movie))
}
