//! Route definitions for the public `/awards` lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::awards;
use crate::state::AppState;

/// Routes mounted at `/awards`.
///
/// ```text
/// GET /movie/{movie_id}     -> awards_for_movie
/// GET /person/{person_id}   -> awards_for_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movie/{movie_id}", get(awards::awards_for_movie))
        .route("/person/{person_id}", get(awards::awards_for_person))
}
