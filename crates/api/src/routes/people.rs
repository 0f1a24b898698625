//! Route definitions for the public `/people` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET /borntoday      -> born_today
/// GET /{id}           -> get_person
/// GET /{id}/movies    -> person_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/borntoday", get(people::born_today))
        .route("/{id}", get(people::get_person))
        .route("/{id}/movies", get(people::person_movies))
}
