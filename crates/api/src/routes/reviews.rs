//! Route definitions for the `/reviews` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// `{id}` is a movie id for `GET` and a review id for `PUT` / `DELETE`.
///
/// ```text
/// POST   /rate        -> rate_movie (requires auth)
/// GET    /isreview    -> is_reviewed (?movieId, userId)
/// GET    /{id}        -> reviews_for_movie
/// PUT    /{id}        -> update_review (author only)
/// DELETE /{id}        -> delete_review (author or higher role)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rate", post(reviews::rate_movie))
        .route("/isreview", get(reviews::is_reviewed))
        .route(
            "/{id}",
            get(reviews::reviews_for_movie)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
}
