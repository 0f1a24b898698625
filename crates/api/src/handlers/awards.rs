//! Handlers for the public `/awards` lookups.
//!
//! Unknown movie or person ids yield an empty list, not a 404.

use axum::extract::{Path, State};
use axum::Json;
use reelbase_core::types::DbId;
use reelbase_db::models::award::AwardText;
use reelbase_db::repositories::AwardRepo;

use crate::error::AppResult;
use crate::response::ListResponse;
use crate::state::AppState;

/// GET /api/awards/movie/{movieId}
///
/// The movie's own awards plus awards its cast and directors won for it.
pub async fn awards_for_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<ListResponse<AwardText>>> {
    let awards = AwardRepo::texts_for_movie(&state.pool, movie_id).await?;
    Ok(Json(ListResponse::new(awards)))
}

/// GET /api/awards/person/{personId}
pub async fn awards_for_person(
    State(state): State<AppState>,
    Path(person_id): Path<DbId>,
) -> AppResult<Json<ListResponse<AwardText>>> {
    let awards = AwardRepo::texts_for_person(&state.pool, person_id).await?;
    Ok(Json(ListResponse::new(awards)))
}
