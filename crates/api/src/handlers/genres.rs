//! Handler for the public genre list.

use axum::extract::State;
use axum::Json;
use reelbase_db::models::genre::Genre;
use reelbase_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::response::ListResponse;
use crate::state::AppState;

/// GET /api/genres
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<ListResponse<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new(genres)))
}
