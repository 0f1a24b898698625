//! Handlers for the public `/people` resource.

use axum::extract::{Path, State};
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_core::types::DbId;
use reelbase_db::models::person::{Person, PersonCredit};
use reelbase_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::response::{ListResponse, SuccessResponse};
use crate::state::AppState;

/// GET /api/people/borntoday
pub async fn born_today(State(state): State<AppState>) -> AppResult<Json<ListResponse<Person>>> {
    let people = PersonRepo::born_today(&state.pool).await?;
    Ok(Json(ListResponse::new(people)))
}

/// GET /api/people/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse<Person>>> {
    let person = ensure_person(&state, id).await?;
    Ok(Json(SuccessResponse::new(person)))
}

/// GET /api/people/{id}/movies
///
/// Every acting, directing and writing credit, newest release first.
pub async fn person_movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ListResponse<PersonCredit>>> {
    ensure_person(&state, id).await?;
    let credits = PersonRepo::credits(&state.pool, id).await?;
    Ok(Json(ListResponse::new(credits)))
}

async fn ensure_person(state: &AppState, id: DbId) -> AppResult<Person> {
    PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))
}
