//! Handlers for the `/user` watchlist and favourites endpoints.
//!
//! Writes are limited to the list owner. Reads are also open to staff.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_core::types::DbId;
use reelbase_db::models::user_list::{ListEntry, ListedMovie, UserList};
use reelbase_db::repositories::{UserListRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::rbac::CurrentUser;
use crate::response::{ActionResponse, ListResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of the add/remove endpoints and query of the check endpoints.
#[derive(Debug, Deserialize)]
pub struct ListEntryRequest {
    pub movie_id: DbId,
    pub user_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct WatchlistCheck {
    pub success: bool,
    #[serde(rename = "inWatchlist")]
    pub in_watchlist: bool,
    pub data: Option<ListEntry>,
}

#[derive(Debug, Serialize)]
pub struct FavouritesCheck {
    pub success: bool,
    #[serde(rename = "inFavourites")]
    pub in_favourites: bool,
    pub data: Option<ListEntry>,
}

// ---------------------------------------------------------------------------
// Watchlist
// ---------------------------------------------------------------------------

/// POST /api/user/addtowatch
pub async fn add_to_watchlist(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(input): Json<ListEntryRequest>,
) -> AppResult<(StatusCode, Json<ActionResponse<ListEntry>>)> {
    add_entry(&state, &current, UserList::Watchlist, &input).await
}

/// GET /api/user/checkinwatchlist?movie_id=&user_id=
pub async fn check_in_watchlist(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<ListEntryRequest>,
) -> AppResult<Json<WatchlistCheck>> {
    let entry = find_entry(&state, &current, UserList::Watchlist, &params).await?;
    Ok(Json(WatchlistCheck {
        success: true,
        in_watchlist: entry.is_some(),
        data: entry,
    }))
}

/// DELETE /api/user/removefromlist
pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(input): Json<ListEntryRequest>,
) -> AppResult<Json<ActionResponse<ListEntry>>> {
    remove_entry(&state, &current, UserList::Watchlist, &input).await
}

/// GET /api/user/watchlist/{userId}
pub async fn get_watchlist(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ListResponse<ListedMovie>>> {
    list_movies(&state, &current, UserList::Watchlist, user_id).await
}

// ---------------------------------------------------------------------------
// Favourites
// ---------------------------------------------------------------------------

/// POST /api/user/addtofav
pub async fn add_to_favourites(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(input): Json<ListEntryRequest>,
) -> AppResult<(StatusCode, Json<ActionResponse<ListEntry>>)> {
    add_entry(&state, &current, UserList::Favourites, &input).await
}

/// GET /api/user/checkinfav?movie_id=&user_id=
pub async fn check_in_favourites(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<ListEntryRequest>,
) -> AppResult<Json<FavouritesCheck>> {
    let entry = find_entry(&state, &current, UserList::Favourites, &params).await?;
    Ok(Json(FavouritesCheck {
        success: true,
        in_favourites: entry.is_some(),
        data: entry,
    }))
}

/// DELETE /api/user/removefromfav
pub async fn remove_from_favourites(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(input): Json<ListEntryRequest>,
) -> AppResult<Json<ActionResponse<ListEntry>>> {
    remove_entry(&state, &current, UserList::Favourites, &input).await
}

/// GET /api/user/favourites/{userId}
pub async fn get_favourites(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<ListResponse<ListedMovie>>> {
    list_movies(&state, &current, UserList::Favourites, user_id).await
}

// ---------------------------------------------------------------------------
// Shared list logic
// ---------------------------------------------------------------------------

fn ensure_owner(current: &CurrentUser, user_id: DbId) -> AppResult<()> {
    if current.id() != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot modify another user's list".into(),
        )));
    }
    Ok(())
}

fn ensure_can_read(current: &CurrentUser, user_id: DbId) -> AppResult<()> {
    if current.id() != user_id && !current.role.is_staff() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot view another user's list".into(),
        )));
    }
    Ok(())
}

async fn add_entry(
    state: &AppState,
    current: &CurrentUser,
    list: UserList,
    input: &ListEntryRequest,
) -> AppResult<(StatusCode, Json<ActionResponse<ListEntry>>)> {
    ensure_owner(current, input.user_id)?;

    let entry = UserListRepo::add(&state.pool, list, input.user_id, input.movie_id)
        .await
        .map_err(|e| {
            let constraint = format!("uq_{}_user_movie", list.table());
            if is_unique_violation(&e, &constraint) {
                AppError::Core(CoreError::Conflict(format!(
                    "Movie is already in your {}",
                    list.label()
                )))
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::debug!(
        user_id = entry.user_id,
        movie_id = entry.movie_id,
        list = list.label(),
        "Movie added to list"
    );

    Ok((
        StatusCode::CREATED,
        Json(ActionResponse::new(
            format!("Movie added to {}", list.label()),
            entry,
        )),
    ))
}

async fn find_entry(
    state: &AppState,
    current: &CurrentUser,
    list: UserList,
    params: &ListEntryRequest,
) -> AppResult<Option<ListEntry>> {
    ensure_can_read(current, params.user_id)?;
    Ok(UserListRepo::find(&state.pool, list, params.user_id, params.movie_id).await?)
}

async fn remove_entry(
    state: &AppState,
    current: &CurrentUser,
    list: UserList,
    input: &ListEntryRequest,
) -> AppResult<Json<ActionResponse<ListEntry>>> {
    ensure_owner(current, input.user_id)?;

    let entry = UserListRepo::remove(&state.pool, list, input.user_id, input.movie_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: match list {
                    UserList::Watchlist => "Watchlist movie",
                    UserList::Favourites => "Favourite movie",
                },
                id: input.movie_id,
            })
        })?;

    Ok(Json(ActionResponse::new(
        format!("Movie removed from {}", list.label()),
        entry,
    )))
}

async fn list_movies(
    state: &AppState,
    current: &CurrentUser,
    list: UserList,
    user_id: DbId,
) -> AppResult<Json<ListResponse<ListedMovie>>> {
    ensure_can_read(current, user_id)?;

    if UserRepo::find_by_id(&state.pool, user_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    let movies = UserListRepo::movies(&state.pool, list, user_id).await?;
    Ok(Json(ListResponse::new(movies)))
}
