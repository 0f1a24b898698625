//! Handlers for the public `/movies` listings and movie detail.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, Utc};
use reelbase_core::catalog::{
    clamp_limit, MovieSort, SortOrder, DEFAULT_BROWSE_LIMIT, DEFAULT_NEW_RELEASES_LIMIT,
    DEFAULT_RANKED_LIMIT, FEATURED_LIMIT, MAX_LIMIT,
};
use reelbase_core::error::CoreError;
use reelbase_core::review::round_rating;
use reelbase_core::types::DbId;
use reelbase_db::models::credit::{CastMember, CrewKind, CrewMember};
use reelbase_db::models::movie::{Movie, MovieSearch, MovieSummary};
use reelbase_db::repositories::{CreditRepo, MovieRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::response::{ListResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /movies`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSearchParams {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl MovieSearchParams {
    /// Empty strings behave like absent parameters.
    fn filter(&self) -> AppResult<MovieSearch> {
        let year = match non_empty(&self.year) {
            Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
                AppError::BadRequest(format!("Invalid year '{raw}'"))
            })?),
            None => None,
        };
        Ok(MovieSearch {
            search: non_empty(&self.search).map(str::to_string),
            genre: non_empty(&self.genre).map(str::to_string),
            year,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Full movie page: the row, its aggregates and its credits.
#[derive(Debug, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub avg_rating: f64,
    pub review_count: i64,
    pub genres: Option<String>,
    pub cast: Vec<CastMember>,
    pub directors: Vec<CrewMember>,
    pub writers: Vec<CrewMember>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/movies?search=&genre=&year=&sortBy=&order=
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchParams>,
) -> AppResult<Json<ListResponse<MovieSummary>>> {
    let filter = params.filter()?;
    let sort = MovieSort::parse(params.sort_by.as_deref());
    let order = SortOrder::parse(params.order.as_deref());

    let movies = MovieRepo::search(&state.pool, &filter, sort, order).await?;
    Ok(Json(ListResponse::new(movies)))
}

/// GET /api/movies/featured
///
/// Best-rated reviewed movies of the current year.
pub async fn featured_movies(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<MovieSummary>>> {
    let year = Utc::now().year();
    let movies = MovieRepo::featured(&state.pool, year, FEATURED_LIMIT).await?;
    Ok(Json(ListResponse::new(movies)))
}

/// GET /api/movies/popular?limit=
pub async fn popular_movies(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<ListResponse<MovieSummary>>> {
    let limit = clamp_limit(params.limit, DEFAULT_RANKED_LIMIT, MAX_LIMIT);
    let movies = MovieRepo::popular(&state.pool, limit).await?;
    Ok(Json(ListResponse::new(movies)))
}

/// GET /api/movies/new?limit=
pub async fn new_releases(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<ListResponse<MovieSummary>>> {
    let limit = clamp_limit(params.limit, DEFAULT_NEW_RELEASES_LIMIT, MAX_LIMIT);
    let movies = MovieRepo::new_releases(&state.pool, limit).await?;
    Ok(Json(ListResponse::new(movies)))
}

/// GET /api/movies/boxoffice?limit=
pub async fn box_office_movies(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<ListResponse<MovieSummary>>> {
    let limit = clamp_limit(params.limit, DEFAULT_RANKED_LIMIT, MAX_LIMIT);
    let movies = MovieRepo::box_office(&state.pool, limit).await?;
    Ok(Json(ListResponse::new(movies)))
}

/// GET /api/movies/genre/{name}?limit=
pub async fn movies_by_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<ListResponse<MovieSummary>>> {
    let limit = clamp_limit(params.limit, DEFAULT_BROWSE_LIMIT, MAX_LIMIT);
    let movies = MovieRepo::by_genre(&state.pool, &name, limit).await?;
    Ok(Json(ListResponse::new(movies)))
}

/// GET /api/movies/year/{year}?limit=
pub async fn movies_by_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<ListResponse<MovieSummary>>> {
    let limit = clamp_limit(params.limit, DEFAULT_BROWSE_LIMIT, MAX_LIMIT);
    let movies = MovieRepo::by_year(&state.pool, year, limit).await?;
    Ok(Json(ListResponse::new(movies)))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse<MovieDetail>>> {
    let summary = MovieRepo::find_summary(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;

    let cast = CreditRepo::cast_for_movie(&state.pool, id).await?;
    let directors = CreditRepo::crew_for_movie(&state.pool, CrewKind::Director, id).await?;
    let writers = CreditRepo::crew_for_movie(&state.pool, CrewKind::Writer, id).await?;

    Ok(Json(SuccessResponse::new(MovieDetail {
        movie: summary.movie,
        avg_rating: round_rating(summary.avg_rating),
        review_count: summary.review_count,
        genres: summary.genres,
        cast,
        directors,
        writers,
    })))
}
