//! Handlers for the `/reviews` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_core::review::validate_rating;
use reelbase_core::roles::check_review_delete;
use reelbase_core::types::DbId;
use reelbase_db::models::review::{CreateReview, Review, ReviewWithAuthor, UpdateReview};
use reelbase_db::repositories::{ReviewRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::rbac::CurrentUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /reviews/rate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateMovieRequest {
    pub movie_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Query for `GET /reviews/isreview`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsReviewedParams {
    pub movie_id: DbId,
    pub user_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct IsReviewedResponse {
    pub is_reviewed: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/reviews/rate
///
/// One review per user and movie; a second attempt is a 409.
pub async fn rate_movie(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(input): Json<RateMovieRequest>,
) -> AppResult<(StatusCode, Json<Review>)> {
    if input.user_id != current.id() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot review on behalf of another user".into(),
        )));
    }
    validate_rating(input.rating)?;

    let create = CreateReview {
        movie_id: input.movie_id,
        user_id: current.id(),
        rating: input.rating,
        review_text: input.comment,
    };

    let review = ReviewRepo::create(&state.pool, &create).await.map_err(|e| {
        if is_unique_violation(&e, "uq_reviews_user_movie") {
            AppError::Core(CoreError::Conflict(
                "You have already reviewed this movie".into(),
            ))
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!(
        review_id = review.id,
        movie_id = review.movie_id,
        user_id = review.user_id,
        rating = review.rating,
        "Review created"
    );

    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews/isreview?movieId=&userId=
pub async fn is_reviewed(
    State(state): State<AppState>,
    Query(params): Query<IsReviewedParams>,
) -> AppResult<Json<IsReviewedResponse>> {
    let is_reviewed = ReviewRepo::exists_for(&state.pool, params.movie_id, params.user_id).await?;
    Ok(Json(IsReviewedResponse { is_reviewed }))
}

/// GET /api/reviews/{movieId}
pub async fn reviews_for_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<ReviewWithAuthor>>> {
    let reviews = ReviewRepo::list_for_movie(&state.pool, movie_id).await?;
    Ok(Json(reviews))
}

/// PUT /api/reviews/{reviewId}
///
/// Only the author may edit a review.
pub async fn update_review(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(review_id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<Json<Review>> {
    let review = find_review(&state, review_id).await?;
    if review.user_id != current.id() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can edit this review".into(),
        )));
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let updated = ReviewRepo::update(&state.pool, review_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;

    tracing::info!(review_id, user_id = current.id(), "Review updated");
    Ok(Json(updated))
}

/// DELETE /api/reviews/{reviewId}
pub async fn delete_review(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(review_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    delete_review_as(&state, &current, review_id).await?;
    Ok(Json(MessageResponse::new("Review deleted successfully")))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Delete a review if `actor` is its author or outranks the author.
///
/// Shared by the author-facing and moderation endpoints.
pub(crate) async fn delete_review_as(
    state: &AppState,
    actor: &CurrentUser,
    review_id: DbId,
) -> AppResult<()> {
    let review = find_review(state, review_id).await?;

    // Reviews cascade with their author, so the author row always exists.
    let author = UserRepo::find_by_id(&state.pool, review.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: review.user_id,
        }))?;

    check_review_delete(actor.id(), actor.role, author.id, author.user_role())?;

    ReviewRepo::delete(&state.pool, review_id).await?;

    tracing::info!(
        review_id,
        author_id = author.id,
        actor_id = actor.id(),
        actor_role = %actor.role,
        "Review deleted"
    );
    Ok(())
}

async fn find_review(state: &AppState, review_id: DbId) -> AppResult<Review> {
    ReviewRepo::find_by_id(&state.pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))
}
