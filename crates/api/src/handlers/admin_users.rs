//! Handlers for user moderation under `/admin`.
//!
//! Listing, banning, unbanning and review moderation need staff
//! ([`RequireStaff`]). Promotion and demotion are reserved for `admin`
//! ([`RequireRoleManager`]).

use axum::extract::{Path, State};
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_core::roles::{check_ban, demotion_target, promotion_target, UserRole};
use reelbase_core::types::DbId;
use reelbase_db::models::ban::BannedUserListing;
use reelbase_db::models::review::ModerationReview;
use reelbase_db::models::stats::{ActivityItem, PlatformStats};
use reelbase_db::models::user::{User, UserResponse, UserSummary};
use reelbase_db::repositories::{BanRepo, ReviewRepo, StatsRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::reviews::delete_review_as;
use crate::middleware::rbac::{CurrentUser, RequireRoleManager, RequireStaff};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/ban-user`.
#[derive(Debug, Deserialize)]
pub struct BanUserRequest {
    pub user_id: DbId,
    #[serde(default)]
    pub ban_reason: String,
}

/// Request body for unban, promote and demote.
#[derive(Debug, Deserialize)]
pub struct UserIdRequest {
    pub user_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct BannedUser {
    pub user_id: DbId,
    pub username: String,
    pub ban_reason: String,
}

#[derive(Debug, Serialize)]
pub struct BanResponse {
    pub message: String,
    pub banned_user: BannedUser,
}

/// Returned by unban, promote and demote.
#[derive(Debug, Serialize)]
pub struct UserActionResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct UserActivity {
    pub user: UserResponse,
    pub activities: Vec<ActivityItem>,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<Vec<UserSummary>>> {
    Ok(Json(UserRepo::list_summaries(&state.pool).await?))
}

/// POST /api/admin/ban-user
///
/// Snapshots the account into `banned_users` and deletes it, taking the
/// user's reviews and lists with it.
pub async fn ban_user(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<BanUserRequest>,
) -> AppResult<Json<BanResponse>> {
    let reason = input.ban_reason.trim();
    if reason.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Ban reason is required".into(),
        )));
    }

    let target = find_user(&state, input.user_id).await?;
    check_ban(staff.id(), staff.role, target.id, target.user_role())?;

    let record = BanRepo::ban(&state.pool, &target, reason, staff.id())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Conflict("User is already banned".into())))?;

    tracing::info!(
        user_id = target.id,
        username = %target.username,
        banned_by = staff.id(),
        actor_role = %staff.role,
        reason = %record.ban_reason,
        "User banned"
    );

    Ok(Json(BanResponse {
        message: format!("User {} has been banned", record.username),
        banned_user: BannedUser {
            user_id: record.user_id,
            username: record.username,
            ban_reason: record.ban_reason,
        },
    }))
}

/// GET /api/admin/banned-users
pub async fn list_banned_users(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<Vec<BannedUserListing>>> {
    Ok(Json(BanRepo::list_current(&state.pool).await?))
}

/// POST /api/admin/unban-user
///
/// Restores the account as a `regular` user who must log in again.
pub async fn unban_user(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<UserIdRequest>,
) -> AppResult<Json<UserActionResponse>> {
    let user = BanRepo::unban(&state.pool, input.user_id, staff.id())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Banned user",
            id: input.user_id,
        }))?;

    tracing::info!(
        user_id = user.id,
        username = %user.username,
        unbanned_by = staff.id(),
        "User unbanned"
    );

    Ok(Json(UserActionResponse {
        message: format!("User {} has been unbanned", user.username),
        user: UserResponse::from(&user),
    }))
}

/// POST /api/admin/promote-user
pub async fn promote_user(
    State(state): State<AppState>,
    RequireRoleManager(admin): RequireRoleManager,
    Json(input): Json<UserIdRequest>,
) -> AppResult<Json<UserActionResponse>> {
    change_role(&state, &admin, input.user_id, promotion_target, "promoted").await
}

/// POST /api/admin/demote-user
pub async fn demote_user(
    State(state): State<AppState>,
    RequireRoleManager(admin): RequireRoleManager,
    Json(input): Json<UserIdRequest>,
) -> AppResult<Json<UserActionResponse>> {
    change_role(&state, &admin, input.user_id, demotion_target, "demoted").await
}

async fn change_role(
    state: &AppState,
    admin: &CurrentUser,
    user_id: DbId,
    transition: fn(UserRole) -> Result<UserRole, CoreError>,
    verb: &str,
) -> AppResult<Json<UserActionResponse>> {
    let target = find_user(state, user_id).await?;
    let from = target.user_role();
    let to = transition(from)?;

    let user = UserRepo::set_role(&state.pool, user_id, to)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    tracing::info!(
        user_id,
        from = %from,
        to = %to,
        admin_id = admin.id(),
        "User role changed"
    );

    Ok(Json(UserActionResponse {
        message: format!("User {} has been {verb} to {to}", user.username),
        user: UserResponse::from(&user),
    }))
}

// ---------------------------------------------------------------------------
// Review moderation
// ---------------------------------------------------------------------------

/// GET /api/admin/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<Vec<ModerationReview>>> {
    Ok(Json(ReviewRepo::list_all(&state.pool).await?))
}

/// DELETE /api/admin/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(review_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    delete_review_as(&state, &staff, review_id).await?;
    Ok(Json(MessageResponse::new("Review deleted successfully")))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<PlatformStats>> {
    Ok(Json(StatsRepo::platform(&state.pool).await?))
}

/// GET /api/admin/user-activity/{userId}
///
/// The user's reviews and, for staff, the bans and unbans they performed,
/// newest first.
pub async fn user_activity(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UserActivity>> {
    let user = find_user(&state, user_id).await?;

    let mut activities = StatsRepo::review_activity(&state.pool, user_id).await?;
    if user.user_role().is_staff() {
        activities.extend(StatsRepo::moderation_activity(&state.pool, user_id).await?);
    }
    sort_activities(&mut activities);

    Ok(Json(UserActivity {
        user: UserResponse::from(&user),
        activities,
    }))
}

fn sort_activities(activities: &mut [ActivityItem]) {
    activities.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
}

async fn find_user(state: &AppState, user_id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))
}
