//! Role-based access control (RBAC) extractors.
//!
//! Every extractor here re-loads the acting user from the database, so a
//! banned user's token stops working at once and role changes take effect
//! on the next request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use reelbase_core::error::CoreError;
use reelbase_core::roles::UserRole;
use reelbase_core::types::DbId;
use reelbase_db::models::user::User;
use reelbase_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated user as currently stored.
///
/// Rejects with 401 when the account no longer exists (e.g. banned) and
/// with 403 when the user has logged out.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn id(&self) -> DbId {
        self.user.id
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        let user = UserRepo::find_by_id(&state.pool, auth.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
            })?;

        if !user.is_active {
            return Err(AppError::Core(CoreError::Forbidden(
                "Session has ended. Please log in again".into(),
            )));
        }

        let role = user.user_role();
        Ok(CurrentUser { user, role })
    }
}

/// Requires `moderator`, `admin` or `headadmin`.
pub struct RequireStaff(pub CurrentUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.role.is_staff() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Moderator role or higher required".into(),
            )));
        }
        Ok(RequireStaff(user))
    }
}

/// Requires `admin` or `headadmin`. Guards catalog management.
pub struct RequireContentAdmin(pub CurrentUser);

impl FromRequestParts<AppState> for RequireContentAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.role.is_content_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireContentAdmin(user))
    }
}

/// Requires exactly `admin`. Guards promote / demote.
pub struct RequireRoleManager(pub CurrentUser);

impl FromRequestParts<AppState> for RequireRoleManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.role.can_change_roles() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only admins can change user roles".into(),
            )));
        }
        Ok(RequireRoleManager(user))
    }
}
