//! User entity model and DTOs.

use reelbase_core::roles::UserRole;
use reelbase_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub joined_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Parsed role. Unknown values fall back to `regular`, the least
    /// privileged role; the `chk_users_role` constraint keeps them out anyway.
    pub fn user_role(&self) -> UserRole {
        self.role.parse().unwrap_or(UserRole::Regular)
    }
}

/// Public user shape returned by auth endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub user_type: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            user_type: user.role.clone(),
        }
    }
}

/// Row for the moderation user listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub user_type: String,
    pub is_active: bool,
    pub joined_at: Timestamp,
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
