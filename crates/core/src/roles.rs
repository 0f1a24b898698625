//! User role hierarchy and the moderation permission table.
//!
//! Role names must match the `chk_users_role` constraint in
//! `20260301000002_create_users.sql`.
//!
//! | Actor role | Can moderate/delete target role | Can ban target role |
//! |------------|---------------------------------|---------------------|
//! | headadmin  | anyone except admin             | anyone except admin |
//! | admin      | moderator, regular              | moderator, regular  |
//! | moderator  | regular                         | regular             |
//!
//! Authors may always edit and delete their own reviews.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub const ROLE_REGULAR: &str = "regular";
pub const ROLE_MODERATOR: &str = "moderator";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_HEADADMIN: &str = "headadmin";

/// All valid role names, lowest privilege first.
pub const VALID_ROLES: &[&str] = &[ROLE_REGULAR, ROLE_MODERATOR, ROLE_ADMIN, ROLE_HEADADMIN];

/// The four-level user role hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Regular,
    Moderator,
    Admin,
    HeadAdmin,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Regular => ROLE_REGULAR,
            UserRole::Moderator => ROLE_MODERATOR,
            UserRole::Admin => ROLE_ADMIN,
            UserRole::HeadAdmin => ROLE_HEADADMIN,
        }
    }

    /// Moderator or above: may list users, ban, unban and moderate reviews.
    pub fn is_staff(self) -> bool {
        !matches!(self, UserRole::Regular)
    }

    /// May curate the catalog (movies, people, awards, genres, credits).
    pub fn is_content_admin(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::HeadAdmin)
    }

    /// Only `admin` may promote or demote other users.
    pub fn can_change_roles(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Whether an actor with this role may moderate (delete reviews of) a
    /// user holding `target`.
    pub fn can_moderate(self, target: UserRole) -> bool {
        match self {
            UserRole::HeadAdmin => target != UserRole::Admin,
            UserRole::Admin => matches!(target, UserRole::Moderator | UserRole::Regular),
            UserRole::Moderator => target == UserRole::Regular,
            UserRole::Regular => false,
        }
    }

    /// Whether an actor with this role may ban a user holding `target`.
    pub fn can_ban(self, target: UserRole) -> bool {
        self.can_moderate(target)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_REGULAR => Ok(UserRole::Regular),
            ROLE_MODERATOR => Ok(UserRole::Moderator),
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_HEADADMIN => Ok(UserRole::HeadAdmin),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }
}

/// Check whether `actor` may ban `target`.
pub fn check_ban(
    actor_id: DbId,
    actor_role: UserRole,
    target_id: DbId,
    target_role: UserRole,
) -> Result<(), CoreError> {
    if actor_id == target_id {
        return Err(CoreError::Forbidden("Cannot ban yourself".into()));
    }
    if !actor_role.can_ban(target_role) {
        return Err(CoreError::Forbidden(format!(
            "A {actor_role} cannot ban a {target_role}"
        )));
    }
    Ok(())
}

/// Check whether `actor` may delete a review written by `author`.
pub fn check_review_delete(
    actor_id: DbId,
    actor_role: UserRole,
    author_id: DbId,
    author_role: UserRole,
) -> Result<(), CoreError> {
    if actor_id == author_id || actor_role.can_moderate(author_role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Unauthorized to delete this review".into(),
        ))
    }
}

/// Role a user moves to when promoted. Only `regular` can be promoted.
pub fn promotion_target(current: UserRole) -> Result<UserRole, CoreError> {
    match current {
        UserRole::Regular => Ok(UserRole::Moderator),
        other => Err(CoreError::Validation(format!(
            "Only regular users can be promoted (user is {other})"
        ))),
    }
}

/// Role a user moves to when demoted. Only `moderator` can be demoted.
pub fn demotion_target(current: UserRole) -> Result<UserRole, CoreError> {
    match current {
        UserRole::Moderator => Ok(UserRole::Regular),
        other => Err(CoreError::Validation(format!(
            "Only moderators can be demoted (user is {other})"
        ))),
    }
}
