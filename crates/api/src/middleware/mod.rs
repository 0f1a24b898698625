//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Claims from a valid JWT Bearer token.
//! - [`rbac::CurrentUser`] -- The token's user, re-loaded from the database.
//! - [`rbac::RequireStaff`] -- Moderator or above.
//! - [`rbac::RequireContentAdmin`] -- Admin or head admin.
//! - [`rbac::RequireRoleManager`] -- Admin only (promote / demote).

pub mod auth;
pub mod rbac;
