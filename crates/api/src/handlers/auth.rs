//! Handlers for the `/auth` resource (register, login, logout, verify).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use reelbase_core::error::CoreError;
use reelbase_db::models::user::{CreateUser, User, UserResponse};
use reelbase_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::rbac::CurrentUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
///
/// Missing fields deserialize as empty strings so they surface as
/// validation errors rather than extractor rejections.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create a `regular` account and log it in.
pub async fn register(
    State(state): State<AppState>,
    Json(mut input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input.username = input.username.trim().to_string();
    input.email = input.email.trim().to_lowercase();
    input.validate()?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let create = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
    };

    let user = UserRepo::create(&state.pool, &create)
        .await
        .map_err(|e| {
            if is_unique_violation(&e, "uq_users_username") {
                AppError::Core(CoreError::Conflict("Username is already taken".into()))
            } else if is_unique_violation(&e, "uq_users_email") {
                AppError::Core(CoreError::Conflict("Email is already registered".into()))
            } else {
                AppError::Database(e)
            }
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = auth_response(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
///
/// Authenticate with email + password and mark the account active.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let mut user = UserRepo::find_by_email(&state.pool, &input.email.trim().to_lowercase())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    UserRepo::set_active(&state.pool, user.id, true).await?;
    user.is_active = true;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(auth_response(&state, &user)?))
}

/// POST /api/auth/logout
///
/// Mark the caller inactive. Their token is refused until the next login.
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<MessageResponse>> {
    UserRepo::set_active(&state.pool, current.id(), false).await?;
    tracing::info!(user_id = current.id(), "User logged out");
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

/// GET /api/auth/verify
pub async fn verify(current: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&current.user))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    Ok(AuthResponse {
        token,
        user: UserResponse::from(user),
    })
}
