//! HTTP-level integration tests for the `/auth` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get, get_auth, post_json, post_json_auth, TEST_PASSWORD};
use reelbase_core::roles::UserRole;
use reelbase_db::repositories::{BanRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Register
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_returns_token_and_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "newviewer",
        "email": "NewViewer@Test.com",
        "password": "hunter22",
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["username"], "newviewer");
    assert_eq!(json["user"]["email"], "newviewer@test.com");
    assert_eq!(json["user"]["user_type"], "regular");
    assert!(json["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_username_conflicts(pool: PgPool) {
    create_user(&pool, "taken", UserRole::Regular).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "taken",
        "email": "someone-else@test.com",
        "password": "hunter22",
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_email_conflicts(pool: PgPool) {
    create_user(&pool, "original", UserRole::Regular).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "copycat",
        "email": "original@test.com",
        "password": "hunter22",
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_missing_email_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "noemail", "password": "hunter22" });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_blank_username_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "username": "   ",
        "email": "blank@test.com",
        "password": "hunter22",
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(UserRepo::find_by_email(&pool, "blank@test.com")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_trims_username_and_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "  padded  ",
        "email": "  Padded@Test.com ",
        "password": "hunter22",
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user"]["username"], "padded");
    assert_eq!(json["user"]["email"], "padded@test.com");
}

// ---------------------------------------------------------------------------
// Login / logout / verify
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_marks_user_active(pool: PgPool) {
    let (user, _token) = create_user(&pool, "returning", UserRole::Regular).await;
    UserRepo::set_active(&pool, user.id, false).await.unwrap();
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({ "email": "returning@test.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["id"], user.id);

    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(reloaded.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_user(&pool, "forgetful", UserRole::Regular).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "forgetful@test.com", "password": "nope" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_banned_user_cannot_log_in(pool: PgPool) {
    let (target, _) = create_user(&pool, "troll", UserRole::Regular).await;
    let (moderator, _) = create_user(&pool, "mod", UserRole::Moderator).await;
    BanRepo::ban(&pool, &target, "spam", moderator.id)
        .await
        .unwrap()
        .unwrap();
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "troll@test.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_returns_current_user(pool: PgPool) {
    let (user, token) = create_user(&pool, "verified", UserRole::Moderator).await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/auth/verify", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["username"], "verified");
    assert_eq!(json["user_type"], "moderator");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_verify_without_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/auth/verify").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/verify", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_ends_session(pool: PgPool) {
    let (user, token) = create_user(&pool, "leaving", UserRole::Regular).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/auth/logout", serde_json::json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    let reloaded = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert!(!reloaded.is_active);

    // The old token is refused until the next login.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/verify", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
