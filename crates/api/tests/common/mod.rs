#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use reelbase_api::auth::jwt::{generate_access_token, JwtConfig};
use reelbase_api::auth::password::hash_password;
use reelbase_api::config::ServerConfig;
use reelbase_api::router::build_app_router;
use reelbase_api::state::AppState;
use reelbase_core::roles::UserRole;
use reelbase_db::models::movie::{CreateMovie, Movie};
use reelbase_db::models::user::{CreateUser, User};
use reelbase_db::repositories::{MovieRepo, UserRepo};

/// Password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "reelbase-test-secret".to_string(),
            expiry_mins: 60,
        },
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an active user with the given role and return it with a valid token.
pub async fn create_user(pool: &PgPool, username: &str, role: UserRole) -> (User, String) {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    let mut user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");

    if role != UserRole::Regular {
        user = UserRepo::set_role(pool, user.id, role)
            .await
            .expect("role change should succeed")
            .expect("user should exist");
    }

    let token = generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed");
    (user, token)
}

/// Insert a movie with only a title and optional release date.
pub async fn create_movie(pool: &PgPool, title: &str, release_date: Option<NaiveDate>) -> Movie {
    let input = CreateMovie {
        title: title.to_string(),
        release_date,
        runtime: Some(120),
        about: None,
        plot: None,
        mpaa_rating: None,
        budget: None,
        box_office: None,
        poster_url: None,
        trailer_url: None,
    };
    MovieRepo::create(pool, &input)
        .await
        .expect("movie creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

pub async fn delete_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), Some(body)).await
}
