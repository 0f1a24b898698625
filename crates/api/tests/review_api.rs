//! HTTP-level integration tests for the `/reviews` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_movie, create_user, delete_auth, get, post_json_auth, put_json_auth,
};
use reelbase_core::roles::UserRole;
use reelbase_db::models::review::CreateReview;
use reelbase_db::repositories::ReviewRepo;
use sqlx::PgPool;

async fn seed_review(pool: &PgPool, movie_id: i64, user_id: i64, rating: i32) -> i64 {
    ReviewRepo::create(
        pool,
        &CreateReview {
            movie_id,
            user_id,
            rating,
            review_text: Some("Seen it".into()),
        },
    )
    .await
    .unwrap()
    .id
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_updates_movie_average(pool: PgPool) {
    let (user, token) = create_user(&pool, "rater", UserRole::Regular).await;
    let movie = create_movie(&pool, "Jaws", None).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "movieId": movie.id,
        "userId": user.id,
        "rating": 8,
        "comment": "Bigger boat",
    });
    let response = post_json_auth(app.clone(), "/api/reviews/rate", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["rating"], 8);
    assert_eq!(json["review_text"], "Bigger boat");

    let response = get(app, &format!("/api/movies/{}", movie.id)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["avg_rating"], 8.0);
    assert_eq!(json["data"]["review_count"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_review_conflicts(pool: PgPool) {
    let (user, token) = create_user(&pool, "repeat", UserRole::Regular).await;
    let movie = create_movie(&pool, "Alien", None).await;
    seed_review(&pool, movie.id, user.id, 9).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "movieId": movie.id, "userId": user.id, "rating": 4 });
    let response = post_json_auth(app, "/api/reviews/rate", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_out_of_range_is_rejected(pool: PgPool) {
    let (user, token) = create_user(&pool, "generous", UserRole::Regular).await;
    let movie = create_movie(&pool, "Up", None).await;
    let app = common::build_test_app(pool);

    for rating in [0, 11] {
        let body = serde_json::json!({ "movieId": movie.id, "userId": user.id, "rating": rating });
        let response = post_json_auth(app.clone(), "/api/reviews/rate", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cannot_rate_as_someone_else(pool: PgPool) {
    let (_user, token) = create_user(&pool, "impostor", UserRole::Regular).await;
    let (victim, _) = create_user(&pool, "victim", UserRole::Regular).await;
    let movie = create_movie(&pool, "Face/Off", None).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "movieId": movie.id, "userId": victim.id, "rating": 2 });
    let response = post_json_auth(app, "/api/reviews/rate", body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_unknown_movie_is_bad_request(pool: PgPool) {
    let (user, token) = create_user(&pool, "lost", UserRole::Regular).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "movieId": 999999, "userId": user.id, "rating": 5 });
    let response = post_json_auth(app, "/api/reviews/rate", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_REFERENCE");
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_is_reviewed(pool: PgPool) {
    let (user, _) = create_user(&pool, "checker", UserRole::Regular).await;
    let reviewed = create_movie(&pool, "Reviewed", None).await;
    let unseen = create_movie(&pool, "Unseen", None).await;
    seed_review(&pool, reviewed.id, user.id, 6).await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/reviews/isreview?movieId={}&userId={}", reviewed.id, user.id);
    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["is_reviewed"], true);

    let uri = format!("/api/reviews/isreview?movieId={}&userId={}", unseen.id, user.id);
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["is_reviewed"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reviews_for_movie_include_author(pool: PgPool) {
    let (user, _) = create_user(&pool, "author", UserRole::Moderator).await;
    let movie = create_movie(&pool, "Rocky", None).await;
    seed_review(&pool, movie.id, user.id, 7).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/reviews/{}", movie.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let reviews = json.as_array().expect("bare array");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["user_name"], "author");
    assert_eq!(reviews[0]["user_type"], "moderator");
    assert_eq!(reviews[0]["rating"], 7);
}

// ---------------------------------------------------------------------------
// Editing and deleting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_only_author_can_edit(pool: PgPool) {
    let (author, author_token) = create_user(&pool, "writer", UserRole::Regular).await;
    let (_admin, admin_token) = create_user(&pool, "boss", UserRole::Admin).await;
    let movie = create_movie(&pool, "Big", None).await;
    let review_id = seed_review(&pool, movie.id, author.id, 5).await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/reviews/{review_id}");

    let body = serde_json::json!({ "rating": 1 });
    let response = put_json_auth(app.clone(), &uri, body, &admin_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = serde_json::json!({ "rating": 9, "review_text": "Changed my mind" });
    let response = put_json_auth(app.clone(), &uri, body, &author_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["rating"], 9);
    assert_eq!(json["review_text"], "Changed my mind");

    let response = put_json_auth(
        app,
        "/api/reviews/999999",
        serde_json::json!({ "rating": 3 }),
        &author_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_follows_role_hierarchy(pool: PgPool) {
    let (regular, regular_token) = create_user(&pool, "regular", UserRole::Regular).await;
    let (_other, other_token) = create_user(&pool, "other", UserRole::Regular).await;
    let (_moderator, mod_token) = create_user(&pool, "moderator", UserRole::Moderator).await;
    let (admin, _) = create_user(&pool, "admin", UserRole::Admin).await;
    let movie = create_movie(&pool, "Clue", None).await;
    let regular_review = seed_review(&pool, movie.id, regular.id, 4).await;
    let admin_review = seed_review(&pool, movie.id, admin.id, 8).await;
    let app = common::build_test_app(pool);

    // A regular user cannot delete someone else's review.
    let response =
        delete_auth(app.clone(), &format!("/api/reviews/{regular_review}"), &other_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A moderator cannot delete an admin's review.
    let response =
        delete_auth(app.clone(), &format!("/api/reviews/{admin_review}"), &mod_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // A moderator can delete a regular user's review.
    let response =
        delete_auth(app.clone(), &format!("/api/reviews/{regular_review}"), &mod_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"].is_string());

    // Already gone.
    let response =
        delete_auth(app, &format!("/api/reviews/{regular_review}"), &regular_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_author_deletes_own_review(pool: PgPool) {
    let (author, token) = create_user(&pool, "selfclean", UserRole::Regular).await;
    let movie = create_movie(&pool, "Tenet", None).await;
    let review_id = seed_review(&pool, movie.id, author.id, 2).await;
    let app = common::build_test_app(pool.clone());

    let response = delete_auth(app, &format!("/api/reviews/{review_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(ReviewRepo::find_by_id(&pool, review_id).await.unwrap().is_none());
}
