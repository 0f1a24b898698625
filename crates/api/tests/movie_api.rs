//! HTTP-level integration tests for the public catalog endpoints:
//! `/movies`, `/people`, `/genres` and `/awards`.

mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use common::{body_json, create_movie, create_user, get};
use reelbase_core::roles::UserRole;
use reelbase_db::models::award::{CreateAward, CreateMovieAward};
use reelbase_db::models::credit::CrewKind;
use reelbase_db::models::person::CreatePerson;
use reelbase_db::models::review::CreateReview;
use reelbase_db::repositories::{AwardRepo, CreditRepo, GenreRepo, PersonRepo, ReviewRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn person(first: &str, last: &str, birth_date: Option<NaiveDate>) -> CreatePerson {
    CreatePerson {
        first_name: first.to_string(),
        last_name: last.to_string(),
        birth_date,
        death_date: None,
        birthplace: None,
        biography: None,
        photo_url: None,
    }
}

async fn rate(pool: &PgPool, movie_id: i64, user_id: i64, rating: i32) {
    ReviewRepo::create(
        pool,
        &CreateReview {
            movie_id,
            user_id,
            rating,
            review_text: None,
        },
    )
    .await
    .unwrap();
}

// ---------------------------------------------------------------------------
// Movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_returns_envelope_with_aggregates(pool: PgPool) {
    let movie = create_movie(&pool, "Heat", NaiveDate::from_ymd_opt(1995, 12, 15)).await;
    let drama = GenreRepo::create(&pool, "Drama").await.unwrap();
    let crime = GenreRepo::create(&pool, "Crime").await.unwrap();
    GenreRepo::add_to_movie(&pool, movie.id, drama.id).await.unwrap();
    GenreRepo::add_to_movie(&pool, movie.id, crime.id).await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/movies?search=heat").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "Heat");
    assert_eq!(json["data"][0]["avg_rating"], 0.0);
    assert_eq!(json["data"][0]["review_count"], 0);
    assert_eq!(json["data"][0]["genres"], "Crime, Drama");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_sorts_by_rating_descending(pool: PgPool) {
    let (user, _) = create_user(&pool, "critic", UserRole::Regular).await;
    let low = create_movie(&pool, "Alpha", None).await;
    let high = create_movie(&pool, "Beta", None).await;
    rate(&pool, low.id, user.id, 3).await;
    rate(&pool, high.id, user.id, 9).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/movies?sortBy=rating&order=desc").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["title"], "Beta");
    assert_eq!(json["data"][1]["title"], "Alpha");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_ignores_blank_filters(pool: PgPool) {
    create_movie(&pool, "One", None).await;
    create_movie(&pool, "Two", None).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/movies?search=&genre=&year=").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movie_detail_includes_credits_and_rounded_rating(pool: PgPool) {
    let movie = create_movie(&pool, "Arrival", NaiveDate::from_ymd_opt(2016, 11, 11)).await;
    let amy = PersonRepo::create(&pool, &person("Amy", "Adams", None)).await.unwrap();
    let denis = PersonRepo::create(&pool, &person("Denis", "Villeneuve", None))
        .await
        .unwrap();
    CreditRepo::add_credit(&pool, CrewKind::Actor, movie.id, amy.id, Some("Louise Banks"))
        .await
        .unwrap();
    CreditRepo::add_credit(&pool, CrewKind::Director, movie.id, denis.id, None)
        .await
        .unwrap();

    for (name, rating) in [("a", 7), ("b", 8), ("c", 8)] {
        let (user, _) = create_user(&pool, name, UserRole::Regular).await;
        rate(&pool, movie.id, user.id, rating).await;
    }
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/movies/{}", movie.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["title"], "Arrival");
    assert_eq!(data["avg_rating"], 7.7);
    assert_eq!(data["review_count"], 3);
    assert_eq!(data["cast"][0]["first_name"], "Amy");
    assert_eq!(data["cast"][0]["character_name"], "Louise Banks");
    assert_eq!(data["directors"][0]["last_name"], "Villeneuve");
    assert_eq!(data["writers"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_movie_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/movies/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_popular_limit_is_clamped(pool: PgPool) {
    let (user, _) = create_user(&pool, "fan", UserRole::Regular).await;
    for title in ["First", "Second", "Third"] {
        let movie = create_movie(&pool, title, None).await;
        rate(&pool, movie.id, user.id, 6).await;
    }
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/movies/popular?limit=0").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);

    let response = get(app, "/api/movies/popular").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_featured_only_includes_reviewed_current_year(pool: PgPool) {
    let today = Utc::now().date_naive();
    let (user, _) = create_user(&pool, "viewer", UserRole::Regular).await;
    let current = create_movie(&pool, "Current", Some(today)).await;
    let unreviewed = create_movie(&pool, "Unreviewed", Some(today)).await;
    let old = create_movie(&pool, "Old", NaiveDate::from_ymd_opt(today.year() - 3, 6, 1)).await;
    rate(&pool, current.id, user.id, 8).await;
    rate(&pool, old.id, user.id, 10).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/movies/featured").await;
    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Current"]);
    assert!(!titles.contains(&unreviewed.title.as_str()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_releases_cover_last_month(pool: PgPool) {
    let today = Utc::now().date_naive();
    create_movie(&pool, "Fresh", Some(today - Duration::days(3))).await;
    create_movie(&pool, "Stale", Some(today - Duration::days(90))).await;
    create_movie(&pool, "Upcoming", Some(today + Duration::days(30))).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/movies/new").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "Fresh");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_movies_by_year(pool: PgPool) {
    create_movie(&pool, "Matrix", NaiveDate::from_ymd_opt(1999, 3, 31)).await;
    create_movie(&pool, "Memento", NaiveDate::from_ymd_opt(2000, 9, 5)).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/movies/year/1999").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "Matrix");
}

// ---------------------------------------------------------------------------
// People and genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_born_today(pool: PgPool) {
    let today = Utc::now().date_naive();
    // 1980 is a leap year, so every month/day exists.
    let birthday = NaiveDate::from_ymd_opt(1980, today.month(), today.day());
    PersonRepo::create(&pool, &person("Birthday", "Person", birthday))
        .await
        .unwrap();
    PersonRepo::create(&pool, &person("No", "Birthday", None))
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/people/borntoday").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["first_name"], "Birthday");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_detail_and_movies(pool: PgPool) {
    let movie = create_movie(&pool, "Lady Bird", NaiveDate::from_ymd_opt(2017, 11, 3)).await;
    let greta = PersonRepo::create(&pool, &person("Greta", "Gerwig", None))
        .await
        .unwrap();
    CreditRepo::add_credit(&pool, CrewKind::Writer, movie.id, greta.id, None)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = get(app.clone(), &format!("/api/people/{}", greta.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["last_name"], "Gerwig");

    let response = get(app.clone(), &format!("/api/people/{}/movies", greta.id)).await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "Lady Bird");
    assert_eq!(json["data"][0]["credit"], "writer");

    let response = get(app, "/api/people/999999/movies").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_genres_listed_by_name(pool: PgPool) {
    GenreRepo::create(&pool, "Western").await.unwrap();
    GenreRepo::create(&pool, "Animation").await.unwrap();
    let app = common::build_test_app(pool);

    let response = get(app, "/api/genres").await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    assert_eq!(json["data"][0]["name"], "Animation");
    assert_eq!(json["data"][1]["name"], "Western");
}

// ---------------------------------------------------------------------------
// Awards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_awards_for_movie_combine_sources(pool: PgPool) {
    let movie = create_movie(&pool, "Parasite", NaiveDate::from_ymd_opt(2019, 5, 30)).await;
    let bong = PersonRepo::create(&pool, &person("Bong", "Joon-ho", None))
        .await
        .unwrap();
    let palme = AwardRepo::create(
        &pool,
        &CreateAward {
            name: "Palme d'Or".into(),
            year: 2019,
        },
    )
    .await
    .unwrap();
    let oscars = AwardRepo::create(
        &pool,
        &CreateAward {
            name: "Academy Awards".into(),
            year: 2020,
        },
    )
    .await
    .unwrap();
    AwardRepo::link_movie(
        &pool,
        &CreateMovieAward {
            award_id: palme.id,
            movie_id: movie.id,
            category: "Best Film".into(),
        },
    )
    .await
    .unwrap();
    AwardRepo::link_person(
        &pool,
        CrewKind::Director,
        oscars.id,
        movie.id,
        bong.id,
        "Best Director",
    )
    .await
    .unwrap();
    let app = common::build_test_app(pool);

    let response = get(app.clone(), &format!("/api/awards/movie/{}", movie.id)).await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    for entry in json["data"].as_array().unwrap() {
        let keys: Vec<&str> = entry.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["award"]);
    }
    assert_eq!(json["data"][0]["award"], "Best Film - Palme d'Or (2019)");
    assert_eq!(
        json["data"][1]["award"],
        "Bong Joon-ho won Academy Awards (2020) for Best Director for this movie."
    );

    let response = get(app.clone(), &format!("/api/awards/person/{}", bong.id)).await;
    let json = body_json(response).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["award"], "Best Director - Academy Awards (2020)");

    let response = get(app, "/api/awards/movie/999999").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 0);
}
