//! HTTP-level integration tests for the `/stats` and `/views` endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Days, Utc};
use common::{
    body_json, create_company, create_game, create_genre, create_user, get, post_json, put_empty,
};
use gameportal_db::repositories::ReviewRepo;
use sqlx::PgPool;

async fn review(pool: &PgPool, user_id: i64, game_id: i64, rating: i32) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/reviews/user/{user_id}"),
        serde_json::json!({"game_id": game_id, "rating": rating, "review_text": "text"}),
    )
    .await;
    body_json(response).await["review_id"].as_i64().unwrap()
}

async fn progress(pool: &PgPool, user_id: i64, game_id: i64, status: &str, hours: i32) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/progress/user/{user_id}"),
        serde_json::json!({"game_id": game_id, "status": status, "hours_played": hours}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Game rating
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn game_rating_averages_approved_reviews(pool: PgPool) {
    let company_id = create_company(&pool, "Studio").await;
    let game_id = create_game(&pool, "Rated", company_id).await;
    let a = create_user(&pool, "a").await;
    let b = create_user(&pool, "b").await;
    let c = create_user(&pool, "c").await;
    review(&pool, a, game_id, 8).await;
    review(&pool, b, game_id, 5).await;
    let hidden = review(&pool, c, game_id, 1).await;
    ReviewRepo::set_approved(&pool, hidden, false).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/stats/game/{game_id}/rating")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["rating"], 6.5);

    let app = common::build_test_app(pool);
    let game = body_json(get(app, &format!("/games/{game_id}")).await).await;
    assert_eq!(game["average_rating"], 6.5);
    assert_eq!(game["review_count"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn game_rating_without_reviews_returns_404(pool: PgPool) {
    let company_id = create_company(&pool, "Studio").await;
    let game_id = create_game(&pool, "Unrated", company_id).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/stats/game/{game_id}/rating")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get(app, "/stats/game/999999/rating").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Total hours
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn total_hours_sums_progress(pool: PgPool) {
    let company_id = create_company(&pool, "Studio").await;
    let g1 = create_game(&pool, "One", company_id).await;
    let g2 = create_game(&pool, "Two", company_id).await;
    let user_id = create_user(&pool, "grinder").await;
    progress(&pool, user_id, g1, "Playing", 10).await;
    progress(&pool, user_id, g2, "Completed", 32).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/stats/user/{user_id}/total-hours")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["total_hours"], 42);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn total_hours_without_progress_is_zero(pool: PgPool) {
    let user_id = create_user(&pool, "idle").await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/stats/user/{user_id}/total-hours")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["total_hours"], 0);

    let app = common::build_test_app(pool);
    let response = get(app, "/stats/user/999999/total-hours").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["total_hours"], 0);
}

// ---------------------------------------------------------------------------
// Top players
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn top_players_ranked_by_genre_hours(pool: PgPool) {
    let company_id = create_company(&pool, "Studio").await;
    let rpg_game = create_game(&pool, "Saga", company_id).await;
    let other_game = create_game(&pool, "Racer", company_id).await;
    let rpg = create_genre(&pool, "RPG").await;
    let app = common::build_test_app(pool.clone());
    put_empty(app, &format!("/games/{rpg_game}/genres/{rpg}")).await;

    let casual = create_user(&pool, "casual").await;
    let hardcore = create_user(&pool, "hardcore").await;
    progress(&pool, casual, rpg_game, "Playing", 5).await;
    progress(&pool, hardcore, rpg_game, "Completed", 80).await;
    progress(&pool, casual, other_game, "Playing", 500).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/stats/top-players/genre/rpg").await;
    assert_eq!(response.status(), StatusCode::OK);

    let players = body_json(response).await;
    let players = players.as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["username"], "hardcore");
    assert_eq!(players[0]["total_hours"], 80);
    assert_eq!(players[1]["username"], "casual");
    assert_eq!(players[1]["total_hours"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn top_players_for_unknown_genre_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/stats/top-players/genre/Nonexistent").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "No players found for this genre"
    );
}

// ---------------------------------------------------------------------------
// User activity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn inverted_date_range_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/stats/user-activity?start_date=2024-02-01&end_date=2024-01-01",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn activity_outside_range_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/stats/user-activity?start_date=2000-01-01&end_date=2000-01-31",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn activity_counts_reviews_written_today(pool: PgPool) {
    let company_id = create_company(&pool, "Studio").await;
    let game_id = create_game(&pool, "Fresh", company_id).await;
    let user_id = create_user(&pool, "writer").await;
    review(&pool, user_id, game_id, 7).await;

    let today = Utc::now().date_naive();
    let start = today.checked_sub_days(Days::new(1)).unwrap();
    let end = today.checked_add_days(Days::new(1)).unwrap();

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/stats/user-activity?start_date={start}&end_date={end}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();
    let written: i64 = entries
        .iter()
        .filter(|e| e["user_id"] == user_id)
        .map(|e| e["reviews_written"].as_i64().unwrap())
        .sum();
    assert_eq!(written, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_activity_params_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/stats/user-activity?start_date=2024-01-01").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_activity_dates_use_error_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/stats/user-activity?start_date=yesterday&end_date=2024-01-31",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Dashboard views
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn views_on_empty_store_return_empty_lists(pool: PgPool) {
    for uri in ["/views/game-ratings", "/views/user-stats", "/views/popular-games"] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        assert!(body_json(response).await.as_array().unwrap().is_empty());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn views_reflect_progress_and_reviews(pool: PgPool) {
    let company_id = create_company(&pool, "Studio").await;
    let hit = create_game(&pool, "Hit", company_id).await;
    let niche = create_game(&pool, "Niche", company_id).await;
    let a = create_user(&pool, "a").await;
    let b = create_user(&pool, "b").await;
    progress(&pool, a, hit, "Completed", 20).await;
    progress(&pool, b, hit, "Playing", 4).await;
    progress(&pool, a, niche, "Dropped", 1).await;
    review(&pool, a, hit, 9).await;

    let app = common::build_test_app(pool.clone());
    let popular = body_json(get(app, "/views/popular-games").await).await;
    let popular = popular.as_array().unwrap();
    assert_eq!(popular[0]["title"], "Hit");
    assert_eq!(popular[0]["players_count"], 2);
    assert_eq!(popular[0]["average_rating"], 9.0);
    assert!(popular[1]["average_rating"].is_null());

    let app = common::build_test_app(pool.clone());
    let stats = body_json(get(app, "/views/user-stats").await).await;
    let first = &stats.as_array().unwrap()[0];
    assert_eq!(first["username"], "a");
    assert_eq!(first["total_games"], 2);
    assert_eq!(first["completed_games"], 1);
    assert_eq!(first["total_hours"], 21);

    let app = common::build_test_app(pool);
    let ratings = body_json(get(app, "/views/game-ratings").await).await;
    let ratings = ratings.as_array().unwrap();
    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings[0]["title"], "Hit");
    assert_eq!(ratings[0]["review_count"], 1);
}
