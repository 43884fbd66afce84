#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gameportal_api::config::ServerConfig;
use gameportal_api::router::build_app_router;
use gameportal_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn put_empty(app: Router, uri: &str) -> Response {
    send(app, Method::PUT, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string()), true).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Create a user through the API and return its id.
pub async fn create_user(pool: &PgPool, username: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/users/",
        serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password_hash": "hash",
        }),
    )
    .await;
    body_json(response).await["user_id"].as_i64().unwrap()
}

/// Create a company through the API and return its id.
pub async fn create_company(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/companies/",
        serde_json::json!({"name": name}),
    )
    .await;
    body_json(response).await["company_id"].as_i64().unwrap()
}

/// Create a game owned by `company_id` and return its id.
pub async fn create_game(pool: &PgPool, title: &str, company_id: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/games/",
        serde_json::json!({
            "title": title,
            "description": format!("{title} description"),
            "company_id": company_id,
        }),
    )
    .await;
    body_json(response).await["game_id"].as_i64().unwrap()
}

/// Create a genre and return its id.
pub async fn create_genre(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/genres/",
        serde_json::json!({"name": name}),
    )
    .await;
    body_json(response).await["genre_id"].as_i64().unwrap()
}
