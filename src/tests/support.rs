use std::str::FromStr;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt; // for .collect()
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

use crate::{config::AppConfig, db, routes, state::AppState, types::NewQuestion};

/// A single-connection in-memory database with the schema applied.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap().foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<std::time::Duration>)
        .max_lifetime(None::<std::time::Duration>)
        .connect_with(options)
        .await
        .unwrap();
    db::init_db(&pool).await.unwrap();
    pool
}

pub fn test_config(overrides: &str) -> AppConfig {
    crate::config::from_toml_str(overrides).unwrap()
}

pub async fn setup_app_with(overrides: &str) -> (Router, AppState) {
    let pool = test_pool().await;
    let state = AppState::new(pool, test_config(overrides));
    (routes::router(state.clone()), state)
}

pub async fn setup_app() -> (Router, AppState) {
    setup_app_with("[quiz]\nseed = 7\n").await
}

pub async fn add_category(pool: &SqlitePool, name: &str) -> i64 {
    db::categories::create_category(pool, name).await.unwrap()
}

pub async fn add_question(pool: &SqlitePool, text: &str, category: i64, difficulty: i64) -> i64 {
    let new = NewQuestion {
        question: text.to_string(),
        answer: format!("answer to {text}"),
        category,
        difficulty,
        rating: None,
    };
    db::questions::insert_question(pool, &new).await.unwrap()
}

/// Sends a request through the router and decodes the JSON body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

pub fn ids(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
