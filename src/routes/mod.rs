//! HTTP route handlers for the trivia API.
//!
//! - `categories`: category listing, creation and per-category questions
//! - `health`: liveness, readiness and version endpoints
//! - `questions`: paginated listing, creation and deletion
//! - `quizzes`: random unseen question draws
//! - `search`: substring search over question text

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod search;

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::state::AppState;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PATCH, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/version", get(health::version))
        .route("/categories", get(categories::list_categories).post(categories::create_category))
        .route("/categories/{id}/questions", get(categories::category_questions))
        .route("/questions", get(questions::list_questions).post(questions::create_question))
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/search", post(search::search_questions))
        .route("/quizzes", post(quizzes::next_question))
        .fallback(|| async { AppError::NotFound("Not found".to_string()) })
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
