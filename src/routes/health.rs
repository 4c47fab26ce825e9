use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

const READY_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

// Health check endpoint
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness check: the pool answers and both trivia tables are queryable
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let check = async {
        sqlx::query("SELECT 1 FROM categories LIMIT 1").fetch_optional(&state.db).await?;
        sqlx::query("SELECT 1 FROM questions LIMIT 1").fetch_optional(&state.db).await?;
        Ok::<_, sqlx::Error>(())
    };
    match tokio::time::timeout(READY_TIMEOUT, check).await {
        Ok(Ok(())) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => {
            tracing::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response()
        }
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

// Version/Build info plus the settings clients page and quiz against
pub async fn version(State(state): State<AppState>) -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "api": {
            "questions_per_page": state.config.questions.page_size,
            "require_rating": state.config.questions.require_rating,
            "seeded_quiz": state.config.quiz.seed.is_some(),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
