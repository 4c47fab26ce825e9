use axum::extract::State;

use crate::{
    db::questions,
    error::{AppError, AppResult},
    extract::Json,
    quiz,
    state::AppState,
    types::{QuizRequest, QuizResponse},
};

pub async fn next_question(
    State(state): State<AppState>,
    Json(req): Json<QuizRequest>,
) -> AppResult<axum::Json<QuizResponse>> {
    let selection = req
        .quiz_category
        .as_ref()
        .and_then(|c| c.id)
        .ok_or_else(|| AppError::BadRequest("quiz_category with an id is required".to_string()))?;
    let previous = req.previous_questions.unwrap_or_default();

    let candidates = match selection.category_id() {
        Some(category) => questions::questions_by_category(&state.db, category).await?,
        None => questions::list_all_questions(&state.db).await?,
    };

    let question = {
        let mut rng = state
            .rng
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("quiz rng lock poisoned")))?;
        quiz::draw(candidates, &previous, &mut *rng)
    };

    let kind = req.quiz_category.as_ref().and_then(|c| c.kind.as_deref()).unwrap_or("all");
    match &question {
        Some(q) => tracing::debug!(question_id = q.id, seen = previous.len(), "Quiz draw from {}", kind),
        None => tracing::debug!(seen = previous.len(), "Quiz pool for {} exhausted", kind),
    }

    Ok(axum::Json(QuizResponse { success: true, question }))
}
