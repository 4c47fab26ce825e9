use axum::extract::State;

use crate::{
    db::questions,
    error::{AppError, AppResult},
    extract::Json,
    state::AppState,
    types::{QuestionListResponse, SearchRequest},
};

const MAX_TERM_CHARS: usize = 500;

fn sanitize_search_term(raw: Option<&str>) -> AppResult<String> {
    // Drop control characters first so a term made only of them counts as empty
    let filtered: String = raw
        .unwrap_or_default()
        .chars()
        .filter(|ch| !ch.is_control() || ch.is_whitespace())
        .collect();
    let trimmed = filtered.trim();
    if trimmed.is_empty() {
        return Err(AppError::UnprocessableEntity("searchTerm must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_TERM_CHARS {
        return Err(AppError::UnprocessableEntity("searchTerm too long".to_string()));
    }
    Ok(trimmed.to_string())
}

pub async fn search_questions(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> AppResult<axum::Json<QuestionListResponse>> {
    let term = sanitize_search_term(req.search_term.as_deref())?;

    let questions = questions::search_questions(&state.db, &term).await?;
    tracing::debug!(matches = questions.len(), "Search for {:?}", term);
    if questions.is_empty() {
        return Err(AppError::NotFound(format!("No questions match '{}'", term)));
    }

    Ok(axum::Json(QuestionListResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        current_category: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_terms_are_unprocessable() {
        for raw in [None, Some(""), Some("   "), Some("\u{0001}"), Some(" \u{0007}\u{001b} ")] {
            let err = sanitize_search_term(raw).unwrap_err();
            assert!(matches!(err, AppError::UnprocessableEntity(_)));
        }
    }

    #[test]
    fn terms_are_trimmed_and_control_chars_dropped_but_whitespace_kept() {
        assert_eq!(sanitize_search_term(Some("  title \u{0007}")).unwrap(), "title");
        assert_eq!(sanitize_search_term(Some(" peanut butter ")).unwrap(), "peanut butter");
        assert_eq!(sanitize_search_term(Some("peanut\tbutter")).unwrap(), "peanut\tbutter");
    }

    #[test]
    fn overlong_terms_are_rejected() {
        let long = "x".repeat(MAX_TERM_CHARS + 1);
        assert!(sanitize_search_term(Some(&long)).is_err());
    }
}
