use axum::extract::State;

use crate::{
    db::{categories, questions},
    error::{AppError, AppResult, OptionExt},
    extract::{Json, Path, Query},
    pagination::{PageWindow, DEFAULT_PAGE},
    state::AppState,
    types::{
        CreateQuestionRequest, CreatedQuestionResponse, DeletedResponse, NewQuestion, PageQuery,
        QuestionPageResponse,
    },
};

pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<axum::Json<QuestionPageResponse>> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let window = PageWindow::for_page(page, state.config.questions.page_size)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid page: {}", page)))?;

    let total_questions = questions::count_questions(&state.db).await?;
    if total_questions == 0 {
        return Err(AppError::NotFound("No questions available".to_string()));
    }

    let questions = questions::list_questions_page(&state.db, window.offset, window.limit).await?;
    let categories = categories::list_categories(&state.db).await?;

    Ok(axum::Json(QuestionPageResponse {
        success: true,
        questions,
        total_questions,
        categories,
        current_category: None,
    }))
}

pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<axum::Json<DeletedResponse>> {
    if !questions::delete_question(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Question {} does not exist", id)));
    }
    tracing::info!(question_id = id, "Deleted question");
    Ok(axum::Json(DeletedResponse { success: true, deleted: id }))
}

/// Checks that every required field is present and truthy.
pub fn validate_new_question(req: CreateQuestionRequest, require_rating: bool) -> AppResult<NewQuestion> {
    fn text(value: Option<String>, field: &str) -> AppResult<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(AppError::BadRequest(format!("Missing required field '{}'", field))),
        }
    }
    fn number(value: Option<i64>, field: &str) -> AppResult<i64> {
        match value {
            Some(v) if v != 0 => Ok(v),
            _ => Err(AppError::BadRequest(format!("Missing required field '{}'", field))),
        }
    }

    let question = text(req.question, "question")?;
    let answer = text(req.answer, "answer")?;
    let category = number(req.category, "category")?;
    let difficulty = number(req.difficulty, "difficulty")?;
    let rating = if require_rating {
        Some(number(req.rating, "rating")?)
    } else {
        req.rating
    };

    Ok(NewQuestion { question, answer, category, difficulty, rating })
}

pub async fn create_question(
    State(state): State<AppState>,
    Json(req): Json<CreateQuestionRequest>,
) -> AppResult<axum::Json<CreatedQuestionResponse>> {
    let new = validate_new_question(req, state.config.questions.require_rating)?;

    if !categories::category_exists(&state.db, new.category).await? {
        return Err(AppError::BadRequest(format!("Category {} does not exist", new.category)));
    }

    let id = questions::insert_question(&state.db, &new).await?;
    tracing::info!(question_id = id, category = new.category, "Created question");

    let question = questions::get_question(&state.db, id).await?.ok_or_not_found("Question")?;
    Ok(axum::Json(CreatedQuestionResponse { success: true, created: id, question }))
}
