use axum::extract::State;

use crate::{
    db::{categories, questions},
    error::{AppError, AppResult, OptionExt},
    extract::{Json, Path},
    state::AppState,
    types::{CategoriesResponse, CreateCategoryRequest, CreatedCategoryResponse, QuestionListResponse},
};

pub async fn list_categories(State(state): State<AppState>) -> AppResult<axum::Json<CategoriesResponse>> {
    let categories = categories::list_categories(&state.db).await?;
    Ok(axum::Json(CategoriesResponse { success: true, categories }))
}

pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> AppResult<axum::Json<CreatedCategoryResponse>> {
    let name = req.new_type.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AppError::BadRequest("new_type must not be empty".to_string()));
    }

    let id = match categories::create_category(&state.db, name).await {
        Ok(id) => id,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(AppError::BadRequest(format!("Category '{}' already exists", name)));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(category_id = id, "Created category {}", name);

    let category = categories::get_category(&state.db, id).await?.ok_or_not_found("Category")?;
    Ok(axum::Json(CreatedCategoryResponse { success: true, created: id, category }))
}

pub async fn category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> AppResult<axum::Json<QuestionListResponse>> {
    if category_id == 0 {
        return Err(AppError::NotFound("Category not found".to_string()));
    }
    let questions = questions::questions_by_category(&state.db, category_id).await?;
    Ok(axum::Json(QuestionListResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        current_category: Some(category_id),
    }))
}
