use serde::{Deserialize, Serialize};

use crate::deserializers::{deserialize_optional_i64, CategorySelection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
    pub rating: Option<i64>,
}

/// A validated question ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
    pub rating: Option<i64>,
}

// Request bodies. Every field is optional so that missing input is reported
// as a 400 envelope by the handler instead of a serde rejection.

#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub rating: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub new_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default)]
    pub id: Option<CategorySelection>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

// Response bodies

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub question: Question,
}

#[derive(Debug, Serialize)]
pub struct CreatedCategoryResponse {
    pub success: bool,
    pub created: i64,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
