use sqlx::SqlitePool;

use crate::types::{NewQuestion, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty, rating";

pub async fn count_questions(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions").fetch_one(pool).await
}

/// One page of questions in id order.
pub async fn list_questions_page(pool: &SqlitePool, offset: i64, limit: i64) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM questions ORDER BY id LIMIT ?1 OFFSET ?2"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

pub async fn list_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub async fn get_question(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions WHERE id = ?1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn questions_by_category(pool: &SqlitePool, category: i64) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(&format!(
        "SELECT {COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"
    ))
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match on the question text.
///
/// Folding happens in Rust since SQLite's `lower()` and `LIKE` only fold ASCII.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    let needle = term.to_lowercase();
    let questions = list_all_questions(pool).await?;
    Ok(questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect())
}

pub async fn insert_question(pool: &SqlitePool, new: &NewQuestion) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty, rating) VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .bind(new.rating)
    .execute(pool)
    .await?
    .last_insert_rowid();
    Ok(id)
}

/// Returns `true` if a row was removed.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1").bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
