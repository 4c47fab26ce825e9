use sqlx::SqlitePool;

use crate::types::Category;

pub async fn list_categories(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, type AS name
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_category(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>("SELECT id, type AS name FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn category_exists(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM categories WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// Inserts a category and returns its id. A duplicate name surfaces as a
/// unique-violation database error.
pub async fn create_category(pool: &SqlitePool, name: &str) -> sqlx::Result<i64> {
    let id = sqlx::query("INSERT INTO categories (type) VALUES (?1)")
        .bind(name)
        .execute(pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}
