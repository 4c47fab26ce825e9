//! Schema setup and the query functions behind every endpoint.
//!
//! All functions take an explicit `&SqlitePool`; there is no global session.

pub mod categories;
pub mod questions;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::config::DatabaseConfig;

/// Categories inserted into an empty database when `database.seed_categories` is on.
pub const DEFAULT_CATEGORIES: [&str; 6] = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&cfg.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(10));
    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await?;
    Ok(pool)
}

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    // The category reference is only enforced with foreign keys on
    sqlx::query("PRAGMA foreign_keys=ON;").execute(pool).await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL UNIQUE CHECK (length(trim(type)) > 0)
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL,
            rating INTEGER NULL,
            FOREIGN KEY(category) REFERENCES categories(id) ON DELETE RESTRICT
        )"#,
    )
    .execute(pool)
    .await?;

    let indexes = [
        ("idx_questions_category", "CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)"),
    ];
    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            tracing::warn!("Failed to create index {}: {}", name, e);
        }
    }

    Ok(())
}

/// Inserts [`DEFAULT_CATEGORIES`] if the categories table is empty.
/// Returns the number of rows inserted.
pub async fn seed_categories(pool: &SqlitePool) -> anyhow::Result<usize> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories").fetch_one(pool).await?;
    if existing > 0 {
        tracing::debug!("Categories already present ({}), skipping seed", existing);
        return Ok(0);
    }
    for name in DEFAULT_CATEGORIES {
        categories::create_category(pool, name).await?;
    }
    tracing::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());
    Ok(DEFAULT_CATEGORIES.len())
}
