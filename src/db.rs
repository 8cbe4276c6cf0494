use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;

/// Schema for the meals table. `id` is store-assigned; `slug` is the
/// human-readable lookup key. Title uniqueness (and therefore slug
/// uniqueness) is assumed, not enforced.
const CREATE_MEALS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS meals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    summary TEXT NOT NULL,
    instructions TEXT NOT NULL,
    creator TEXT NOT NULL,
    creator_email TEXT NOT NULL,
    image TEXT NOT NULL,
    slug TEXT NOT NULL
)";

/// Opens the SQLite database at `path`, creating the file if missing.
pub async fn connect(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context(format!(
            "Failed to open SQLite database at '{}'",
            path.display()
        ))
}

/// Creates the meals table if it does not already exist.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_MEALS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create 'meals' table")?;
    tracing::info!("Table 'meals' created successfully or already existed.");
    Ok(())
}
