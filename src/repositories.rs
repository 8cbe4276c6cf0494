use crate::{
    domain::MealRepository,
    errors::RepoError,
    models::{MealRecord, NewMeal},
};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SqliteMealRepository {
    pool: SqlitePool,
}

impl SqliteMealRepository {
    /// Creates a new repository instance over an already-opened pool. The
    /// pool's open/close lifecycle belongs to the caller.
    pub fn new(pool: SqlitePool) -> Self {
        info!("Initializing SqliteMealRepository");
        Self { pool }
    }
}

#[async_trait]
impl MealRepository for SqliteMealRepository {
    /// Inserts a meal row using a parameterized statement. Values are always
    /// bound, never interpolated into the SQL text.
    async fn insert(&self, meal: &NewMeal) -> Result<(), RepoError> {
        sqlx::query(
            "INSERT INTO meals \
             (title, summary, instructions, creator, creator_email, image, slug) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&meal.title)
        .bind(&meal.summary)
        .bind(&meal.instructions)
        .bind(&meal.creator)
        .bind(&meal.creator_email)
        .bind(&meal.image)
        .bind(&meal.slug)
        .execute(&self.pool)
        .await
        .context(format!("sqlite: failed to insert meal (slug: {})", meal.slug))
        .map_err(RepoError::BackendError)?; // Map anyhow::Error -> RepoError
        Ok(())
    }

    /// Retrieves every meal row, oldest first.
    async fn list_all(&self) -> Result<Vec<MealRecord>, RepoError> {
        tracing::debug!("sqlite: selecting all meals");
        let meals = sqlx::query_as::<_, MealRecord>(
            "SELECT id, title, summary, instructions, creator, creator_email, image, slug \
             FROM meals ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("sqlite: failed to list meals")
        .map_err(RepoError::BackendError)?;

        tracing::debug!(count = meals.len(), "sqlite: listed meals");
        Ok(meals)
    }

    /// Exact-match slug lookup. A missing row is not an error.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<MealRecord>, RepoError> {
        let meal = sqlx::query_as::<_, MealRecord>(
            "SELECT id, title, summary, instructions, creator, creator_email, image, slug \
             FROM meals WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .context(format!("sqlite: failed to look up meal (slug: {slug})"))
        .map_err(RepoError::BackendError)?;

        Ok(meal)
    }
}
