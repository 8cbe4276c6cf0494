use crate::errors::{RepoError, StorageError};
use crate::models::{MealRecord, NewMeal};
use async_trait::async_trait;

/// Trait defining operations for storing and retrieving meal rows.
#[async_trait]
pub trait MealRepository: Send + Sync + 'static {
    // Send+Sync+'static required for Arc<dyn>

    /// Inserts one meal row. Rows are insert-only; no update or delete exists.
    async fn insert(&self, meal: &NewMeal) -> Result<(), RepoError>;

    /// Lists all meals in insertion order.
    /// WARNING: This can be inefficient on large datasets. Consider pagination.
    async fn list_all(&self) -> Result<Vec<MealRecord>, RepoError>;

    /// Looks up a meal by its slug.
    /// Returns Ok(None) if no row matches.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<MealRecord>, RepoError>;
}

/// Trait defining operations for persisting uploaded image bytes.
#[async_trait]
pub trait FileStorage: Send + Sync + 'static {
    /// Writes `bytes` under `file_name`. When this returns Ok the file exists
    /// with complete contents; on Err nothing is visible at the final path.
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<(), StorageError>;
}
