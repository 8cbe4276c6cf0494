use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error; // Use thiserror for cleaner error definitions

// --- Domain/Infrastructure Errors ---

/// A field-scoped validation rejection. Checks run in fixed priority order
/// (title, summary, instructions, name, email, image) and short-circuit, so
/// `field` always names the first violation found.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("invalid field '{field}': {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("Database backend error: {0}")]
    BackendError(#[from] anyhow::Error), // Wrap anyhow errors from the store layer
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Image write failed: {0}")]
    WriteFailed(String), // Pass specific reason

    #[error("Image write timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Storage backend error: {0}")]
    BackendError(#[from] anyhow::Error),
}

/// Errors out of the save pipeline. A `Storage` failure means the database
/// was never touched; a `Repository` failure means the image file was
/// already written.
#[derive(Error, Debug)]
pub enum SaveMealError {
    #[error("Could not save meal image")]
    Storage(#[source] StorageError),

    #[error("Could not save meal record")]
    Repository(#[source] RepoError),
}

// --- Web Layer Error ---

#[derive(Error, Debug)]
pub enum AppError {
    // Input validation / request parsing errors
    #[error("{0}")]
    Validation(FieldError),
    #[error("Error processing multipart form data: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    // Domain/Service level errors (mapped from RepoError/StorageError)
    #[error("No meal found for slug '{0}'")]
    MealNotFound(String),
    #[error("Could not perform file storage operation")]
    Storage(#[source] StorageError),
    #[error("Could not read or write meal data")]
    Repository(#[source] RepoError),
}

// --- Conversions from Domain Errors to AppError ---

impl From<FieldError> for AppError {
    fn from(err: FieldError) -> Self {
        AppError::Validation(err)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Repository(err)
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err)
    }
}

impl From<SaveMealError> for AppError {
    fn from(err: SaveMealError) -> Self {
        match err {
            SaveMealError::Storage(e) => AppError::Storage(e),
            SaveMealError::Repository(e) => AppError::Repository(e),
        }
    }
}

// --- Axum Response Implementation ---

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // 4xx Client Errors
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({ "field": err.field, "message": err.message }),
            ),
            AppError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": format!("Invalid multipart form data: {e}") }),
            ),
            AppError::MealNotFound(slug) => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": format!("No meal found for slug '{slug}'") }),
            ),

            // 5xx Server Errors: log the source, respond with a generic message
            AppError::Storage(e) => {
                tracing::error!(error.source = ?e, "Storage error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "Saving image failed" }),
                )
            }
            AppError::Repository(e) => {
                tracing::error!(error.source = ?e, "Repository error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "Database operation failed" }),
                )
            }
        };

        tracing::error!(error.detail = %self, "Responding with error");

        (status, Json(body)).into_response()
    }
}
