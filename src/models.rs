use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A meal row as stored in the `meals` table.
#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct MealRecord {
    pub id: i64,
    pub title: String,
    pub summary: String,
    /// Sanitized markup; safe to render verbatim.
    pub instructions: String,
    pub creator: String,
    pub creator_email: String,
    /// Public-relative path, e.g. `/images/spicy-taco-1717098400000-d4f1a2b3.jpg`.
    pub image: String,
    pub slug: String,
}

/// An uploaded image as received from the share form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

/// A validated submission, ready for the save pipeline. Built only by
/// `validation::validate`; consumed once by `MealService::save`.
#[derive(Debug, Clone)]
pub struct MealSubmission {
    pub title: String,
    pub summary: String,
    pub instructions: String,
    pub creator: String,
    pub creator_email: String,
    pub image: ImageUpload,
}

/// A fully prepared meal row, ready for insertion (`id` is store-assigned).
#[derive(Debug, Clone)]
pub struct NewMeal {
    pub title: String,
    pub summary: String,
    pub instructions: String,
    pub creator: String,
    pub creator_email: String,
    pub image: String,
    pub slug: String,
}
