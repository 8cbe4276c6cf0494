use crate::{
    domain::{FileStorage, MealRepository},
    errors::{RepoError, SaveMealError},
    models::{MealRecord, MealSubmission, NewMeal},
};
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Orchestrates the share pipeline: slug derivation, instruction
/// sanitization, image persistence, then row registration, in that order.
/// The row insert is the single visibility-publishing step; it never runs
/// unless the image write fully succeeded.
#[derive(Clone)]
pub struct MealService {
    repo: Arc<dyn MealRepository>,
    storage: Arc<dyn FileStorage>,
}

/// Outcome of a successful save.
#[derive(Debug, Clone, Serialize)]
pub struct SavedMeal {
    pub slug: String,
    /// Public-relative image path (`/images/...`).
    pub image: String,
}

impl MealService {
    pub fn new(repo: Arc<dyn MealRepository>, storage: Arc<dyn FileStorage>) -> Self {
        Self { repo, storage }
    }

    /// Persists a validated submission.
    ///
    /// The instructions are sanitized here because they are later rendered
    /// verbatim as markup; this is the XSS boundary, not optional cleanup.
    /// A storage failure aborts before any database mutation. An insert
    /// failure after a completed image write leaves the file on disk; that
    /// orphan is logged rather than cleaned up.
    pub async fn save(&self, submission: MealSubmission) -> Result<SavedMeal, SaveMealError> {
        let slug = slugify_title(&submission.title);
        let instructions = ammonia::clean(&submission.instructions);
        let extension = image_extension(submission.image.file_name.as_deref());
        let file_name = unique_image_filename(&slug, &extension);

        self.storage
            .store(&file_name, &submission.image.bytes)
            .await
            .map_err(SaveMealError::Storage)?;

        // Stored path is relative to the web root, never to the media root.
        let image = format!("/images/{file_name}");
        let meal = NewMeal {
            title: submission.title,
            summary: submission.summary,
            instructions,
            creator: submission.creator,
            creator_email: submission.creator_email,
            image: image.clone(),
            slug: slug.clone(),
        };

        if let Err(e) = self.repo.insert(&meal).await {
            tracing::warn!(
                %file_name,
                "meal row insert failed after image write; file left on disk"
            );
            return Err(SaveMealError::Repository(e));
        }

        tracing::info!(%slug, "Meal saved");
        Ok(SavedMeal { slug, image })
    }

    /// All meals in insertion order. Pure read; may run concurrently with
    /// saves without coordination.
    pub async fn list_all(&self) -> Result<Vec<MealRecord>, RepoError> {
        self.repo.list_all().await
    }

    /// Exact-match slug lookup; Ok(None) means the meal does not exist.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<MealRecord>, RepoError> {
        self.repo.find_by_slug(slug).await
    }
}

/// Derives the URL-safe lookup key from a title: lowercase, transliterated,
/// non-alphanumeric runs collapsed to single hyphens, ends trimmed.
pub fn slugify_title(title: &str) -> String {
    slug::slugify(title)
}

/// Extension is the substring after the last `.` of the original filename,
/// lowercased; `bin` when no filename was sent.
fn image_extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| name.split('.').next_back().map(|ext| ext.to_lowercase()))
        .unwrap_or_else(|| "bin".to_string())
}

/// `<slug>-<epoch millis>-<8 hex>.<ext>`. The random suffix closes the
/// collision window between two same-millisecond saves of the same title.
fn unique_image_filename(slug: &str, extension: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let random = Uuid::new_v4().simple().to_string();
    format!("{slug}-{millis}-{}.{extension}", &random[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_strips_punctuation() {
        assert_eq!(slugify_title("Spicy Taco!"), "spicy-taco");
    }

    #[test]
    fn slug_transliterates_diacritics() {
        assert_eq!(slugify_title("Crème Brûlée"), "creme-brulee");
    }

    #[test]
    fn slug_collapses_separator_runs_and_trims_ends() {
        assert_eq!(slugify_title("  -- Juicy,   Burger --  "), "juicy-burger");
    }

    #[test]
    fn extension_comes_from_last_dot_segment() {
        assert_eq!(image_extension(Some("photo.JPG")), "jpg");
        assert_eq!(image_extension(Some("archive.tar.gz")), "gz");
        assert_eq!(image_extension(None), "bin");
    }

    #[test]
    fn image_filenames_embed_the_slug_and_never_repeat() {
        let a = unique_image_filename("spicy-taco", "jpg");
        let b = unique_image_filename("spicy-taco", "jpg");
        assert!(a.starts_with("spicy-taco-"));
        assert!(a.ends_with(".jpg"));
        assert_ne!(a, b);
    }

    #[test]
    fn sanitizer_keeps_formatting_but_drops_scripts() {
        let cleaned = ammonia::clean("Stir <b>well</b>.<script>alert(1)</script>");
        assert!(cleaned.contains("<b>well</b>"));
        assert!(!cleaned.contains("<script"));
        assert!(!cleaned.contains("alert(1)"));
    }
}
