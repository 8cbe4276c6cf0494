use crate::errors::FieldError;
use crate::models::{ImageUpload, MealSubmission};

/// Raw share-form fields as collected from the multipart request, prior to
/// validation. `None` means the field never arrived.
#[derive(Debug, Default)]
pub struct RawSubmission {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Validates a raw submission into a candidate record.
///
/// Checks run in fixed priority order and stop at the first violation:
/// title, summary, instructions, name, email, image. A text field is invalid
/// when missing or whitespace-only; the email must additionally contain `@`;
/// the image must be present with non-zero bytes. No side effects occur on
/// failure. On success the raw values are repackaged untouched, with `name`
/// mapped to `creator` and `email` to `creator_email`.
pub fn validate(raw: RawSubmission) -> Result<MealSubmission, FieldError> {
    let title = require_text(raw.title, "title", "Please enter a valid title.")?;
    let summary = require_text(raw.summary, "summary", "Please provide a short summary.")?;
    let instructions = require_text(
        raw.instructions,
        "instructions",
        "Please add cooking instructions.",
    )?;
    let creator = require_text(raw.name, "name", "Please enter your name.")?;
    let creator_email = require_text(raw.email, "email", "Please enter a valid email address.")?;
    if !creator_email.contains('@') {
        return Err(FieldError {
            field: "email",
            message: "Please enter a valid email address.",
        });
    }
    let image = match raw.image {
        Some(image) if !image.bytes.is_empty() => image,
        _ => {
            return Err(FieldError {
                field: "image",
                message: "Please upload an image.",
            });
        }
    };

    Ok(MealSubmission {
        title,
        summary,
        instructions,
        creator,
        creator_email,
        image,
    })
}

fn require_text(
    value: Option<String>,
    field: &'static str,
    message: &'static str,
) -> Result<String, FieldError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FieldError { field, message }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawSubmission {
        RawSubmission {
            title: Some("Spicy Taco!".into()),
            summary: Some("A crunchy classic".into()),
            instructions: Some("Fry the shell, fill it, eat it.".into()),
            name: Some("Maya".into()),
            email: Some("maya@example.com".into()),
            image: Some(ImageUpload {
                file_name: Some("taco.jpg".into()),
                bytes: vec![1, 2, 3],
            }),
        }
    }

    #[test]
    fn title_wins_when_title_and_email_are_both_invalid() {
        let mut raw = valid_raw();
        raw.title = Some("   ".into());
        raw.email = Some("not-an-email".into());
        let err = validate(raw).unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn whitespace_only_title_is_rejected_like_a_missing_one() {
        let mut missing = valid_raw();
        missing.title = None;
        let mut blank = valid_raw();
        blank.title = Some("  \t ".into());
        assert_eq!(validate(missing).unwrap_err(), validate(blank).unwrap_err());
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut raw = valid_raw();
        raw.email = Some("not-an-email".into());
        let err = validate(raw).unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn empty_image_payload_is_rejected() {
        let mut raw = valid_raw();
        raw.image = Some(ImageUpload {
            file_name: Some("taco.jpg".into()),
            bytes: Vec::new(),
        });
        let err = validate(raw).unwrap_err();
        assert_eq!(err.field, "image");
    }

    #[test]
    fn missing_image_is_rejected() {
        let mut raw = valid_raw();
        raw.image = None;
        assert_eq!(validate(raw).unwrap_err().field, "image");
    }

    #[test]
    fn valid_submission_maps_form_names_to_record_names() {
        let submission = validate(valid_raw()).unwrap();
        assert_eq!(submission.creator, "Maya");
        assert_eq!(submission.creator_email, "maya@example.com");
        // Text fields pass through untouched.
        assert_eq!(submission.title, "Spicy Taco!");
    }
}
