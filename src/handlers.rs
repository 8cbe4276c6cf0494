use crate::{
    AppState,
    errors::AppError,
    models::ImageUpload,
    validation::{self, RawSubmission},
};
use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

/// Handler for POST /meals: the share form, submitted as multipart data.
pub async fn share_meal(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut raw = RawSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        match field_name.as_str() {
            "title" => raw.title = Some(field.text().await?),
            "summary" => raw.summary = Some(field.text().await?),
            "instructions" => raw.instructions = Some(field.text().await?),
            "name" => raw.name = Some(field.text().await?),
            "email" => raw.email = Some(field.text().await?),
            "image" => {
                let file_name = field.file_name().map(|s| s.to_string());
                let bytes = field.bytes().await?.to_vec();
                raw.image = Some(ImageUpload { file_name, bytes });
            }
            _ => tracing::debug!("Ignoring unknown multipart field: {}", field_name),
        }
    }

    // Validation runs before any side effect; a rejection reaches the client
    // as a field-scoped 422 with nothing written anywhere.
    let submission = validation::validate(raw)?;
    let saved = state.meals.save(submission).await?;

    tracing::info!(slug = %saved.slug, "Meal shared successfully via handler");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Handler for GET /meals: data for the listing page.
pub async fn list_meals(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Listing all meals via handler");
    let meals = state.meals.list_all().await?;
    tracing::debug!("Handler successfully retrieved {} meals", meals.len());
    Ok(Json(meals))
}

/// Handler for GET /meals/{slug}: data for the detail page.
pub async fn get_meal(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(%slug, "Fetching meal details via handler");
    let maybe_meal = state.meals.get_by_slug(&slug).await?;
    match maybe_meal {
        Some(meal) => Ok(Json(meal)),
        None => Err(AppError::MealNotFound(slug)),
    }
}
