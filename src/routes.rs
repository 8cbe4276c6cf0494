use crate::{
    AppState,
    handlers, // Import handlers module
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::get,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Creates the axum router and associates routes with handlers. Uploaded
/// images are served straight off disk from `image_dir`.
pub fn create_router(state: Arc<AppState>, image_dir: &Path) -> Router {
    Router::new()
        .route("/meals", get(handlers::list_meals).post(handlers::share_meal))
        .route("/meals/{slug}", get(handlers::get_meal))
        .nest_service("/images", ServeDir::new(image_dir))
        // Middleware Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(state) // Pass the application state
}
