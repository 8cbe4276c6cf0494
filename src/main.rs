use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mealshare::{
    AppState, config::Config, db, meals::MealService, repositories::SqliteMealRepository,
    routes::create_router, storage::LocalImageStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (logging)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "mealshare=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    // --- Store & media root ---
    // The pool is opened here and injected into the repository; there is no
    // process-wide store handle.
    tracing::info!(db = %config.database_path.display(), "Opening SQLite database...");
    let pool = db::connect(&config.database_path).await?;
    db::ensure_schema(&pool).await?;

    let image_dir = config.image_dir();
    tokio::fs::create_dir_all(&image_dir).await.context(format!(
        "Failed to create image directory '{}'",
        image_dir.display()
    ))?;
    tracing::info!(dir = %image_dir.display(), "Image directory ready");

    // --- Application State ---
    let repo = Arc::new(SqliteMealRepository::new(pool.clone()));
    let storage = Arc::new(LocalImageStorage::new(
        image_dir.clone(),
        config.image_write_timeout,
    ));
    let state = Arc::new(AppState {
        meals: MealService::new(repo, storage),
    });

    let app = create_router(state, &image_dir);

    // --- Server Startup ---
    tracing::info!("Server listening on http://{}", config.bind_address);
    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    pool.close().await;
    Ok(())
}
