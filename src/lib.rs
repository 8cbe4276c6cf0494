//! Community meal sharing: browse submitted meals, look one up by slug, and
//! share a new one through a validated multipart form that stores the image
//! on disk and the record in SQLite.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod meals;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod storage;
pub mod validation;

use meals::MealService;

/// AppState holds shared resources for the web server.
#[derive(Clone)]
pub struct AppState {
    pub meals: MealService,
}
