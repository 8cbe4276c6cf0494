use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid environment variable format for {0}: {1}")]
    InvalidVar(String, String),
    #[error(transparent)]
    DotEnvError(#[from] dotenvy::Error),
}

#[derive(Clone, Debug)] // Clone needed if passed around, Debug for logging
pub struct Config {
    pub bind_address: SocketAddr,
    /// SQLite database file, created on first run.
    pub database_path: PathBuf,
    /// Web root on disk; uploaded images live under `<media_root>/images`
    /// and are served at `/images/...`.
    pub media_root: PathBuf,
    /// Upper bound for a single image write; a stalled disk fails the
    /// submission instead of blocking it.
    pub image_write_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors, relies on env vars otherwise)
        dotenvy::dotenv().ok();

        let bind_address_str =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = SocketAddr::from_str(&bind_address_str)
            .map_err(|e| ConfigError::InvalidVar("BIND_ADDRESS".into(), e.to_string()))?;

        let database_path =
            PathBuf::from(env::var("DATABASE_PATH").unwrap_or_else(|_| "meals.db".to_string()));

        let media_root =
            PathBuf::from(env::var("MEDIA_ROOT").unwrap_or_else(|_| "public".to_string()));

        let image_write_timeout = match env::var("IMAGE_WRITE_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidVar("IMAGE_WRITE_TIMEOUT_SECS".into(), e.to_string())
            })?),
            Err(_) => Duration::from_secs(10),
        };

        Ok(Config {
            bind_address,
            database_path,
            media_root,
            image_write_timeout,
        })
    }

    /// Directory images are written to and served from.
    pub fn image_dir(&self) -> PathBuf {
        self.media_root.join("images")
    }
}
