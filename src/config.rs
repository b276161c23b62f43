/// Configuration management for the image service
///
/// Loads configuration from environment variables with sensible defaults.
/// The upload secret has no default; it must be provided by the environment.
use serde::Deserialize;

use crate::error::AppError;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub upload: UploadConfig,
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UploadConfig {
    pub auth_secret: String,
    pub storage_dir: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Config {
            app: AppConfig {
                host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("APP_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
            },
            upload: UploadConfig {
                auth_secret: std::env::var("UPLOAD_AUTH_SECRET").map_err(|_| {
                    AppError::Config("UPLOAD_AUTH_SECRET must be set".to_string())
                })?,
                storage_dir: std::env::var("UPLOAD_STORAGE_DIR")
                    .unwrap_or_else(|_| "public/pics".to_string()),
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/images".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            },
        })
    }
}
