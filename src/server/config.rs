use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Origin allowed to call the API from a browser. No CORS layer when unset.
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        })
    }
}
