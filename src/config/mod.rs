//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. The service reads the flat variable names
//! it documents (`DATABASE_URL`, `HOST`, `PORT`, ...); loading never fails
//! on a missing variable, and `validate()` reports what is wrong before the
//! server starts so a misconfigured deployment dies fast with a useful
//! message.
//!
//! # Example
//!
//! ```no_run
//! use pollcast::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}:{}", config.server.host, config.server.port);
//! ```

mod database;
mod error;
mod server;
mod upstream;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use upstream::UpstreamConfig;

use serde::Deserialize;
use std::env;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, log filter)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Presentation-creation service configuration
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `DATABASE_URL`, `HOST`, `PORT`, `APP_ENVIRONMENT`,
    ///    `RUST_LOG` and `PRESENTATION_API_URL`
    /// 3. Deserializes into typed configuration structs, applying defaults
    ///    for anything unset
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its expected
    /// type. A missing `DATABASE_URL` is reported by [`Self::validate`],
    /// not here.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("server.host", env::var("HOST").ok())?
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("server.environment", env::var("APP_ENVIRONMENT").ok())?
            .set_override_option("server.log_level", env::var("RUST_LOG").ok())?
            .set_override_option("upstream.base_url", env::var("PRESENTATION_API_URL").ok())?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.upstream.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
