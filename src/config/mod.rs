//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FEEDBACK_` prefix and nested values use underscores as separators. The bare
//! `DATABASE_URL` and `SELF_PING_URL` variables are honored as fallbacks for the
//! database connection string and the heartbeat target.
//!
//! # Example
//!
//! ```no_run
//! use feedback_collector::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}:{}", config.server.host, config.server.port);
//! ```

mod database;
mod error;
mod heartbeat;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use heartbeat::HeartbeatConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the feedback collector.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, CORS, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Keep-alive heartbeat configuration
    #[serde(default)]
    pub heartbeat: HeartbeatConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FEEDBACK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to bare `DATABASE_URL` / `SELF_PING_URL` when the
    ///    prefixed variables are absent
    ///
    /// # Environment Variable Format
    ///
    /// - `FEEDBACK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FEEDBACK__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();

        // Bare variables are the lowest-precedence source; the prefixed
        // form overrides them.
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_default("database.url", url)?;
        }
        if let Ok(url) = std::env::var("SELF_PING_URL") {
            builder = builder.set_default("heartbeat.target_url", url)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("FEEDBACK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - URL formats
    /// - Pool size constraints
    /// - Port and timeout ranges
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.heartbeat.validate()?;
        Ok(())
    }
}
