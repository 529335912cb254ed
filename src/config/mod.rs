//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MULTITOPIC_FORUM` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use multitopic_forum::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("{} posts per page", config.forum.posts_per_page);
//! ```

mod error;
mod forum;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use forum::ForumConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Paging, preview and moderation limits
    #[serde(default)]
    pub forum: ForumConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MULTITOPIC_FORUM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MULTITOPIC_FORUM__FORUM__POSTS_PER_PAGE=20` -> `forum.posts_per_page = 20`
    /// - `MULTITOPIC_FORUM__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MULTITOPIC_FORUM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.forum.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
