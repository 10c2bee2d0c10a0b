//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the
//! `STARTUP_COMPASS` prefix and `__` (double underscore) as the nesting
//! separator.
//!
//! # Example
//!
//! ```no_run
//! use startup_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod scoring;
mod submission;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use scoring::ScoringConfig;
pub use submission::SubmissionConfig;
pub use telemetry::{init_tracing, init_tracing_json};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Scoring policy (rounding behavior)
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Submission pipeline bounds (write timeout, retries)
    #[serde(default)]
    pub submission: SubmissionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads environment
    /// variables with the `STARTUP_COMPASS` prefix:
    ///
    /// - `STARTUP_COMPASS__SCORING__ROUNDING=average_then_round`
    /// - `STARTUP_COMPASS__SUBMISSION__WRITE_TIMEOUT_MS=5000`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STARTUP_COMPASS")
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
        self.submission.validate()?;
        Ok(())
    }
}
