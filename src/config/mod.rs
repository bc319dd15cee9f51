//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHOICE_COMPASS` prefix and nested values use double underscores as separators.
//! Every section has defaults, so the service starts with no environment at all.
//!
//! # Example
//!
//! ```no_run
//! use choice_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Running {} iterations", config.analysis.iterations);
//! ```

mod analysis;
mod error;
mod features;
mod server;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{CorsPolicy, Environment, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Simulation settings (iterations, perturbation, seed)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHOICE_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CHOICE_COMPASS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CHOICE_COMPASS__ANALYSIS__SEED=42` -> `analysis.seed = 42`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHOICE_COMPASS")
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
        self.server.validate()?;
        self.analysis.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CHOICE_COMPASS__SERVER__PORT",
        "CHOICE_COMPASS__SERVER__ENVIRONMENT",
        "CHOICE_COMPASS__ANALYSIS__ITERATIONS",
        "CHOICE_COMPASS__ANALYSIS__SEED",
        "CHOICE_COMPASS__FEATURES__VERBOSE_ERRORS",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.analysis.iterations, 1_000);
        assert!(config.features.enable_tracing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHOICE_COMPASS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CHOICE_COMPASS__SERVER__PORT", "3000");
        env::set_var("CHOICE_COMPASS__ANALYSIS__ITERATIONS", "250");
        env::set_var("CHOICE_COMPASS__ANALYSIS__SEED", "7");
        env::set_var("CHOICE_COMPASS__FEATURES__VERBOSE_ERRORS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.analysis.iterations, 250);
        assert_eq!(config.analysis.seed, Some(7));
        assert!(config.features.verbose_errors);
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let mut config = AppConfig::default();
        config.analysis.iterations = 0;
        assert!(config.validate().is_err());
    }
}
