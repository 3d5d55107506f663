//! Typed settings for the content studio.
//!
//! Values come from the process environment (after an optional `.env`
//! file) under the `CONTENT_STUDIO` prefix, with `__` between nesting
//! levels:
//!
//! ```text
//! CONTENT_STUDIO__SERVER__PORT=3001
//! CONTENT_STUDIO__STORAGE__DATA_DIR=/var/lib/content-studio
//! CONTENT_STUDIO__GENERATION__MAX_BULK_DAYS=14
//! ```

mod error;
mod generation;
mod server;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use generation::GenerationConfig;
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

const ENV_PREFIX: &str = "CONTENT_STUDIO";

/// All settings. Missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the prefixed environment.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a value does not fit its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::with_prefix(ENV_PREFIX).separator("__");
        let settings = config::Config::builder().add_source(source).build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Checks every section, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.generation.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "CONTENT_STUDIO__SERVER__PORT",
        "CONTENT_STUDIO__SERVER__ENVIRONMENT",
        "CONTENT_STUDIO__STORAGE__DATA_DIR",
        "CONTENT_STUDIO__GENERATION__MAX_ITEMS_PER_PAIR",
        "CONTENT_STUDIO__GENERATION__MAX_BULK_DAYS",
    ];

    /// Loads with `vars` set, then clears every known variable.
    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap();
        for var in VARS {
            env::remove_var(var);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        for var in VARS {
            env::remove_var(var);
        }
        result
    }

    #[test]
    fn empty_environment_yields_valid_defaults() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.storage.data_dir, PathBuf::from("./data"));
        assert_eq!(config.generation.max_items_per_pair, 5);
        assert_eq!(config.generation.max_bulk_days, 31);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_values_are_read_from_prefixed_variables() {
        let config = load_with(&[
            ("CONTENT_STUDIO__SERVER__PORT", "8088"),
            ("CONTENT_STUDIO__SERVER__ENVIRONMENT", "production"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 8088);
        assert!(config.is_production());
    }

    #[test]
    fn storage_and_generation_sections_are_overridable() {
        let config = load_with(&[
            ("CONTENT_STUDIO__STORAGE__DATA_DIR", "/tmp/studio"),
            ("CONTENT_STUDIO__GENERATION__MAX_BULK_DAYS", "14"),
        ])
        .unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/studio"));
        assert_eq!(config.generation.max_bulk_days, 14);
    }

    #[test]
    fn non_numeric_port_fails_to_load() {
        let result = load_with(&[("CONTENT_STUDIO__SERVER__PORT", "eighty")]);
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn zero_item_limit_fails_validation() {
        let mut config = AppConfig::default();
        config.generation.max_items_per_pair = 0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidItemsPerPair)
        ));
    }
}
