//! Configuration management for the FitCalc CLI
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FITCALC__)

use config::ConfigError;
use fitcalc_shared::{UnitSystem, STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the last submitted form is kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON store file
    pub path: PathBuf,
    /// Key the form is saved under inside the store
    pub key: String,
}

/// Output defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Unit system assumed when `calc` is given neither `--metric` nor `--imperial`
    pub default_unit_system: UnitSystem,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: PathBuf::from(".fitcalc/store.json"),
                key: STORAGE_KEY.to_string(),
            },
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FITCALC__ prefix
    pub fn load() -> Result<Self, ConfigError> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        Self::load_with_file(&format!("config/{}.toml", env))
    }

    /// Same as [`AppConfig::load`] with an explicit config file (optional on disk)
    pub fn load_with_file(config_file: &str) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(config_file).required(false))
            // Override with environment variables (FITCALC__ prefix)
            // e.g., FITCALC__STORAGE__PATH=/tmp/store.json sets storage.path
            .add_source(config::Environment::with_prefix("FITCALC").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.key, "fitcalc_userdata");
        assert_eq!(config.storage.path, PathBuf::from(".fitcalc/store.json"));
        assert_eq!(config.display.default_unit_system, UnitSystem::Metric);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_with_file("config/does-not-exist.toml").unwrap();
        assert_eq!(config.storage.key, STORAGE_KEY);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[storage]\npath = \"/tmp/fitcalc-test.json\"\n\n[display]\ndefault_unit_system = \"imperial\""
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = AppConfig::load_with_file(&path).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("/tmp/fitcalc-test.json"));
        // keys the file leaves out keep their defaults
        assert_eq!(config.storage.key, STORAGE_KEY);
        assert_eq!(config.display.default_unit_system, UnitSystem::Imperial);
    }
}
