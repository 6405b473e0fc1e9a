use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationError};
use crate::core::DEFAULT_RESULT_LIMIT;
use crate::models::FitWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Which fleet store implementation to run against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub backend: StoreBackend,
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MatchingSettings {
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    #[serde(default)]
    #[validate(nested)]
    pub weights: WeightsConfig,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            weights: WeightsConfig::default(),
        }
    }
}

fn default_result_limit() -> usize { DEFAULT_RESULT_LIMIT }

/// Fit score weights; each must be finite and non-negative
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeightsConfig {
    #[serde(default = "default_weight")]
    #[validate(custom(function = "validate_weight"))]
    pub payload: f64,
    #[serde(default = "default_weight")]
    #[validate(custom(function = "validate_weight"))]
    pub length: f64,
    #[serde(default = "default_weight")]
    #[validate(custom(function = "validate_weight"))]
    pub width: f64,
    #[serde(default = "default_weight")]
    #[validate(custom(function = "validate_weight"))]
    pub height: f64,
}

fn validate_weight(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("weight_must_be_finite_and_non_negative"))
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            payload: default_weight(),
            length: default_weight(),
            width: default_weight(),
            height: default_weight(),
        }
    }
}

impl From<&WeightsConfig> for FitWeights {
    fn from(config: &WeightsConfig) -> Self {
        FitWeights {
            payload: config.payload,
            length: config.length,
            width: config.width,
            height: config.height,
        }
    }
}

fn default_weight() -> f64 { 1.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FLEET)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FLEET__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FLEET")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        Self::from_config(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FLEET")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(settings)
    }

    /// Deserialize a built config and reject settings the matcher cannot rank with
    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;

        settings
            .matching
            .validate()
            .map_err(|e| ConfigError::Message(format!("Invalid matching settings: {}", e)))?;

        Ok(settings)
    }

    pub fn fit_weights(&self) -> FitWeights {
        FitWeights::from(&self.matching.weights)
    }
}

/// Apply well-known environment variables on top of the layered config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(database_url) = std::env::var("DATABASE_URL") {
        builder = builder.set_override("database.url", database_url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn parse(toml: &str) -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Settings::from_config(config)
    }

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.payload, 1.0);
        assert_eq!(weights.length, 1.0);
        assert_eq!(weights.width, 1.0);
        assert_eq!(weights.height, 1.0);
        assert_eq!(FitWeights::from(&weights), FitWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "full");
    }

    #[test]
    fn test_minimal_config_fills_defaults() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            backend = "memory"
            url = ""
        "#;

        let settings = parse(toml).unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.database.backend, StoreBackend::Memory);
        assert_eq!(settings.matching.result_limit, 3);
        assert_eq!(settings.fit_weights(), FitWeights::default());
    }

    #[test]
    fn test_weights_override() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8000

            [database]
            url = "postgres://localhost/fleet"

            [matching]
            result_limit = 5

            [matching.weights]
            payload = 0.001
        "#;

        let settings = parse(toml).unwrap();

        assert_eq!(settings.database.backend, StoreBackend::Postgres);
        assert_eq!(settings.matching.result_limit, 5);
        assert_eq!(settings.matching.weights.payload, 0.001);
        assert_eq!(settings.matching.weights.length, 1.0);
    }

    #[test]
    fn test_invalid_weights_rejected() {
        for weight in ["-1.0", "nan", "inf"] {
            let toml = format!(
                r#"
                [server]
                host = "127.0.0.1"
                port = 8000

                [database]
                url = ""

                [matching.weights]
                length = {}
            "#,
                weight
            );

            let err = parse(&toml).unwrap_err();
            assert!(err.to_string().contains("length"), "weight {}: {}", weight, err);
        }
    }

    #[test]
    fn test_zero_weight_accepted() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8000

            [database]
            url = ""

            [matching.weights]
            height = 0.0
        "#;

        let settings = parse(toml).unwrap();
        assert_eq!(settings.fit_weights().height, 0.0);
    }
}
