use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_max_candidates() -> usize { 1000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_location_weight")]
    pub location: u32,
    #[serde(default = "default_availability_weight")]
    pub availability: u32,
    #[serde(default = "default_active_weight")]
    pub active: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            location: default_location_weight(),
            availability: default_availability_weight(),
            active: default_active_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(cfg: &WeightsConfig) -> Self {
        Self {
            location: cfg.location,
            availability: cfg.availability,
            active: cfg.active,
        }
    }
}

fn default_location_weight() -> u32 { 40 }
fn default_availability_weight() -> u32 { 40 }
fn default_active_weight() -> u32 { 10 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ASATIZAH__)
    /// 5. Plain HOST / PORT, as set by most hosting platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ASATIZAH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        apply_platform_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("ASATIZAH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply HOST and PORT from the environment on top of the layered config
fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(host) = env::var("HOST") {
        builder = builder.set_override("server.host", host)?;
    }
    if let Ok(port) = env::var("PORT") {
        let port: i64 = port
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT is not a number: {}", port)))?;
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.location, 40);
        assert_eq!(weights.availability, 40);
        assert_eq!(weights.active, 10);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8081

            [scoring.weights]
            location = 55
        "#;

        let settings: Settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8081);
        assert_eq!(settings.server.workers, None);
        assert_eq!(settings.scoring.weights.location, 55);
        assert_eq!(settings.scoring.weights.availability, 40);
        assert_eq!(settings.matching.max_candidates, 1000);
        assert_eq!(settings.logging.format, "json");
    }
}
