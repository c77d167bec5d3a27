//! Configuration management for the fitcalc command line tool
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config file (config/development.toml, config/production.toml,
//!    or the file passed with `--config`)
//! 3. Environment variables (prefix: FC__)

use config::{ConfigError, Source};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: InputDefaults,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON results
    pub pretty: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// JSON log lines instead of compact text
    pub json: bool,
}

/// Fallback choice values used when a calculation input leaves them out
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub climate: Option<String>,
    pub goal: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig { pretty: true },
            logging: LoggingConfig {
                level: "info".to_string(),
                json: false,
            },
            defaults: InputDefaults::default(),
        }
    }
}

impl LoggingConfig {
    /// Default `EnvFilter` directives when `RUST_LOG` is unset
    ///
    /// The engine logs at `warn` or quieter; a quieter CLI level carries over.
    pub fn filter_directives(&self, verbose: bool) -> String {
        let level = if verbose { "debug" } else { self.level.as_str() };
        let engine_level = match level {
            "debug" | "trace" | "error" | "off" => level,
            _ => "warn",
        };
        format!(
            "fitness_calculators_cli={},fitness_calculators_engine={}",
            level, engine_level
        )
    }
}

impl InputDefaults {
    /// Configured `(input key, value)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("gender", &self.gender),
            ("activity_level", &self.activity_level),
            ("climate", &self.climate),
            ("goal", &self.goal),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FC__ prefix
    pub fn load() -> Result<Self, ConfigError> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);
        Self::build(config::File::with_name(&config_file).required(false))
    }

    /// Load with an explicit config file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    /// Load with TOML text in place of the config file
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::build(config::File::from_str(toml, config::FileFormat::Toml))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(file)
            // Override with environment variables (FC__ prefix)
            // e.g., FC__OUTPUT__PRETTY=false sets output.pretty
            .add_source(config::Environment::with_prefix("FC").separator("__"))
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
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.output.pretty);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.defaults.entries().count(), 0);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [output]
            pretty = false

            [defaults]
            gender = "female"
            climate = "hot"
            "#,
        )
        .unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.defaults.entries().collect::<Vec<_>>(),
            vec![("gender", "female"), ("climate", "hot")]
        );
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        assert!(AppConfig::load_from(Path::new("does/not/exist.toml")).is_err());
    }

    #[rstest]
    #[case("info", false, "fitness_calculators_cli=info,fitness_calculators_engine=warn")]
    #[case("info", true, "fitness_calculators_cli=debug,fitness_calculators_engine=debug")]
    #[case("trace", false, "fitness_calculators_cli=trace,fitness_calculators_engine=trace")]
    #[case("error", false, "fitness_calculators_cli=error,fitness_calculators_engine=error")]
    #[case("off", false, "fitness_calculators_cli=off,fitness_calculators_engine=off")]
    #[case("warn", false, "fitness_calculators_cli=warn,fitness_calculators_engine=warn")]
    fn test_filter_directives(#[case] level: &str, #[case] verbose: bool, #[case] expected: &str) {
        let logging = LoggingConfig {
            level: level.to_string(),
            json: false,
        };
        assert_eq!(logging.filter_directives(verbose), expected);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
