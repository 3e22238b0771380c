//! Application configuration management.

use std::path::Path;

use serde::Deserialize;

use crate::types::money::Currency;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "BUDGET_TRAINER";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "budget_trainer_core=info,budget_trainer_cli=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Currency used when formatting amounts.
    #[serde(default)]
    pub currency: Currency,
    /// Output format for command results.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How command results are printed. Names are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl TryFrom<String> for OutputFormat {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, lowest precedence first: `config/default`,
    /// `config/{RUN_MODE}`, the optional `extra` file, then
    /// `BUDGET_TRAINER__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load(extra: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
