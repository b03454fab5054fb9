//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional and
//! falls back to defaults. The Opinion API key is read from the
//! `OPINION_API_KEY` environment variable, never from the file.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::adapter::http::HttpConfig;
use crate::adapter::opinion::OpinionConfig;
use crate::adapter::polymarket::PolymarketConfig;
use crate::domain::{EconomicsConfig, MatchingConfig};
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the curated match table (JSON).
    #[serde(default = "default_match_table")]
    pub match_table: PathBuf,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub economics: EconomicsConfig,
    #[serde(default)]
    pub polymarket: PolymarketConfig,
    #[serde(default)]
    pub opinion: OpinionConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

fn default_match_table() -> PathBuf {
    PathBuf::from("market_matches.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            match_table: default_match_table(),
            logging: LoggingConfig::default(),
            matching: MatchingConfig::default(),
            economics: EconomicsConfig::default(),
            polymarket: PolymarketConfig::default(),
            opinion: OpinionConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.match_table.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "match_table",
            }
            .into());
        }

        self.logging.validate()?;

        let threshold = self.matching.fuzzy_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "fuzzy_threshold",
                reason: format!("must be in (0, 1], got {threshold}"),
            }
            .into());
        }

        if self.economics.sell_signal_threshold <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "sell_signal_threshold",
                reason: "must be positive".into(),
            }
            .into());
        }

        validate_url("data_api_url", &self.polymarket.data_api_url)?;
        validate_url("api_url", &self.opinion.api_url)?;

        if self.polymarket.activity_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "activity_limit",
                reason: "must be at least 1".into(),
            }
            .into());
        }

        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be positive".into(),
            }
            .into());
        }
        if self.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".into(),
            }
            .into());
        }

        Ok(())
    }
}

#[allow(clippy::result_large_err)]
fn validate_url(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    Url::parse(value).map_err(|err| ConfigError::InvalidValue {
        field,
        reason: err.to_string(),
    })?;
    Ok(())
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if !matches!(self.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected \"pretty\" or \"json\", got \"{}\"", self.format),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber. Logs go to stderr so stdout stays
    /// clean for report output.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
