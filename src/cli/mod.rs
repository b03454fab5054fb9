//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod reconcile;
pub mod report;
pub mod scan;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use crate::adapter::file::load_match_table;
use crate::app::Config;
use crate::domain::LookupIndex;
use crate::error::Result;

/// Default configuration file, used when present and no `--config` is given.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Arbmatch - match prediction market positions across venues.
#[derive(Parser, Debug)]
#[command(name = "arbmatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit a JSON document instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Match saved position snapshots offline
    Reconcile(ReconcileArgs),

    /// Fetch live positions from both venues and match them
    Scan(ScanArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `arbmatch check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and match table
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for the `reconcile` subcommand.
#[derive(Parser, Debug)]
pub struct ReconcileArgs {
    /// Polymarket positions (JSON array from the data API)
    #[arg(long)]
    pub poly: PathBuf,

    /// Opinion positions (JSON array or API response body)
    #[arg(long)]
    pub opinion: PathBuf,

    #[command(flatten)]
    pub matching: MatchingArgs,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Polymarket wallet address
    #[arg(long)]
    pub poly_wallet: Option<String>,

    /// Opinion wallet address
    #[arg(long)]
    pub opinion_wallet: Option<String>,

    #[command(flatten)]
    pub matching: MatchingArgs,
}

/// Options shared by the commands that run the matcher.
#[derive(Parser, Debug)]
pub struct MatchingArgs {
    /// Path to configuration file [default: config.toml when present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the curated match table path
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Override the fuzzy similarity threshold
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Only use the curated table
    #[arg(long)]
    pub no_fuzzy: bool,

    /// Evaluate holding periods as of this RFC 3339 time instead of now
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

impl MatchingArgs {
    /// Load configuration, apply command-line overrides, and start logging.
    #[allow(clippy::result_large_err)]
    pub fn load_config(&self, log_level: Option<&str>) -> Result<Config> {
        let mut config = load_config(self.config.as_deref())?;

        if let Some(table) = &self.table {
            config.match_table = table.clone();
        }
        if let Some(threshold) = self.threshold {
            config.matching.fuzzy_threshold = threshold;
        }
        if self.no_fuzzy {
            config.matching.fuzzy_fallback = false;
        }
        if let Some(level) = log_level {
            config.logging.level = level.to_string();
        }
        config.validate()?;

        config.logging.init();
        Ok(config)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

/// Load the given config file, or `config.toml` if it exists, or defaults.
#[allow(clippy::result_large_err)]
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load(DEFAULT_CONFIG),
        None => Ok(Config::default()),
    }
}

/// Load the curated table named by the config and index it.
#[allow(clippy::result_large_err)]
pub fn load_index(config: &Config) -> Result<LookupIndex> {
    let table = load_match_table(&config.match_table)?;
    Ok(LookupIndex::build(&table))
}
