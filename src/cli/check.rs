//! `check config`: validate configuration and the curated match table.

use std::path::Path;

use serde_json::json;

use crate::adapter::file::load_match_table;
use crate::adapter::opinion::{OpinionConfig, API_KEY_ENV};
use crate::app::Config;
use crate::cli::output;
use crate::domain::LookupIndex;
use crate::error::Result;

/// Validate configuration file without fetching anything.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::header();
    output::section(&format!("Checking configuration: {}", path.display()));

    let config = Config::load(path)?;
    output::success("Configuration file is valid");

    let table = load_match_table(&config.match_table)?;
    let index = LookupIndex::build(&table);
    output::success(&format!(
        "Match table loaded: {} groups from {}",
        index.group_count(),
        config.match_table.display()
    ));

    let has_key = OpinionConfig::api_key().is_some();

    if output::is_json() {
        return output::document(&json!({
            "config": path.display().to_string(),
            "valid": true,
            "match_table": config.match_table.display().to_string(),
            "groups": index.group_count(),
            "fuzzy_threshold": config.matching.fuzzy_threshold,
            "fuzzy_fallback": config.matching.fuzzy_fallback,
            "sell_signal_threshold": config.economics.sell_signal_threshold,
            "opinion_api_key": has_key,
        }));
    }

    output::section("Summary");
    output::field("Fuzzy", fuzzy_summary(&config));
    output::field(
        "Sell above",
        format!("{}¢", config.economics.sell_signal_threshold),
    );
    output::field("Polymarket", &config.polymarket.data_api_url);
    output::field("Opinion", &config.opinion.api_url);

    if has_key {
        output::success(&format!("Opinion API key found (from {API_KEY_ENV} env var)"));
    } else {
        output::warning("No Opinion API key configured");
        output::note(&format!(
            "Set {API_KEY_ENV} to scan Opinion positions"
        ));
    }

    Ok(())
}

fn fuzzy_summary(config: &Config) -> String {
    if config.matching.fuzzy_fallback {
        format!("on, threshold {}", config.matching.fuzzy_threshold)
    } else {
        "off".into()
    }
}
