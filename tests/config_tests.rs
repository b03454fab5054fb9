mod support;

use std::path::PathBuf;

use rust_decimal_macros::dec;

use arbmatch::app::Config;
use arbmatch::error::{ConfigError, Error};

use support::files::write_temp;

#[test]
fn loads_full_config_file() {
    let file = write_temp(
        r#"
match_table = "data/matches.json"

[logging]
level = "debug"
format = "json"

[matching]
fuzzy_threshold = 0.5
fuzzy_fallback = false

[economics]
sell_signal_threshold = 99.2

[polymarket]
data_api_url = "http://localhost:9000"
activity_limit = 50

[opinion]
api_url = "http://localhost:9001/openapi"

[http]
timeout_ms = 1000
connect_timeout_ms = 250
retry_max_attempts = 5
retry_backoff_ms = 10
"#,
        ".toml",
    );

    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.match_table, PathBuf::from("data/matches.json"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.matching.fuzzy_threshold, 0.5);
    assert!(!config.matching.fuzzy_fallback);
    assert_eq!(config.economics.sell_signal_threshold, dec!(99.2));
    assert_eq!(config.polymarket.data_api_url, "http://localhost:9000");
    assert_eq!(config.polymarket.activity_limit, 50);
    assert_eq!(config.opinion.api_url, "http://localhost:9001/openapi");
    assert_eq!(config.http.timeout_ms, 1000);
    assert_eq!(config.http.retry_max_attempts, 5);
}

#[test]
fn partial_config_keeps_defaults() {
    let file = write_temp("[matching]\nfuzzy_threshold = 0.4\n", ".toml");

    let config = Config::load(file.path()).expect("valid config");

    assert_eq!(config.matching.fuzzy_threshold, 0.4);
    assert!(config.matching.fuzzy_fallback);
    assert_eq!(config.match_table, PathBuf::from("market_matches.json"));
    assert_eq!(config.http.retry_max_attempts, 3);
}

#[test]
fn missing_file_is_a_read_error() {
    let result = Config::load("/nonexistent/arbmatch/config.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_temp("match_table = [", ".toml");
    let result = Config::load(file.path());
    assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
}

#[test]
fn rejects_non_positive_sell_threshold() {
    let file = write_temp("[economics]\nsell_signal_threshold = 0\n", ".toml");
    let result = Config::load(file.path());
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidValue {
            field: "sell_signal_threshold",
            ..
        }))
    ));
}

#[test]
fn rejects_zero_retries() {
    let file = write_temp("[http]\nretry_max_attempts = 0\n", ".toml");
    let err = Config::load(file.path()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for retry_max_attempts: must be at least 1"
    );
}

#[test]
fn rejects_empty_match_table() {
    let file = write_temp("match_table = \"\"\n", ".toml");
    let result = Config::load(file.path());
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::MissingField {
            field: "match_table"
        }))
    ));
}
