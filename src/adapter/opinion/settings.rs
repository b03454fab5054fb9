//! Opinion open API configuration.

use serde::Deserialize;

/// Environment variable holding the Opinion API key.
pub const API_KEY_ENV: &str = "OPINION_API_KEY";

/// Opinion adapter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OpinionConfig {
    /// Base URL of the open API, including its path prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "https://openapi.opinion.trade/openapi".into()
}

impl Default for OpinionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl OpinionConfig {
    /// API key from the environment, if set and non-empty.
    #[must_use]
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}
