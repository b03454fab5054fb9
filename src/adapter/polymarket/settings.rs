//! Polymarket data API configuration.

use serde::Deserialize;

/// Polymarket adapter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PolymarketConfig {
    /// Base URL of the public data API.
    #[serde(default = "default_data_api_url")]
    pub data_api_url: String,
    /// Maximum number of buy trades fetched to derive entry timestamps.
    #[serde(default = "default_activity_limit")]
    pub activity_limit: u32,
}

fn default_data_api_url() -> String {
    "https://data-api.polymarket.com".into()
}

const fn default_activity_limit() -> u32 {
    500
}

impl Default for PolymarketConfig {
    fn default() -> Self {
        Self {
            data_api_url: default_data_api_url(),
            activity_limit: default_activity_limit(),
        }
    }
}
