//! Polymarket data API client.
//!
//! Positions come from `GET /positions`. Entry timestamps are derived from
//! the wallet's buy trades (`GET /activity`): the earliest trade per condition
//! becomes the position's entry time. The activity call is best-effort.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::dto::{earliest_entries, ActivityRecord, PositionRecord};
use super::settings::PolymarketConfig;
use crate::adapter::http::{endpoint, HttpConfig, JsonClient};
use crate::domain::{PolyPosition, Venue};
use crate::error::Result;
use crate::port::PolyPositionSource;

/// HTTP client for the Polymarket data API.
pub struct PolymarketClient {
    http: JsonClient,
    base_url: String,
    activity_limit: u32,
}

impl PolymarketClient {
    #[must_use]
    pub fn new(config: &PolymarketConfig, http: &HttpConfig) -> Self {
        Self {
            http: JsonClient::new(Venue::Polymarket, http),
            base_url: config.data_api_url.clone(),
            activity_limit: config.activity_limit,
        }
    }

    /// Fetch raw position records for a wallet.
    pub async fn get_positions(&self, wallet: &str) -> Result<Vec<PositionRecord>> {
        let mut url = endpoint(&self.base_url, "positions")?;
        url.query_pairs_mut().append_pair("user", wallet);

        info!(url = %url, "Fetching Polymarket positions");
        let records: Vec<PositionRecord> = self.http.get_json(&url, &[]).await?;
        debug!(count = records.len(), "Fetched Polymarket positions");

        Ok(records)
    }

    /// Fetch the wallet's buy trades, oldest first.
    pub async fn get_buy_activity(&self, wallet: &str) -> Result<Vec<ActivityRecord>> {
        let mut url = endpoint(&self.base_url, "activity")?;
        url.query_pairs_mut()
            .append_pair("user", wallet)
            .append_pair("type", "TRADE")
            .append_pair("side", "BUY")
            .append_pair("sortBy", "TIMESTAMP")
            .append_pair("sortDirection", "ASC")
            .append_pair("limit", &self.activity_limit.to_string());

        info!(url = %url, "Fetching Polymarket activity");
        self.http.get_json(&url, &[]).await
    }
}

#[async_trait]
impl PolyPositionSource for PolymarketClient {
    async fn fetch_positions(&self, wallet: &str) -> Result<Vec<PolyPosition>> {
        let records = self.get_positions(wallet).await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let entries = match self.get_buy_activity(wallet).await {
            Ok(activity) => {
                let entries = earliest_entries(&activity);
                debug!(conditions = entries.len(), "Mapped entry dates");
                entries
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch activity data, entry dates unknown");
                Default::default()
            }
        };

        Ok(records
            .into_iter()
            .map(|record| {
                let entry = entries.get(&record.condition_id).copied();
                record.into_position(entry)
            })
            .collect())
    }
}
