//! Opinion open API client.
//!
//! Every request carries the `apikey` header. After the position list is
//! fetched, the latest traded price of each token is fetched concurrently;
//! a failed price lookup leaves that position's latest price at zero.

use async_trait::async_trait;
use futures_util::future::join_all;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::dto::{Envelope, LatestPrice, PositionRecord, PositionsResult};
use super::settings::{OpinionConfig, API_KEY_ENV};
use crate::adapter::http::{endpoint, HttpConfig, JsonClient};
use crate::domain::{OpinionPosition, Venue};
use crate::error::{Error, Result};
use crate::port::OpinionPositionSource;

const API_KEY_HEADER: &str = "apikey";

/// HTTP client for the Opinion open API.
pub struct OpinionClient {
    http: JsonClient,
    base_url: String,
    api_key: Option<String>,
}

impl OpinionClient {
    /// Create a client, reading the API key from the environment.
    #[must_use]
    pub fn new(config: &OpinionConfig, http: &HttpConfig) -> Self {
        Self::with_api_key(config, http, OpinionConfig::api_key())
    }

    #[must_use]
    pub fn with_api_key(config: &OpinionConfig, http: &HttpConfig, api_key: Option<String>) -> Self {
        Self {
            http: JsonClient::new(Venue::Opinion, http),
            base_url: config.api_url.clone(),
            api_key,
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or(Error::MissingCredential(API_KEY_ENV))
    }

    /// Fetch raw position records for a wallet.
    pub async fn get_positions(&self, wallet: &str) -> Result<Vec<PositionRecord>> {
        let api_key = self.api_key()?;
        let mut url = endpoint(&self.base_url, "positions/user/")?;
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(wallet);

        info!(url = %url, "Fetching Opinion positions");
        let envelope: Envelope<PositionsResult> = self
            .http
            .get_json(&url, &[(API_KEY_HEADER, api_key)])
            .await?;

        let records = envelope
            .result
            .map(PositionsResult::into_records)
            .unwrap_or_default();
        debug!(count = records.len(), "Fetched Opinion positions");

        Ok(records)
    }

    /// Fetch the latest traded price of a token, on a 0-1 scale.
    pub async fn get_latest_price(&self, token_id: &str) -> Result<Decimal> {
        let api_key = self.api_key()?;
        let mut url = endpoint(&self.base_url, "token/latest-price")?;
        url.query_pairs_mut().append_pair("token_id", token_id);

        let envelope: Envelope<LatestPrice> = self
            .http
            .get_json(&url, &[(API_KEY_HEADER, api_key)])
            .await?;

        Ok(envelope.result.map_or(Decimal::ZERO, |r| r.price))
    }

    async fn attach_latest_price(&self, mut record: PositionRecord) -> PositionRecord {
        if record.token_id.is_empty() {
            return record;
        }

        match self.get_latest_price(&record.token_id).await {
            Ok(price) if price > Decimal::ZERO => {
                debug!(token_id = %record.token_id, %price, "Set latest price");
                record.latest_price = price;
            }
            Ok(_) => {}
            Err(err) => {
                warn!(
                    token_id = %record.token_id,
                    market = %record.market_title,
                    error = %err,
                    "Failed to fetch latest price"
                );
            }
        }
        record
    }
}

#[async_trait]
impl OpinionPositionSource for OpinionClient {
    async fn fetch_positions(&self, wallet: &str) -> Result<Vec<OpinionPosition>> {
        let records = self.get_positions(wallet).await?;

        let priced = join_all(
            records
                .into_iter()
                .map(|record| self.attach_latest_price(record)),
        )
        .await;

        Ok(priced.into_iter().map(OpinionPosition::from).collect())
    }
}
