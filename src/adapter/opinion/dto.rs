//! Opinion open API response types.
//!
//! Every numeric field is sent as a string. The position list sits either at
//! `result.list` or directly at `result`, depending on the endpoint version.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::adapter::lenient;
use crate::domain::{OpinionPosition, TokenId};

/// Standard response envelope.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub result: Option<T>,
}

/// Payload of `GET /positions/user/{wallet}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PositionsResult {
    Paged { list: Vec<PositionRecord> },
    Bare(Vec<PositionRecord>),
    Other(serde_json::Value),
}

impl PositionsResult {
    #[must_use]
    pub fn into_records(self) -> Vec<PositionRecord> {
        match self {
            Self::Paged { list } => list,
            Self::Bare(list) => list,
            Self::Other(_) => Vec::new(),
        }
    }
}

/// Payload of `GET /token/latest-price`.
#[derive(Debug, Deserialize)]
pub struct LatestPrice {
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price: Decimal,
}

/// One position as sent by the venue.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub token_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub root_market_title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub market_title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub outcome_side_enum: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub market_status_enum: String,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub shares_owned: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub avg_entry_price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub current_value_in_quote_token: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_cost_in_quote_token: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub unrealized_pnl: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub unrealized_pnl_percent: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub latest_price: Decimal,
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub fee_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::optional_decimal")]
    pub trade_fee_rate: Option<Decimal>,
}

impl PositionRecord {
    /// `feeRate` whenever it is set, even to zero, otherwise `tradeFeeRate`.
    #[must_use]
    pub fn effective_fee_rate(&self) -> Decimal {
        self.fee_rate
            .or(self.trade_fee_rate)
            .unwrap_or(Decimal::ZERO)
    }
}

impl From<PositionRecord> for OpinionPosition {
    fn from(r: PositionRecord) -> Self {
        let fee_rate = r.effective_fee_rate();
        Self {
            token_id: TokenId::new(r.token_id),
            root_market_title: r.root_market_title,
            market_title: r.market_title,
            outcome_side: r.outcome_side_enum,
            market_status: r.market_status_enum,
            shares_owned: r.shares_owned,
            avg_entry_price: r.avg_entry_price,
            current_value: r.current_value_in_quote_token,
            total_cost: r.total_cost_in_quote_token,
            unrealized_pnl: r.unrealized_pnl,
            unrealized_pnl_percent: r.unrealized_pnl_percent,
            latest_price: r.latest_price,
            fee_rate,
        }
    }
}
