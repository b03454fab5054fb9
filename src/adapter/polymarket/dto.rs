//! Polymarket data API response types.
//!
//! Example position:
//! ```json
//! {"asset":"123...","conditionId":"0xabc","size":760,"initialValue":728.61,
//!  "curPrice":0.993,"title":"Will BTC hit 100k?","outcome":"Yes","outcomeIndex":0}
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::adapter::lenient;
use crate::domain::{ConditionId, PolyPosition, TokenId};

/// A row of `GET /positions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub asset: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub condition_id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub question: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub market: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub outcome: String,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub outcome_index: Option<i64>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cur_price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub size: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub initial_value: Decimal,
    /// Unix seconds of the first buy. Only present in saved snapshots.
    #[serde(default, deserialize_with = "lenient::integer")]
    pub entry_timestamp: Option<i64>,
}

impl PositionRecord {
    /// Convert into a domain position. `entry` overrides a saved timestamp.
    #[must_use]
    pub fn into_position(self, entry: Option<DateTime<Utc>>) -> PolyPosition {
        let entry_timestamp = entry.or_else(|| {
            self.entry_timestamp
                .filter(|ts| *ts > 0)
                .and_then(|ts| DateTime::from_timestamp(ts, 0))
        });
        PolyPosition {
            asset: TokenId::new(self.asset),
            condition_id: ConditionId::new(self.condition_id),
            title: self.title,
            question: self.question,
            market: self.market,
            outcome: self.outcome,
            outcome_index: self
                .outcome_index
                .and_then(|i| u32::try_from(i).ok())
                .unwrap_or_default(),
            cur_price: self.cur_price,
            size: self.size,
            initial_value: self.initial_value,
            entry_timestamp,
        }
    }
}

/// A row of `GET /activity`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(default, deserialize_with = "lenient::string")]
    pub condition_id: String,
    /// Unix seconds.
    #[serde(default, deserialize_with = "lenient::integer")]
    pub timestamp: Option<i64>,
}

/// Earliest trade timestamp per condition. Zero and missing values are skipped.
#[must_use]
pub fn earliest_entries(activity: &[ActivityRecord]) -> HashMap<String, DateTime<Utc>> {
    let mut earliest: HashMap<String, i64> = HashMap::new();
    for trade in activity {
        let Some(ts) = trade.timestamp.filter(|ts| *ts > 0) else {
            continue;
        };
        if trade.condition_id.is_empty() {
            continue;
        }
        earliest
            .entry(trade.condition_id.clone())
            .and_modify(|current| *current = (*current).min(ts))
            .or_insert(ts);
    }

    earliest
        .into_iter()
        .filter_map(|(cid, ts)| DateTime::from_timestamp(ts, 0).map(|dt| (cid, dt)))
        .collect()
}
