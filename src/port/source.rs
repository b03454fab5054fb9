//! Position source ports.
//!
//! A source returns the positions a wallet currently holds on one venue,
//! already parsed into domain types. Venue-specific enrichment (entry
//! timestamps, latest prices) happens inside the source.

use async_trait::async_trait;

use crate::domain::{OpinionPosition, PolyPosition};
use crate::error::Error;

/// Polymarket position fetcher.
#[async_trait]
pub trait PolyPositionSource: Send + Sync {
    /// Fetch every open position held by `wallet`.
    async fn fetch_positions(&self, wallet: &str) -> Result<Vec<PolyPosition>, Error>;
}

/// Opinion position fetcher.
#[async_trait]
pub trait OpinionPositionSource: Send + Sync {
    /// Fetch every open position held by `wallet`, with latest prices attached.
    async fn fetch_positions(&self, wallet: &str) -> Result<Vec<OpinionPosition>, Error>;
}
