//! Live scan: fetch both venues concurrently, then reconcile.
//!
//! A venue that fails does not abort the scan. Its failure becomes a warning
//! on the report and matching runs over whatever the other venue returned.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{
    reconcile, LookupIndex, MatchResult, MatchingConfig, OpinionPosition, PolyPosition, Venue,
};
use crate::error::Error;
use crate::port::{OpinionPositionSource, PolyPositionSource};

/// Outcome of one scan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub poly_count: usize,
    pub opinion_count: usize,
    pub result: MatchResult,
    pub warnings: Vec<String>,
}

/// Fetches positions from both venues and matches them.
pub struct Scanner {
    poly: Arc<dyn PolyPositionSource>,
    opinion: Arc<dyn OpinionPositionSource>,
    index: LookupIndex,
    matching: MatchingConfig,
}

impl Scanner {
    #[must_use]
    pub fn new(
        poly: Arc<dyn PolyPositionSource>,
        opinion: Arc<dyn OpinionPositionSource>,
        index: LookupIndex,
        matching: MatchingConfig,
    ) -> Self {
        Self {
            poly,
            opinion,
            index,
            matching,
        }
    }

    /// Scan the given wallets. A missing or blank wallet skips that venue.
    pub async fn scan(&self, poly_wallet: Option<&str>, opinion_wallet: Option<&str>) -> ScanReport {
        let poly_wallet = poly_wallet.map(str::trim).filter(|w| !w.is_empty());
        let opinion_wallet = opinion_wallet.map(str::trim).filter(|w| !w.is_empty());

        let (poly, opinion) = tokio::join!(
            self.fetch_poly(poly_wallet),
            self.fetch_opinion(opinion_wallet)
        );

        let mut warnings = Vec::new();
        let poly = collect(Venue::Polymarket, poly, &mut warnings);
        let opinion = collect(Venue::Opinion, opinion, &mut warnings);

        info!(
            poly = poly.len(),
            opinion = opinion.len(),
            warnings = warnings.len(),
            "Fetched positions"
        );

        let result = reconcile(&self.index, &poly, &opinion, &self.matching);

        ScanReport {
            poly_count: poly.len(),
            opinion_count: opinion.len(),
            result,
            warnings,
        }
    }

    async fn fetch_poly(&self, wallet: Option<&str>) -> Option<Result<Vec<PolyPosition>, Error>> {
        match wallet {
            Some(wallet) => Some(self.poly.fetch_positions(wallet).await),
            None => None,
        }
    }

    async fn fetch_opinion(
        &self,
        wallet: Option<&str>,
    ) -> Option<Result<Vec<OpinionPosition>, Error>> {
        match wallet {
            Some(wallet) => Some(self.opinion.fetch_positions(wallet).await),
            None => None,
        }
    }
}

fn collect<T>(
    venue: Venue,
    fetched: Option<Result<Vec<T>, Error>>,
    warnings: &mut Vec<String>,
) -> Vec<T> {
    match fetched {
        None => Vec::new(),
        Some(Ok(positions)) => positions,
        Some(Err(err)) => {
            let message = fetch_warning(venue, &err);
            warn!(%venue, error = %err, "Position fetch failed");
            warnings.push(message);
            Vec::new()
        }
    }
}

/// User-facing warning for a failed venue fetch.
#[must_use]
pub fn fetch_warning(venue: Venue, err: &Error) -> String {
    match err {
        Error::Api { .. } | Error::MissingCredential(_) => err.to_string(),
        other => format!("{venue} fetch failed: {other}"),
    }
}
