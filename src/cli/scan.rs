//! Live scan of both venues.

use std::sync::Arc;

use crate::adapter::opinion::OpinionClient;
use crate::adapter::polymarket::PolymarketClient;
use crate::app::Scanner;
use crate::cli::report::Report;
use crate::cli::{load_index, output, ScanArgs};
use crate::error::{ConfigError, Result};

pub async fn execute(args: &ScanArgs, log_level: Option<&str>) -> Result<()> {
    if args.poly_wallet.is_none() && args.opinion_wallet.is_none() {
        return Err(ConfigError::MissingField {
            field: "--poly-wallet or --opinion-wallet",
        }
        .into());
    }

    let config = args.matching.load_config(log_level)?;
    let index = load_index(&config)?;

    let scanner = Scanner::new(
        Arc::new(PolymarketClient::new(&config.polymarket, &config.http)),
        Arc::new(OpinionClient::new(&config.opinion, &config.http)),
        index,
        config.matching.clone(),
    );

    let scan = scanner
        .scan(args.poly_wallet.as_deref(), args.opinion_wallet.as_deref())
        .await;

    output::header();
    output::field("Polymarket", format!("{} positions", scan.poly_count));
    output::field("Opinion", format!("{} positions", scan.opinion_count));

    let report = Report::build(
        scan.result,
        scan.warnings,
        args.matching.now(),
        &config.economics,
    );
    report.render()
}
