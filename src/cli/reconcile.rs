//! Offline reconciliation of saved position snapshots.

use tracing::info;

use crate::adapter::file::{load_opinion_positions, load_poly_positions};
use crate::cli::report::Report;
use crate::cli::{load_index, output, ReconcileArgs};
use crate::domain::reconcile;
use crate::error::Result;

pub fn execute(args: &ReconcileArgs, log_level: Option<&str>) -> Result<()> {
    let config = args.matching.load_config(log_level)?;
    let index = load_index(&config)?;

    let poly = load_poly_positions(&args.poly)?;
    let opinion = load_opinion_positions(&args.opinion)?;
    info!(
        groups = index.group_count(),
        poly = poly.len(),
        opinion = opinion.len(),
        "Reconciling snapshots"
    );

    let result = reconcile(&index, &poly, &opinion, &config.matching);
    let report = Report::build(result, Vec::new(), args.matching.now(), &config.economics);

    output::header();
    report.render()
}
