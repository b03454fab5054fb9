mod support;

use std::sync::Arc;

use arbmatch::app::Scanner;
use arbmatch::domain::{MatchingConfig, OpinionPosition, PolyPosition, Venue};
use arbmatch::error::Error;

use support::position::{make_index, make_opinion, make_poly};
use support::source::MockSource;

fn fed_index() -> arbmatch::domain::LookupIndex {
    make_index(&[("Will the Fed cut rates in March?", "Fed March decision - Cut")])
}

fn fed_poly() -> Vec<PolyPosition> {
    vec![
        make_poly("p0", "Will the Fed cut rates in March?", "Yes"),
        make_poly("p1", "Ethereum above 5000", "No"),
    ]
}

fn fed_opinion() -> Vec<OpinionPosition> {
    vec![make_opinion("o0", "Fed March decision", "Cut")]
}

fn scanner(
    poly: &Arc<MockSource<PolyPosition>>,
    opinion: &Arc<MockSource<OpinionPosition>>,
) -> Scanner {
    Scanner::new(
        poly.clone(),
        opinion.clone(),
        fed_index(),
        MatchingConfig::default(),
    )
}

#[tokio::test]
async fn scan_matches_positions_from_both_venues() {
    let poly = Arc::new(MockSource::returning(fed_poly()));
    let opinion = Arc::new(MockSource::returning(fed_opinion()));

    let report = scanner(&poly, &opinion)
        .scan(Some("0xpoly"), Some("0xopinion"))
        .await;

    assert_eq!(report.poly_count, 2);
    assert_eq!(report.opinion_count, 1);
    assert!(report.warnings.is_empty());
    assert_eq!(report.result.matched.len(), 1);
    assert_eq!(report.result.matched[0].id, "match-0-0");
    assert_eq!(report.result.unmatched_poly.len(), 1);

    assert_eq!(poly.wallets(), vec!["0xpoly".to_string()]);
    assert_eq!(opinion.wallets(), vec!["0xopinion".to_string()]);
}

#[tokio::test]
async fn missing_wallet_skips_the_venue() {
    let poly = Arc::new(MockSource::returning(fed_poly()));
    let opinion = Arc::new(MockSource::returning(fed_opinion()));

    let report = scanner(&poly, &opinion).scan(Some("0xpoly"), None).await;

    assert_eq!(opinion.calls(), 0);
    assert_eq!(report.opinion_count, 0);
    assert!(report.warnings.is_empty());
    assert!(report.result.matched.is_empty());
    assert_eq!(report.result.unmatched_poly.len(), 2);
}

#[tokio::test]
async fn blank_wallet_is_treated_as_missing() {
    let poly = Arc::new(MockSource::returning(fed_poly()));
    let opinion = Arc::new(MockSource::returning(fed_opinion()));

    let report = scanner(&poly, &opinion).scan(Some("   "), Some(" 0xop ")).await;

    assert_eq!(poly.calls(), 0);
    assert_eq!(opinion.wallets(), vec!["0xop".to_string()]);
    assert_eq!(report.poly_count, 0);
    assert_eq!(report.result.unmatched_opinion.len(), 1);
}

#[tokio::test]
async fn api_failure_becomes_a_warning() {
    let poly = Arc::new(MockSource::returning(fed_poly()));
    let opinion = Arc::new(MockSource::<OpinionPosition>::failing(Error::Api {
        venue: Venue::Opinion,
        status: 503,
        body: "maintenance".into(),
    }));

    let report = scanner(&poly, &opinion)
        .scan(Some("0xpoly"), Some("0xopinion"))
        .await;

    assert_eq!(
        report.warnings,
        vec!["Opinion API error (503): maintenance".to_string()]
    );
    assert_eq!(report.poly_count, 2);
    assert_eq!(report.opinion_count, 0);
    assert_eq!(report.result.unmatched_poly.len(), 2);
}

#[tokio::test]
async fn missing_api_key_warning() {
    let poly = Arc::new(MockSource::returning(fed_poly()));
    let opinion = Arc::new(MockSource::<OpinionPosition>::failing(
        Error::MissingCredential("OPINION_API_KEY"),
    ));

    let report = scanner(&poly, &opinion)
        .scan(Some("0xpoly"), Some("0xopinion"))
        .await;

    assert_eq!(
        report.warnings,
        vec!["OPINION_API_KEY not configured".to_string()]
    );
}

#[tokio::test]
async fn transport_failure_is_prefixed_with_the_venue() {
    let poly = Arc::new(MockSource::<PolyPosition>::failing(Error::Io(
        std::io::Error::other("connection reset"),
    )));
    let opinion = Arc::new(MockSource::returning(fed_opinion()));

    let report = scanner(&poly, &opinion)
        .scan(Some("0xpoly"), Some("0xopinion"))
        .await;

    assert_eq!(report.warnings.len(), 1);
    assert!(
        report.warnings[0].starts_with("Polymarket fetch failed: "),
        "warning: {}",
        report.warnings[0]
    );
    assert!(report.warnings[0].contains("connection reset"));
    assert_eq!(report.opinion_count, 1);
}

#[tokio::test]
async fn both_venues_failing_yields_empty_result() {
    let poly = Arc::new(MockSource::<PolyPosition>::failing(Error::Api {
        venue: Venue::Polymarket,
        status: 500,
        body: "boom".into(),
    }));
    let opinion = Arc::new(MockSource::<OpinionPosition>::failing(
        Error::MissingCredential("OPINION_API_KEY"),
    ));

    let report = scanner(&poly, &opinion)
        .scan(Some("0xpoly"), Some("0xopinion"))
        .await;

    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].starts_with("Polymarket"));
    assert!(report.result.matched.is_empty());
    assert!(report.result.unmatched_poly.is_empty());
    assert!(report.result.unmatched_opinion.is_empty());
}
