//! Reconciliation report: matched pairs with economics, leftovers, totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::domain::{
    opinion_current_price, ArbitrageEconomics, EconomicsConfig, MatchMethod, MatchResult,
    MatchedPosition, OpinionPosition, PolyPosition, PortfolioSummary, ShareSummary, CENTS_PER_DOLLAR,
};
use crate::error::Result;

/// One matched pair with its derived numbers.
#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    #[serde(flatten)]
    pub matched: MatchedPosition,
    pub economics: ArbitrageEconomics,
    pub share: ShareSummary,
}

/// Everything a reconcile or scan run produces.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub pairs: Vec<PairReport>,
    pub unmatched_poly: Vec<PolyPosition>,
    pub unmatched_opinion: Vec<OpinionPosition>,
    pub summary: PortfolioSummary,
    pub warnings: Vec<String>,
}

impl Report {
    /// Attach economics to every pair as of `now`.
    #[must_use]
    pub fn build(
        result: MatchResult,
        warnings: Vec<String>,
        now: DateTime<Utc>,
        economics: &EconomicsConfig,
    ) -> Self {
        let summary = PortfolioSummary::from_matches(&result.matched);
        let pairs = result
            .matched
            .into_iter()
            .map(|matched| {
                let econ = ArbitrageEconomics::for_match(&matched, now, economics);
                let share = ShareSummary::from_economics(matched.title.clone(), &matched, &econ);
                PairReport {
                    matched,
                    economics: econ,
                    share,
                }
            })
            .collect();

        Self {
            generated_at: now,
            pairs,
            unmatched_poly: result.unmatched_poly,
            unmatched_opinion: result.unmatched_opinion,
            summary,
            warnings,
        }
    }

    /// Number of pairs whose sell signal fired.
    #[must_use]
    pub fn sell_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.economics.sell_signal).count()
    }

    /// Print as a JSON document or as tables, depending on output mode.
    pub fn render(&self) -> Result<()> {
        if output::is_json() {
            return output::document(self);
        }

        for warning in &self.warnings {
            output::warning(warning);
        }

        output::section(&format!("Matched pairs ({})", self.pairs.len()));
        if self.pairs.is_empty() {
            output::note("No matched positions");
        } else {
            let rows: Vec<PairRow> = self.pairs.iter().map(PairRow::from).collect();
            output::block(&Table::new(rows).to_string());
        }

        if !self.unmatched_poly.is_empty() || !self.unmatched_opinion.is_empty() {
            output::section(&format!(
                "Unmatched ({} Polymarket, {} Opinion)",
                self.unmatched_poly.len(),
                self.unmatched_opinion.len()
            ));
            let rows: Vec<UnmatchedRow> = self
                .unmatched_poly
                .iter()
                .map(UnmatchedRow::from)
                .chain(self.unmatched_opinion.iter().map(UnmatchedRow::from))
                .collect();
            output::block(&Table::new(rows).to_string());
        }

        output::section("Portfolio");
        output::field("Pairs", self.summary.pairs);
        output::field("Total cost", format!("${:.2}", self.summary.total_cost.round_dp(2)));
        output::field(
            "Current value",
            format!("${:.2}", self.summary.current_value.round_dp(2)),
        );
        output::field("Profit", output::money(self.summary.total_profit));
        output::field("Return", output::percent(self.summary.return_pct));
        output::field("Spread over par", cents(self.summary.total_spread));

        let sells = self.sell_count();
        if sells > 0 {
            output::warning(&format!("{sells} pair(s) above the sell threshold"));
        }

        Ok(())
    }
}

fn cents(value: Decimal) -> String {
    format!("{:.1}¢", value.round_dp(1))
}

fn dollars(value: Decimal) -> String {
    format!("${:.2}", value.round_dp(2))
}

#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Match")]
    method: String,
    #[tabled(rename = "Polymarket")]
    poly: String,
    #[tabled(rename = "Opinion")]
    opinion: String,
    #[tabled(rename = "YES+NO")]
    combined: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Net P&L")]
    net_pnl: String,
    #[tabled(rename = "Yield")]
    yield_pct: String,
    #[tabled(rename = "APY")]
    apy: String,
    #[tabled(rename = "Held")]
    held: String,
    #[tabled(rename = "Signal")]
    signal: &'static str,
}

impl From<&PairReport> for PairRow {
    fn from(pair: &PairReport) -> Self {
        let econ = &pair.economics;
        let method = match pair.matched.method {
            MatchMethod::Exact { .. } => "exact".to_string(),
            MatchMethod::Fuzzy => format!("fuzzy {:.2}", pair.matched.score),
        };
        Self {
            title: truncate(&pair.matched.title, 48),
            method,
            poly: format!("{} @ {}", pair.share.poly_side, cents(econ.current_price_poly)),
            opinion: format!(
                "{} @ {}",
                pair.share.opinion_side,
                cents(econ.current_price_opinion)
            ),
            combined: cents(econ.current_combined),
            cost: dollars(econ.total_cost),
            net_pnl: dollars(econ.net_pnl),
            yield_pct: format!("{:.2}%", econ.yield_pct.round_dp(2)),
            apy: if econ.holding_days > 0 {
                format!("{:.1}%", econ.apy.round_dp(1))
            } else {
                "-".into()
            },
            held: pair.share.holding_label.clone(),
            signal: if econ.sell_signal { "SELL" } else { "hold" },
        }
    }
}

#[derive(Tabled)]
struct UnmatchedRow {
    #[tabled(rename = "Venue")]
    venue: &'static str,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Side")]
    side: String,
    #[tabled(rename = "Shares")]
    shares: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&PolyPosition> for UnmatchedRow {
    fn from(p: &PolyPosition) -> Self {
        Self {
            venue: "Polymarket",
            title: truncate(p.display_title().unwrap_or(&p.market), 56),
            side: p.outcome.clone(),
            shares: p.size.round_dp(2).to_string(),
            price: cents(p.cur_price.saturating_mul(CENTS_PER_DOLLAR)),
        }
    }
}

impl From<&OpinionPosition> for UnmatchedRow {
    fn from(o: &OpinionPosition) -> Self {
        let title = if o.market_title.is_empty() {
            o.root_market_title.clone()
        } else {
            format!("{} - {}", o.root_market_title, o.market_title)
        };
        Self {
            venue: "Opinion",
            title: truncate(&title, 56),
            side: o.outcome_side.clone(),
            shares: o.shares_owned.round_dp(2).to_string(),
            price: cents(opinion_current_price(o)),
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
