//! Aggregates over matched pairs.

use rust_decimal::Decimal;
use serde::Serialize;

use super::economics::{opinion_cost, opinion_value_price, ArbitrageEconomics};
use super::matching::MatchedPosition;
use super::money::{saturating_div, Price, CENTS_PER_DOLLAR};
use super::position::Side;

/// Portfolio-level totals across all matched pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub pairs: usize,
    pub total_cost: Price,
    pub current_value: Price,
    pub total_profit: Price,
    /// Profit as a percentage of cost; zero when there is no cost.
    pub return_pct: Decimal,
    /// Sum of combined prices above par (cents), pairs below par count zero.
    pub total_spread: Price,
}

impl PortfolioSummary {
    #[must_use]
    pub fn from_matches(matches: &[MatchedPosition]) -> Self {
        let mut summary = Self {
            pairs: matches.len(),
            ..Self::default()
        };

        for m in matches {
            let cost = m.poly.initial_value.saturating_add(opinion_cost(&m.opinion));
            let value = m
                .poly
                .size
                .saturating_mul(m.poly.cur_price)
                .saturating_add(m.opinion.current_value);
            summary.total_cost = summary.total_cost.saturating_add(cost);
            summary.current_value = summary.current_value.saturating_add(value);

            let combined = m
                .poly
                .cur_price
                .saturating_mul(CENTS_PER_DOLLAR)
                .saturating_add(opinion_value_price(&m.opinion));
            let over_par = combined.saturating_sub(CENTS_PER_DOLLAR).max(Decimal::ZERO);
            summary.total_spread = summary.total_spread.saturating_add(over_par);
        }

        summary.total_profit = summary.current_value.saturating_sub(summary.total_cost);
        if summary.total_cost > Decimal::ZERO {
            summary.return_pct = saturating_div(summary.total_profit, summary.total_cost)
                .saturating_mul(CENTS_PER_DOLLAR);
        }

        summary
    }
}

/// Flattened per-pair record for sharing a position outside the tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSummary {
    pub title: String,
    pub net_profit: Price,
    pub yield_pct: Decimal,
    pub poly_side: Side,
    /// Polymarket current price (cents).
    pub poly_price: Price,
    pub opinion_side: Side,
    /// Opinion current price (cents).
    pub opinion_price: Price,
    pub total_cost: Price,
    pub sell_signal: bool,
    pub holding_label: String,
    pub holding_days: i64,
    pub apy: Decimal,
}

impl ShareSummary {
    #[must_use]
    pub fn from_economics(
        title: impl Into<String>,
        matched: &MatchedPosition,
        economics: &ArbitrageEconomics,
    ) -> Self {
        Self {
            title: title.into(),
            net_profit: economics.net_pnl,
            yield_pct: economics.yield_pct,
            poly_side: matched.poly.side(),
            poly_price: economics.current_price_poly,
            opinion_side: matched.opinion.side(),
            opinion_price: economics.current_price_opinion,
            total_cost: economics.total_cost,
            sell_signal: economics.sell_signal,
            holding_label: economics.holding_label(),
            holding_days: economics.holding_days,
            apy: economics.apy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::economics::EconomicsConfig;
    use crate::domain::matching::MatchMethod;
    use crate::domain::position::{OpinionPosition, PolyPosition};
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn pair(poly: PolyPosition, opinion: OpinionPosition) -> MatchedPosition {
        MatchedPosition {
            id: "match-0-0".into(),
            poly_index: 0,
            opinion_index: 0,
            score: 1.0,
            method: MatchMethod::Fuzzy,
            title: "Pair".into(),
            poly,
            opinion,
        }
    }

    #[test]
    fn portfolio_summary_totals() {
        let first = pair(
            PolyPosition {
                size: dec!(760),
                initial_value: dec!(728.61),
                cur_price: dec!(0.993),
                ..Default::default()
            },
            OpinionPosition {
                shares_owned: dec!(1000),
                current_value: dec!(836),
                total_cost: dec!(805.25),
                ..Default::default()
            },
        );
        let second = pair(
            PolyPosition {
                size: dec!(100),
                initial_value: dec!(40),
                cur_price: dec!(0.30),
                ..Default::default()
            },
            OpinionPosition {
                shares_owned: dec!(100),
                avg_entry_price: dec!(0.60),
                current_value: dec!(65),
                ..Default::default()
            },
        );

        let summary = PortfolioSummary::from_matches(&[first, second]);

        assert_eq!(summary.pairs, 2);
        assert_eq!(summary.total_cost, dec!(1633.86));
        assert_eq!(summary.current_value, dec!(1685.68));
        assert_eq!(summary.total_profit, dec!(51.82));
        // 99.3 + 83.6 = 182.9 -> 82.9 over par; 30 + 65 = 95 -> none.
        assert_eq!(summary.total_spread, dec!(82.9));
        assert!(summary.return_pct > Decimal::ZERO);
    }

    #[test]
    fn tiny_cost_saturates_return() {
        let tiny = pair(
            PolyPosition {
                size: dec!(1000000),
                initial_value: dec!(0.0000000000000000000000001),
                cur_price: dec!(1),
                ..Default::default()
            },
            OpinionPosition {
                shares_owned: dec!(0.0000000000000000000000000001),
                current_value: dec!(1000000),
                ..Default::default()
            },
        );

        let summary = PortfolioSummary::from_matches(&[tiny]);

        assert_eq!(summary.return_pct, Decimal::MAX);
        assert_eq!(summary.total_spread, Decimal::MAX - Decimal::ONE_HUNDRED);
    }

    #[test]
    fn empty_portfolio_is_zero() {
        let summary = PortfolioSummary::from_matches(&[]);
        assert_eq!(summary, PortfolioSummary::default());
    }

    #[test]
    fn share_summary_flattens_economics() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let matched = pair(
            PolyPosition {
                outcome: "Yes".into(),
                size: dec!(100),
                initial_value: dec!(40),
                cur_price: dec!(0.45),
                entry_timestamp: Some(now - Duration::days(12)),
                ..Default::default()
            },
            OpinionPosition {
                outcome_side: "NO".into(),
                shares_owned: dec!(100),
                avg_entry_price: dec!(0.55),
                latest_price: dec!(0.56),
                current_value: dec!(56),
                ..Default::default()
            },
        );
        let econ = ArbitrageEconomics::for_match(&matched, now, &EconomicsConfig::default());

        let share = ShareSummary::from_economics(&matched.title, &matched, &econ);

        assert_eq!(share.title, "Pair");
        assert_eq!(share.poly_side, Side::Yes);
        assert_eq!(share.opinion_side, Side::No);
        assert_eq!(share.poly_price, dec!(45));
        assert_eq!(share.opinion_price, dec!(56));
        assert_eq!(share.total_cost, dec!(95));
        assert_eq!(share.net_profit, dec!(6));
        assert!(share.sell_signal);
        assert_eq!(share.holding_label, "12d");
        assert_eq!(share.holding_days, 12);
    }
}
