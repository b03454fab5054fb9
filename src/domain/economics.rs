//! Arbitrage economics for a matched pair.
//!
//! Prices are in cents (probability x 100), money in dollars. Arithmetic
//! saturates at the `Decimal` range instead of overflowing. Nothing is
//! rounded here; presentation rounds to two decimals for dollars and one for
//! cents. Only the Opinion leg is modelled as fee-bearing.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::matching::MatchedPosition;
use super::money::{saturating_div, saturating_from_f64, to_f64, Price, CENTS_PER_DOLLAR};
use super::position::{OpinionPosition, PolyPosition};

const MS_PER_DAY: i64 = 86_400_000;
const DAYS_PER_YEAR: f64 = 365.0;

/// Economics calculator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EconomicsConfig {
    /// Combined current price (cents) above which both legs should be sold.
    #[serde(default = "default_sell_signal_threshold")]
    pub sell_signal_threshold: Decimal,
}

fn default_sell_signal_threshold() -> Decimal {
    Decimal::new(989, 1) // 98.9
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            sell_signal_threshold: default_sell_signal_threshold(),
        }
    }
}

/// Derived economics of one cross-venue pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageEconomics {
    /// Polymarket average entry price (cents).
    pub entry_price_poly: Price,
    /// Opinion average entry price (cents).
    pub entry_price_opinion: Price,
    /// Polymarket current price (cents).
    pub current_price_poly: Price,
    /// Opinion current price (cents).
    pub current_price_opinion: Price,
    /// YES+NO at entry (cents).
    pub entry_combined: Price,
    /// YES+NO now (cents).
    pub current_combined: Price,
    /// |poly - opinion| at entry (cents).
    pub entry_spread: Price,
    /// |poly - opinion| now (cents).
    pub current_spread: Price,

    pub value_poly: Price,
    pub pnl_poly: Price,
    pub cost_poly: Price,
    pub value_opinion: Price,
    pub pnl_opinion: Price,
    pub cost_opinion: Price,

    pub total_value: Price,
    pub total_cost: Price,
    pub total_pnl: Price,

    /// Fee rate charged by Opinion on exit.
    pub fee_rate_opinion: Decimal,
    /// Fee in dollars charged by Opinion on exit.
    pub fee_opinion: Price,
    /// Total value after fees.
    pub net_value: Price,
    pub net_pnl: Price,
    /// Net P&L as a percentage of total cost; zero when there is no cost.
    pub yield_pct: Decimal,
    /// Whole days since the first buy; zero when unknown.
    pub holding_days: i64,
    /// Annualized yield; zero when the holding period is unknown.
    pub apy: Decimal,
    pub sell_signal: bool,
}

impl ArbitrageEconomics {
    /// Compute the economics of a matched pair as of `now`.
    #[must_use]
    pub fn for_match(
        matched: &MatchedPosition,
        now: DateTime<Utc>,
        config: &EconomicsConfig,
    ) -> Self {
        Self::compute(&matched.poly, &matched.opinion, now, config)
    }

    /// Compute the economics of a Polymarket leg and an Opinion leg.
    #[must_use]
    pub fn compute(
        poly: &PolyPosition,
        opinion: &OpinionPosition,
        now: DateTime<Utc>,
        config: &EconomicsConfig,
    ) -> Self {
        let entry_price_poly = poly_entry_price(poly);
        let entry_price_opinion = opinion.avg_entry_price.saturating_mul(CENTS_PER_DOLLAR);
        let current_price_poly = poly.cur_price.saturating_mul(CENTS_PER_DOLLAR);
        let current_price_opinion = opinion_current_price(opinion);

        let value_poly = poly.size.saturating_mul(poly.cur_price);
        let cost_poly = poly.initial_value;
        let pnl_poly = value_poly.saturating_sub(cost_poly);

        let value_opinion = opinion.current_value;
        let pnl_opinion = opinion.unrealized_pnl;
        let cost_opinion = opinion_cost(opinion);

        let total_value = value_poly.saturating_add(value_opinion);
        let total_cost = cost_poly.saturating_add(cost_opinion);
        let total_pnl = pnl_poly.saturating_add(pnl_opinion);

        let fee_rate_opinion = opinion.fee_rate;
        let fee_opinion = if fee_rate_opinion > Decimal::ZERO {
            value_opinion.saturating_mul(fee_rate_opinion)
        } else {
            Decimal::ZERO
        };

        let net_value = total_value.saturating_sub(fee_opinion);
        let net_pnl = net_value.saturating_sub(total_cost);
        let yield_pct = if total_cost > Decimal::ZERO {
            saturating_div(net_pnl, total_cost).saturating_mul(CENTS_PER_DOLLAR)
        } else {
            Decimal::ZERO
        };

        let holding_days = holding_days(poly.entry_timestamp, now);
        let apy = annualized_yield(yield_pct, holding_days);

        let current_combined = current_price_poly.saturating_add(current_price_opinion);

        Self {
            entry_price_poly,
            entry_price_opinion,
            current_price_poly,
            current_price_opinion,
            entry_combined: entry_price_poly.saturating_add(entry_price_opinion),
            current_combined,
            entry_spread: entry_price_poly.saturating_sub(entry_price_opinion).abs(),
            current_spread: current_price_poly.saturating_sub(current_price_opinion).abs(),
            value_poly,
            pnl_poly,
            cost_poly,
            value_opinion,
            pnl_opinion,
            cost_opinion,
            total_value,
            total_cost,
            total_pnl,
            fee_rate_opinion,
            fee_opinion,
            net_value,
            net_pnl,
            yield_pct,
            holding_days,
            apy,
            sell_signal: current_combined > config.sell_signal_threshold,
        }
    }

    /// Human-readable holding period, empty when unknown.
    #[must_use]
    pub fn holding_label(&self) -> String {
        holding_label(self.holding_days)
    }
}

fn poly_entry_price(poly: &PolyPosition) -> Price {
    if poly.size > Decimal::ZERO {
        saturating_div(poly.initial_value, poly.size).saturating_mul(CENTS_PER_DOLLAR)
    } else {
        Decimal::ZERO
    }
}

/// Opinion current price (cents): latest traded price if known, otherwise
/// value per share.
#[must_use]
pub fn opinion_current_price(opinion: &OpinionPosition) -> Price {
    if opinion.latest_price > Decimal::ZERO {
        opinion.latest_price.saturating_mul(CENTS_PER_DOLLAR)
    } else {
        opinion_value_price(opinion)
    }
}

/// Current value per share (cents), ignoring the latest traded price.
pub(crate) fn opinion_value_price(opinion: &OpinionPosition) -> Price {
    if opinion.shares_owned > Decimal::ZERO {
        saturating_div(opinion.current_value, opinion.shares_owned).saturating_mul(CENTS_PER_DOLLAR)
    } else {
        Decimal::ZERO
    }
}

/// Reported cost basis, or shares x average entry when none was reported.
pub(crate) fn opinion_cost(opinion: &OpinionPosition) -> Price {
    if opinion.total_cost.is_zero() {
        opinion.shares_owned.saturating_mul(opinion.avg_entry_price)
    } else {
        opinion.total_cost
    }
}

/// Whole days held, at least one once an entry time is known.
#[must_use]
pub fn holding_days(entry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match entry {
        Some(entry) => (now - entry)
            .num_milliseconds()
            .div_euclid(MS_PER_DAY)
            .max(1),
        None => 0,
    }
}

/// Compound the realized yield over a year of holding periods.
#[must_use]
pub fn annualized_yield(yield_pct: Decimal, holding_days: i64) -> Decimal {
    if holding_days <= 0 {
        return Decimal::ZERO;
    }
    let growth = 1.0 + to_f64(yield_pct) / 100.0;
    let periods = DAYS_PER_YEAR / holding_days as f64;
    saturating_from_f64((growth.powf(periods) - 1.0) * 100.0)
}

/// Format a holding period: `12d`, `2mo 5d`, `1y 3mo`. Empty for zero days.
#[must_use]
pub fn holding_label(days: i64) -> String {
    match days {
        d if d <= 0 => String::new(),
        d if d < 30 => format!("{d}d"),
        d if d < 365 => format!("{}mo {}d", d / 30, d % 30),
        d => format!("{}y {}mo", d / 365, (d % 365) / 30),
    }
}
