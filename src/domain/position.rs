//! Held positions on each venue.
//!
//! Both types are immutable snapshots taken on every scan. Numeric fields are
//! already parsed: wire-format quirks stay in the adapter DTOs.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::id::{ConditionId, TokenId};
use super::money::{Price, Volume};

/// Trading venue a position is held on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    /// Venue A.
    Polymarket,
    /// Venue B.
    Opinion,
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polymarket => write!(f, "Polymarket"),
            Self::Opinion => write!(f, "Opinion"),
        }
    }
}

/// Binary outcome side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    /// Clamp a free-form outcome label to a side. Anything but "yes" is `No`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("yes") {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// A Polymarket position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PolyPosition {
    pub asset: TokenId,
    pub condition_id: ConditionId,
    pub title: String,
    pub question: String,
    pub market: String,
    /// Outcome label, usually "Yes" or "No".
    pub outcome: String,
    pub outcome_index: u32,
    /// Current probability price on a 0-1 scale.
    pub cur_price: Price,
    /// Share count.
    pub size: Volume,
    /// Cost basis in dollars.
    pub initial_value: Price,
    /// Earliest recorded buy trade for this condition.
    pub entry_timestamp: Option<DateTime<Utc>>,
}

impl PolyPosition {
    /// Title strings to probe against the curated lookup, in priority order.
    ///
    /// Bare titles come before the outcome-qualified ones. Exact matching
    /// takes the first hit, so this order is the match-priority policy.
    #[must_use]
    pub fn title_candidates(&self) -> Vec<String> {
        let bases = [&self.title, &self.question, &self.market];
        let mut candidates: Vec<String> = bases
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| (*s).clone())
            .collect();

        if !self.outcome.is_empty() {
            candidates.extend(
                bases
                    .iter()
                    .filter(|s| !s.is_empty())
                    .map(|s| format!("{} - {}", s, self.outcome)),
            );
        }
        candidates
    }

    /// Concatenated text the fuzzy matcher extracts keywords from.
    #[must_use]
    pub fn keyword_text(&self) -> String {
        format!("{} {} {}", self.title, self.question, self.market)
    }

    /// Preferred human-readable title, if the position carries one.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        [&self.title, &self.question]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
    }

    #[must_use]
    pub fn side(&self) -> Side {
        Side::from_label(&self.outcome)
    }
}

/// An Opinion position.
///
/// Opinion sends numbers as strings; by the time a value of this type exists
/// they have been parsed once, with missing or invalid values set to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpinionPosition {
    pub token_id: TokenId,
    pub root_market_title: String,
    pub market_title: String,
    /// `outcomeSideEnum` as sent by the venue.
    pub outcome_side: String,
    /// `marketStatusEnum` as sent by the venue.
    pub market_status: String,
    pub shares_owned: Volume,
    pub avg_entry_price: Price,
    pub current_value: Price,
    pub total_cost: Price,
    pub unrealized_pnl: Price,
    pub unrealized_pnl_percent: Decimal,
    /// Latest traded price, zero when unknown.
    pub latest_price: Price,
    /// Fee rate applied on exit, zero when the venue reported none.
    pub fee_rate: Decimal,
}

impl OpinionPosition {
    /// Title strings to probe against the curated lookup, in priority order.
    #[must_use]
    pub fn title_candidates(&self) -> Vec<String> {
        let mut candidates = Vec::with_capacity(3);
        if !self.root_market_title.is_empty() && !self.market_title.is_empty() {
            candidates.push(format!(
                "{} - {}",
                self.root_market_title, self.market_title
            ));
        }
        if !self.root_market_title.is_empty() {
            candidates.push(self.root_market_title.clone());
        }
        if !self.market_title.is_empty() {
            candidates.push(self.market_title.clone());
        }
        candidates
    }

    /// Concatenated text the fuzzy matcher extracts keywords from.
    #[must_use]
    pub fn keyword_text(&self) -> String {
        format!("{} {}", self.root_market_title, self.market_title)
    }

    #[must_use]
    pub fn side(&self) -> Side {
        Side::from_label(&self.outcome_side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(title: &str, question: &str, market: &str, outcome: &str) -> PolyPosition {
        PolyPosition {
            title: title.into(),
            question: question.into(),
            market: market.into(),
            outcome: outcome.into(),
            ..Default::default()
        }
    }

    #[test]
    fn poly_candidates_put_bare_titles_first() {
        let p = poly("Fed cuts", "Will the Fed cut?", "fed-cut", "Yes");
        assert_eq!(
            p.title_candidates(),
            vec![
                "Fed cuts",
                "Will the Fed cut?",
                "fed-cut",
                "Fed cuts - Yes",
                "Will the Fed cut? - Yes",
                "fed-cut - Yes",
            ]
        );
    }

    #[test]
    fn poly_candidates_skip_empty_fields() {
        let p = poly("Fed cuts", "", "", "");
        assert_eq!(p.title_candidates(), vec!["Fed cuts"]);

        let p = poly("", "", "", "Yes");
        assert!(p.title_candidates().is_empty());
    }

    #[test]
    fn opinion_candidates_prefer_qualified_title() {
        let o = OpinionPosition {
            root_market_title: "Fed decision".into(),
            market_title: "50 bps cut".into(),
            ..Default::default()
        };
        assert_eq!(
            o.title_candidates(),
            vec!["Fed decision - 50 bps cut", "Fed decision", "50 bps cut"]
        );
    }

    #[test]
    fn opinion_candidates_without_root() {
        let o = OpinionPosition {
            market_title: "50 bps cut".into(),
            ..Default::default()
        };
        assert_eq!(o.title_candidates(), vec!["50 bps cut"]);
    }

    #[test]
    fn display_title_falls_back_to_question() {
        assert_eq!(poly("", "Q?", "m", "Yes").display_title(), Some("Q?"));
        assert_eq!(poly("", "", "m", "Yes").display_title(), None);
    }

    #[test]
    fn side_clamps_labels() {
        assert_eq!(Side::from_label(" YES "), Side::Yes);
        assert_eq!(Side::from_label("No"), Side::No);
        assert_eq!(Side::from_label("Trump"), Side::No);
        assert_eq!(Side::from_label(""), Side::No);
    }

    #[test]
    fn venue_display() {
        assert_eq!(Venue::Polymarket.to_string(), "Polymarket");
        assert_eq!(Venue::Opinion.to_string(), "Opinion");
    }
}
