//! Curated table of markets known to be equivalent across venues.

use serde::{Deserialize, Serialize};

use super::id::GroupId;

/// One curated assertion that two venue titles describe the same market.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchGroup {
    /// Polymarket title.
    pub market_a_title: String,
    /// Opinion title.
    pub market_b_from_title: String,
}

impl MatchGroup {
    pub fn new(market_a_title: impl Into<String>, market_b_from_title: impl Into<String>) -> Self {
        Self {
            market_a_title: market_a_title.into(),
            market_b_from_title: market_b_from_title.into(),
        }
    }
}

/// Ordered match groups. A group's position is its [`GroupId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MatchTable {
    groups: Vec<MatchGroup>,
}

impl MatchTable {
    #[must_use]
    pub fn new(groups: Vec<MatchGroup>) -> Self {
        Self { groups }
    }

    /// Iterate groups with their identifiers.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &MatchGroup)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(idx, group)| (GroupId::new(idx), group))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<MatchGroup> for MatchTable {
    fn from_iter<I: IntoIterator<Item = MatchGroup>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
