//! Normalized-title index over a [`MatchTable`].
//!
//! Each venue gets its own map from normalized title to [`GroupId`]. Besides
//! the full curated titles, every group also registers its progressively
//! truncated titles (dropping the last `" - suffix"` each step) so positions
//! that only carry a parent title still resolve. Truncated forms never
//! overwrite an existing entry: the first registration wins.

use std::collections::HashMap;

use tracing::debug;

use super::id::GroupId;
use super::match_table::MatchTable;
use super::position::{OpinionPosition, PolyPosition};
use super::text::normalize;

const SUFFIX_SEPARATOR: &str = " - ";

/// Immutable lookup from normalized venue titles to curated groups.
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    poly: HashMap<String, GroupId>,
    opinion: HashMap<String, GroupId>,
    /// Polymarket title of each group, used as a display fallback.
    titles: Vec<String>,
}

impl LookupIndex {
    /// Build the index from a curated table.
    #[must_use]
    pub fn build(table: &MatchTable) -> Self {
        let mut index = Self {
            titles: Vec::with_capacity(table.len()),
            ..Self::default()
        };

        for (id, group) in table.iter() {
            index.poly.insert(normalize(&group.market_a_title), id);
            index.opinion.insert(normalize(&group.market_b_from_title), id);

            register_truncations(&mut index.poly, &group.market_a_title, id);
            register_truncations(&mut index.opinion, &group.market_b_from_title, id);

            index.titles.push(group.market_a_title.clone());
        }

        debug!(
            groups = table.len(),
            poly_keys = index.poly.len(),
            opinion_keys = index.opinion.len(),
            "Built curated lookup index"
        );

        index
    }

    /// Resolve a Polymarket position to a group, trying candidates in order.
    #[must_use]
    pub fn find_poly_group(&self, position: &PolyPosition) -> Option<GroupId> {
        first_hit(&self.poly, position.title_candidates())
    }

    /// Resolve an Opinion position to a group, trying candidates in order.
    #[must_use]
    pub fn find_opinion_group(&self, position: &OpinionPosition) -> Option<GroupId> {
        first_hit(&self.opinion, position.title_candidates())
    }

    /// Look up a raw Polymarket title.
    #[must_use]
    pub fn poly_group(&self, title: &str) -> Option<GroupId> {
        self.poly.get(&normalize(title)).copied()
    }

    /// Look up a raw Opinion title.
    #[must_use]
    pub fn opinion_group(&self, title: &str) -> Option<GroupId> {
        self.opinion.get(&normalize(title)).copied()
    }

    /// Curated Polymarket title of a group.
    #[must_use]
    pub fn group_title(&self, id: GroupId) -> Option<&str> {
        self.titles.get(id.index()).map(String::as_str)
    }

    /// Number of groups indexed.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.titles.len()
    }
}

fn register_truncations(map: &mut HashMap<String, GroupId>, title: &str, id: GroupId) {
    let mut remaining = title;
    while let Some(idx) = remaining.rfind(SUFFIX_SEPARATOR) {
        if idx == 0 {
            break;
        }
        remaining = &remaining[..idx];
        map.entry(normalize(remaining)).or_insert(id);
    }
}

fn first_hit(map: &HashMap<String, GroupId>, candidates: Vec<String>) -> Option<GroupId> {
    candidates
        .iter()
        .find_map(|candidate| map.get(&normalize(candidate)).copied())
}
