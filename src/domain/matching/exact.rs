//! Curated-table matching.
//!
//! Positions on each venue are resolved to a [`GroupId`] through the
//! [`LookupIndex`], grouped, and paired first-fit within each shared group.
//! First-fit is not similarity-optimal, but a group rarely holds more than
//! one position per venue.

use std::collections::HashMap;

use tracing::debug;

use super::{assemble, Claims, MatchMethod, MatchResult, Pairing};
use crate::domain::id::GroupId;
use crate::domain::lookup::LookupIndex;
use crate::domain::position::{OpinionPosition, PolyPosition};

/// Score assigned to curated matches.
pub const EXACT_SCORE: f64 = 1.0;

/// Match positions using only the curated lookup table.
#[must_use]
pub fn match_exact(
    index: &LookupIndex,
    poly: &[PolyPosition],
    opinion: &[OpinionPosition],
) -> MatchResult {
    let mut claims = Claims::new(poly.len(), opinion.len());
    let pairings = pair_exact(index, poly, opinion, &mut claims);
    assemble(poly, opinion, pairings, &claims)
}

pub(crate) fn pair_exact(
    index: &LookupIndex,
    poly: &[PolyPosition],
    opinion: &[OpinionPosition],
    claims: &mut Claims,
) -> Vec<Pairing> {
    if poly.is_empty() || opinion.is_empty() {
        return Vec::new();
    }

    // Polymarket groups are visited in order of first appearance.
    let mut poly_groups: Vec<GroupId> = Vec::new();
    let mut poly_by_group: HashMap<GroupId, Vec<usize>> = HashMap::new();
    for (idx, position) in poly.iter().enumerate() {
        let Some(group) = index.find_poly_group(position) else {
            continue;
        };
        poly_by_group
            .entry(group)
            .or_insert_with(|| {
                poly_groups.push(group);
                Vec::new()
            })
            .push(idx);
    }

    let mut opinion_by_group: HashMap<GroupId, Vec<usize>> = HashMap::new();
    for (idx, position) in opinion.iter().enumerate() {
        if let Some(group) = index.find_opinion_group(position) {
            opinion_by_group.entry(group).or_default().push(idx);
        }
    }

    let mut pairings = Vec::new();
    for group in poly_groups {
        let Some(opinion_entries) = opinion_by_group.get(&group) else {
            continue;
        };

        for &pi in &poly_by_group[&group] {
            let Some(&oi) = opinion_entries
                .iter()
                .find(|&&oi| claims.is_free(pi, oi))
            else {
                continue;
            };
            claims.claim(pi, oi);

            let title = poly[pi]
                .display_title()
                .or_else(|| index.group_title(group))
                .unwrap_or_default()
                .to_string();

            debug!(%group, poly_index = pi, opinion_index = oi, "Curated match");
            pairings.push(Pairing {
                poly_index: pi,
                opinion_index: oi,
                score: EXACT_SCORE,
                method: MatchMethod::Exact { group },
                title,
            });
        }
    }

    pairings
}
