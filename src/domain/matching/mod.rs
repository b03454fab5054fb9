//! Cross-venue position matching.
//!
//! Two matchers pair Polymarket positions with Opinion positions:
//!
//! - [`exact`] - curated lookup table, score 1.0
//! - [`fuzzy`] - keyword Jaccard similarity above a threshold
//!
//! [`reconcile`] runs the exact matcher first and hands whatever is left to
//! the fuzzy matcher. Every matcher is a pure, total function: each input
//! position ends up either in exactly one pair or in an unmatched list.

pub mod exact;
pub mod fuzzy;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::id::GroupId;
use super::lookup::LookupIndex;
use super::position::{OpinionPosition, PolyPosition};

pub use exact::match_exact;
pub use fuzzy::{jaccard_similarity, match_fuzzy};

/// How a pair was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MatchMethod {
    /// Both positions resolved to the same curated group.
    Exact { group: GroupId },
    /// Keyword similarity cleared the threshold.
    Fuzzy,
}

/// One Polymarket position paired with one Opinion position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedPosition {
    /// Stable identifier, `match-{poly_index}-{opinion_index}`.
    pub id: String,
    /// Index of the Polymarket position in the input list.
    pub poly_index: usize,
    /// Index of the Opinion position in the input list.
    pub opinion_index: usize,
    /// 1.0 for curated matches, the Jaccard score for fuzzy ones.
    pub score: f64,
    pub method: MatchMethod,
    /// Title shown for the pair.
    pub title: String,
    pub poly: PolyPosition,
    pub opinion: OpinionPosition,
}

/// Partition of the input positions into pairs and leftovers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched: Vec<MatchedPosition>,
    pub unmatched_poly: Vec<PolyPosition>,
    pub unmatched_opinion: Vec<OpinionPosition>,
}

impl MatchResult {
    /// Number of input positions this result accounts for.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.matched.len() * 2 + self.unmatched_poly.len() + self.unmatched_opinion.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position_count() == 0
    }
}

/// Matching configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    /// Minimum Jaccard similarity for a fuzzy pair (inclusive).
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Run the fuzzy matcher over positions the curated table left unmatched.
    #[serde(default = "default_true")]
    pub fuzzy_fallback: bool,
}

fn default_fuzzy_threshold() -> f64 {
    0.35
}

const fn default_true() -> bool {
    true
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            fuzzy_fallback: default_true(),
        }
    }
}

/// A pair chosen by one of the matchers, before positions are cloned out.
#[derive(Debug, Clone)]
pub(crate) struct Pairing {
    pub poly_index: usize,
    pub opinion_index: usize,
    pub score: f64,
    pub method: MatchMethod,
    pub title: String,
}

/// Tracks which input positions have been claimed by a pair.
#[derive(Debug, Clone)]
pub(crate) struct Claims {
    pub poly: Vec<bool>,
    pub opinion: Vec<bool>,
}

impl Claims {
    pub fn new(poly_len: usize, opinion_len: usize) -> Self {
        Self {
            poly: vec![false; poly_len],
            opinion: vec![false; opinion_len],
        }
    }

    pub fn is_free(&self, poly_index: usize, opinion_index: usize) -> bool {
        !self.poly[poly_index] && !self.opinion[opinion_index]
    }

    pub fn claim(&mut self, poly_index: usize, opinion_index: usize) {
        self.poly[poly_index] = true;
        self.opinion[opinion_index] = true;
    }
}

/// Build a [`MatchResult`] from chosen pairings.
pub(crate) fn assemble(
    poly: &[PolyPosition],
    opinion: &[OpinionPosition],
    pairings: Vec<Pairing>,
    claims: &Claims,
) -> MatchResult {
    let matched = pairings
        .into_iter()
        .map(|p| MatchedPosition {
            id: format!("match-{}-{}", p.poly_index, p.opinion_index),
            poly_index: p.poly_index,
            opinion_index: p.opinion_index,
            score: p.score,
            method: p.method,
            title: p.title,
            poly: poly[p.poly_index].clone(),
            opinion: opinion[p.opinion_index].clone(),
        })
        .collect();

    let unmatched_poly = poly
        .iter()
        .zip(&claims.poly)
        .filter(|(_, claimed)| !**claimed)
        .map(|(p, _)| p.clone())
        .collect();
    let unmatched_opinion = opinion
        .iter()
        .zip(&claims.opinion)
        .filter(|(_, claimed)| !**claimed)
        .map(|(o, _)| o.clone())
        .collect();

    MatchResult {
        matched,
        unmatched_poly,
        unmatched_opinion,
    }
}

/// Match positions using the curated table first, then fuzzy similarity.
#[must_use]
pub fn reconcile(
    index: &LookupIndex,
    poly: &[PolyPosition],
    opinion: &[OpinionPosition],
    config: &MatchingConfig,
) -> MatchResult {
    let mut claims = Claims::new(poly.len(), opinion.len());

    let mut pairings = exact::pair_exact(index, poly, opinion, &mut claims);
    let exact_count = pairings.len();

    if config.fuzzy_fallback {
        pairings.extend(fuzzy::pair_fuzzy(
            poly,
            opinion,
            config.fuzzy_threshold,
            &mut claims,
        ));
    }

    let result = assemble(poly, opinion, pairings, &claims);

    info!(
        exact = exact_count,
        fuzzy = result.matched.len() - exact_count,
        unmatched_poly = result.unmatched_poly.len(),
        unmatched_opinion = result.unmatched_opinion.len(),
        "Reconciled positions"
    );

    result
}
