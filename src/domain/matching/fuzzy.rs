//! Keyword-similarity matching for positions the curated table misses.
//!
//! Every free cross-venue pair is scored with the Jaccard similarity of the
//! two keyword sets. Pairs at or above the threshold are accepted greedily in
//! descending score order, skipping any pair whose positions are already
//! taken. This is a maximal matching, not a maximum-weight one: at tens of
//! positions with mostly disjoint keyword clusters the two rarely differ.

use std::collections::HashSet;

use tracing::debug;

use super::{assemble, Claims, MatchMethod, MatchResult, Pairing};
use crate::domain::position::{OpinionPosition, PolyPosition};
use crate::domain::text::extract_keywords;

/// Jaccard similarity of two keyword sets. Zero when both are empty.
#[must_use]
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

/// Match positions using keyword similarity only.
#[must_use]
pub fn match_fuzzy(
    poly: &[PolyPosition],
    opinion: &[OpinionPosition],
    threshold: f64,
) -> MatchResult {
    let mut claims = Claims::new(poly.len(), opinion.len());
    let pairings = pair_fuzzy(poly, opinion, threshold, &mut claims);
    assemble(poly, opinion, pairings, &claims)
}

struct Candidate {
    poly_index: usize,
    opinion_index: usize,
    score: f64,
}

pub(crate) fn pair_fuzzy(
    poly: &[PolyPosition],
    opinion: &[OpinionPosition],
    threshold: f64,
    claims: &mut Claims,
) -> Vec<Pairing> {
    let poly_keywords: Vec<Option<HashSet<String>>> = poly
        .iter()
        .zip(&claims.poly)
        .map(|(p, &claimed)| (!claimed).then(|| extract_keywords(&p.keyword_text())))
        .collect();
    let opinion_keywords: Vec<Option<HashSet<String>>> = opinion
        .iter()
        .zip(&claims.opinion)
        .map(|(o, &claimed)| (!claimed).then(|| extract_keywords(&o.keyword_text())))
        .collect();

    let mut candidates = Vec::new();
    for (pi, pk) in poly_keywords.iter().enumerate() {
        let Some(pk) = pk else { continue };
        for (oi, ok) in opinion_keywords.iter().enumerate() {
            let Some(ok) = ok else { continue };
            let score = jaccard_similarity(pk, ok);
            if score >= threshold {
                candidates.push(Candidate {
                    poly_index: pi,
                    opinion_index: oi,
                    score,
                });
            }
        }
    }

    // Stable sort: equal scores keep input order.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut pairings = Vec::new();
    for candidate in candidates {
        let (pi, oi) = (candidate.poly_index, candidate.opinion_index);
        if !claims.is_free(pi, oi) {
            continue;
        }
        claims.claim(pi, oi);

        let title = poly[pi]
            .display_title()
            .unwrap_or(&opinion[oi].root_market_title)
            .to_string();

        debug!(
            poly_index = pi,
            opinion_index = oi,
            score = candidate.score,
            "Fuzzy match"
        );
        pairings.push(Pairing {
            poly_index: pi,
            opinion_index: oi,
            score: candidate.score,
            method: MatchMethod::Fuzzy,
            title,
        });
    }

    pairings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::TokenId;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn poly(asset: &str, title: &str) -> PolyPosition {
        PolyPosition {
            asset: TokenId::new(asset),
            title: title.into(),
            ..Default::default()
        }
    }

    fn opinion(token: &str, root: &str) -> OpinionPosition {
        OpinionPosition {
            token_id: TokenId::new(token),
            root_market_title: root.into(),
            ..Default::default()
        }
    }

    #[test]
    fn jaccard_of_identical_and_disjoint_sets() {
        let a = set(&["fed", "cut", "march"]);
        assert_eq!(jaccard_similarity(&a, &a), 1.0);
        assert_eq!(jaccard_similarity(&a, &set(&["bitcoin"])), 0.0);
    }

    #[test]
    fn jaccard_of_empty_sets_is_zero() {
        assert_eq!(jaccard_similarity(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard_similarity(&set(&["fed"]), &set(&[])), 0.0);
    }

    #[test]
    fn jaccard_partial_overlap() {
        let a = set(&["fed", "cut", "march"]);
        let b = set(&["fed", "cut", "june"]);
        assert_eq!(jaccard_similarity(&a, &b), 0.5);
    }

    #[test]
    fn greedy_takes_highest_score_first() {
        let polys = vec![
            poly("p0", "bitcoin price december"),
            poly("p1", "bitcoin price december above"),
        ];
        let opinions = vec![opinion("o0", "bitcoin price december above")];

        let result = match_fuzzy(&polys, &opinions, 0.35);

        assert_eq!(result.matched.len(), 1);
        assert_eq!(result.matched[0].id, "match-1-0");
        assert_eq!(result.matched[0].score, 1.0);
        assert_eq!(result.unmatched_poly[0].asset.as_str(), "p0");
    }

    #[test]
    fn greedy_is_not_maximum_weight() {
        // Best-first grabs (p0, o0) at 0.75 and strands p1, even though
        // pairing (p0, o1) + (p1, o0) would match both.
        let polys = vec![poly("p0", "alpha beta gamma delta"), poly("p1", "alpha beta")];
        let opinions = vec![
            opinion("o0", "alpha beta gamma"),
            opinion("o1", "alpha beta gamma delta epsilon zeta"),
        ];

        let result = match_fuzzy(&polys, &opinions, 0.35);

        let ids: Vec<_> = result.matched.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["match-0-0"]);
        assert_eq!(result.unmatched_poly.len(), 1);
        assert_eq!(result.unmatched_opinion.len(), 1);
    }

    #[test]
    fn ties_keep_input_order() {
        let polys = vec![poly("p0", "election winner"), poly("p1", "election winner")];
        let opinions = vec![opinion("o0", "election winner")];

        for _ in 0..5 {
            let result = match_fuzzy(&polys, &opinions, 0.35);
            assert_eq!(result.matched[0].id, "match-0-0");
        }
    }

    #[test]
    fn title_falls_back_to_opinion_root() {
        let polys = vec![PolyPosition {
            market: "bitcoin december".into(),
            ..Default::default()
        }];
        let opinions = vec![opinion("o0", "Bitcoin December")];

        let result = match_fuzzy(&polys, &opinions, 0.35);

        assert_eq!(result.matched[0].title, "Bitcoin December");
    }

    #[test]
    fn skips_already_claimed_positions() {
        let polys = vec![poly("p0", "bitcoin december")];
        let opinions = vec![opinion("o0", "bitcoin december")];
        let mut claims = Claims::new(1, 1);
        claims.poly[0] = true;

        let pairings = pair_fuzzy(&polys, &opinions, 0.35, &mut claims);

        assert!(pairings.is_empty());
    }
}
