use std::collections::BTreeMap;

use serde::Serialize;

use super::graph::DominanceGraph;
use crate::domain::Competitor;

pub type NetScore = i64;
pub type Level = usize;

/// Net outcome per unordered pair. Positive favours `PairKey::first`.
pub type PairOutcomes = BTreeMap<PairKey, NetScore>;

/// Level -> competitors at that level, sorted.
pub type LevelMap = BTreeMap<Level, Vec<Competitor>>;

/// Unordered pair of competitors, stored with `first < second`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    pub first: Competitor,
    pub second: Competitor,
}

impl PairKey {
    /// Canonicalizes `(winner, loser)` into a key and the score contribution
    /// of this single win: +1 if the winner is `first`, -1 otherwise.
    pub fn canonical(winner: &Competitor, loser: &Competitor) -> (Self, NetScore) {
        if loser < winner {
            (Self::ordered(loser, winner), -1)
        } else {
            (Self::ordered(winner, loser), 1)
        }
    }

    fn ordered(first: &Competitor, second: &Competitor) -> Self {
        Self {
            first: first.clone(),
            second: second.clone(),
        }
    }

    /// Net winner and loser for a score, or `None` for a tie
    pub fn resolve(&self, score: NetScore) -> Option<(&Competitor, &Competitor)> {
        match score.signum() {
            1 => Some((&self.first, &self.second)),
            -1 => Some((&self.second, &self.first)),
            _ => None,
        }
    }
}

/// Output of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub graph: DominanceGraph,
    pub levels: LevelMap,
}

/// Counters collected while the pipeline runs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineStats {
    pub matches: usize,
    pub pairs: usize,
    pub tied_pairs: usize,
    pub direct_edges: usize,
    pub closed_edges: usize,
    pub mutual_pairs_removed: usize,
    pub final_edges: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keeps_sorted_winner_first() {
        let (key, sign) = PairKey::canonical(&"a".into(), &"b".into());
        assert_eq!(key.first.as_str(), "a");
        assert_eq!(key.second.as_str(), "b");
        assert_eq!(sign, 1);
    }

    #[test]
    fn test_canonical_swaps_and_flips_sign() {
        let (key, sign) = PairKey::canonical(&"b".into(), &"a".into());
        assert_eq!(key.first.as_str(), "a");
        assert_eq!(key.second.as_str(), "b");
        assert_eq!(sign, -1);
    }

    #[test]
    fn test_resolve_by_sign() {
        let (key, _) = PairKey::canonical(&"a".into(), &"b".into());

        let (winner, loser) = key.resolve(3).unwrap();
        assert_eq!((winner.as_str(), loser.as_str()), ("a", "b"));

        let (winner, loser) = key.resolve(-2).unwrap();
        assert_eq!((winner.as_str(), loser.as_str()), ("b", "a"));

        assert!(key.resolve(0).is_none());
    }
}
