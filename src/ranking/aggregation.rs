use log::{debug, info};

use super::types::{PairKey, PairOutcomes};
use crate::domain::Match;

/// Reduces raw matches to one net score per unordered pair
pub fn aggregate_outcomes(matches: &[Match]) -> PairOutcomes {
    let mut outcomes = PairOutcomes::new();
    let mut self_matches = 0;

    for game in matches {
        if game.is_self_match() {
            self_matches += 1;
            continue;
        }

        let (key, contribution) = PairKey::canonical(&game.winner, &game.loser);
        *outcomes.entry(key).or_insert(0) += contribution;
    }

    if self_matches > 0 {
        debug!("Ignored {} matches of a competitor against itself", self_matches);
    }
    info!(
        "Aggregated {} matches into {} pairs",
        matches.len(),
        outcomes.len()
    );

    outcomes
}

pub fn count_tied_pairs(outcomes: &PairOutcomes) -> usize {
    outcomes.values().filter(|&&score| score == 0).count()
}
