use log::info;

use super::graph::DominanceGraph;
use crate::domain::Competitor;

/// Deletes both edges of every pair that dominate each other.
///
/// The pair becomes incomparable; neither direction is kept. Only 2-cycles
/// are handled here, and the graph is not re-closed afterwards. Keys left
/// without any dominated competitor are dropped. Returns the number of
/// pairs removed.
pub fn remove_mutual_pairs(graph: &mut DominanceGraph) -> usize {
    let mutual = find_mutual_pairs(graph);

    for (first, second) in &mutual {
        graph.remove(first, second);
        graph.remove(second, first);
    }
    graph.prune_empty();

    info!(
        "Removed {} mutually dominating pairs, {} edges left from {} dominators",
        mutual.len(),
        graph.edge_count(),
        graph.key_count()
    );
    mutual.len()
}

/// Pairs with edges in both directions, each reported once as `(smaller, larger)`
pub fn find_mutual_pairs(graph: &DominanceGraph) -> Vec<(Competitor, Competitor)> {
    graph
        .edges()
        .filter(|(winner, loser)| winner < loser && graph.dominates(loser, winner))
        .map(|(winner, loser)| (winner.clone(), loser.clone()))
        .collect()
}
