use log::info;

use super::aggregation::{aggregate_outcomes, count_tied_pairs};
use super::closure::close_transitively;
use super::cycles::remove_mutual_pairs;
use super::graph::DominanceGraph;
use super::leveling::assign_levels;
use super::types::{PipelineStats, Ranking};
use crate::domain::Match;
use crate::errors::RankingError;

/// Runs the full pipeline over one batch of matches
pub fn compute_ranking(matches: &[Match]) -> Result<Ranking, RankingError> {
    compute_ranking_with_stats(matches).map(|(ranking, _)| ranking)
}

/// Same as [`compute_ranking`], also returning per-stage counters
pub fn compute_ranking_with_stats(
    matches: &[Match],
) -> Result<(Ranking, PipelineStats), RankingError> {
    let mut stats = PipelineStats {
        matches: matches.len(),
        ..PipelineStats::default()
    };

    let graph = build_resolved_graph(matches, &mut stats);
    let levels = assign_levels(&graph)?;

    info!(
        "Ranking complete: {} edges, {} levels",
        stats.final_edges,
        levels.len()
    );
    Ok((Ranking { graph, levels }, stats))
}

/// Aggregation, graph building, closure and mutual-pair removal.
/// Never fails; only the leveler can.
pub fn build_resolved_graph(matches: &[Match], stats: &mut PipelineStats) -> DominanceGraph {
    let outcomes = aggregate_outcomes(matches);
    stats.pairs = outcomes.len();
    stats.tied_pairs = count_tied_pairs(&outcomes);

    let mut graph = DominanceGraph::from_outcomes(&outcomes);
    stats.direct_edges = graph.edge_count();

    close_transitively(&mut graph);
    stats.closed_edges = graph.edge_count();

    stats.mutual_pairs_removed = remove_mutual_pairs(&mut graph);
    stats.final_edges = graph.edge_count();

    graph
}
