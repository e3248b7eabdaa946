use std::collections::{BTreeMap, BTreeSet};

use log::info;

use super::types::PairOutcomes;
use crate::domain::Competitor;

/// Directed dominance relation: `winner -> {losers}`.
///
/// Edges are plain presence, never counts. A competitor is a key only while
/// it dominates someone; competitors that are merely dominated show up in the
/// value sets. Self-loops are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DominanceGraph {
    edges: BTreeMap<Competitor, BTreeSet<Competitor>>,
}

impl DominanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from net outcomes. Tied pairs add nothing.
    pub fn from_outcomes(outcomes: &PairOutcomes) -> Self {
        let mut graph = Self::new();

        for (key, &score) in outcomes {
            if let Some((winner, loser)) = key.resolve(score) {
                graph.add(winner.clone(), loser.clone());
            }
        }

        info!(
            "Built dominance graph with {} edges over {} competitors",
            graph.edge_count(),
            graph.nodes().len()
        );
        graph
    }

    /// Adds `winner -> loser`. Returns whether the edge is new.
    pub fn add(&mut self, winner: Competitor, loser: Competitor) -> bool {
        if winner == loser {
            return false;
        }
        self.edges.entry(winner).or_default().insert(loser)
    }

    /// Removes `winner -> loser`. The winner's key stays until `prune_empty`.
    pub fn remove(&mut self, winner: &Competitor, loser: &Competitor) -> bool {
        self.edges
            .get_mut(winner)
            .is_some_and(|losers| losers.remove(loser))
    }

    pub fn dominates(&self, winner: &Competitor, loser: &Competitor) -> bool {
        self.edges
            .get(winner)
            .is_some_and(|losers| losers.contains(loser))
    }

    /// Competitors dominated by `winner`, sorted
    pub fn dominated_by<'a>(
        &'a self,
        winner: &Competitor,
    ) -> impl Iterator<Item = &'a Competitor> + use<'a> {
        self.edges.get(winner).into_iter().flatten()
    }

    /// Competitors that dominate at least one other
    pub fn dominators(&self) -> impl Iterator<Item = &Competitor> {
        self.edges
            .iter()
            .filter(|(_, losers)| !losers.is_empty())
            .map(|(winner, _)| winner)
    }

    /// Every competitor on either end of an edge, sorted
    pub fn nodes(&self) -> BTreeSet<Competitor> {
        let mut nodes = BTreeSet::new();

        for (winner, losers) in &self.edges {
            if losers.is_empty() {
                continue;
            }
            nodes.insert(winner.clone());
            nodes.extend(losers.iter().cloned());
        }

        nodes
    }

    /// All edges as `(winner, loser)`, sorted
    pub fn edges(&self) -> impl Iterator<Item = (&Competitor, &Competitor)> {
        self.edges
            .iter()
            .flat_map(|(winner, losers)| losers.iter().map(move |loser| (winner, loser)))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }

    /// Drops keys whose dominated set became empty
    pub fn prune_empty(&mut self) {
        self.edges.retain(|_, losers| !losers.is_empty());
    }

    pub fn key_count(&self) -> usize {
        self.edges.len()
    }
}

impl<W, L> FromIterator<(W, L)> for DominanceGraph
where
    W: Into<Competitor>,
    L: Into<Competitor>,
{
    fn from_iter<I: IntoIterator<Item = (W, L)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (winner, loser) in iter {
            graph.add(winner.into(), loser.into());
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Match;
    use crate::ranking::aggregation::aggregate_outcomes;

    fn c(name: &str) -> Competitor {
        Competitor::from(name)
    }

    #[test]
    fn test_edges_point_from_net_winner() {
        let matches = vec![
            Match::new("b", "a"),
            Match::new("b", "a"),
            Match::new("a", "b"),
            Match::new("c", "d"),
        ];

        let graph = DominanceGraph::from_outcomes(&aggregate_outcomes(&matches));

        assert!(graph.dominates(&c("b"), &c("a")));
        assert!(!graph.dominates(&c("a"), &c("b")));
        assert!(graph.dominates(&c("c"), &c("d")));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_tied_pairs_are_absent_from_graph() {
        let matches = vec![Match::new("a", "b"), Match::new("b", "a")];

        let graph = DominanceGraph::from_outcomes(&aggregate_outcomes(&matches));

        assert!(graph.is_empty());
        assert_eq!(graph.key_count(), 0);
        assert!(graph.nodes().is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut graph = DominanceGraph::new();

        assert!(graph.add(c("a"), c("b")));
        assert!(!graph.add(c("a"), c("b")));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loops_are_rejected() {
        let mut graph = DominanceGraph::new();

        assert!(!graph.add(c("a"), c("a")));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_nodes_include_dominated_only_competitors() {
        let graph: DominanceGraph = [("a", "b")].into_iter().collect();

        let nodes: Vec<String> = graph.nodes().iter().map(|n| n.to_string()).collect();
        assert_eq!(nodes, vec!["a", "b"]);
        assert_eq!(graph.key_count(), 1);
    }

    #[test]
    fn test_remove_and_prune() {
        let mut graph: DominanceGraph = [("a", "b"), ("c", "b")].into_iter().collect();

        assert!(graph.remove(&c("a"), &c("b")));
        assert!(!graph.remove(&c("a"), &c("b")));
        assert_eq!(graph.key_count(), 2);

        graph.prune_empty();
        assert_eq!(graph.key_count(), 1);
        assert_eq!(graph.dominators().collect::<Vec<_>>(), vec![&c("c")]);
    }

    #[test]
    fn test_edges_are_sorted() {
        let graph: DominanceGraph = [("c", "a"), ("a", "c"), ("a", "b")].into_iter().collect();

        let edges: Vec<(&str, &str)> = graph
            .edges()
            .map(|(w, l)| (w.as_str(), l.as_str()))
            .collect();
        assert_eq!(edges, vec![("a", "b"), ("a", "c"), ("c", "a")]);
    }
}
