use log::info;

use super::graph::DominanceGraph;
use crate::domain::Competitor;

/// Extends the graph in place to its transitive closure.
///
/// Floyd-Warshall: `middle` is the outer loop so every edge found through one
/// intermediate is visible to the later ones. Edges are only ever added and
/// `from -> from` is never created. O(n^3) in the number of competitors.
pub fn close_transitively(graph: &mut DominanceGraph) {
    let nodes: Vec<_> = graph.nodes().into_iter().collect();
    let before = graph.edge_count();

    for middle in &nodes {
        for from in &nodes {
            if from == middle || !graph.dominates(from, middle) {
                continue;
            }
            extend_through(graph, from, middle, &nodes);
        }
    }

    info!(
        "Transitive closure over {} competitors: {} -> {} edges",
        nodes.len(),
        before,
        graph.edge_count()
    );
}

fn extend_through(
    graph: &mut DominanceGraph,
    from: &Competitor,
    middle: &Competitor,
    nodes: &[Competitor],
) {
    for to in nodes {
        if to == from || !graph.dominates(middle, to) {
            continue;
        }
        graph.add(from.clone(), to.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(name: &str) -> Competitor {
        Competitor::from(name)
    }

    fn assert_transitive(graph: &DominanceGraph) {
        for a in graph.nodes() {
            for b in graph.nodes() {
                for d in graph.nodes() {
                    if a != d && graph.dominates(&a, &b) && graph.dominates(&b, &d) {
                        assert!(graph.dominates(&a, &d), "{a} -> {b} -> {d} not closed");
                    }
                }
            }
        }
    }

    #[test]
    fn test_chain_gets_shortcut() {
        let mut graph: DominanceGraph = [("a", "b"), ("b", "c")].into_iter().collect();

        close_transitively(&mut graph);

        assert!(graph.dominates(&c("a"), &c("c")));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_long_chain_is_fully_closed() {
        let mut graph: DominanceGraph =
            [("d", "e"), ("a", "b"), ("c", "d"), ("b", "c")].into_iter().collect();

        close_transitively(&mut graph);

        // 5 nodes in a total order: 4 + 3 + 2 + 1 edges
        assert_eq!(graph.edge_count(), 10);
        assert!(graph.dominates(&c("a"), &c("e")));
        assert_transitive(&graph);
    }

    #[test]
    fn test_cycle_closure_has_no_self_loops() {
        let mut graph: DominanceGraph = [("a", "b"), ("b", "c"), ("c", "a")].into_iter().collect();

        close_transitively(&mut graph);

        for node in graph.nodes() {
            assert!(!graph.dominates(&node, &node));
        }
        // every ordered pair of distinct nodes
        assert_eq!(graph.edge_count(), 6);
        assert_transitive(&graph);
    }

    #[test]
    fn test_closure_is_idempotent() {
        let mut graph: DominanceGraph =
            [("a", "b"), ("b", "c"), ("x", "a"), ("c", "y")].into_iter().collect();

        close_transitively(&mut graph);
        let once = graph.clone();
        close_transitively(&mut graph);

        assert_eq!(graph, once);
    }

    #[test]
    fn test_empty_graph_stays_empty() {
        let mut graph = DominanceGraph::new();
        close_transitively(&mut graph);
        assert!(graph.is_empty());
    }
}
