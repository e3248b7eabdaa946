use std::fmt::Write;

use crate::ranking::DominanceGraph;

/// Renders the graph as a Graphviz digraph, one `winner -> loser` per line.
///
/// Edges come out sorted. Identifiers that are not plain words are quoted.
pub fn render_dot(graph: &DominanceGraph, name: &str) -> String {
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "digraph {} {{", dot_id(name));
    for (winner, loser) in graph.edges() {
        let _ = writeln!(out, "  {} -> {}", dot_id(winner.as_str()), dot_id(loser.as_str()));
    }
    out.push_str("}\n");

    out
}

fn dot_id(id: &str) -> String {
    if is_plain_id(id) {
        id.to_string()
    } else {
        format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

fn is_plain_id(id: &str) -> bool {
    if is_keyword(id) {
        return false;
    }
    let starts_ok = id
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_ok && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// DOT keywords are case-insensitive
fn is_keyword(id: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sorted_edges() {
        let graph: DominanceGraph = [("b", "c"), ("a", "c"), ("a", "b")].into_iter().collect();

        let dot = render_dot(&graph, "stats");

        assert_eq!(dot, "digraph stats {\n  a -> b\n  a -> c\n  b -> c\n}\n");
    }

    #[test]
    fn test_render_empty_graph() {
        assert_eq!(render_dot(&DominanceGraph::new(), "stats"), "digraph stats {\n}\n");
    }

    #[test]
    fn test_names_needing_quotes() {
        let graph: DominanceGraph = [("Jan Kowalski", "say \"hi\""), ("x_1", "2nd")]
            .into_iter()
            .collect();

        let dot = render_dot(&graph, "pool league");

        assert!(dot.starts_with("digraph \"pool league\" {\n"));
        assert!(dot.contains("  \"Jan Kowalski\" -> \"say \\\"hi\\\"\"\n"));
        assert!(dot.contains("  x_1 -> \"2nd\"\n"));
    }

    #[test]
    fn test_keywords_are_quoted() {
        let graph: DominanceGraph = [("Node", "edge"), ("graph", "bob")].into_iter().collect();

        let dot = render_dot(&graph, "strict");

        assert_eq!(
            dot,
            "digraph \"strict\" {\n  \"Node\" -> \"edge\"\n  \"graph\" -> bob\n}\n"
        );
    }

    #[test]
    fn test_keyword_prefixed_names_stay_plain() {
        let graph: DominanceGraph = [("nodes", "Strictly")].into_iter().collect();

        assert_eq!(render_dot(&graph, "stats"), "digraph stats {\n  nodes -> Strictly\n}\n");
    }
}
