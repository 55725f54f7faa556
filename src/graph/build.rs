//! src/graph/build.rs
//!
//! Turns a parsed `GraphDescription` into an undirected petgraph structure.

use std::collections::HashMap;

use petgraph::Undirected;
use petgraph::graph::{Graph, NodeIndex};

use crate::parse::GraphDescription;

/// Undirected graph: vertex names as node weights, integer edge weights.
pub type VertexGraph = Graph<String, i64, Undirected>;

/// Build the graph from a parsed description.
///
/// Endpoints of an edge are created explicitly before the edge is recorded,
/// so every vertex referenced anywhere in the file exists as a first-class
/// node. Isolated vertices are added only when no edge already created them.
/// Re-declaring an edge between the same pair updates its weight rather than
/// adding a parallel edge.
pub fn build(desc: &GraphDescription) -> VertexGraph {
    let mut graph = VertexGraph::default();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    for edge in &desc.edges {
        let a = ensure_vertex(&mut graph, &mut indices, &edge.origin);
        let b = ensure_vertex(&mut graph, &mut indices, &edge.destination);
        graph.update_edge(a, b, edge.weight);
    }

    for name in &desc.isolated {
        ensure_vertex(&mut graph, &mut indices, name);
    }

    graph
}

/// Look up a vertex by name, inserting it if absent.
fn ensure_vertex<'a>(
    graph: &mut VertexGraph,
    indices: &mut HashMap<&'a str, NodeIndex>,
    name: &'a str,
) -> NodeIndex {
    *indices
        .entry(name)
        .or_insert_with(|| graph.add_node(name.to_string()))
}

/// Whether the graph admits a two-coloring.
///
/// `is_bipartite_undirected` only inspects the component reachable from its
/// start node, so the check runs once per node; the whole graph is bipartite
/// when every component is. An empty graph counts as bipartite.
pub fn is_bipartite(graph: &VertexGraph) -> bool {
    graph
        .node_indices()
        .all(|n| petgraph::algo::is_bipartite_undirected(graph, n))
}

/// Number of vertices that ended up with no incident edges.
pub fn isolated_count(graph: &VertexGraph) -> usize {
    graph
        .node_indices()
        .filter(|&n| graph.neighbors(n).next().is_none())
        .count()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::parse;

    fn names(graph: &VertexGraph) -> BTreeSet<&str> {
        graph
            .node_indices()
            .map(|n| graph[n].as_str())
            .collect()
    }

    #[test]
    fn edge_endpoints_become_vertices() {
        let desc = parse::parse("MyGraph\nA -- B 5\nB -- C 2\nD\n").unwrap();
        let graph = build(&desc);
        assert_eq!(names(&graph), BTreeSet::from(["A", "B", "C", "D"]));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn no_vertex_is_duplicated() {
        let desc = parse::parse("G\nA -- B 1\nB -- C 2\nA\nB\nC\n").unwrap();
        let graph = build(&desc);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn redeclared_edge_updates_weight() {
        let desc = parse::parse("G\nA -- B 1\nA -- B 9\n").unwrap();
        let graph = build(&desc);
        assert_eq!(graph.edge_count(), 1);
        let e = graph.edge_indices().next().unwrap();
        assert_eq!(graph[e], 9);
    }

    #[test]
    fn empty_description_builds_empty_graph() {
        let desc = parse::parse("OnlyAName\n").unwrap();
        let graph = build(&desc);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn isolated_only_file_builds_edgeless_graph() {
        let desc = parse::parse("G\nX\nY\nZ\n").unwrap();
        let graph = build(&desc);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(isolated_count(&graph), 3);
    }

    #[test]
    fn even_structures_are_bipartite() {
        let path = build(&parse::parse("G\nA -- B 1\nB -- C 2\nD\n").unwrap());
        assert!(is_bipartite(&path));
        let empty = build(&parse::parse("OnlyAName\n").unwrap());
        assert!(is_bipartite(&empty));
    }

    #[test]
    fn odd_cycle_is_not_bipartite() {
        let triangle = build(&parse::parse("G\nA -- B 1\nB -- C 2\nC -- A 3\n").unwrap());
        assert!(!is_bipartite(&triangle));
    }

    #[test]
    fn one_odd_component_spoils_bipartiteness() {
        // A square (bipartite) next to a triangle (not).
        let text = "G\nA -- B 1\nB -- C 1\nC -- D 1\nD -- A 1\nX -- Y 1\nY -- Z 1\nZ -- X 1\n";
        let graph = build(&parse::parse(text).unwrap());
        assert!(!is_bipartite(&graph));
    }

    #[test]
    fn isolated_count_ignores_connected_vertices() {
        let desc = parse::parse("G\nA -- B 1\nD\n").unwrap();
        let graph = build(&desc);
        assert_eq!(isolated_count(&graph), 1);
    }
}
