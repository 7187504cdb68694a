//!
//! Common definition and utility functions for paths and edge lists
//!
use crate::graph::{EdgeIndex, Graph};
use crate::weights::WeightTable;
use fnv::FnvHashSet as HashSet;
use itertools::Itertools;

///
/// Calculate total weight of a list of edges
///
pub fn total_weight(weights: &WeightTable, edges: &[EdgeIndex]) -> f64 {
    edges.iter().map(|e| weights.get(e.from, e.to)).sum()
}

///
/// Every edge as the arcs it can be traversed along
///
/// An undirected edge `u - v` gives both `u->v` and `v->u` (a self-loop gives one arc).
///
pub fn arcs<G: Graph>(graph: &G) -> Vec<EdgeIndex> {
    let edges = graph.all_edges();
    if graph.is_directed() {
        return edges;
    }
    edges
        .into_iter()
        .flat_map(|e| {
            if e.from == e.to {
                vec![e]
            } else {
                vec![e, EdgeIndex::new(e.to, e.from)]
            }
        })
        .collect()
}

///
/// Convert a path given as node indices `[v0, v1, ..., vn]` into its edges
/// `[v0->v1, ..., vn-1->vn]`
///
pub fn path_to_edges(nodes: &[usize]) -> Vec<EdgeIndex> {
    nodes
        .iter()
        .tuple_windows()
        .map(|(&v, &w)| EdgeIndex::new(v, w))
        .collect()
}

///
/// Convert a cycle given as node indices `[v0, ..., vn]` into its edges,
/// including the closing edge `vn->v0`
///
pub fn cycle_to_edges(nodes: &[usize]) -> Vec<EdgeIndex> {
    let n = nodes.len();
    (0..n)
        .map(|i| EdgeIndex::new(nodes[i], nodes[(i + 1) % n]))
        .collect()
}

///
/// Map node indices back to nodes
///
pub fn indices_to_nodes<G: Graph>(graph: &G, indices: &[usize]) -> Vec<G::Node> {
    indices.iter().map(|&i| graph.node_at(i).clone()).collect()
}

///
/// determine if the path (= a list of nodes) is node-simple
///
pub fn is_node_simple(nodes: &[usize]) -> bool {
    let mut used: HashSet<usize> = HashSet::default();
    nodes.iter().all(|&node| used.insert(node))
}

///
/// determine if the path (= a list of edges) is edge-simple
///
/// For undirected graphs `u->v` and `v->u` are the same edge.
///
pub fn is_edge_simple(edges: &[EdgeIndex], directed: bool) -> bool {
    let mut used: HashSet<EdgeIndex> = HashSet::default();
    edges.iter().all(|&edge| {
        let key = if directed { edge } else { edge.canonical() };
        used.insert(key)
    })
}

///
/// Check that consecutive nodes of the walk are joined by an edge of the graph
///
pub fn is_walk<G: Graph>(graph: &G, nodes: &[usize]) -> bool {
    path_to_edges(nodes)
        .iter()
        .all(|e| graph.has_edge(e.from, e.to))
}

//
// tests
//
