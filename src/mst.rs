//!
//! Minimum spanning trees (forests) of weighted graphs
//!
//! * kruskal: edges in ascending weight order, joined with union-find
//! * boruvka: lightest edge leaving every block, round by round
//! * prim: grows a single tree from a start node
//!
//! The input graph is read as undirected: a directed edge `u -> v` joins
//! `u` and `v` with weight `w[u][v]`, and when both `u -> v` and `v -> u`
//! exist the lighter one counts. Edges with infinite weight are never used.
//!
use crate::graph::{EdgeIndex, Graph, UndirectedAdjacencyListGraph};
use crate::reachability::components;
use crate::weights::WeightTable;
use std::fmt::Debug;
pub mod boruvka;
pub mod kruskal;
pub mod prim;

pub use boruvka::boruvka;
pub use kruskal::kruskal;
pub use prim::prim;

///
/// Spanning tree (or forest) built by one of the algorithms.
///
/// `tree` holds every node of the input graph at the same index.
///
#[derive(Debug, Clone)]
pub struct SpanningTree<N> {
    pub tree: UndirectedAdjacencyListGraph<N>,
    pub total_weight: f64,
}

impl<N: Ord + Clone + Debug> SpanningTree<N> {
    /// every node of `graph`, no edges
    pub(crate) fn edgeless<G: Graph<Node = N>>(graph: &G) -> Self {
        let mut tree = UndirectedAdjacencyListGraph::new();
        for node in graph.nodes() {
            tree.add_node(node);
        }
        SpanningTree {
            tree,
            total_weight: 0.0,
        }
    }
    /// add the edge between two node indices of the input graph
    pub(crate) fn add_edge(&mut self, from: usize, to: usize) {
        let u = self.tree.node_at(from).clone();
        let v = self.tree.node_at(to).clone();
        self.tree.add_edge(u, v);
    }
    /// total weight of the tree edges, looked up in the input graph
    pub(crate) fn sum_weights<G: Graph<Node = N>>(&mut self, graph: &G, weights: &WeightTable) {
        self.total_weight = self
            .edges()
            .iter()
            .map(|e| edge_weight(graph, weights, e.from, e.to))
            .sum();
    }
    /// tree edges, each once with `from <= to`
    pub fn edges(&self) -> Vec<EdgeIndex> {
        self.tree.all_edges()
    }
    /// number of trees in the forest
    pub fn component_count(&self) -> usize {
        components(&self.tree).count()
    }
    ///
    /// true if the edges connect every node, false for a forest of several trees
    ///
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count() <= 1
    }
}

///
/// Weight of the undirected edge between `u` and `v`: the lighter of
/// `u -> v` and `v -> u`, `INFINITY` if neither exists.
///
pub(crate) fn edge_weight<G: Graph>(
    graph: &G,
    weights: &WeightTable,
    u: usize,
    v: usize,
) -> f64 {
    let forward = if graph.has_edge(u, v) {
        weights.get(u, v)
    } else {
        f64::INFINITY
    };
    let backward = if graph.has_edge(v, u) {
        weights.get(v, u)
    } else {
        f64::INFINITY
    };
    forward.min(backward)
}

///
/// `incident[u]`: every `(v, weight)` with an edge between `u` and `v`.
///
/// Out-neighbors come in `neighbors_of` order. A directed edge with no
/// reverse edge is also listed at its head.
///
pub(crate) fn incident_edges<G: Graph>(
    graph: &G,
    weights: &WeightTable,
) -> Vec<Vec<(usize, f64)>> {
    let mut incident = vec![Vec::new(); graph.order()];
    for u in 0..graph.order() {
        for v in graph.neighbors_of(u) {
            let w = edge_weight(graph, weights, u, v);
            incident[u].push((v, w));
            if graph.is_directed() && !graph.has_edge(v, u) {
                incident[v].push((u, w));
            }
        }
    }
    incident
}

//
// tests
//
