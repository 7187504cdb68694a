//!
//! The graph contract every representation satisfies
//!
//! Algorithms in this crate are written only against [`Graph`]. Nodes are
//! opaque values mapped to dense indices `0..order()` assigned at insertion.
//!
//! # Representations
//!
//! * adjacency_list: neighbor vectors
//! * adjacency_matrix: dense boolean matrix
//! * incidence_matrix: node x edge matrix
//! * petgraph_impl: `petgraph::Graph` used as-is
//!
use crate::error::{GraphError, Result};
use std::fmt::Debug;

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod incidence_matrix;
mod node_map;
pub mod petgraph_impl;

pub use adjacency_list::{
    AdjacencyListGraph, DirectedAdjacencyListGraph, UndirectedAdjacencyListGraph,
};
pub use adjacency_matrix::{
    AdjacencyMatrixGraph, DirectedAdjacencyMatrixGraph, UndirectedAdjacencyMatrixGraph,
};
pub use incidence_matrix::{
    DirectedIncidenceMatrixGraph, IncidenceMatrixGraph, UndirectedIncidenceMatrixGraph,
};
pub use petgraph::{Directed, EdgeType, Undirected};

///
/// An edge given by the indices of its endpoints.
///
/// For undirected graphs `all_edges()` reports each edge once with `from <= to`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex {
    pub from: usize,
    pub to: usize,
}

impl EdgeIndex {
    pub fn new(from: usize, to: usize) -> Self {
        EdgeIndex { from, to }
    }
    /// the same edge with endpoints ordered, used as a key for undirected edges
    pub fn canonical(self) -> Self {
        if self.from <= self.to {
            self
        } else {
            EdgeIndex::new(self.to, self.from)
        }
    }
}

impl std::fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

///
/// Capability set of a graph representation.
///
/// All representations must give the same observable answers for the same
/// sequence of insertions. Representations are simple graphs: adding an edge
/// that is already present does nothing.
///
pub trait Graph {
    type Node: Ord + Clone + Debug;

    fn is_directed(&self) -> bool;

    /// number of nodes
    fn order(&self) -> usize;

    /// number of edges (an undirected edge counts once)
    fn size(&self) -> usize;

    fn index_of(&self, node: &Self::Node) -> Option<usize>;

    ///
    /// Node stored at `index`.
    ///
    /// # Panics
    /// if `index >= order()`
    ///
    fn node_at(&self, index: usize) -> &Self::Node;

    /// all nodes in index order
    fn nodes(&self) -> Vec<Self::Node>;

    /// indices reachable by one outgoing edge
    fn neighbors_of(&self, index: usize) -> Vec<usize>;

    /// number of outgoing edges, 0 for an absent node
    fn out_degree(&self, node: &Self::Node) -> usize;

    /// number of incoming edges, equal to `out_degree` for undirected graphs
    fn in_degree(&self, node: &Self::Node) -> usize;

    fn all_edges(&self) -> Vec<EdgeIndex>;

    fn is_adjacent(&self, a: &Self::Node, b: &Self::Node) -> bool;

    /// Insert `node` if absent and return its index.
    fn add_node(&mut self, node: Self::Node) -> usize;

    /// Insert the edge `u -> v`, inserting missing endpoints first.
    fn add_edge(&mut self, u: Self::Node, v: Self::Node);

    /// Remove `node` and all its edges. Returns false if it was absent.
    fn remove_node(&mut self, node: &Self::Node) -> bool;

    ///
    /// Insert every edge of `edges`
    ///
    fn extend_with_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (Self::Node, Self::Node)>,
        Self: Sized,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    ///
    /// `index_of` for entry points that need the node to exist
    ///
    fn require_index(&self, node: &Self::Node) -> Result<usize> {
        self.index_of(node)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// true if both endpoints of the index pair are in range and adjacent
    fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.order()
            && to < self.order()
            && self.is_adjacent(self.node_at(from), self.node_at(to))
    }
}

//
// tests
//
