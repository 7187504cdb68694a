//!
//! The graph contract for `petgraph::Graph`
//!
//! Node weights play the role of nodes, edge weights are ignored (new edges get
//! `E::default()`), and weights come from a separate `WeightTable` as with
//! every other representation.
//!
//! `remove_node` follows petgraph: the last node moves into the freed index.
//!
use super::{EdgeIndex, Graph};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::{Direction, EdgeType};
use std::fmt::Debug;

impl<N, E, Ty> Graph for petgraph::Graph<N, E, Ty>
where
    N: Ord + Clone + Debug,
    E: Default,
    Ty: EdgeType,
{
    type Node = N;

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }
    fn order(&self) -> usize {
        self.node_count()
    }
    fn size(&self) -> usize {
        self.edge_count()
    }
    fn index_of(&self, node: &N) -> Option<usize> {
        self.node_indices()
            .find(|&i| self[i] == *node)
            .map(|i| i.index())
    }
    fn node_at(&self, index: usize) -> &N {
        &self[NodeIndex::new(index)]
    }
    fn nodes(&self) -> Vec<N> {
        self.raw_nodes().iter().map(|n| n.weight.clone()).collect()
    }
    fn neighbors_of(&self, index: usize) -> Vec<usize> {
        self.neighbors(NodeIndex::new(index))
            .map(|v| v.index())
            .collect()
    }
    fn out_degree(&self, node: &N) -> usize {
        self.index_of(node)
            .map_or(0, |i| self.edges(NodeIndex::new(i)).count())
    }
    fn in_degree(&self, node: &N) -> usize {
        if !Ty::is_directed() {
            return self.out_degree(node);
        }
        self.index_of(node).map_or(0, |i| {
            self.edges_directed(NodeIndex::new(i), Direction::Incoming)
                .count()
        })
    }
    fn all_edges(&self) -> Vec<EdgeIndex> {
        self.edge_references()
            .map(|e| {
                let edge = EdgeIndex::new(e.source().index(), e.target().index());
                if Ty::is_directed() {
                    edge
                } else {
                    edge.canonical()
                }
            })
            .collect()
    }
    fn is_adjacent(&self, a: &N, b: &N) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(u), Some(v)) => self
                .find_edge(NodeIndex::new(u), NodeIndex::new(v))
                .is_some(),
            _ => false,
        }
    }
    fn add_node(&mut self, node: N) -> usize {
        match self.index_of(&node) {
            Some(index) => index,
            None => petgraph::Graph::add_node(self, node).index(),
        }
    }
    fn add_edge(&mut self, u: N, v: N) {
        let u = NodeIndex::new(Graph::add_node(self, u));
        let v = NodeIndex::new(Graph::add_node(self, v));
        if self.find_edge(u, v).is_none() {
            petgraph::Graph::add_edge(self, u, v, E::default());
        }
    }
    fn remove_node(&mut self, node: &N) -> bool {
        match self.index_of(node) {
            Some(index) => petgraph::Graph::remove_node(self, NodeIndex::new(index)).is_some(),
            None => false,
        }
    }
}

//
// tests
//
