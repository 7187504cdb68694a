//!
//! Adjacency list representation
//!
use super::node_map::NodeMap;
use super::{EdgeIndex, Graph};
use petgraph::{Directed, EdgeType, Undirected};
use std::fmt::Debug;
use std::marker::PhantomData;

///
/// Graph storing, for every node, the list of its neighbor indices in insertion order.
///
/// `Ty` is `petgraph::Directed` or `petgraph::Undirected`.
/// An undirected edge is stored in both neighbor lists.
///
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<N, Ty = Directed> {
    nodes: NodeMap<N>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
    ty: PhantomData<Ty>,
}

pub type DirectedAdjacencyListGraph<N> = AdjacencyListGraph<N, Directed>;
pub type UndirectedAdjacencyListGraph<N> = AdjacencyListGraph<N, Undirected>;

impl<N, Ty> Default for AdjacencyListGraph<N, Ty> {
    fn default() -> Self {
        AdjacencyListGraph {
            nodes: NodeMap::default(),
            adjacency: Vec::new(),
            edge_count: 0,
            ty: PhantomData,
        }
    }
}

impl<N: Ord + Clone + Debug, Ty: EdgeType> AdjacencyListGraph<N, Ty> {
    pub fn new() -> Self {
        Self::default()
    }
    ///
    /// Create a graph from a list of `(u, v)` node pairs
    ///
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        graph.extend_with_edges(edges);
        graph
    }
}

impl<N: Ord + Clone + Debug, Ty: EdgeType> Graph for AdjacencyListGraph<N, Ty> {
    type Node = N;

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }
    fn order(&self) -> usize {
        self.nodes.len()
    }
    fn size(&self) -> usize {
        self.edge_count
    }
    fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.get(node)
    }
    fn node_at(&self, index: usize) -> &N {
        self.nodes.node(index)
    }
    fn nodes(&self) -> Vec<N> {
        self.nodes.nodes().to_vec()
    }
    fn neighbors_of(&self, index: usize) -> Vec<usize> {
        self.adjacency[index].clone()
    }
    fn out_degree(&self, node: &N) -> usize {
        self.index_of(node)
            .map_or(0, |i| self.adjacency[i].len())
    }
    fn in_degree(&self, node: &N) -> usize {
        let Some(v) = self.index_of(node) else {
            return 0;
        };
        if !Ty::is_directed() {
            return self.adjacency[v].len();
        }
        self.adjacency
            .iter()
            .filter(|neighbors| neighbors.contains(&v))
            .count()
    }
    fn all_edges(&self) -> Vec<EdgeIndex> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            for &v in neighbors {
                // an undirected edge is listed from its smaller endpoint only
                if Ty::is_directed() || u <= v {
                    edges.push(EdgeIndex::new(u, v));
                }
            }
        }
        edges
    }
    fn is_adjacent(&self, a: &N, b: &N) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(u), Some(v)) => self.adjacency[u].contains(&v),
            _ => false,
        }
    }
    fn add_node(&mut self, node: N) -> usize {
        let (index, inserted) = self.nodes.insert(node);
        if inserted {
            self.adjacency.push(Vec::new());
        }
        index
    }
    fn add_edge(&mut self, u: N, v: N) {
        let u = self.add_node(u);
        let v = self.add_node(v);
        if self.adjacency[u].contains(&v) {
            return;
        }
        self.adjacency[u].push(v);
        if !Ty::is_directed() && u != v {
            self.adjacency[v].push(u);
        }
        self.edge_count += 1;
    }
    fn remove_node(&mut self, node: &N) -> bool {
        let Some(removed) = self.nodes.remove(node) else {
            return false;
        };
        let outgoing = self.adjacency.remove(removed);
        let mut dropped = outgoing.len();
        for neighbors in self.adjacency.iter_mut() {
            let before = neighbors.len();
            neighbors.retain(|&w| w != removed);
            if Ty::is_directed() {
                dropped += before - neighbors.len();
            }
            for w in neighbors.iter_mut() {
                if *w > removed {
                    *w -= 1;
                }
            }
        }
        self.edge_count -= dropped;
        true
    }
}

//
// tests
//
