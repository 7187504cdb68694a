//!
//! Adjacency matrix representation
//!
use super::node_map::NodeMap;
use super::{EdgeIndex, Graph};
use petgraph::{Directed, EdgeType, Undirected};
use std::fmt::Debug;
use std::marker::PhantomData;

///
/// Graph backed by a dense `order x order` boolean matrix.
///
/// `matrix[u][v]` is true iff the edge `u -> v` exists.
/// The matrix of an undirected graph is kept symmetric.
///
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<N, Ty = Directed> {
    nodes: NodeMap<N>,
    matrix: Vec<Vec<bool>>,
    edge_count: usize,
    ty: PhantomData<Ty>,
}

pub type DirectedAdjacencyMatrixGraph<N> = AdjacencyMatrixGraph<N, Directed>;
pub type UndirectedAdjacencyMatrixGraph<N> = AdjacencyMatrixGraph<N, Undirected>;

impl<N, Ty> Default for AdjacencyMatrixGraph<N, Ty> {
    fn default() -> Self {
        AdjacencyMatrixGraph {
            nodes: NodeMap::default(),
            matrix: Vec::new(),
            edge_count: 0,
            ty: PhantomData,
        }
    }
}

impl<N: Ord + Clone + Debug, Ty: EdgeType> AdjacencyMatrixGraph<N, Ty> {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        graph.extend_with_edges(edges);
        graph
    }
}

impl<N: Ord + Clone + Debug, Ty: EdgeType> Graph for AdjacencyMatrixGraph<N, Ty> {
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
        self.matrix[index]
            .iter()
            .enumerate()
            .filter(|(_, &adjacent)| adjacent)
            .map(|(v, _)| v)
            .collect()
    }
    fn out_degree(&self, node: &N) -> usize {
        self.index_of(node)
            .map_or(0, |u| self.matrix[u].iter().filter(|&&a| a).count())
    }
    fn in_degree(&self, node: &N) -> usize {
        self.index_of(node)
            .map_or(0, |v| self.matrix.iter().filter(|row| row[v]).count())
    }
    fn all_edges(&self) -> Vec<EdgeIndex> {
        let n = self.order();
        let mut edges = Vec::with_capacity(self.edge_count);
        for u in 0..n {
            // upper triangle only for undirected graphs
            let first = if Ty::is_directed() { 0 } else { u };
            for v in first..n {
                if self.matrix[u][v] {
                    edges.push(EdgeIndex::new(u, v));
                }
            }
        }
        edges
    }
    fn is_adjacent(&self, a: &N, b: &N) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(u), Some(v)) => self.matrix[u][v],
            _ => false,
        }
    }
    fn add_node(&mut self, node: N) -> usize {
        let (index, inserted) = self.nodes.insert(node);
        if inserted {
            for row in self.matrix.iter_mut() {
                row.push(false);
            }
            self.matrix.push(vec![false; index + 1]);
        }
        index
    }
    fn add_edge(&mut self, u: N, v: N) {
        let u = self.add_node(u);
        let v = self.add_node(v);
        if self.matrix[u][v] {
            return;
        }
        self.matrix[u][v] = true;
        if !Ty::is_directed() {
            self.matrix[v][u] = true;
        }
        self.edge_count += 1;
    }
    fn remove_node(&mut self, node: &N) -> bool {
        let Some(removed) = self.nodes.remove(node) else {
            return false;
        };
        let row = self.matrix.remove(removed);
        let mut dropped = row.iter().filter(|&&a| a).count();
        for other in self.matrix.iter_mut() {
            // the self-loop cell was already counted with the row
            if other.remove(removed) && Ty::is_directed() {
                dropped += 1;
            }
        }
        self.edge_count -= dropped;
        true
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::{check_directed_contract, check_undirected_contract};

    #[test]
    fn adjacency_matrix_contract() {
        check_directed_contract::<DirectedAdjacencyMatrixGraph<char>>();
        check_undirected_contract::<UndirectedAdjacencyMatrixGraph<char>>();
    }

    #[test]
    fn adjacency_matrix_neighbors_in_index_order() {
        let g = DirectedAdjacencyMatrixGraph::from_edges([(0, 3), (0, 1), (0, 2)]);
        // index order, not insertion order
        assert_eq!(g.nodes(), vec![0, 3, 1, 2]);
        assert_eq!(g.neighbors_of(0), vec![1, 2, 3]);
    }

    #[test]
    fn adjacency_matrix_remove_with_loops() {
        let mut g = DirectedAdjacencyMatrixGraph::from_edges([('a', 'a'), ('b', 'a'), ('a', 'c')]);
        assert_eq!(g.size(), 3);
        assert!(g.remove_node(&'a'));
        assert_eq!(g.size(), 0);
        assert_eq!(g.order(), 2);

        let mut u = UndirectedAdjacencyMatrixGraph::from_edges([('a', 'a'), ('b', 'a'), ('b', 'c')]);
        assert_eq!(u.size(), 3);
        assert!(u.remove_node(&'a'));
        assert_eq!(u.size(), 1);
    }
}
