//!
//! Incidence matrix representation
//!
//! Rows are nodes and columns are edges. A column holds
//!
//! * directed edge `u -> v`: `+1` in row u, `-1` in row v
//! * undirected edge `u - v`: `+1` in both rows
//! * self-loop (either kind): `2` in its single row
//!
use super::node_map::NodeMap;
use super::{EdgeIndex, Graph};
use petgraph::{Directed, EdgeType, Undirected};
use std::fmt::Debug;
use std::marker::PhantomData;

const TAIL: i8 = 1;
const HEAD: i8 = -1;
const LOOP: i8 = 2;

#[derive(Debug, Clone)]
pub struct IncidenceMatrixGraph<N, Ty = Directed> {
    nodes: NodeMap<N>,
    /// `incidence[node][edge]`
    incidence: Vec<Vec<i8>>,
    edge_count: usize,
    ty: PhantomData<Ty>,
}

pub type DirectedIncidenceMatrixGraph<N> = IncidenceMatrixGraph<N, Directed>;
pub type UndirectedIncidenceMatrixGraph<N> = IncidenceMatrixGraph<N, Undirected>;

impl<N, Ty> Default for IncidenceMatrixGraph<N, Ty> {
    fn default() -> Self {
        IncidenceMatrixGraph {
            nodes: NodeMap::default(),
            incidence: Vec::new(),
            edge_count: 0,
            ty: PhantomData,
        }
    }
}

impl<N: Ord + Clone + Debug, Ty: EdgeType> IncidenceMatrixGraph<N, Ty> {
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

    ///
    /// Read the endpoints of the edge stored in column `edge`.
    ///
    /// For undirected edges the smaller row index comes first.
    ///
    fn endpoints(&self, edge: usize) -> EdgeIndex {
        let mut tail = None;
        let mut head = None;
        for (v, row) in self.incidence.iter().enumerate() {
            match row[edge] {
                LOOP => return EdgeIndex::new(v, v),
                TAIL if tail.is_none() => tail = Some(v),
                TAIL | HEAD => head = Some(v),
                _ => {}
            }
        }
        match (tail, head) {
            (Some(u), Some(v)) => EdgeIndex::new(u, v),
            _ => panic!("column {} does not describe an edge", edge),
        }
    }

    /// column of the edge `u -> v`, if any
    fn find_edge(&self, u: usize, v: usize) -> Option<usize> {
        let (mark_u, mark_v) = if u == v {
            (LOOP, LOOP)
        } else if Ty::is_directed() {
            (TAIL, HEAD)
        } else {
            (TAIL, TAIL)
        };
        (0..self.edge_count)
            .find(|&e| self.incidence[u][e] == mark_u && self.incidence[v][e] == mark_v)
    }
}

impl<N: Ord + Clone + Debug, Ty: EdgeType> Graph for IncidenceMatrixGraph<N, Ty> {
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
        self.incidence[index]
            .iter()
            .enumerate()
            .filter_map(|(e, &mark)| match mark {
                LOOP => Some(index),
                TAIL => {
                    let EdgeIndex { from, to } = self.endpoints(e);
                    Some(if from == index { to } else { from })
                }
                _ => None,
            })
            .collect()
    }
    fn out_degree(&self, node: &N) -> usize {
        self.index_of(node).map_or(0, |u| {
            self.incidence[u]
                .iter()
                .filter(|&&mark| mark == TAIL || mark == LOOP)
                .count()
        })
    }
    fn in_degree(&self, node: &N) -> usize {
        if !Ty::is_directed() {
            return self.out_degree(node);
        }
        self.index_of(node).map_or(0, |v| {
            self.incidence[v]
                .iter()
                .filter(|&&mark| mark == HEAD || mark == LOOP)
                .count()
        })
    }
    fn all_edges(&self) -> Vec<EdgeIndex> {
        (0..self.edge_count).map(|e| self.endpoints(e)).collect()
    }
    fn is_adjacent(&self, a: &N, b: &N) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(u), Some(v)) => self.find_edge(u, v).is_some(),
            _ => false,
        }
    }
    fn add_node(&mut self, node: N) -> usize {
        let (index, inserted) = self.nodes.insert(node);
        if inserted {
            self.incidence.push(vec![0; self.edge_count]);
        }
        index
    }
    fn add_edge(&mut self, u: N, v: N) {
        let u = self.add_node(u);
        let v = self.add_node(v);
        if self.find_edge(u, v).is_some() {
            return;
        }
        for row in self.incidence.iter_mut() {
            row.push(0);
        }
        let e = self.edge_count;
        if u == v {
            self.incidence[u][e] = LOOP;
        } else {
            self.incidence[u][e] = TAIL;
            self.incidence[v][e] = if Ty::is_directed() { HEAD } else { TAIL };
        }
        self.edge_count += 1;
    }
    fn remove_node(&mut self, node: &N) -> bool {
        let Some(removed) = self.nodes.remove(node) else {
            return false;
        };
        let row = self.incidence.remove(removed);
        // drop every column touching the removed node
        let keep: Vec<bool> = row.iter().map(|&mark| mark == 0).collect();
        for other in self.incidence.iter_mut() {
            let mut column = 0;
            other.retain(|_| {
                let k = keep[column];
                column += 1;
                k
            });
        }
        self.edge_count = keep.iter().filter(|&&k| k).count();
        true
    }
}

//
// tests
//
