//!
//! Dense edge weight table
//!
//! The table lives outside the graph: `weights[(i, j)]` is the weight of the
//! edge between the nodes with indices `i` and `j`, and `f64::INFINITY` when
//! there is no such edge.
//!
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    order: usize,
    weights: Vec<f64>,
}

impl WeightTable {
    ///
    /// `order x order` table with no edges
    ///
    pub fn new(order: usize) -> Self {
        WeightTable {
            order,
            weights: vec![f64::INFINITY; order * order],
        }
    }
    ///
    /// Build from nested rows, checking that they form a square.
    ///
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let order = rows.len();
        let mut weights = Vec::with_capacity(order * order);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != order {
                return Err(GraphError::NotSquare {
                    row,
                    len: values.len(),
                    order,
                });
            }
            weights.extend(values);
        }
        Ok(WeightTable { order, weights })
    }
    pub fn order(&self) -> usize {
        self.order
    }
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.order + to]
    }
    pub fn set(&mut self, from: usize, to: usize, weight: f64) {
        self.weights[from * self.order + to] = weight;
    }
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.weights
            .chunks(self.order.max(1))
            .take(self.order)
            .map(|row| row.to_vec())
            .collect()
    }
    ///
    /// Grow the table to `order`, new cells are `INFINITY`.
    /// Follows `Graph::add_node`.
    ///
    pub fn resize(&mut self, order: usize) {
        if order <= self.order {
            return;
        }
        let mut table = WeightTable::new(order);
        for i in 0..self.order {
            for j in 0..self.order {
                table.set(i, j, self.get(i, j));
            }
        }
        *self = table;
    }
    ///
    /// Table over a subset of the nodes: cell `(i, j)` of the result is cell
    /// `(old[i], old[j])` of `self`.
    ///
    /// Panics if an index in `old` is not below `order`.
    ///
    pub fn select(&self, old: &[usize]) -> WeightTable {
        let mut table = WeightTable::new(old.len());
        for (i, &from) in old.iter().enumerate() {
            for (j, &to) in old.iter().enumerate() {
                table.set(i, j, self.get(from, to));
            }
        }
        table
    }
    ///
    /// Check that the table is sized for `graph`
    ///
    pub fn check_order<G: Graph>(&self, graph: &G) -> Result<()> {
        if self.order != graph.order() {
            return Err(GraphError::DimensionMismatch {
                expected: graph.order(),
                actual: self.order,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for WeightTable {
    type Output = f64;
    fn index(&self, (from, to): (usize, usize)) -> &f64 {
        &self.weights[from * self.order + to]
    }
}

impl IndexMut<(usize, usize)> for WeightTable {
    fn index_mut(&mut self, (from, to): (usize, usize)) -> &mut f64 {
        &mut self.weights[from * self.order + to]
    }
}

///
/// Add `node` to `graph` and grow `weights` to match. Returns its index.
///
pub fn add_weighted_node<G: Graph>(
    graph: &mut G,
    weights: &mut WeightTable,
    node: G::Node,
) -> usize {
    let index = graph.add_node(node);
    weights.resize(graph.order());
    index
}

///
/// Add the edge `u -> v` (inserting missing endpoints) and record its
/// weight, in both directions when the graph is undirected.
///
pub fn add_weighted_edge<G: Graph>(
    graph: &mut G,
    weights: &mut WeightTable,
    u: G::Node,
    v: G::Node,
    weight: f64,
) {
    let i = add_weighted_node(graph, weights, u.clone());
    let j = add_weighted_node(graph, weights, v.clone());
    graph.add_edge(u, v);
    weights.set(i, j, weight);
    if !graph.is_directed() {
        weights.set(j, i, weight);
    }
}

///
/// Remove `node` from `graph` and its row and column from `weights`.
///
/// Works with any index reassignment `remove_node` does (re-compacting or
/// swap-remove). Returns false if the node was not in the graph.
///
pub fn remove_weighted_node<G: Graph>(
    graph: &mut G,
    weights: &mut WeightTable,
    node: &G::Node,
) -> bool {
    let before: BTreeMap<G::Node, usize> = graph
        .nodes()
        .into_iter()
        .enumerate()
        .map(|(i, node)| (node, i))
        .collect();
    if !graph.remove_node(node) {
        return false;
    }
    let old: Vec<usize> = (0..graph.order())
        .filter_map(|i| before.get(graph.node_at(i)).copied())
        .collect();
    *weights = weights.select(&old);
    true
}

///
/// Build a graph and its weight table from `(u, v, weight)` triples.
///
/// In-memory counterpart of a weighted edge-list reader: edges are inserted
/// in order with `add_weighted_edge`, so a repeated edge keeps its last weight.
///
pub fn weighted_graph<G>(edges: &[(G::Node, G::Node, f64)]) -> (G, WeightTable)
where
    G: Graph + Default,
{
    let mut graph = G::default();
    let mut weights = WeightTable::new(0);
    for (u, v, w) in edges {
        add_weighted_edge(&mut graph, &mut weights, u.clone(), v.clone(), *w);
    }
    (graph, weights)
}

//
// tests
//
