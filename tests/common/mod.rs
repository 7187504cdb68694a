#![allow(dead_code)]
use graph_algos::{Graph, WeightTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

///
/// Random simple graph on nodes `0..n` (node `v` has index `v`).
///
/// Every ordered pair (unordered for undirected graphs) becomes an edge with
/// probability `p` and an integer weight drawn from `weights`, so sums of
/// weights are exact.
///
pub fn random_graph<G>(seed: u64, n: u32, p: f64, weights: Range<i32>) -> (G, WeightTable)
where
    G: Graph<Node = u32> + Default,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = G::default();
    for v in 0..n {
        graph.add_node(v);
    }
    let mut table = WeightTable::new(n as usize);
    for u in 0..n {
        for v in 0..n {
            if u == v || (!graph.is_directed() && v < u) {
                continue;
            }
            if rng.random_bool(p) {
                let w = rng.random_range(weights.clone()) as f64;
                graph.add_edge(u, v);
                table.set(u as usize, v as usize, w);
                if !graph.is_directed() {
                    table.set(v as usize, u as usize, w);
                }
            }
        }
    }
    (graph, table)
}

///
/// Ring `0 - 1 - ... - n-1 - 0` plus the triangle `0 - 2 - 4 - 0`, weights 1.
///
/// Every node is balanced (directed) or even (undirected). Needs `n >= 6`.
///
pub fn ring_with_triangle<G>(n: u32) -> G
where
    G: Graph<Node = u32> + Default,
{
    let mut graph = G::default();
    for v in 0..n {
        graph.add_edge(v, (v + 1) % n);
    }
    graph.extend_with_edges([(0, 2), (2, 4), (4, 0)]);
    graph
}
