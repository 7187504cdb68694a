//! Bellman-Ford algorithm over any [`Graph`] with a [`WeightTable`]
//!
//! Negative edge weights are permitted. A negative cycle reachable from the
//! start node is reported with a flag (`bellman_ford`) or extracted as a
//! [`Cycle`] (`find_negative_cycle`).

use crate::common::arcs;
use crate::cycle::Cycle;
use crate::error::Result;
use crate::graph::{EdgeIndex, Graph};
use crate::weights::WeightTable;
use tracing::{debug, trace};

///
/// Shortest distances and predecessors from a single start node,
/// both indexed by node index.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    /// `f64::INFINITY` for unreachable nodes
    pub distances: Vec<f64>,
    /// `None` for the start node and unreachable nodes
    pub predecessors: Vec<Option<usize>>,
}

impl Paths {
    ///
    /// all distances infinite, no predecessors
    ///
    pub fn new(order: usize) -> Self {
        Paths {
            distances: vec![f64::INFINITY; order],
            predecessors: vec![None; order],
        }
    }
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distances[target] < f64::INFINITY
    }
    ///
    /// Path from the start node to `target` as node indices
    /// by walking the predecessors backward.
    ///
    /// Empty if `target` is unreachable, or if the predecessors contain a cycle.
    ///
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        if !self.is_reachable(target) {
            return vec![];
        }
        let n = self.predecessors.len();
        let mut path = vec![target];
        let mut node = target;
        while let Some(pred) = self.predecessors[node] {
            if path.len() > n {
                return vec![];
            }
            path.push(pred);
            node = pred;
        }
        path.reverse();
        path
    }
}

///
/// Result of `bellman_ford`.
///
/// When `has_negative_cycle` is set the paths are not meaningful.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordResult {
    pub paths: Paths,
    pub has_negative_cycle: bool,
}

///
/// Compute shortest paths from node `start` to all other nodes.
///
/// Using the [Bellman–Ford algorithm][bf]: `order - 1` relaxation passes over
/// every edge, then one more pass which sets `has_negative_cycle` if any edge
/// can still be relaxed. An undirected edge is relaxed in both directions.
///
/// [bf]: https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
///
/// # Example
/// ```rust
/// use graph_algos::bellman_ford::bellman_ford;
/// use graph_algos::graph::DirectedAdjacencyListGraph;
/// use graph_algos::weights::weighted_graph;
///
/// let (g, w): (DirectedAdjacencyListGraph<char>, _) =
///     weighted_graph(&[('A', 'B', 1.0), ('B', 'C', 2.0), ('A', 'C', 5.0)]);
/// let r = bellman_ford(&g, &w, &'A').unwrap();
/// assert!(!r.has_negative_cycle);
/// assert_eq!(r.paths.distances, vec![0.0, 1.0, 3.0]);
/// assert_eq!(r.paths.predecessors, vec![None, Some(0), Some(1)]);
/// ```
#[tracing::instrument(skip_all, fields(order = graph.order(), start = ?start))]
pub fn bellman_ford<G: Graph>(
    graph: &G,
    weights: &WeightTable,
    start: &G::Node,
) -> Result<BellmanFordResult> {
    weights.check_order(graph)?;
    let source = graph.require_index(start)?;
    let arcs = arcs(graph);

    // Step 1 and Step 2: initialize and relax
    let mut paths = initialize_relax(graph.order(), &arcs, weights, source);

    // Step 3: check for negative weight cycle
    let has_negative_cycle = arcs.iter().any(|&arc| relax(&mut paths, weights, arc));
    if has_negative_cycle {
        debug!("negative cycle reachable from the start node");
    }

    Ok(BellmanFordResult {
        paths,
        has_negative_cycle,
    })
}

///
/// Find a negative cycle reachable from node `start`.
///
/// After the usual relaxation passes one more full pass is made; following the
/// predecessors backward from the last node it relaxed enters the cycle.
/// The cycle is returned normalized (starting at its smallest index).
///
/// `None` if no negative cycle is reachable.
///
#[tracing::instrument(skip_all, fields(order = graph.order(), start = ?start))]
pub fn find_negative_cycle<G: Graph>(
    graph: &G,
    weights: &WeightTable,
    start: &G::Node,
) -> Result<Option<Cycle>> {
    weights.check_order(graph)?;
    let source = graph.require_index(start)?;
    let arcs = arcs(graph);
    let mut paths = initialize_relax(graph.order(), &arcs, weights, source);

    let mut last_relaxed = None;
    for &arc in arcs.iter() {
        if relax(&mut paths, weights, arc) {
            last_relaxed = Some(arc.to);
        }
    }

    let cycle = last_relaxed
        .and_then(|v| traceback(&paths.predecessors, v))
        .map(|nodes| Cycle::new(nodes).normalize());
    debug!("negative cycle: {:?}", cycle);
    Ok(cycle)
}

///
/// Find the cycle on the predecessor chain ending at `target`.
///
/// Returns `None` if the chain ends (reaches a node without predecessor)
/// before repeating a node.
///
fn traceback(predecessors: &[Option<usize>], target: usize) -> Option<Vec<usize>> {
    let mut visited = vec![false; predecessors.len()];
    let mut path = vec![target];
    let mut node = target;
    visited[node] = true;

    loop {
        node = predecessors[node]?;

        // loop detected
        if visited[node] {
            let pos = path.iter().position(|&p| p == node)?;
            path = path[pos..].to_vec();
            break;
        }

        path.push(node);
        visited[node] = true;
    }

    path.reverse();
    Some(path)
}

///
/// Relax `arc` once. Returns true if the distance of its target improved.
///
fn relax(paths: &mut Paths, weights: &WeightTable, arc: EdgeIndex) -> bool {
    let EdgeIndex { from: u, to: v } = arc;
    let candidate = paths.distances[u] + weights.get(u, v);
    if candidate < paths.distances[v] {
        trace!(
            "updated\tu={}\tv={}\td[u]={}\td[v]={}->{}",
            u,
            v,
            paths.distances[u],
            paths.distances[v],
            candidate
        );
        paths.distances[v] = candidate;
        paths.predecessors[v] = Some(u);
        true
    } else {
        false
    }
}

// Perform Step 1 and Step 2 of the Bellman-Ford algorithm.
fn initialize_relax(
    order: usize,
    arcs: &[EdgeIndex],
    weights: &WeightTable,
    source: usize,
) -> Paths {
    // Step 1: initialize graph
    let mut paths = Paths::new(order);
    paths.distances[source] = 0.0;

    // Step 2: relax edges repeatedly
    for pass in 1..order {
        let mut did_update = false;
        for &arc in arcs {
            did_update |= relax(&mut paths, weights, arc);
        }
        if !did_update {
            // later passes cannot change anything either
            trace!("converged after {} passes", pass);
            break;
        }
    }
    paths
}

//
// test
//
