//! Dijkstra algorithm for non-negative edge weights
//!
//! The closest unvisited node is selected by a linear scan (`O(V^2)` overall).
//! Negative weights give undefined results and are not checked.

use crate::bellman_ford::Paths;
use crate::error::Result;
use crate::graph::Graph;
use crate::weights::WeightTable;
use tracing::{debug, trace};

///
/// Compute shortest paths from node `start` to all other nodes.
///
/// The direct neighbors of `start` are seeded with their edge weights before
/// the main loop, which then repeatedly visits the unvisited node of minimum
/// tentative distance (smallest index on ties) and relaxes its unvisited
/// neighbors.
///
/// # Example
/// ```rust
/// use graph_algos::dijkstra::dijkstra;
/// use graph_algos::graph::DirectedAdjacencyListGraph;
/// use graph_algos::weights::weighted_graph;
///
/// let (g, w): (DirectedAdjacencyListGraph<char>, _) =
///     weighted_graph(&[('A', 'B', 1.0), ('B', 'C', 2.0), ('A', 'C', 5.0)]);
/// let paths = dijkstra(&g, &w, &'A').unwrap();
/// assert_eq!(paths.distances, vec![0.0, 1.0, 3.0]);
/// assert_eq!(paths.path_to(2), vec![0, 1, 2]);
/// ```
#[tracing::instrument(skip_all, fields(order = graph.order(), start = ?start))]
pub fn dijkstra<G: Graph>(graph: &G, weights: &WeightTable, start: &G::Node) -> Result<Paths> {
    weights.check_order(graph)?;
    let source = graph.require_index(start)?;
    let n = graph.order();

    let mut paths = Paths::new(n);
    let mut visited = vec![false; n];
    paths.distances[source] = 0.0;
    for v in graph.neighbors_of(source) {
        if v != source {
            paths.distances[v] = weights.get(source, v);
            paths.predecessors[v] = Some(source);
        }
    }

    let mut n_visited = 0;
    while let Some(u) = closest_unvisited(&paths.distances, &visited) {
        visited[u] = true;
        n_visited += 1;
        for v in graph.neighbors_of(u) {
            if visited[v] {
                continue;
            }
            let candidate = paths.distances[u] + weights.get(u, v);
            if candidate < paths.distances[v] {
                trace!("updated\tu={}\tv={}\td[v]={}", u, v, candidate);
                paths.distances[v] = candidate;
                paths.predecessors[v] = Some(u);
            }
        }
    }
    debug!("visited {} of {} nodes", n_visited, n);

    Ok(paths)
}

///
/// Unvisited node with the smallest finite distance, the first one on ties.
///
fn closest_unvisited(distances: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (v, &d) in distances.iter().enumerate() {
        if visited[v] || d == f64::INFINITY {
            continue;
        }
        match best {
            Some(b) if distances[b] <= d => {}
            _ => best = Some(v),
        }
    }
    best
}

//
// tests
//
