//!
//! Prim's algorithm
//!
use super::{incident_edges, SpanningTree};
use crate::error::Result;
use crate::graph::Graph;
use crate::weights::WeightTable;
use tracing::{debug, trace};

///
/// Minimum spanning tree of the component of `start` by [Prim's algorithm][prim].
///
/// Each step scans every edge from a tree node to a node outside the tree
/// and adds the lightest one (the first found on ties). Nodes of other
/// components stay in the result without edges.
///
/// [prim]: https://en.wikipedia.org/wiki/Prim%27s_algorithm
///
#[tracing::instrument(skip_all, fields(order = graph.order(), start = ?start))]
pub fn prim<G: Graph>(
    graph: &G,
    weights: &WeightTable,
    start: &G::Node,
) -> Result<SpanningTree<G::Node>> {
    weights.check_order(graph)?;
    let source = graph.require_index(start)?;
    let n = graph.order();
    let mut result = SpanningTree::edgeless(graph);
    let incident = incident_edges(graph, weights);

    let mut in_tree = vec![false; n];
    in_tree[source] = true;
    let mut n_in_tree = 1;

    while n_in_tree < n {
        let mut best: Option<(usize, usize)> = None;
        let mut min_weight = f64::INFINITY;
        for u in (0..n).filter(|&u| in_tree[u]) {
            for &(v, w) in &incident[u] {
                if !in_tree[v] && w < min_weight {
                    min_weight = w;
                    best = Some((u, v));
                }
            }
        }

        // no crossing edge: the rest is disconnected from start
        let Some((u, v)) = best else {
            break;
        };
        trace!("added {}->{} w={}", u, v, min_weight);
        in_tree[v] = true;
        n_in_tree += 1;
        result.add_edge(u, v);
        result.total_weight += min_weight;
    }
    debug!("{} of {} nodes in tree", n_in_tree, n);

    Ok(result)
}

//
// tests
//
