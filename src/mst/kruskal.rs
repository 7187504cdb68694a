//!
//! Kruskal's algorithm
//!
use super::SpanningTree;
use crate::error::Result;
use crate::graph::{EdgeIndex, Graph};
use crate::weights::WeightTable;
use petgraph::unionfind::UnionFind;
use tracing::{debug, trace};

///
/// Minimum spanning forest by [Kruskal's algorithm][kruskal].
///
/// Edges are taken in ascending weight order (a stable sort, so equal
/// weights keep `all_edges` order) and added when their endpoints are
/// still in different trees. Stops after `order - 1` edges. Edges with
/// infinite weight are left out.
///
/// [kruskal]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
///
#[tracing::instrument(skip_all, fields(order = graph.order()))]
pub fn kruskal<G: Graph>(graph: &G, weights: &WeightTable) -> Result<SpanningTree<G::Node>> {
    weights.check_order(graph)?;
    let n = graph.order();
    let mut result = SpanningTree::edgeless(graph);
    if n == 0 {
        return Ok(result);
    }

    let mut edges: Vec<(EdgeIndex, f64)> = graph
        .all_edges()
        .into_iter()
        .map(|e| (e, weights.get(e.from, e.to)))
        .filter(|(_, w)| *w < f64::INFINITY)
        .collect();
    edges.sort_by(|(_, a), (_, b)| a.total_cmp(b));

    let mut forest: UnionFind<usize> = UnionFind::new(n);
    let mut n_added = 0;
    for (edge, weight) in edges {
        // false if already in the same tree
        if forest.union(edge.from, edge.to) {
            trace!("added {} w={}", edge, weight);
            result.add_edge(edge.from, edge.to);
            result.total_weight += weight;
            n_added += 1;
            if n_added == n - 1 {
                break;
            }
        }
    }
    debug!("{} edges, total weight {}", n_added, result.total_weight);

    Ok(result)
}

//
// tests
//
