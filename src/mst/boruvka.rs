//!
//! Borůvka's algorithm
//!
use super::{incident_edges, SpanningTree};
use crate::error::Result;
use crate::graph::{EdgeIndex, Graph};
use crate::reachability::{components, would_close_cycle, Components};
use crate::weights::WeightTable;
use tracing::{debug, trace};

///
/// Minimum spanning forest by [Borůvka's algorithm][boruvka].
///
/// Every round, each block (connected component of the tree built so far)
/// picks its lightest edge to another block, all picks are added, and the
/// blocks are recomputed by BFS. Stops when one block is left or a round
/// adds nothing (disconnected input).
///
/// Each block takes the first lightest edge found scanning its nodes'
/// incident edges. Picks that would close a cycle with earlier picks (only
/// possible between equal weights) are skipped.
///
/// [boruvka]: https://en.wikipedia.org/wiki/Bor%C5%AFvka%27s_algorithm
///
#[tracing::instrument(skip_all, fields(order = graph.order()))]
pub fn boruvka<G: Graph>(graph: &G, weights: &WeightTable) -> Result<SpanningTree<G::Node>> {
    weights.check_order(graph)?;
    let mut result = SpanningTree::edgeless(graph);
    let mut blocks = Components::singletons(graph.order());
    let incident = incident_edges(graph, weights);
    let mut round = 0;

    while blocks.count() > 1 {
        round += 1;
        let candidates: Vec<EdgeIndex> = blocks
            .blocks
            .iter()
            .filter_map(|block| lightest_leaving_edge(&incident, &blocks, block))
            .collect();
        trace!("round {}: {} blocks, candidates {:?}", round, blocks.count(), candidates);

        let mut n_added = 0;
        for edge in candidates {
            // both blocks of an edge may have picked it
            if !would_close_cycle(&result.tree, edge.from, edge.to) {
                result.add_edge(edge.from, edge.to);
                n_added += 1;
            }
        }
        if n_added == 0 {
            break;
        }
        blocks = components(&result.tree);
    }
    result.sum_weights(graph, weights);
    debug!(
        "{} rounds, {} blocks, total weight {}",
        round,
        blocks.count(),
        result.total_weight
    );

    Ok(result)
}

///
/// Lightest finite edge from a node of `block` to a node of another block,
/// the first one found on ties.
///
fn lightest_leaving_edge(
    incident: &[Vec<(usize, f64)>],
    blocks: &Components,
    block: &[usize],
) -> Option<EdgeIndex> {
    let mut best: Option<(f64, EdgeIndex)> = None;
    for &u in block {
        for &(v, w) in &incident[u] {
            if blocks.same_block(u, v) {
                continue;
            }
            if w < best.map_or(f64::INFINITY, |(bw, _)| bw) {
                best = Some((w, EdgeIndex::new(u, v)));
            }
        }
    }
    best.map(|(_, edge)| edge)
}

//
// tests
//
