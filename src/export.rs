//!
//! Conversion into `petgraph::Graph`
//!
//! For rendering (`petgraph::dot::Dot`) and for running `petgraph::algo`
//! on graphs built with this crate.
//!
use crate::error::Result;
use crate::graph::Graph;
use crate::weights::WeightTable;
use petgraph::graph::NodeIndex;
use petgraph::EdgeType;

///
/// Copy `graph` into a `petgraph::Graph` carrying `weights` on its edges.
///
/// Node `i` of `graph` becomes `NodeIndex::new(i)`. Each edge of `all_edges`
/// is added once, so `Ty` should match `graph.is_directed()`.
///
pub fn to_petgraph<G, Ty>(
    graph: &G,
    weights: &WeightTable,
) -> Result<petgraph::Graph<G::Node, f64, Ty>>
where
    G: Graph,
    Ty: EdgeType,
{
    weights.check_order(graph)?;
    let mut exported: petgraph::Graph<G::Node, f64, Ty> =
        petgraph::Graph::with_capacity(graph.order(), graph.size());
    for node in graph.nodes() {
        exported.add_node(node);
    }
    for edge in graph.all_edges() {
        exported.add_edge(
            NodeIndex::new(edge.from),
            NodeIndex::new(edge.to),
            weights.get(edge.from, edge.to),
        );
    }
    Ok(exported)
}

//
// tests
//
