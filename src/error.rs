//!
//! Errors raised by graph algorithms
//!
//! Only malformed inputs are errors. Infeasible outcomes (a disconnected graph,
//! no Eulerian trail, a negative cycle) are reported through result flags.
//!
use thiserror::Error;

///
/// Errors that can occur when an algorithm is invoked
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The requested node is not in the graph
    #[error("node {0} is not in the graph")]
    NodeNotFound(String),

    /// The weight table is not sized for the graph
    #[error("weight table has order {actual} but the graph has order {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A row of a raw weight table has the wrong length
    #[error("weight table row {row} has {len} entries, expected {order}")]
    NotSquare { row: usize, len: usize, order: usize },
}

impl GraphError {
    pub fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::NodeNotFound(format!("{:?}", node))
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
