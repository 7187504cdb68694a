//!
//! Classical graph algorithms over interchangeable graph representations
//!
//! Algorithms are written against the [`graph::Graph`] trait and take edge
//! weights from a separate [`weights::WeightTable`] indexed by node index.
//!
//! # Algorithms
//!
//! * bellman_ford: single source shortest paths, negative cycle detection
//! * dijkstra: single source shortest paths for non-negative weights
//! * floyd: all pairs shortest paths and shortest path trees
//! * mst: Kruskal, Borůvka and Prim minimum spanning trees
//! * hierholzer: Eulerian cycles and paths
//!
//! # Helpers
//!
//! * reachability: DFS probe and connected components
//! * cycle, common: cycles and paths as node indices
//! * export: conversion into `petgraph::Graph`
//!
pub mod bellman_ford;
pub mod common;
pub mod cycle;
pub mod dijkstra;
pub mod error;
pub mod export;
pub mod floyd;
pub mod graph;
pub mod hierholzer;
pub mod mst;
pub mod reachability;
pub mod weights;

pub use error::{GraphError, Result};
pub use graph::{EdgeIndex, Graph};
pub use weights::WeightTable;
