//!
//! Cycle in graph
//!
use crate::common::{cycle_to_edges, total_weight};
use crate::graph::EdgeIndex;
use crate::weights::WeightTable;
use itertools::Itertools;
use std::cmp::Ordering;

///
/// Cycle (as a list of node indices, the closing edge back to the first node is implicit)
///
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle(Vec<usize>);

//
// Cycle
//
impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

impl Cycle {
    /// constructor from vec of node indices
    pub fn new(nodes: Vec<usize>) -> Cycle {
        Cycle(nodes)
    }
    pub fn nodes(&self) -> &[usize] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// edges of the cycle including the closing one
    pub fn edges(&self) -> Vec<EdgeIndex> {
        cycle_to_edges(&self.0)
    }
    pub fn total_weight(&self, weights: &WeightTable) -> f64 {
        total_weight(weights, &self.edges())
    }
    fn min_index(&self) -> usize {
        // find the index i (i=0,..,n-1) such that the rotation starting at i is minimum
        let mut i0 = 0;
        let n = self.0.len();
        for i in 1..n {
            if let Ordering::Greater = cmp(&self.0, i0, i) {
                i0 = i;
            }
        }
        i0
    }
    /// normalize the cycle
    /// so that a index vector will start in the minimum index.
    pub fn normalize(self) -> Cycle {
        let i = self.min_index();
        let mut new_cycle = self;
        new_cycle.0.rotate_left(i);
        new_cycle
    }
}

///
/// compare rotations of xs starting at i and at j
///
fn cmp<X: PartialOrd + Copy>(xs: &[X], i: usize, j: usize) -> Ordering {
    let n = xs.len();
    if i == j {
        return Ordering::Equal;
    }
    for k in 0..n {
        let xik = xs[(i + k) % n];
        let xjk = xs[(j + k) % n];
        if xik < xjk {
            return Ordering::Less;
        } else if xik > xjk {
            return Ordering::Greater;
        }
    }
    // all elements are the same
    Ordering::Equal
}
