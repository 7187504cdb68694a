//!
//! Reachability probes
//!
//! * dfs: depth-first search with discovery/finish times
//! * is_reachable / would_close_cycle: connectivity queries built on dfs
//! * components: connected components by breadth-first search
//!
use crate::error::Result;
use crate::graph::Graph;
use std::collections::VecDeque;

///
/// Result of a depth-first search from a single start node.
///
/// Times start at 1 and are shared between discovery and finish events.
/// Nodes never reached have `None` everywhere.
///
#[derive(Debug, Clone, PartialEq)]
pub struct DfsResult {
    pub discovery: Vec<Option<usize>>,
    pub finish: Vec<Option<usize>>,
    pub predecessors: Vec<Option<usize>>,
}

impl DfsResult {
    pub fn is_reached(&self, index: usize) -> bool {
        self.discovery[index].is_some()
    }
    /// indices reached by the search, in discovery order
    pub fn reached(&self) -> Vec<usize> {
        let mut reached: Vec<usize> = (0..self.discovery.len())
            .filter(|&v| self.is_reached(v))
            .collect();
        reached.sort_by_key(|&v| self.discovery[v]);
        reached
    }
}

///
/// Depth-first search following outgoing edges from `start`
///
pub fn dfs<G: Graph>(graph: &G, start: &G::Node) -> Result<DfsResult> {
    let s = graph.require_index(start)?;
    Ok(dfs_from_index(graph, s))
}

///
/// Depth-first search from the node with index `start`
///
/// # Panics
/// if `start >= graph.order()`
///
pub fn dfs_from_index<G: Graph>(graph: &G, start: usize) -> DfsResult {
    let n = graph.order();
    let mut discovery = vec![None; n];
    let mut finish = vec![None; n];
    let mut predecessors = vec![None; n];
    let mut time = 1;

    discovery[start] = Some(time);
    time += 1;
    // (node, its neighbors not tried yet)
    let mut stack: Vec<(usize, Vec<usize>)> = vec![(start, neighbors_rev(graph, start))];

    while let Some((node, next_nodes)) = stack.last_mut() {
        if let Some(next) = next_nodes.pop() {
            if discovery[next].is_none() {
                discovery[next] = Some(time);
                time += 1;
                predecessors[next] = Some(*node);
                stack.push((next, neighbors_rev(graph, next)));
            }
        } else {
            finish[*node] = Some(time);
            time += 1;
            stack.pop();
        }
    }

    DfsResult {
        discovery,
        finish,
        predecessors,
    }
}

/// neighbors reversed, so that popping visits them in enumeration order
fn neighbors_rev<G: Graph>(graph: &G, index: usize) -> Vec<usize> {
    let mut neighbors = graph.neighbors_of(index);
    neighbors.reverse();
    neighbors
}

///
/// Is there a path `from ---> to` following outgoing edges?
///
/// A node always reaches itself.
///
pub fn is_reachable<G: Graph>(graph: &G, from: usize, to: usize) -> bool {
    dfs_from_index(graph, from).is_reached(to)
}

///
/// Would adding the edge `u - v` to the (undirected) forest `tree` close a cycle?
///
pub fn would_close_cycle<G: Graph>(tree: &G, u: usize, v: usize) -> bool {
    is_reachable(tree, u, v)
}

///
/// Connected components ("blocks") of a graph
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// members of each block, in BFS order
    pub blocks: Vec<Vec<usize>>,
    /// `block_of[v]` is the block containing v
    pub block_of: Vec<usize>,
}

impl Components {
    ///
    /// every node alone in its own block
    ///
    pub fn singletons(n: usize) -> Self {
        Components {
            blocks: (0..n).map(|v| vec![v]).collect(),
            block_of: (0..n).collect(),
        }
    }
    pub fn count(&self) -> usize {
        self.blocks.len()
    }
    pub fn same_block(&self, u: usize, v: usize) -> bool {
        self.block_of[u] == self.block_of[v]
    }
}

///
/// Split the nodes into connected components by a breadth-first search from
/// every node not yet assigned, in index order.
///
/// Edges are followed in their outgoing direction only, so on a directed graph
/// this is only meaningful when edges are present in both directions.
///
pub fn components<G: Graph>(graph: &G) -> Components {
    let n = graph.order();
    let mut block_of: Vec<Option<usize>> = vec![None; n];
    let mut blocks = Vec::new();

    for root in 0..n {
        if block_of[root].is_some() {
            continue;
        }
        let id = blocks.len();
        let mut block = Vec::new();
        let mut queue = VecDeque::new();
        block_of[root] = Some(id);
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            block.push(v);
            for w in graph.neighbors_of(v) {
                if block_of[w].is_none() {
                    block_of[w] = Some(id);
                    queue.push_back(w);
                }
            }
        }
        blocks.push(block);
    }

    Components {
        blocks,
        block_of: block_of.into_iter().flatten().collect(),
    }
}

//
// tests
//
