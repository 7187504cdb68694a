//!
//! Floyd-Warshall algorithm
//! for shortest paths between all pairs of nodes
//!
use crate::common::{indices_to_nodes, path_to_edges};
use crate::error::Result;
use crate::graph::{DirectedAdjacencyListGraph, Graph};
use crate::weights::WeightTable;
use tracing::{debug, trace};

///
/// Result of `floyd_warshall`.
///
/// `distances[i][j]` and `predecessors[i][j]` are indexed by node index.
/// `predecessors[s][j]` is the node before `j` on the shortest path from `s`.
///
#[derive(Debug, Clone)]
pub struct FloydWarshallResult<N> {
    pub distances: Vec<Vec<f64>>,
    pub predecessors: Vec<Vec<Option<usize>>>,
    /// `trees[s]`: shortest path tree rooted at node `s`
    pub trees: Vec<DirectedAdjacencyListGraph<N>>,
    /// some `distances[i][i]` became negative
    pub has_negative_cycle: bool,
}

impl<N> FloydWarshallResult<N> {
    ///
    /// Shortest path from `s` to `d` as node indices, `[s]` if `s == d`.
    ///
    /// Empty if there is no route, or if the predecessor chain is broken
    /// or does not reach `s` within `order` steps (possible only with a
    /// negative cycle).
    ///
    pub fn path(&self, s: usize, d: usize) -> Vec<usize> {
        let n = self.predecessors.len();
        if self.predecessors[s][d].is_none() {
            return vec![];
        }
        let mut path = vec![d];
        let mut node = d;
        while node != s {
            match self.predecessors[s][node] {
                Some(pred) if path.len() <= n => {
                    path.push(pred);
                    node = pred;
                }
                _ => return vec![],
            }
        }
        path.reverse();
        path
    }
}

impl<N: Ord + Clone + std::fmt::Debug> FloydWarshallResult<N> {
    ///
    /// `path` between two nodes of `graph`, as nodes.
    ///
    pub fn node_path<G: Graph<Node = N>>(&self, graph: &G, s: &N, d: &N) -> Result<Vec<N>> {
        let s = graph.require_index(s)?;
        let d = graph.require_index(d)?;
        Ok(indices_to_nodes(graph, &self.path(s, d)))
    }
}

///
/// [Floyd–Warshall algorithm][fw] computing distances, predecessors
/// and one shortest path tree per source node.
///
/// A negative self-loop alone is not detected, since `distances[i][i]` starts at 0.
///
/// [fw]: https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
///
#[tracing::instrument(skip_all, fields(order = graph.order()))]
pub fn floyd_warshall<G: Graph>(
    graph: &G,
    weights: &WeightTable,
) -> Result<FloydWarshallResult<G::Node>> {
    weights.check_order(graph)?;
    let n = graph.order();

    // (1) init
    let mut distances = weights.rows();
    let mut predecessors = vec![vec![None; n]; n];
    for i in 0..n {
        distances[i][i] = 0.0;
        predecessors[i][i] = Some(i);
        for j in graph.neighbors_of(i) {
            predecessors[i][j] = Some(i);
        }
    }

    // (2) relax through each intermediate node k; k must be the outer loop
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let candidate = distances[i][k] + distances[k][j];
                if candidate < distances[i][j] {
                    trace!("updated\tk={}\ti={}\tj={}\td={}", k, i, j, candidate);
                    distances[i][j] = candidate;
                    predecessors[i][j] = predecessors[k][j];
                }
            }
        }
    }

    let has_negative_cycle = (0..n).any(|i| distances[i][i] < 0.0);
    if has_negative_cycle {
        debug!("negative cycle found");
    }

    let mut result = FloydWarshallResult {
        distances,
        predecessors,
        trees: Vec::with_capacity(n),
        has_negative_cycle,
    };
    result.trees = (0..n).map(|s| shortest_path_tree(graph, &result, s)).collect();
    Ok(result)
}

///
/// Union of the shortest paths from `s` to every reachable node
///
fn shortest_path_tree<G: Graph>(
    graph: &G,
    result: &FloydWarshallResult<G::Node>,
    s: usize,
) -> DirectedAdjacencyListGraph<G::Node> {
    let mut tree = DirectedAdjacencyListGraph::new();
    tree.add_node(graph.node_at(s).clone());
    for d in 0..graph.order() {
        if d == s {
            continue;
        }
        for edge in path_to_edges(&result.path(s, d)) {
            let u = graph.node_at(edge.from);
            let v = graph.node_at(edge.to);
            // paths to different destinations share prefixes
            if !tree.is_adjacent(u, v) {
                tree.add_edge(u.clone(), v.clone());
            }
        }
    }
    tree
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeIndex, UndirectedAdjacencyListGraph};
    use crate::weights::weighted_graph;

    #[test]
    fn floyd_warshall_01() {
        //
        // graph used as an example of petgraph floydWarshall
        //
        let (g, w): (DirectedAdjacencyListGraph<u32>, _) = weighted_graph(&[
            (0, 1, 1.0),
            (0, 2, 4.0),
            (0, 3, 10.0),
            (1, 2, 2.0),
            (1, 3, 2.0),
            (2, 3, 2.0),
        ]);
        let r = floyd_warshall(&g, &w).unwrap();
        let inf = f64::INFINITY;
        assert_eq!(
            r.distances,
            vec![
                vec![0.0, 1.0, 3.0, 3.0],
                vec![inf, 0.0, 2.0, 2.0],
                vec![inf, inf, 0.0, 2.0],
                vec![inf, inf, inf, 0.0],
            ]
        );
        assert!(!r.has_negative_cycle);
        assert_eq!(r.path(0, 3), vec![0, 1, 3]);
        assert_eq!(r.path(0, 2), vec![0, 1, 2]);
        assert_eq!(r.path(2, 2), vec![2]);
        assert!(r.path(3, 0).is_empty());
        assert_eq!(r.node_path(&g, &0, &3).unwrap(), vec![0, 1, 3]);
        assert!(r.node_path(&g, &0, &9).is_err());

        let tree = &r.trees[0];
        assert_eq!(tree.order(), 4);
        assert_eq!(
            tree.all_edges(),
            vec![EdgeIndex::new(0, 1), EdgeIndex::new(1, 2), EdgeIndex::new(1, 3)]
        );
        assert_eq!(r.trees[3].nodes(), vec![3]);
        assert_eq!(r.trees[3].size(), 0);
    }

    #[test]
    fn floyd_warshall_negative_cycle() {
        let (g, w): (DirectedAdjacencyListGraph<u32>, _) = weighted_graph(&[
            (0, 1, 2.0),
            (0, 4, -3.0),
            (1, 2, -1.0),
            (2, 3, -1.0),
            (3, 1, -1.0),
            (4, 3, 3.0),
        ]);
        let r = floyd_warshall(&g, &w).unwrap();
        assert!(r.has_negative_cycle);
        assert!(r.distances[1][1] < 0.0);

        let (g, w): (DirectedAdjacencyListGraph<u32>, _) =
            weighted_graph(&[(0, 1, -2.0), (1, 2, -3.0), (2, 0, -4.0)]);
        let r = floyd_warshall(&g, &w).unwrap();
        assert!(r.has_negative_cycle);
        // reconstruction terminates
        for s in 0..3 {
            for d in 0..3 {
                assert!(r.path(s, d).len() <= 4);
            }
        }
    }

    #[test]
    fn floyd_warshall_undirected_unit() {
        // path a - b - c - d plus a chord a - c
        let (g, w): (UndirectedAdjacencyListGraph<char>, _) = weighted_graph(&[
            ('a', 'b', 1.0),
            ('b', 'c', 1.0),
            ('c', 'd', 1.0),
            ('a', 'c', 1.0),
        ]);
        let r = floyd_warshall(&g, &w).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(r.distances[i][j], r.distances[j][i]);
                let path = r.path(i, j);
                assert_eq!((path.len() - 1) as f64, r.distances[i][j]);
            }
        }
        assert_eq!(r.node_path(&g, &'d', &'a').unwrap(), vec!['d', 'c', 'a']);
        assert_eq!(r.trees[3].order(), 4);
        assert_eq!(r.trees[3].size(), 3);
    }

    #[test]
    fn floyd_warshall_errors() {
        let (g, _): (DirectedAdjacencyListGraph<u32>, _) = weighted_graph(&[(0, 1, 1.0)]);
        assert!(floyd_warshall(&g, &WeightTable::new(3)).is_err());
        let empty: DirectedAdjacencyListGraph<u32> = DirectedAdjacencyListGraph::new();
        let r = floyd_warshall(&empty, &WeightTable::new(0)).unwrap();
        assert!(r.distances.is_empty());
        assert!(r.trees.is_empty());
    }
}
