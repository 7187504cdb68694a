//!
//! Properties every algorithm must show on every representation
//!
mod common;

use common::{random_graph, ring_with_triangle};
use graph_algos::bellman_ford::bellman_ford;
use graph_algos::common::{is_edge_simple, path_to_edges};
use graph_algos::dijkstra::dijkstra;
use graph_algos::floyd::floyd_warshall;
use graph_algos::graph::{
    DirectedAdjacencyListGraph, DirectedAdjacencyMatrixGraph, DirectedIncidenceMatrixGraph,
    UndirectedAdjacencyListGraph, UndirectedAdjacencyMatrixGraph, UndirectedIncidenceMatrixGraph,
};
use graph_algos::hierholzer::eulerian_trail;
use graph_algos::mst::{boruvka, kruskal, prim};
use graph_algos::weights::weighted_graph;
use graph_algos::Graph;
use petgraph::{Directed, Undirected};

type PetDirected = petgraph::Graph<u32, (), Directed>;
type PetUndirected = petgraph::Graph<u32, (), Undirected>;

fn shortest_paths_agree<G: Graph<Node = u32> + Default>() {
    for seed in 0..10 {
        let (g, w): (G, _) = random_graph(seed, 10, 0.3, 0..10);
        for start in 0..10 {
            let bf = bellman_ford(&g, &w, &start).unwrap();
            let dj = dijkstra(&g, &w, &start).unwrap();
            assert!(!bf.has_negative_cycle);
            assert_eq!(bf.paths.distances, dj.distances, "seed={} start={}", seed, start);
        }
    }
}

fn floyd_consistent<G: Graph<Node = u32> + Default>() {
    for seed in 0..10 {
        let (g, w): (G, _) = random_graph(seed, 8, 0.3, 1..10);
        let r = floyd_warshall(&g, &w).unwrap();
        let n = g.order();
        assert!(!r.has_negative_cycle);
        for i in 0..n {
            let bf = bellman_ford(&g, &w, &(i as u32)).unwrap();
            assert_eq!(r.distances[i], bf.paths.distances, "seed={} i={}", seed, i);
            for j in 0..n {
                if !g.is_directed() {
                    assert_eq!(r.distances[i][j], r.distances[j][i]);
                }
                for k in 0..n {
                    assert!(r.distances[i][j] <= r.distances[i][k] + r.distances[k][j]);
                }
            }
        }
    }

    // unit weights: path length in edges equals the distance
    for seed in 0..10 {
        let (g, w): (G, _) = random_graph(seed, 8, 0.3, 1..2);
        let r = floyd_warshall(&g, &w).unwrap();
        for s in 0..g.order() {
            let tree = &r.trees[s];
            let n_reachable = r.distances[s].iter().filter(|d| d.is_finite()).count();
            assert_eq!(tree.order(), n_reachable);
            assert_eq!(tree.size(), n_reachable - 1);
            for d in 0..g.order() {
                let path = r.path(s, d);
                if r.distances[s][d].is_finite() {
                    assert_eq!((path.len() - 1) as f64, r.distances[s][d]);
                    assert_eq!(path.first(), Some(&s));
                    assert_eq!(path.last(), Some(&d));
                } else {
                    assert!(path.is_empty());
                }
            }
        }
    }
}

fn spanning_trees_agree<G: Graph<Node = u32> + Default>() {
    for seed in 0..10 {
        let (g, w): (G, _) = random_graph(seed, 9, 0.4, 1..30);
        let k = kruskal(&g, &w).unwrap();
        let b = boruvka(&g, &w).unwrap();
        assert_eq!(k.total_weight, b.total_weight, "seed={}", seed);
        if k.is_spanning_tree() {
            let p = prim(&g, &w, &0).unwrap();
            assert_eq!(k.total_weight, p.total_weight, "seed={}", seed);
            assert_eq!(p.tree.size(), g.order() - 1);
        }
    }

    // 4-cycle with distinct weights: the three lightest edges
    let (g, w): (G, _) = weighted_graph(&[(0, 1, 5.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0)]);
    for t in [
        kruskal(&g, &w).unwrap(),
        boruvka(&g, &w).unwrap(),
        prim(&g, &w, &2).unwrap(),
    ] {
        assert_eq!(t.total_weight, 9.0);
        assert!(t.is_spanning_tree());
    }

    // an infinite weight means no edge: 3 stays apart, 2 - 0 is never used
    let (g, w): (G, _) = weighted_graph(&[
        (0, 1, 1.0),
        (1, 2, 2.0),
        (2, 0, f64::INFINITY),
        (2, 3, f64::INFINITY),
    ]);
    for t in [
        kruskal(&g, &w).unwrap(),
        boruvka(&g, &w).unwrap(),
        prim(&g, &w, &0).unwrap(),
    ] {
        assert_eq!(t.total_weight, 3.0);
        assert_eq!(t.tree.size(), 2);
        assert_eq!(t.component_count(), 2);
    }
}

fn eulerian_cycle_uses_every_edge<G: Graph<Node = u32> + Default>() {
    let g: G = ring_with_triangle(7);
    let r = eulerian_trail(&g);
    assert!(r.has_eulerian_cycle);
    assert_eq!(r.circuit.len(), g.size() + 1);
    assert_eq!(r.circuit.first(), r.circuit.last());

    let indices: Vec<usize> = r.circuit.iter().filter_map(|v| g.index_of(v)).collect();
    let edges = path_to_edges(&indices);
    assert_eq!(edges.len(), g.size());
    assert!(is_edge_simple(&edges, g.is_directed()));
    assert!(edges.iter().all(|e| g.has_edge(e.from, e.to)));

    // a triangle alone
    let mut g = G::default();
    g.extend_with_edges([(1, 2), (2, 3), (3, 1)]);
    let r = eulerian_trail(&g);
    assert!(r.has_eulerian_cycle);
    assert_eq!(r.circuit.len(), 4);
}

fn eulerian_path_from_start<G: Graph<Node = u32> + Default>() {
    // ring minus its closing edge 6 - 0, plus the triangle through 0
    let mut g = G::default();
    for v in 0..6 {
        g.add_edge(v, v + 1);
    }
    g.extend_with_edges([(0, 2), (2, 4), (4, 0)]);
    let r = eulerian_trail(&g);
    assert!(!r.has_eulerian_cycle);
    assert!(r.has_eulerian_path);
    assert_eq!(r.circuit.len(), g.size() + 1);
    assert_eq!(r.circuit.first(), Some(&0));
    assert_eq!(r.circuit.last(), Some(&6));
}

#[test]
fn test_three_node_scenario() {
    fn check<G: Graph<Node = char> + Default>() {
        let (g, w): (G, _) = weighted_graph(&[('A', 'B', 1.0), ('B', 'C', 2.0), ('A', 'C', 5.0)]);
        let r = bellman_ford(&g, &w, &'A').unwrap();
        assert!(!r.has_negative_cycle);
        assert_eq!(r.paths.distances, vec![0.0, 1.0, 3.0]);
        assert_eq!(r.paths.predecessors, vec![None, Some(0), Some(1)]);
    }
    check::<DirectedAdjacencyListGraph<char>>();
    check::<DirectedAdjacencyMatrixGraph<char>>();
    check::<DirectedIncidenceMatrixGraph<char>>();
    check::<petgraph::Graph<char, (), Directed>>();
}

#[test]
fn test_representations_agree() {
    for seed in 0..5 {
        let (a, w): (DirectedAdjacencyListGraph<u32>, _) = random_graph(seed, 10, 0.3, -1..10);
        let (b, _): (DirectedAdjacencyMatrixGraph<u32>, _) = random_graph(seed, 10, 0.3, -1..10);
        let (c, _): (DirectedIncidenceMatrixGraph<u32>, _) = random_graph(seed, 10, 0.3, -1..10);
        let (d, _): (PetDirected, _) = random_graph(seed, 10, 0.3, -1..10);
        let expected = bellman_ford(&a, &w, &0).unwrap();
        assert_eq!(bellman_ford(&b, &w, &0).unwrap(), expected);
        assert_eq!(bellman_ford(&c, &w, &0).unwrap().has_negative_cycle, expected.has_negative_cycle);
        assert_eq!(bellman_ford(&d, &w, &0).unwrap().has_negative_cycle, expected.has_negative_cycle);
        if !expected.has_negative_cycle {
            assert_eq!(bellman_ford(&c, &w, &0).unwrap().paths.distances, expected.paths.distances);
            assert_eq!(bellman_ford(&d, &w, &0).unwrap().paths.distances, expected.paths.distances);
        }
    }
}

#[test]
fn test_shortest_paths_agree() {
    shortest_paths_agree::<DirectedAdjacencyListGraph<u32>>();
    shortest_paths_agree::<UndirectedAdjacencyListGraph<u32>>();
    shortest_paths_agree::<DirectedAdjacencyMatrixGraph<u32>>();
    shortest_paths_agree::<UndirectedAdjacencyMatrixGraph<u32>>();
    shortest_paths_agree::<DirectedIncidenceMatrixGraph<u32>>();
    shortest_paths_agree::<UndirectedIncidenceMatrixGraph<u32>>();
    shortest_paths_agree::<PetDirected>();
    shortest_paths_agree::<PetUndirected>();
}

#[test]
fn test_floyd_consistent() {
    floyd_consistent::<DirectedAdjacencyListGraph<u32>>();
    floyd_consistent::<UndirectedAdjacencyListGraph<u32>>();
    floyd_consistent::<DirectedAdjacencyMatrixGraph<u32>>();
    floyd_consistent::<UndirectedAdjacencyMatrixGraph<u32>>();
    floyd_consistent::<DirectedIncidenceMatrixGraph<u32>>();
    floyd_consistent::<UndirectedIncidenceMatrixGraph<u32>>();
    floyd_consistent::<PetDirected>();
    floyd_consistent::<PetUndirected>();
}

#[test]
fn test_spanning_trees_agree() {
    spanning_trees_agree::<UndirectedAdjacencyListGraph<u32>>();
    spanning_trees_agree::<UndirectedAdjacencyMatrixGraph<u32>>();
    spanning_trees_agree::<UndirectedIncidenceMatrixGraph<u32>>();
    spanning_trees_agree::<PetUndirected>();
    // directed edges read as undirected
    spanning_trees_agree::<DirectedAdjacencyListGraph<u32>>();
    spanning_trees_agree::<DirectedAdjacencyMatrixGraph<u32>>();
    spanning_trees_agree::<DirectedIncidenceMatrixGraph<u32>>();
    spanning_trees_agree::<PetDirected>();
}

#[test]
fn test_eulerian() {
    eulerian_cycle_uses_every_edge::<DirectedAdjacencyListGraph<u32>>();
    eulerian_cycle_uses_every_edge::<UndirectedAdjacencyListGraph<u32>>();
    eulerian_cycle_uses_every_edge::<DirectedAdjacencyMatrixGraph<u32>>();
    eulerian_cycle_uses_every_edge::<UndirectedAdjacencyMatrixGraph<u32>>();
    eulerian_cycle_uses_every_edge::<DirectedIncidenceMatrixGraph<u32>>();
    eulerian_cycle_uses_every_edge::<UndirectedIncidenceMatrixGraph<u32>>();
    eulerian_cycle_uses_every_edge::<PetDirected>();
    eulerian_cycle_uses_every_edge::<PetUndirected>();

    eulerian_path_from_start::<DirectedAdjacencyListGraph<u32>>();
    eulerian_path_from_start::<DirectedAdjacencyMatrixGraph<u32>>();
    eulerian_path_from_start::<DirectedIncidenceMatrixGraph<u32>>();
    eulerian_path_from_start::<PetDirected>();
}
