//!
//! Eulerian circuits and paths by Hierholzer's algorithm
//!
//! * hierholzer_undirected: parity of node degrees
//! * hierholzer_directed: balance of in/out degrees
//! * eulerian_trail: picks one of the two from `Graph::is_directed`
//!
//! A self-loop adds 2 to the degree of its node in an undirected graph.
//!
use crate::common::indices_to_nodes;
use crate::graph::Graph;
use fnv::FnvHashMap as HashMap;
use std::collections::VecDeque;
use tracing::debug;

///
/// Eulerian cycle or path found in a graph.
///
/// `circuit` lists nodes in walk order; for a cycle the first node is repeated
/// at the end. When no trail exists both flags are false and `circuit` is
/// empty. A cycle sets both flags.
///
/// The flags are not decided by degrees alone: when the degrees allow a
/// trail but the edges lie in more than one component, the walk misses
/// some edges and the result is `none()`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerianTrail<N> {
    pub circuit: Vec<N>,
    pub has_eulerian_cycle: bool,
    pub has_eulerian_path: bool,
}

impl<N> EulerianTrail<N> {
    pub fn none() -> Self {
        EulerianTrail {
            circuit: Vec::new(),
            has_eulerian_cycle: false,
            has_eulerian_path: false,
        }
    }
    pub fn exists(&self) -> bool {
        self.has_eulerian_path
    }
}

/// What the degree test allows, with the node to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Eligibility {
    Cycle(usize),
    Path(usize),
    Neither,
}

/// remaining neighbors of every node, consumed while tracing
type WorkingCopy = HashMap<usize, VecDeque<usize>>;

fn working_copy<G: Graph>(graph: &G) -> WorkingCopy {
    (0..graph.order())
        .map(|v| (v, graph.neighbors_of(v).into_iter().collect()))
        .collect()
}

///
/// Eulerian trail of a graph, directed or undirected.
///
pub fn eulerian_trail<G: Graph>(graph: &G) -> EulerianTrail<G::Node> {
    if graph.is_directed() {
        hierholzer_directed(graph)
    } else {
        hierholzer_undirected(graph)
    }
}

///
/// Eulerian trail of an undirected graph.
///
/// No odd-degree node gives a cycle from the first node with an edge,
/// exactly two give a path from the first odd one, otherwise there is none.
///
#[tracing::instrument(skip_all, fields(order = graph.order()))]
pub fn hierholzer_undirected<G: Graph>(graph: &G) -> EulerianTrail<G::Node> {
    let mut adjacency = working_copy(graph);
    let degree = |v: usize| {
        let neighbors = &adjacency[&v];
        neighbors.len() + neighbors.iter().filter(|&&w| w == v).count()
    };

    let mut first_with_edge = None;
    let mut odd = Vec::new();
    for v in 0..graph.order() {
        let d = degree(v);
        if d > 0 && first_with_edge.is_none() {
            first_with_edge = Some(v);
        }
        if d % 2 == 1 {
            odd.push(v);
        }
    }
    let eligibility = match (odd.len(), first_with_edge) {
        (_, None) => Eligibility::Neither,
        (0, Some(s)) => Eligibility::Cycle(s),
        (2, _) => Eligibility::Path(odd[0]),
        _ => Eligibility::Neither,
    };
    debug!("odd degree nodes: {}, {:?}", odd.len(), eligibility);

    trace_trail(graph, &mut adjacency, eligibility, |adjacency, from, to| {
        // the reverse entry of an undirected edge
        if from != to {
            if let Some(list) = adjacency.get_mut(&to) {
                if let Some(pos) = list.iter().position(|&w| w == from) {
                    list.remove(pos);
                }
            }
        }
    })
}

///
/// Eulerian trail of a directed graph.
///
/// Balanced in/out degrees everywhere give a cycle from the first node with
/// an outgoing edge. Exactly one node with `out = in + 1` and one with
/// `in = out + 1` give a path from the former. Anything else has none.
///
#[tracing::instrument(skip_all, fields(order = graph.order()))]
pub fn hierholzer_directed<G: Graph>(graph: &G) -> EulerianTrail<G::Node> {
    let n = graph.order();
    let mut adjacency = working_copy(graph);
    let mut in_degree = vec![0usize; n];
    for neighbors in adjacency.values() {
        for &w in neighbors {
            in_degree[w] += 1;
        }
    }

    let mut first_with_edge = None;
    let mut path_starts = Vec::new();
    let mut path_ends = Vec::new();
    let mut unbalanced = false;
    for v in 0..n {
        let out = adjacency[&v].len();
        let inc = in_degree[v];
        if out > 0 && first_with_edge.is_none() {
            first_with_edge = Some(v);
        }
        if out == inc + 1 {
            path_starts.push(v);
        } else if inc == out + 1 {
            path_ends.push(v);
        } else if out != inc {
            unbalanced = true;
        }
    }
    let eligibility = match (path_starts.len(), path_ends.len(), first_with_edge) {
        _ if unbalanced => Eligibility::Neither,
        (_, _, None) => Eligibility::Neither,
        (0, 0, Some(s)) => Eligibility::Cycle(s),
        (1, 1, _) => Eligibility::Path(path_starts[0]),
        _ => Eligibility::Neither,
    };
    debug!(
        "starts: {:?}, ends: {:?}, {:?}",
        path_starts, path_ends, eligibility
    );

    trace_trail(graph, &mut adjacency, eligibility, |_, _, _| {})
}

///
/// Run the tracer if the degree test passed, and keep its walk only if it
/// used every edge (the edges may lie in several components).
///
fn trace_trail<G, F>(
    graph: &G,
    adjacency: &mut WorkingCopy,
    eligibility: Eligibility,
    remove_reverse: F,
) -> EulerianTrail<G::Node>
where
    G: Graph,
    F: Fn(&mut WorkingCopy, usize, usize),
{
    let (start, is_cycle) = match eligibility {
        Eligibility::Cycle(s) => (s, true),
        Eligibility::Path(s) => (s, false),
        Eligibility::Neither => return EulerianTrail::none(),
    };

    let walk = hierholzer(adjacency, start, remove_reverse);
    let n_edges = graph.all_edges().len();
    if walk.len() != n_edges + 1 {
        debug!("walk uses {} of {} edges", walk.len() - 1, n_edges);
        return EulerianTrail::none();
    }

    EulerianTrail {
        circuit: indices_to_nodes(graph, &walk),
        has_eulerian_cycle: is_cycle,
        has_eulerian_path: true,
    }
}

///
/// Hierholzer's walk from `start`, consuming the edges of `adjacency`.
///
/// Advance along unused edges while possible, pushing each node left behind.
/// At a node with no unused edge, emit it and backtrack to the last pushed
/// node. Emitted nodes in reverse order form the walk.
///
fn hierholzer<F>(adjacency: &mut WorkingCopy, start: usize, remove_reverse: F) -> Vec<usize>
where
    F: Fn(&mut WorkingCopy, usize, usize),
{
    let mut stack = Vec::new();
    let mut circuit = Vec::new();
    let mut current = start;

    loop {
        let next = adjacency.get_mut(&current).and_then(|list| list.pop_front());
        match next {
            Some(next) => {
                remove_reverse(adjacency, current, next);
                stack.push(current);
                current = next;
            }
            None => {
                circuit.push(current);
                match stack.pop() {
                    Some(prev) => current = prev,
                    None => break,
                }
            }
        }
    }

    circuit.reverse();
    circuit
}

//
// tests
//
