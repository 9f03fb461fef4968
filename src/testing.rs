//! Helpers shared by the test modules: invariant checks and a brute-force reference solver.

use itertools::Itertools;

use crate::{network::FlowNetwork, numeric::FlowNum, ops::*, *};

/// `(tail, head, capacity, cost)` as passed to `add_edge`
pub type EdgeSpec = (Node, Node, i64, i64);

/// Checks the pairing and residual-capacity invariants of every edge.
/// `capacities[i]` is the capacity the `i`-th edge was inserted with.
pub fn assert_network_invariants<T: FlowNum>(network: &FlowNetwork<T>, capacities: &[T]) {
    assert_eq!(network.number_of_edges() as usize, capacities.len());

    for (e, &capacity) in network.forward_edges().zip(capacities) {
        let dual = network.dual_of(e);
        assert_eq!(dual, e + 1);
        assert_eq!(network.dual_of(dual), e);

        let (fwd, bwd) = (network.arc(e), network.arc(dual));
        assert_eq!(fwd.tail(), bwd.head());
        assert_eq!(fwd.head(), bwd.tail());

        assert!(fwd.residual_capacity() >= T::zero());
        assert!(bwd.residual_capacity() >= T::zero());
        assert_eq!(network.capacity(e), capacity);

        // flow is netted: the dual never records flow, the residual capacity of the dual is the flow
        assert_eq!(bwd.flow(), T::zero());
        assert_eq!(fwd.flow(), bwd.residual_capacity());

        assert_eq!(network.original_cost(e), -network.original_cost(dual));
    }
}

/// Checks that all nodes except `source` and `sink` are balanced
pub fn assert_conservation<T: FlowNum>(network: &FlowNetwork<T>, source: Node, sink: Node) {
    for u in network.vertices() {
        if u != source && u != sink {
            assert_eq!(network.excess_of(u), T::zero(), "node {u} is not balanced");
        }
    }
    assert_eq!(network.flow_value(source), network.excess_of(sink));
}

/// Builds a network from edge specifications
pub fn network_from(n: NumNodes, edges: &[EdgeSpec]) -> FlowNetwork<i64> {
    FlowNetwork::from_edges(n, edges.iter().copied())
}

/// Returns the capacities of the edge specifications in insertion order
pub fn capacities_of(edges: &[EdgeSpec]) -> Vec<i64> {
    edges.iter().map(|&(_, _, c, _)| c).collect_vec()
}

/// Enumerates every integral flow assignment and returns `(max flow value, min cost among those)`.
/// Only feasible for a handful of edges with tiny capacities.
pub fn brute_force_min_cost_max_flow(
    n: NumNodes,
    edges: &[EdgeSpec],
    source: Node,
    sink: Node,
) -> (i64, i64) {
    if edges.is_empty() {
        return (0, 0);
    }

    let mut best: Option<(i64, i64)> = None;
    for assignment in edges
        .iter()
        .map(|&(_, _, cap, _)| 0..=cap)
        .multi_cartesian_product()
    {
        let mut excess = vec![0i64; n as usize];
        let mut cost = 0;
        for (&(u, v, _, c), &f) in edges.iter().zip(&assignment) {
            excess[u as usize] -= f;
            excess[v as usize] += f;
            cost += f * c;
        }

        let balanced = (0..n)
            .filter(|&u| u != source && u != sink)
            .all(|u| excess[u as usize] == 0);
        if !balanced {
            continue;
        }

        let value = excess[sink as usize];
        best = match best {
            Some((bv, bc)) if bv > value || (bv == value && bc <= cost) => Some((bv, bc)),
            _ => Some((value, cost)),
        };
    }

    // the zero flow is always feasible
    best.unwrap_or((0, 0))
}
