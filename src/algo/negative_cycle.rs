/*!
# Negative-Cycle Cancellation

Shortest-path augmentation is only correct if the residual network has no cycle of negative total
(reduced) cost. [`NegativeCycles::cancel_negative_cycles`] repeatedly finds such a cycle and
saturates it until none remain. Each cancellation strictly lowers the cost of the current flow
without changing the flow value at any node.

Cycles are searched in two passes:
1. A depth-first search restricted to residual arcs of **negative** reduced cost. It runs on an
   explicit stack; the cycle is cut out of the current DFS path once an arc closes back onto it.
2. If that subgraph is acyclic, a Bellman-Ford pass over all residual arcs finds cycles that mix
   negative and non-negative arcs by walking the predecessor arcs of a node still relaxed in
   round `n`.
*/

use tracing::{debug, trace};

use super::*;

/// Detection and cancellation of negative cycles in the residual network
pub trait NegativeCycles<T: FlowNum> {
    /// Returns the arcs of some cycle of negative reduced cost with positive residual capacity
    /// on every arc, or `None` if no such cycle exists. Arcs are returned in cycle order.
    fn find_negative_cycle(&self) -> Option<Vec<EdgeId>>;

    /// Saturates negative cycles until none remain and returns the number of cancelled cycles.
    fn cancel_negative_cycles(&mut self) -> usize;
}

impl<T: FlowNum> NegativeCycles<T> for FlowNetwork<T> {
    fn find_negative_cycle(&self) -> Option<Vec<EdgeId>> {
        negative_arc_cycle(self).or_else(|| bellman_ford_cycle(self))
    }

    fn cancel_negative_cycles(&mut self) -> usize {
        let mut cancelled = 0;
        while let Some(cycle) = self.find_negative_cycle() {
            let pushed = self.augment(&cycle);
            debug_assert!(pushed > T::zero());
            trace!(len = cycle.len(), %pushed, "cancelled negative cycle");
            cancelled += 1;
        }

        debug!(cancelled, "negative-cycle cancellation finished");
        cancelled
    }
}

/// DFS over residual arcs with negative reduced cost
fn negative_arc_cycle<T: FlowNum>(network: &FlowNetwork<T>) -> Option<Vec<EdgeId>> {
    let is_candidate = |e: EdgeId| {
        let arc = network.arc(e);
        arc.is_residual() && arc.reduced_cost() < T::zero()
    };

    let mut state = vec![VisitState::Unvisited; network.len()];
    let mut stack_pos = vec![0usize; network.len()];

    // `nodes[i]` is the i-th node of the DFS path with the index of its next arc to explore;
    // `path[i]` is the arc from `nodes[i]` to `nodes[i + 1]`
    let mut nodes: Vec<(Node, usize)> = Vec::new();
    let mut path: Vec<EdgeId> = Vec::new();

    for root in network.vertices() {
        if state[root as usize] != VisitState::Unvisited {
            continue;
        }

        state[root as usize] = VisitState::OnStack;
        stack_pos[root as usize] = 0;
        nodes.push((root, 0));

        while let Some(top) = nodes.last_mut() {
            let u = top.0;
            let arcs = network.out_arcs_of(u);

            if top.1 == arcs.len() {
                state[u as usize] = VisitState::Done;
                nodes.pop();
                path.pop();
                continue;
            }

            let e = arcs[top.1];
            top.1 += 1;
            if !is_candidate(e) {
                continue;
            }

            let v = network.arc(e).head();
            match state[v as usize] {
                VisitState::OnStack => {
                    let mut cycle = path[stack_pos[v as usize]..].to_vec();
                    cycle.push(e);
                    return Some(cycle);
                }
                VisitState::Unvisited => {
                    state[v as usize] = VisitState::OnStack;
                    stack_pos[v as usize] = nodes.len();
                    nodes.push((v, 0));
                    path.push(e);
                }
                VisitState::Done => {}
            }
        }
    }

    None
}

/// Bellman-Ford from a virtual root over all residual arcs, extracting a cycle of the predecessor graph
fn bellman_ford_cycle<T: FlowNum>(network: &FlowNetwork<T>) -> Option<Vec<EdgeId>> {
    let n = network.len();
    let mut labels = vec![T::zero(); n];
    let mut parents: Vec<Option<OptionalEdge>> = vec![None; n];

    let mut last_relaxed = None;
    for _ in 0..n {
        last_relaxed = None;
        for e in network.residual_arcs() {
            let arc = network.arc(e);
            let candidate = labels[arc.tail() as usize] + arc.reduced_cost();
            if candidate < labels[arc.head() as usize] {
                labels[arc.head() as usize] = candidate;
                parents[arc.head() as usize] = OptionalEdge::new(e);
                last_relaxed = Some(arc.head());
            }
        }

        last_relaxed?;
    }

    // walking back n arcs from a node relaxed in round n ends on the cycle
    let mut v = last_relaxed?;
    for _ in 0..n {
        v = network.arc(parents[v as usize]?.get()).tail();
    }

    let start = v;
    let mut cycle = Vec::new();
    loop {
        let e = parents[v as usize]?.get();
        cycle.push(e);
        v = network.arc(e).tail();
        if v == start {
            break;
        }
    }

    cycle.reverse();
    Some(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn cycle_cost(net: &FlowNetwork<i64>, cycle: &[EdgeId]) -> i64 {
        cycle.iter().map(|&e| net.arc(e).reduced_cost()).sum()
    }

    fn assert_is_cycle(net: &FlowNetwork<i64>, cycle: &[EdgeId]) {
        assert!(!cycle.is_empty());
        for (&e, &f) in cycle.iter().zip(cycle.iter().cycle().skip(1)) {
            assert_eq!(net.arc(e).head(), net.arc(f).tail());
            assert!(net.arc(e).is_residual());
        }
    }

    #[test]
    fn dfs_finds_all_negative_cycle() {
        let net = network_from(
            5,
            &[(0, 1, 1, -1), (1, 2, 1, -1), (2, 3, 1, -1), (3, 4, 1, -1), (4, 2, 1, -1)],
        );
        let cycle = negative_arc_cycle(&net).unwrap();
        assert_eq!(cycle, vec![4, 6, 8]);
        assert_is_cycle(&net, &cycle);
    }

    #[test]
    fn mixed_cycle_needs_bellman_ford() {
        let net = network_from(3, &[(0, 1, 2, -5), (1, 2, 1, 1), (2, 0, 3, 2)]);
        assert!(negative_arc_cycle(&net).is_none());

        let cycle = net.find_negative_cycle().unwrap();
        assert_eq!(cycle.len(), 3);
        assert_is_cycle(&net, &cycle);
        assert_eq!(cycle_cost(&net, &cycle), -2);
    }

    #[test]
    fn no_negative_cycle() {
        let net = network_from(3, &[(0, 1, 2, -5), (1, 2, 1, 3), (2, 0, 3, 2)]);
        assert!(net.find_negative_cycle().is_none());

        // a negative cycle without residual capacity does not count
        let net = network_from(2, &[(0, 1, 0, -5), (1, 0, 4, 1)]);
        assert!(net.find_negative_cycle().is_none());
    }

    #[test]
    fn negative_self_loop() {
        let mut net = network_from(2, &[(1, 1, 3, -2), (0, 1, 1, 1)]);
        assert_eq!(net.find_negative_cycle(), Some(vec![0]));

        assert_eq!(net.cancel_negative_cycles(), 1);
        assert_eq!(net.flow(0), 3);
        assert_eq!(net.cost(), -6);
        assert_network_invariants(&net, &[3, 1]);
    }

    #[test]
    fn cancellation_keeps_balance() {
        let edges = [
            (0, 1, 2, -5),
            (1, 2, 1, 1),
            (2, 0, 3, 2),
            (1, 3, 2, -1),
            (3, 0, 1, -1),
            (2, 3, 4, 0),
        ];
        let mut net = network_from(4, &edges);
        let cancelled = net.cancel_negative_cycles();

        assert!(cancelled >= 2);
        assert!(net.find_negative_cycle().is_none());
        assert_network_invariants(&net, &capacities_of(&edges));
        assert!(net.excesses().all(|x| x == 0));

        // best circulation: 0->1 carries 2 units (-10), back via 1->3->0 (-2) and 1->2->0 (+3)
        assert_eq!(net.cost(), -9);
        assert_eq!(
            brute_force_min_cost_max_flow(4, &edges, 0, 0).1,
            net.cost()
        );
    }
}
