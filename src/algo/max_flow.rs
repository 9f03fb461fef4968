/*!
# Maximum Flow (Dinic)

Cost-oblivious maximum flow on the same residual arc arena the min-cost engine uses. It serves
as the first phase of the [`Strategy::CycleCanceling`](super::Strategy::CycleCanceling) pipeline
and as an independent reference for the flow value.

## Implementations
- [`Dinic`] alternates a BFS computing levels with a blocking flow along level-increasing residual
  arcs. The blocking flow walks an explicit path stack instead of recursing.
- [`MaxFlow`] exposes the computation and the induced minimum cut directly on a network.
*/

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::*;

/// Dinic's algorithm on a [`FlowNetwork`].
///
/// Iterating yields the amount of flow pushed by each blocking-flow phase; the iterator ends
/// once the sink becomes unreachable in the residual network.
pub struct Dinic<'a, T> {
    network: &'a mut FlowNetwork<T>,
    source: Node,
    sink: Node,
    level: Vec<NumNodes>,
    next_arc: Vec<usize>,
}

impl<'a, T: FlowNum> Dinic<'a, T> {
    /// Creates a new solver pushing flow from `source` to `sink` in `network`.
    ///
    /// # Errors
    /// Fails if a terminal is out of range or `source == sink`.
    pub fn new(network: &'a mut FlowNetwork<T>, source: Node, sink: Node) -> Result<Self> {
        network.check_terminals(source, sink)?;
        let n = network.len();
        Ok(Self {
            network,
            source,
            sink,
            level: vec![INVALID_NODE; n],
            next_arc: vec![0; n],
        })
    }

    /// Pushes flow until no augmenting path remains and returns the total amount pushed
    pub fn run(&mut self) -> T {
        let total = self.by_ref().fold(T::zero(), |acc, f| acc + f);
        debug!(flow = %total, "maximum flow computed");
        total
    }

    /// Assigns BFS levels over residual arcs and returns whether the sink was reached
    fn bfs(&mut self) -> bool {
        self.level.fill(INVALID_NODE);
        self.level[self.source as usize] = 0;

        let mut queue = VecDeque::from([self.source]);
        while let Some(u) = queue.pop_front() {
            for e in self.network.residual_arcs_of(u) {
                let v = self.network.arc(e).head();
                if self.level[v as usize] == INVALID_NODE {
                    self.level[v as usize] = self.level[u as usize] + 1;
                    queue.push_back(v);
                }
            }
        }

        self.level[self.sink as usize] != INVALID_NODE
    }

    /// Saturates all shortest augmenting paths of the current level graph
    fn blocking_flow(&mut self) -> T {
        self.next_arc.fill(0);

        let mut total = T::zero();
        let mut path = ArcPath::new();
        let mut u = self.source;

        loop {
            if u == self.sink {
                total = total + self.network.augment(&path);

                // retreat to the tail of the first saturated arc
                let first_saturated = path
                    .iter()
                    .position(|&e| !self.network.arc(e).is_residual())
                    .unwrap_or(0);
                u = self.network.arc(path[first_saturated]).tail();
                path.truncate(first_saturated);
                continue;
            }

            let arcs = self.network.out_arcs_of(u);
            let mut advanced = false;
            while let Some(&e) = arcs.get(self.next_arc[u as usize]) {
                let arc = self.network.arc(e);
                if arc.is_residual()
                    && self.level[arc.head() as usize] == self.level[u as usize] + 1
                {
                    path.push(e);
                    u = arc.head();
                    advanced = true;
                    break;
                }
                self.next_arc[u as usize] += 1;
            }

            if advanced {
                continue;
            }

            // dead end: `u` cannot reach the sink in this phase anymore
            match path.pop() {
                Some(e) => {
                    u = self.network.arc(e).tail();
                    self.next_arc[u as usize] += 1;
                }
                None => break,
            }
        }

        total
    }
}

impl<T: FlowNum> Iterator for Dinic<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs() {
            return None;
        }

        let pushed = self.blocking_flow();
        trace!(%pushed, depth = self.level[self.sink as usize], "blocking flow");
        Some(pushed)
    }
}

/// Maximum flow and minimum cut computations ignoring costs
pub trait MaxFlow<T: FlowNum> {
    /// Pushes a maximum flow from `source` to `sink` on top of the current flow and returns the
    /// resulting flow value (net outflow of `source`).
    ///
    /// # Errors
    /// Fails if a terminal is out of range or `source == sink`.
    fn compute_max_flow(&mut self, source: Node, sink: Node) -> Result<T>;

    /// Returns for every node whether it is reachable from `source` in the residual network.
    /// After a maximum flow, these nodes form the source side of a minimum cut.
    /// ** Panics if `source >= n` **
    fn min_cut_source_side(&self, source: Node) -> Vec<bool>;

    /// Returns the forward arcs leaving the source side of [`MaxFlow::min_cut_source_side`].
    /// After a maximum flow, their total capacity equals the flow value.
    /// ** Panics if `source >= n` **
    fn min_cut_edges(&self, source: Node) -> Vec<EdgeId>;
}

impl<T: FlowNum> MaxFlow<T> for FlowNetwork<T> {
    fn compute_max_flow(&mut self, source: Node, sink: Node) -> Result<T> {
        Dinic::new(self, source, sink)?.run();
        Ok(self.flow_value(source))
    }

    fn min_cut_source_side(&self, source: Node) -> Vec<bool> {
        let mut reachable = vec![false; self.len()];
        reachable[source as usize] = true;

        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            for e in self.residual_arcs_of(u) {
                let v = self.arc(e).head() as usize;
                if !reachable[v] {
                    reachable[v] = true;
                    queue.push_back(v as Node);
                }
            }
        }

        reachable
    }

    fn min_cut_edges(&self, source: Node) -> Vec<EdgeId> {
        let reachable = self.min_cut_source_side(source);
        self.forward_edges()
            .filter(|&e| {
                let arc = self.arc(e);
                reachable[arc.tail() as usize] && !reachable[arc.head() as usize]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn unit_cost(edges: &[(Node, Node, i64)]) -> Vec<EdgeSpec> {
        edges.iter().map(|&(u, v, c)| (u, v, c, 0)).collect()
    }

    #[test]
    fn dinic_max_flow() {
        let edges = unit_cost(&[
            (0, 1, 10),
            (0, 2, 10),
            (1, 3, 4),
            (1, 4, 8),
            (2, 4, 9),
            (3, 5, 10),
            (4, 3, 6),
            (4, 5, 10),
        ]);
        let mut net = network_from(6, &edges);
        assert_eq!(net.compute_max_flow(0, 5), Ok(19));
        assert_conservation(&net, 0, 5);
        assert_network_invariants(&net, &capacities_of(&edges));

        let cut = net.min_cut_edges(0);
        assert_eq!(cut.iter().map(|&e| net.capacity(e)).sum::<i64>(), 19);
        assert!(cut.iter().all(|&e| !net.arc(e).is_residual()));

        // a second run finds nothing to add
        assert_eq!(net.compute_max_flow(0, 5), Ok(19));
    }

    #[test]
    fn dinic_phases() {
        let edges = unit_cost(&[(0, 1, 1), (1, 3, 1), (0, 2, 1), (2, 1, 1), (1, 4, 1), (4, 3, 1)]);
        let mut net = network_from(5, &edges);
        let phases: Vec<i64> = Dinic::new(&mut net, 0, 3).unwrap().collect();
        assert_eq!(phases, vec![1, 1]);
        assert_eq!(net.flow_value(0), 2);
    }

    #[test]
    fn disconnected() {
        let mut net = network_from(4, &unit_cost(&[(0, 1, 10), (2, 3, 5)]));
        assert_eq!(net.compute_max_flow(0, 3), Ok(0));
        assert_eq!(net.min_cut_source_side(0), vec![true, true, false, false]);
        assert!(net.min_cut_edges(0).is_empty());
    }

    #[test]
    fn invalid_terminals() {
        let mut net = network_from(2, &unit_cost(&[(0, 1, 1)]));
        assert_eq!(net.compute_max_flow(1, 1), Err(FlowError::SourceIsSink(1)));
        assert!(net.compute_max_flow(0, 2).is_err());
    }

    #[test]
    fn random_cut_equals_flow() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [5, 10, 20] {
            for _ in 0..20 {
                let edges = Gnp::new()
                    .nodes(n)
                    .prob(0.3)
                    .capacities(0, 8)
                    .costs(0, 0)
                    .generate(rng);
                let mut net = network_from(n, &edges);

                let flow = net.compute_max_flow(0, n - 1).unwrap();
                assert_conservation(&net, 0, n - 1);
                assert_network_invariants(&net, &capacities_of(&edges));

                let cut: i64 = net
                    .min_cut_edges(0)
                    .into_iter()
                    .map(|e| net.capacity(e))
                    .sum();
                assert_eq!(cut, flow);
                assert!(!net.min_cut_source_side(0)[(n - 1) as usize]);
            }
        }
    }
}
