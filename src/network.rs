/*!
# Flow Networks

[`FlowNetwork`] is the single graph representation of this crate: an **arena of arcs** indexed by
[`EdgeId`] plus one adjacency list of arc ids per node and one potential per node.

Every call to [`NetworkEdgeEditing::try_add_edge`] pushes two arcs: the forward arc at an even id
and its dual (reverse residual arc with capacity `0` and negated cost) at the next odd id. Arcs
store the id of their dual, so the pairing survives any reallocation of the arena.

Costs are stored *reduced*: after potentials `pot` have been applied, an arc `(u, v)` stores
`cost(u, v) + pot[u] - pot[v]`. The original cost is recovered by
[`FlowNetwork::original_cost`].
*/

use itertools::Itertools;

use crate::{
    error::{FlowError, Result},
    node::check_node,
    numeric::FlowNum,
    ops::*,
    *,
};

/// A directed network with paired residual arcs, residual capacities, flows and node potentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNetwork<T = i64> {
    arcs: Vec<FlowArc<T>>,
    out_arcs: Vec<Vec<EdgeId>>,
    potentials: Vec<T>,
}

impl<T: FlowNum> GraphNew for FlowNetwork<T> {
    fn new(n: NumNodes) -> Self {
        Self {
            arcs: Vec::new(),
            out_arcs: vec![Vec::new(); n as usize],
            potentials: vec![T::zero(); n as usize],
        }
    }
}

impl<T: FlowNum> GraphNodeOrder for FlowNetwork<T> {
    fn number_of_nodes(&self) -> NumNodes {
        self.out_arcs.len() as NumNodes
    }
}

impl<T: FlowNum> GraphEdgeOrder for FlowNetwork<T> {
    fn number_of_edges(&self) -> NumEdges {
        (self.arcs.len() / 2) as NumEdges
    }

    fn number_of_arcs(&self) -> NumEdges {
        self.arcs.len() as NumEdges
    }
}

impl<T: FlowNum> ResidualAdjacency<T> for FlowNetwork<T> {
    #[inline]
    fn arc(&self, e: EdgeId) -> &FlowArc<T> {
        &self.arcs[e as usize]
    }

    #[inline]
    fn out_arcs_of(&self, u: Node) -> &[EdgeId] {
        &self.out_arcs[u as usize]
    }
}

impl<T: FlowNum> NetworkEdgeEditing<T> for FlowNetwork<T> {
    fn try_add_edge(&mut self, u: Node, v: Node, capacity: T, cost: T) -> Result<EdgeId> {
        let n = self.number_of_nodes();
        check_node(u, n)?;
        check_node(v, n)?;
        if capacity < T::zero() {
            return Err(FlowError::NegativeCapacity { tail: u, head: v });
        }
        assert!(
            self.arcs.len() + 2 < INVALID_EDGE as usize,
            "Arc arena is full"
        );

        let forward = self.arcs.len() as EdgeId;
        let backward = forward + 1;

        // Edges added after a computation must agree with the current potentials
        let reduced = cost + self.potentials[u as usize] - self.potentials[v as usize];

        self.arcs.push(FlowArc {
            tail: u,
            head: v,
            capacity,
            flow: T::zero(),
            cost: reduced,
            dual: backward,
        });
        self.arcs.push(FlowArc {
            tail: v,
            head: u,
            capacity: T::zero(),
            flow: T::zero(),
            cost: -reduced,
            dual: forward,
        });

        self.out_arcs[u as usize].push(forward);
        self.out_arcs[v as usize].push(backward);

        Ok(forward)
    }
}

impl<T: FlowNum> FlowNetwork<T> {
    /// Returns the potential of node `u`
    /// ** Panics if `u >= n` **
    pub fn potential(&self, u: Node) -> T {
        self.potentials[u as usize]
    }

    /// Returns the potentials of all nodes
    pub fn potentials(&self) -> &[T] {
        &self.potentials
    }

    /// Returns the per-unit cost `e` was created with (or the negation thereof for duals)
    /// ** Panics if `e >= number_of_arcs` **
    pub fn original_cost(&self, e: EdgeId) -> T {
        let arc = self.arc(e);
        arc.cost - self.potentials[arc.tail as usize] + self.potentials[arc.head as usize]
    }

    /// Returns the total capacity of the pair `e` belongs to, i.e. the capacity given to `add_edge`.
    /// This value is invariant under pushing flow.
    /// ** Panics if `e >= number_of_arcs` **
    pub fn capacity(&self, e: EdgeId) -> T {
        self.arc(e).capacity + self.arc(self.dual_of(e)).capacity
    }

    /// Returns the net flow currently routed along `e`
    /// ** Panics if `e >= number_of_arcs` **
    pub fn flow(&self, e: EdgeId) -> T {
        self.arc(e).flow
    }

    /// Returns *true* if `e` was inserted by the user, *false* if it is a dual
    pub fn is_forward(e: EdgeId) -> bool {
        e & 1 == 0
    }

    /// Total cost `sum flow(e) * original_cost(e)` of the current flow.
    ///
    /// The potentials applied during a computation are subtracted out again, so the result is
    /// independent of any reweighting and calling this repeatedly returns the same value.
    pub fn cost(&self) -> T {
        (0..self.number_of_arcs())
            .filter(|&e| !self.arc(e).flow.is_zero())
            .map(|e| self.arc(e).flow * self.original_cost(e))
            .sum()
    }

    /// Net outflow of node `u`: flow on arcs leaving `u` minus flow on arcs entering `u`.
    /// For the source of a computation this is the flow value.
    /// ** Panics if `u >= n` **
    pub fn flow_value(&self, u: Node) -> T {
        self.out_arcs_of(u)
            .iter()
            .map(|&e| {
                let arc = self.arc(e);
                // flow on the dual of an arc leaving u enters u
                arc.flow - self.arc(arc.dual).flow
            })
            .sum()
    }

    /// Inflow minus outflow of node `u`; zero for every node but source and sink of a valid flow.
    /// ** Panics if `u >= n` **
    pub fn excess_of(&self, u: Node) -> T {
        -self.flow_value(u)
    }

    /// Returns an iterator over the excesses of all nodes
    pub fn excesses(&self) -> impl Iterator<Item = T> + '_ {
        self.vertices().map(|u| self.excess_of(u))
    }

    /// Returns all arcs currently carrying positive flow as `(id, flow)`-pairs
    pub fn edges_with_flow(&self) -> Vec<(EdgeId, T)> {
        (0..self.number_of_arcs())
            .map(|e| (e, self.arc(e).flow))
            .filter(|(_, f)| *f > T::zero())
            .collect_vec()
    }

    /// Pushes `amount` units along arc `e`.
    ///
    /// Residual capacity moves from `e` to its dual. Flow already recorded on the dual is cancelled
    /// first; only the remainder is recorded as flow on `e`.
    /// ** Panics (in debug builds) if `amount` exceeds the residual capacity of `e` **
    pub(crate) fn push(&mut self, e: EdgeId, amount: T) {
        let dual = self.arcs[e as usize].dual as usize;
        let e = e as usize;
        debug_assert!(amount <= self.arcs[e].capacity);

        self.arcs[e].capacity = self.arcs[e].capacity - amount;
        self.arcs[dual].capacity = self.arcs[dual].capacity + amount;

        let dual_flow = self.arcs[dual].flow;
        if dual_flow >= amount {
            self.arcs[dual].flow = dual_flow - amount;
        } else {
            self.arcs[e].flow = self.arcs[e].flow + (amount - dual_flow);
            self.arcs[dual].flow = T::zero();
        }
    }

    /// Pushes the bottleneck residual capacity along every arc of `path` (a path or a cycle) and
    /// returns the amount pushed. An empty path pushes nothing.
    /// ** Panics if any arc id is out of range **
    pub fn augment(&mut self, path: &[EdgeId]) -> T {
        if path.is_empty() {
            return T::zero();
        }

        let amount = path
            .iter()
            .fold(T::infinity(), |acc, &e| acc.min(self.arc(e).capacity));
        for &e in path {
            self.push(e, amount);
        }
        amount
    }

    /// Reweights every arc by `delta`: `cost(u, v) += delta[u] - delta[v]` and `pot[u] += delta[u]`.
    /// Since duals are reweighted as well, every pair keeps costs that are negations of each other.
    /// ** Panics if `delta.len() != n` **
    pub fn apply_potential(&mut self, delta: &[T]) {
        assert_eq!(delta.len(), self.len());
        for arc in self.arcs.iter_mut() {
            arc.cost = arc.cost + delta[arc.tail as usize] - delta[arc.head as usize];
        }
        for (pot, &d) in self.potentials.iter_mut().zip(delta) {
            *pot = *pot + d;
        }
    }

    /// Returns *true* if some arc with residual capacity has a negative reduced cost
    pub fn has_negative_residual_arc(&self) -> bool {
        self.arcs
            .iter()
            .any(|arc| arc.is_residual() && arc.cost < T::zero())
    }

    /// Checks that `source` and `sink` are valid, distinct terminals
    pub(crate) fn check_terminals(&self, source: Node, sink: Node) -> Result<()> {
        let n = self.number_of_nodes();
        check_node(source, n)?;
        check_node(sink, n)?;
        if source == sink {
            return Err(FlowError::SourceIsSink(source));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn add_edge_creates_dual() {
        let mut net = FlowNetwork::<i64>::new(3);
        let e = net.add_edge(0, 1, 5, 7);
        let f = net.add_edge(1, 2, 0, -3);

        assert_eq!((e, f), (0, 2));
        assert_eq!(net.number_of_edges(), 2);
        assert_eq!(net.number_of_arcs(), 4);
        assert_eq!(net.out_arcs_of(0), &[0]);
        assert_eq!(net.out_arcs_of(1), &[1, 2]);
        assert_eq!(net.out_arcs_of(2), &[3]);

        let dual = net.arc(e).dual();
        assert_eq!(dual, 1);
        assert_eq!(net.dual_of(dual), e);
        assert_eq!(net.arc(dual).edge(), Edge(1, 0));
        assert_eq!(net.arc(dual).residual_capacity(), 0);
        assert_eq!(net.arc(dual).reduced_cost(), -7);
        assert_eq!(net.capacity(e), 5);
        assert_eq!(net.capacity(dual), 5);
        assert!(FlowNetwork::<i64>::is_forward(e) && !FlowNetwork::<i64>::is_forward(dual));

        assert_eq!(net.edges(), vec![Edge(0, 1), Edge(1, 2)]);
        assert_network_invariants(&net, &[5, 0]);
    }

    #[test]
    fn add_edge_errors() {
        let mut net = FlowNetwork::<i64>::new(2);
        assert_eq!(
            net.try_add_edge(0, 2, 1, 0),
            Err(FlowError::InvalidNode {
                node: 2,
                num_nodes: 2
            })
        );
        assert_eq!(
            net.try_add_edge(1, 0, -1, 0),
            Err(FlowError::NegativeCapacity { tail: 1, head: 0 })
        );
        assert!(net.is_singleton());

        // self-loops are stored like any other edge
        assert_eq!(net.try_add_edge(1, 1, 2, 3), Ok(0));
        assert_eq!(net.out_arcs_of(1), &[0, 1]);
    }

    #[test]
    #[should_panic]
    fn add_edge_panics_on_invalid_node() {
        let mut net = FlowNetwork::<i64>::new(2);
        net.add_edge(0, 5, 1, 1);
    }

    #[test]
    fn push_nets_out_flow() {
        let mut net = FlowNetwork::<i64>::from_edges(2, [(0, 1, 4, 2)]);
        net.push(0, 3);
        assert_eq!(net.flow(0), 3);
        assert_eq!(net.arc(0).residual_capacity(), 1);
        assert_eq!(net.arc(1).residual_capacity(), 3);

        // pushing back along the dual cancels the recorded flow instead of recording reverse flow
        net.push(1, 2);
        assert_eq!(net.flow(0), 1);
        assert_eq!(net.flow(1), 0);
        assert_eq!(net.capacity(0), 4);
        assert_eq!(net.cost(), 2);
        assert_eq!(net.flow_value(0), 1);
        assert_eq!(net.excess_of(1), 1);
        assert_eq!(net.edges_with_flow(), vec![(0, 1)]);
    }

    #[test]
    fn augment_pushes_bottleneck() {
        let mut net = FlowNetwork::<i64>::from_edges(4, [(0, 1, 5, 1), (1, 2, 2, 1), (2, 3, 9, 1)]);
        assert_eq!(net.augment(&[]), 0);
        assert_eq!(net.augment(&[0, 2, 4]), 2);
        assert_eq!(net.flow_value(0), 2);
        assert_eq!(net.excesses().collect::<Vec<_>>(), vec![-2, 0, 0, 2]);
        assert_eq!(net.cost(), 6);

        // the middle arc is saturated, so nothing more can be pushed along this path
        assert_eq!(net.augment(&[0, 2, 4]), 0);
        assert_network_invariants(&net, &[5, 2, 9]);
    }

    #[test]
    fn potentials_keep_original_costs() {
        let mut net = FlowNetwork::<i64>::from_edges(3, [(0, 1, 1, 5), (1, 2, 1, -2)]);
        net.apply_potential(&[3, 1, -4]);

        assert_eq!(net.potentials(), &[3, 1, -4]);
        assert_eq!(net.arc(0).reduced_cost(), 5 + 3 - 1);
        assert_eq!(net.arc(1).reduced_cost(), -(5 + 3 - 1));
        assert_eq!(net.original_cost(0), 5);
        assert_eq!(net.original_cost(2), -2);
        assert_eq!(net.original_cost(3), 2);

        // edges added later are reweighted on insertion
        let e = net.add_edge(2, 0, 1, 7);
        assert_eq!(net.original_cost(e), 7);
        assert_eq!(net.arc(e).reduced_cost(), 7 - 4 - 3);

        net.push(0, 1);
        net.push(2, 1);
        assert_eq!(net.cost(), 3);
        assert_eq!(net.cost(), 3);
    }

    #[test]
    fn negative_residual_arcs() {
        let mut net = FlowNetwork::<i64>::from_edges(2, [(0, 1, 0, -1)]);
        // the forward arc has no capacity, the dual has positive cost
        assert!(!net.has_negative_residual_arc());
        net.add_edge(1, 0, 1, -1);
        assert!(net.has_negative_residual_arc());
    }

    #[test]
    fn terminals() {
        let net = FlowNetwork::<i64>::new(3);
        assert!(net.check_terminals(0, 2).is_ok());
        assert_eq!(net.check_terminals(1, 1), Err(FlowError::SourceIsSink(1)));
        assert!(matches!(
            net.check_terminals(0, 3),
            Err(FlowError::InvalidNode { node: 3, .. })
        ));
    }
}
