/*!
# Shortest Paths on Reduced Costs

Dijkstra's algorithm over the residual arcs of a [`FlowNetwork`], keyed by cumulative *reduced*
cost. Sound only if every residual arc has a non-negative reduced cost, which the potentials
maintained by [`MinCostFlow`](super::MinCostFlow) guarantee.

The priority queue may hold several entries per node; entries of already settled nodes are stale
and discarded on dequeue. Ties are broken by the heap order.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use smallvec::SmallVec;

use super::*;

/// Arcs of an augmenting path, from source to target
pub type ArcPath = SmallVec<[EdgeId; 16]>;

/// Result of a single-source shortest path computation: distances and parent arcs.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<T> {
    source: Node,
    distances: Vec<T>,
    parents: Vec<Option<OptionalEdge>>,
}

impl<T: FlowNum> ShortestPathTree<T> {
    /// Root of the tree
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns *true* if `u` is reachable from the source via residual arcs
    pub fn is_reachable(&self, u: Node) -> bool {
        self.distances[u as usize] != T::infinity()
    }

    /// Returns the reduced-cost distance of `u` or `None` if `u` is unreachable
    pub fn distance(&self, u: Node) -> Option<T> {
        self.is_reachable(u).then(|| self.distances[u as usize])
    }

    /// Returns the arc over which `u` was reached (`None` for the source and unreachable nodes)
    pub fn parent_arc(&self, u: Node) -> Option<EdgeId> {
        self.parents[u as usize].map(|e| e.get())
    }

    /// Returns the arcs of the tree path from the source to `target` or `None` if `target` is
    /// unreachable. The path to the source itself is empty.
    pub fn path_to<G>(&self, network: &G, target: Node) -> Option<ArcPath>
    where
        G: ResidualAdjacency<T>,
    {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = ArcPath::new();
        let mut v = target;
        while let Some(e) = self.parent_arc(v) {
            path.push(e);
            v = network.arc(e).tail();
        }
        debug_assert_eq!(v, self.source);

        path.reverse();
        Some(path)
    }

    /// Largest finite distance of any node
    pub fn max_distance(&self) -> T {
        self.distances
            .iter()
            .copied()
            .filter(|&d| d != T::infinity())
            .max()
            .unwrap_or_else(T::zero)
    }

    /// Potential shift to apply after augmenting along this tree.
    ///
    /// Reachable nodes receive their distance, unreachable ones the largest finite distance. Both
    /// keep every residual arc at a non-negative reduced cost: no residual arc leaves the reachable
    /// set, and arcs into it gain at least as much as any reachable distance.
    pub fn potential_delta(&self) -> Vec<T> {
        let max = self.max_distance();
        self.distances
            .iter()
            .map(|&d| if d == T::infinity() { max } else { d })
            .collect()
    }
}

/// Single-source shortest paths by reduced cost
pub trait ShortestPaths<T: FlowNum>: ResidualAdjacency<T> {
    /// Runs Dijkstra from `source` over arcs with positive residual capacity.
    /// ** Panics if `source >= n` **
    fn shortest_paths(&self, source: Node) -> ShortestPathTree<T>;
}

impl<T: FlowNum> ShortestPaths<T> for FlowNetwork<T> {
    fn shortest_paths(&self, source: Node) -> ShortestPathTree<T> {
        let n = self.len();
        let mut distances = vec![T::infinity(); n];
        let mut parents: Vec<Option<OptionalEdge>> = vec![None; n];
        let mut settled = vec![false; n];

        let mut heap = BinaryHeap::new();
        distances[source as usize] = T::zero();
        heap.push(Reverse((T::zero(), source)));

        while let Some(Reverse((dist, u))) = heap.pop() {
            if settled[u as usize] || dist > distances[u as usize] {
                continue;
            }
            settled[u as usize] = true;

            for e in self.residual_arcs_of(u) {
                let arc = self.arc(e);
                let v = arc.head() as usize;
                if settled[v] {
                    continue;
                }

                let candidate = dist + arc.reduced_cost();
                if candidate < distances[v] {
                    distances[v] = candidate;
                    parents[v] = OptionalEdge::new(e);
                    heap.push(Reverse((candidate, arc.head())));
                }
            }
        }

        ShortestPathTree {
            source,
            distances,
            parents,
        }
    }
}
