/*!
# Negative-Edge Elimination

Dijkstra needs non-negative reduced costs on every residual arc. For networks that start with
negative costs, [`NegativeEdges::fix_negative_edges`] computes Bellman-Ford labels `W` from a
virtual root connected to every node with cost `0` and applies them as potentials. Afterwards
every residual arc `(u, v)` satisfies `cost + W[u] - W[v] >= 0`.

The labels only exist if the residual network has no negative cycle; cancel those first with
[`NegativeCycles::cancel_negative_cycles`](super::NegativeCycles::cancel_negative_cycles).
*/

use tracing::debug;

use super::*;

/// Potentials that make all residual reduced costs non-negative
pub trait NegativeEdges<T: FlowNum> {
    /// Computes shortest-path labels from a virtual root over residual arcs.
    ///
    /// # Errors
    /// Returns [`FlowError::PreconditionViolated`] if the residual network has a negative cycle.
    fn bellman_ford_labels(&self) -> Result<Vec<T>>;

    /// Applies [`NegativeEdges::bellman_ford_labels`] as potentials if some residual arc has a
    /// negative reduced cost. Returns *true* exactly if potentials were applied.
    ///
    /// # Errors
    /// Returns [`FlowError::PreconditionViolated`] if the residual network has a negative cycle.
    fn fix_negative_edges(&mut self) -> Result<bool>;
}

impl<T: FlowNum> NegativeEdges<T> for FlowNetwork<T> {
    fn bellman_ford_labels(&self) -> Result<Vec<T>> {
        let n = self.len();
        let mut labels = vec![T::zero(); n];

        for _ in 0..n {
            let mut changed = false;
            for e in self.residual_arcs() {
                let arc = self.arc(e);
                let candidate = labels[arc.tail() as usize] + arc.reduced_cost();
                if candidate < labels[arc.head() as usize] {
                    labels[arc.head() as usize] = candidate;
                    changed = true;
                }
            }

            if !changed {
                return Ok(labels);
            }
        }

        // paths from the virtual root use at most n - 1 real arcs, so an arc that is still
        // relaxable after n rounds lies on a negative cycle
        let relaxable = self.residual_arcs().any(|e| {
            let arc = self.arc(e);
            labels[arc.tail() as usize] + arc.reduced_cost() < labels[arc.head() as usize]
        });
        if relaxable {
            return Err(FlowError::PreconditionViolated(
                "residual network contains a negative cycle".into(),
            ));
        }

        Ok(labels)
    }

    fn fix_negative_edges(&mut self) -> Result<bool> {
        if !self.has_negative_residual_arc() {
            debug!("no residual arc with negative reduced cost; skipping Bellman-Ford");
            return Ok(false);
        }

        let labels = self.bellman_ford_labels()?;
        self.apply_potential(&labels);
        debug_assert!(!self.has_negative_residual_arc());

        debug!(nodes = self.len(), "applied Bellman-Ford potentials");
        Ok(true)
    }
}
