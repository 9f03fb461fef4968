/*!
# Min-Cost Maximum Flow

Computes a flow of maximum value from a source to a sink that has minimum total cost among all
maximum flows.

## Successive shortest paths (default)
1. **Negative-cycle cancellation** ([`NegativeCycles`]): saturate residual cycles of negative cost
   until none remain. Required if the input may contain such cycles.
2. **Negative-edge elimination** ([`NegativeEdges`]): Bellman-Ford potentials make every residual
   reduced cost non-negative. Required if the input may contain negative costs.
3. **Shortest augmenting path** ([`ShortestPaths`]): Dijkstra on reduced costs. If the sink is
   unreachable, the flow is maximum and we are done.
4. **Augment and re-potential**: push the bottleneck along the path, then apply the Dijkstra
   distances as potentials so reduced costs stay non-negative. Repeat from 3.

## Cycle canceling
Compute any maximum flow with [`Dinic`], then cancel negative cycles. Slower in general, but
independent of potentials.

Stages 1 and 2 can be disabled via [`MinCostFlow`] if the input is known to satisfy their
postconditions. Skipping stage 1 on an input with a negative cycle yields wrong results; with
stage 2 enabled this is detected and reported as [`FlowError::PreconditionViolated`].
*/

use tracing::{debug, trace};

use super::*;

/// Pipeline used by [`MinCostFlow`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Cancel cycles, fix negative edges, then augment along Dijkstra shortest paths
    #[default]
    SuccessiveShortestPaths,
    /// Compute a maximum flow first and cancel negative cycles afterwards
    CycleCanceling,
}

/// Statistics and result of a min-cost max-flow computation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSummary<T> {
    /// Flow value, i.e. net outflow of the source
    pub flow: T,
    /// Total cost of the flow
    pub cost: T,
    /// Number of augmenting paths used (successive shortest paths only)
    pub augmentations: usize,
    /// Number of negative cycles saturated
    pub cancelled_cycles: usize,
}

/// Configurable min-cost max-flow solver.
///
/// All stages are enabled by default:
/// ```
/// use mcmf::{prelude::*, algo::*};
///
/// let mut network = FlowNetwork::<i64>::from_edges(3, [(0, 1, 2, 1), (1, 2, 1, -3), (0, 2, 2, 4)]);
/// let summary = MinCostFlow::new().run(&mut network, 0, 2).unwrap();
/// assert_eq!((summary.flow, summary.cost), (3, 6));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinCostFlow {
    strategy: Strategy,
    cancel_negative_cycles: bool,
    fix_negative_edges: bool,
    check_preconditions: bool,
}

impl Default for MinCostFlow {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            cancel_negative_cycles: true,
            fix_negative_edges: true,
            check_preconditions: true,
        }
    }
}

impl MinCostFlow {
    /// Creates a solver with all stages enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the pipeline
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Chainable version of [`Self::set_strategy`]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Enables or disables negative-cycle cancellation before augmenting.
    /// Only safe to disable if the residual network has no negative cycle.
    pub fn set_cancel_negative_cycles(&mut self, cancel: bool) {
        self.cancel_negative_cycles = cancel;
    }

    /// Chainable version of [`Self::set_cancel_negative_cycles`]
    pub fn cancel_negative_cycles(mut self, cancel: bool) -> Self {
        self.set_cancel_negative_cycles(cancel);
        self
    }

    /// Enables or disables the Bellman-Ford potentials before augmenting.
    /// Only safe to disable if no residual arc has a negative reduced cost.
    pub fn set_fix_negative_edges(&mut self, fix: bool) {
        self.fix_negative_edges = fix;
    }

    /// Chainable version of [`Self::set_fix_negative_edges`]
    pub fn fix_negative_edges(mut self, fix: bool) -> Self {
        self.set_fix_negative_edges(fix);
        self
    }

    /// Enables or disables the check for negative reduced costs when negative-edge fixing is off
    pub fn set_check_preconditions(&mut self, check: bool) {
        self.check_preconditions = check;
    }

    /// Chainable version of [`Self::set_check_preconditions`]
    pub fn check_preconditions(mut self, check: bool) -> Self {
        self.set_check_preconditions(check);
        self
    }

    /// Runs the configured pipeline on `network`, continuing from its current flow.
    ///
    /// # Errors
    /// - [`FlowError::InvalidNode`] or [`FlowError::SourceIsSink`] for bad terminals,
    /// - [`FlowError::PreconditionViolated`] if a disabled stage was needed.
    pub fn run<T: FlowNum>(
        &self,
        network: &mut FlowNetwork<T>,
        source: Node,
        sink: Node,
    ) -> Result<FlowSummary<T>> {
        network.check_terminals(source, sink)?;

        let mut summary = FlowSummary::default();
        match self.strategy {
            Strategy::SuccessiveShortestPaths => {
                if self.cancel_negative_cycles {
                    summary.cancelled_cycles = network.cancel_negative_cycles();
                }

                if self.fix_negative_edges {
                    network.fix_negative_edges()?;
                } else if self.check_preconditions && network.has_negative_residual_arc() {
                    return Err(FlowError::PreconditionViolated(
                        "residual arc with negative reduced cost while negative-edge fixing is disabled"
                            .into(),
                    ));
                }

                summary.augmentations = augment_shortest_paths(network, source, sink);
            }
            Strategy::CycleCanceling => {
                Dinic::new(network, source, sink)?.run();
                summary.cancelled_cycles = network.cancel_negative_cycles();
            }
        }

        summary.flow = network.flow_value(source);
        summary.cost = network.cost();
        debug!(
            strategy = ?self.strategy,
            flow = %summary.flow,
            cost = %summary.cost,
            augmentations = summary.augmentations,
            cancelled_cycles = summary.cancelled_cycles,
            "min-cost max-flow computed"
        );

        Ok(summary)
    }
}

/// Stages 3 and 4: augment along shortest paths until the sink becomes unreachable.
/// Returns the number of augmenting paths.
fn augment_shortest_paths<T: FlowNum>(
    network: &mut FlowNetwork<T>,
    source: Node,
    sink: Node,
) -> usize {
    let mut augmentations = 0;
    loop {
        let tree = network.shortest_paths(source);
        let Some(path) = tree.path_to(&*network, sink) else {
            break;
        };

        let pushed = network.augment(&path);
        network.apply_potential(&tree.potential_delta());
        augmentations += 1;

        trace!(
            len = path.len(),
            %pushed,
            distance = ?tree.distance(sink),
            "augmented along shortest path"
        );
    }
    augmentations
}

/// Min-cost max-flow directly on a network
pub trait MinCostMaxFlow<T: FlowNum> {
    /// Computes a min-cost maximum flow from `source` to `sink` with all stages enabled and
    /// returns its value. The cost is available via `cost()` afterwards.
    ///
    /// # Errors
    /// Fails if a terminal is out of range or `source == sink`.
    fn compute_min_cost_max_flow(&mut self, source: Node, sink: Node) -> Result<T>;

    /// Like [`MinCostMaxFlow::compute_min_cost_max_flow`] with a custom configuration
    ///
    /// # Errors
    /// See [`MinCostFlow::run`].
    fn compute_min_cost_max_flow_with(
        &mut self,
        config: &MinCostFlow,
        source: Node,
        sink: Node,
    ) -> Result<FlowSummary<T>>;
}

impl<T: FlowNum> MinCostMaxFlow<T> for FlowNetwork<T> {
    fn compute_min_cost_max_flow(&mut self, source: Node, sink: Node) -> Result<T> {
        Ok(MinCostFlow::new().run(self, source, sink)?.flow)
    }

    fn compute_min_cost_max_flow_with(
        &mut self,
        config: &MinCostFlow,
        source: Node,
        sink: Node,
    ) -> Result<FlowSummary<T>> {
        config.run(self, source, sink)
    }
}
