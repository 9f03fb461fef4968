/*!
`mcmf` computes **min-cost maximum flows** on directed networks whose nodes are numbered `0` to
`n - 1` and whose edges carry an integral capacity and an integral per-unit cost.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the network.
Edges live in an **arena of arcs** inside a [`FlowNetwork`](crate::network::FlowNetwork):
every inserted edge `(u, v)` becomes a forward arc at an even [`EdgeId`] and a dual arc `(v, u)`
at the following odd id. Both arcs know each other's id, so a residual network never needs
pointers between arcs.

Capacities, flows and costs share one signed integer type `T` (see [`numeric::FlowNum`]),
defaulting to `i64`. All arithmetic is exact.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using either
the *Builder* / *Setter* pattern before running them on a network. The most commonly used
functionality is also implemented via traits on the network itself:

```rust
use mcmf::{prelude::*, algo::*};

let mut network = FlowNetwork::<i64>::new(4);
network.add_edge(0, 1, 2, 1);
network.add_edge(0, 2, 1, 3);
network.add_edge(1, 3, 1, 1);
network.add_edge(2, 3, 2, 1);
network.add_edge(1, 2, 1, -1);

assert_eq!(network.compute_min_cost_max_flow(0, 3), Ok(3));
assert_eq!(network.cost(), 7);
```

Negative costs and even cycles of negative total cost are supported: the default pipeline cancels
negative cycles and computes Bellman-Ford potentials before augmenting along Dijkstra shortest
paths. Each stage can be disabled via [`algo::MinCostFlow`] when the input is known to be nice.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, the network and its basic operation traits,
- [`algo`] includes the flow algorithms implemented as traits on the network,
- [`gens`] includes random network generators.

Progress of the computations is reported through [`tracing`](https://docs.rs/tracing) at the
`debug` (per stage) and `trace` (per augmentation) levels. With the `serde` feature, the solver
configuration and its summary can be (de)serialized.

In most use-cases, `use mcmf::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod network;
pub mod node;
pub mod numeric;
pub mod ops;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `mcmf::prelude` includes definitions for nodes and edges, the flow network and all basic
/// network operation traits.
pub mod prelude {
    pub use super::{edge::*, error::FlowError, network::*, node::*, numeric::FlowNum, ops::*};
}
