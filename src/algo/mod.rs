/*!
# Flow Algorithms

This module provides the flow algorithms of this crate, all operating on a
[`FlowNetwork`](crate::network::FlowNetwork). Everything is re-exported at the top level of this
module, so you can simply do:
```rust
use mcmf::{prelude::*, algo::*};
```
and gain access to min-cost max-flow, maximum flow, shortest paths and cycle cancellation.

The stages of the min-cost pipeline are exposed as separate traits so they can be run (and tested)
on their own; [`MinCostFlow`] combines them.
*/

mod max_flow;
mod min_cost_flow;
mod negative_cycle;
mod potential;
mod shortest_path;

use crate::{
    error::{FlowError, Result},
    node::VisitState,
    prelude::*,
};

pub use max_flow::*;
pub use min_cost_flow::*;
pub use negative_cycle::*;
pub use potential::*;
pub use shortest_path::*;
