/*!
# Node Representation

We choose `Node = u32` as flow networks built from a single instance rarely exceed `2^32` nodes.
Nodes carry no attributes: a node is only a position in the adjacency structure of a
[`FlowNetwork`](crate::network::FlowNetwork).
*/

use crate::error::{FlowError, Result};

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a network!
pub type NumNodes = Node;

/// Returns `Ok(u)` if `u` is a valid node of a network with `n` nodes
pub(crate) fn check_node(u: Node, n: NumNodes) -> Result<Node> {
    if u < n {
        Ok(u)
    } else {
        Err(FlowError::InvalidNode {
            node: u,
            num_nodes: n,
        })
    }
}

/// Per-node state of the negative-cycle search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum VisitState {
    #[default]
    Unvisited,
    /// Node is on the current DFS path
    OnStack,
    /// Node has been fully explored and lies on no negative cycle of the subgraph
    Done,
}
