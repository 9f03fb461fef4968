//! Error types of flow computations.

use thiserror::Error;

use crate::{Node, NumNodes};

/// Result type alias for flow operations
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors raised while building a network or computing a flow.
///
/// Running out of augmenting paths is *not* an error: it is how every computation terminates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// A node index outside `0..n` was referenced
    #[error("node {node} is out of range for a network with {num_nodes} nodes")]
    InvalidNode {
        /// The offending node
        node: Node,
        /// Number of nodes of the network
        num_nodes: NumNodes,
    },

    /// An edge was inserted with a negative capacity
    #[error("edge ({tail},{head}) has a negative capacity")]
    NegativeCapacity {
        /// Tail of the rejected edge
        tail: Node,
        /// Head of the rejected edge
        head: Node,
    },

    /// Source and sink of a flow computation coincide
    #[error("source and sink must differ, got {0} for both")]
    SourceIsSink(Node),

    /// An assumption of a disabled stage does not hold (e.g. a negative cycle survived)
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            FlowError::InvalidNode {
                node: 7,
                num_nodes: 5
            }
            .to_string(),
            "node 7 is out of range for a network with 5 nodes"
        );
        assert_eq!(
            FlowError::NegativeCapacity { tail: 1, head: 2 }.to_string(),
            "edge (1,2) has a negative capacity"
        );
        assert_eq!(
            FlowError::SourceIsSink(3).to_string(),
            "source and sink must differ, got 3 for both"
        );
    }
}
