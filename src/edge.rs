use std::{
    fmt::{Debug, Display},
    num::NonZero,
};

use crate::{numeric::FlowNum, Node};

/// An edge is defined by two nodes/endpoints: `Edge(tail, head)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Index of an arc in the arc arena of a [`FlowNetwork`](crate::network::FlowNetwork).
///
/// Forward arcs live at even indices, their duals at the following odd index.
pub type EdgeId = u32;

/// We limit the number of arcs to `2^32 - 1`.
pub type NumEdges = u32;

/// Arc-Value that is considered invalid
pub const INVALID_EDGE: EdgeId = EdgeId::MAX;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// As `Option<EdgeId>` uses additional bytes for padding, it can be inefficient
/// since we often need `Vec<Option<EdgeId>>` for parent arrays. This instead uses the
/// `NonZero`-Wrapper to assign `INVALID_EDGE` as the `None`-Value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalEdge(NonZero<EdgeId>);

impl OptionalEdge {
    /// Returns `Some(OptionalEdge)` if `e != INVALID_EDGE` and `None` otherwise
    pub const fn new(e: EdgeId) -> Option<Self> {
        match NonZero::new(e ^ INVALID_EDGE) {
            Some(inner) => Some(OptionalEdge(inner)),
            None => None,
        }
    }

    /// Gets the underlying arc id
    pub const fn get(&self) -> EdgeId {
        self.0.get() ^ INVALID_EDGE
    }
}

/// A single arc of the residual network.
///
/// `capacity` is the *residual* capacity and `cost` the *reduced* cost with respect to the
/// potentials of the owning network. Both are mutated in place by the flow algorithms; arcs are
/// never created or destroyed once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowArc<T> {
    pub(crate) tail: Node,
    pub(crate) head: Node,
    pub(crate) capacity: T,
    pub(crate) flow: T,
    pub(crate) cost: T,
    pub(crate) dual: EdgeId,
}

impl<T: FlowNum> FlowArc<T> {
    /// Node the arc leaves
    pub fn tail(&self) -> Node {
        self.tail
    }

    /// Node the arc enters
    pub fn head(&self) -> Node {
        self.head
    }

    /// Both endpoints as an `Edge(tail, head)`
    pub fn edge(&self) -> Edge {
        Edge(self.tail, self.head)
    }

    /// Remaining capacity in the residual network
    pub fn residual_capacity(&self) -> T {
        self.capacity
    }

    /// Net flow pushed along this arc
    pub fn flow(&self) -> T {
        self.flow
    }

    /// Cost of the arc after reweighting by node potentials
    pub fn reduced_cost(&self) -> T {
        self.cost
    }

    /// Id of the paired reverse arc
    pub fn dual(&self) -> EdgeId {
        self.dual
    }

    /// Returns *true* if the arc can still carry flow
    pub fn is_residual(&self) -> bool {
        self.capacity > T::zero()
    }
}
