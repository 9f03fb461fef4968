use std::ops::Range;

use itertools::Itertools;

use crate::{error::Result, numeric::FlowNum, *};

/// Provides getters pertaining to the node-size of a network
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the network
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range of all nodes.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used where
    /// additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the network has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a network
pub trait GraphEdgeOrder {
    /// Returns the number of edges inserted by the user (forward arcs only)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns the number of arcs in the arena, i.e. forward arcs and their duals
    fn number_of_arcs(&self) -> NumEdges {
        2 * self.number_of_edges()
    }

    /// Returns *true* if the network has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to the arcs of a residual network
pub trait ResidualAdjacency<T: FlowNum>: GraphNodeOrder + GraphEdgeOrder {
    /// Returns the arc with id `e`
    /// ** Panics if `e >= number_of_arcs` **
    fn arc(&self, e: EdgeId) -> &FlowArc<T>;

    /// Returns the ids of all arcs leaving `u` (forward arcs and duals) in insertion order
    /// ** Panics if `u >= n` **
    fn out_arcs_of(&self, u: Node) -> &[EdgeId];

    /// Returns the id of the paired reverse arc of `e`
    /// ** Panics if `e >= number_of_arcs` **
    #[inline]
    fn dual_of(&self, e: EdgeId) -> EdgeId {
        self.arc(e).dual
    }

    /// Returns an iterator over arcs leaving `u` that have positive residual capacity
    /// ** Panics if `u >= n` **
    fn residual_arcs_of(&self, u: Node) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_arcs_of(u)
            .iter()
            .copied()
            .filter(|&e| self.arc(e).is_residual())
    }

    /// Returns an iterator over all arcs with positive residual capacity
    fn residual_arcs(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.number_of_arcs()).filter(|&e| self.arc(e).is_residual())
    }

    /// Returns an iterator over the ids of all forward arcs, i.e. the edges inserted by the user
    fn forward_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.number_of_edges()).map(|i| 2 * i)
    }

    /// Returns all edges inserted by the user as `Edge(tail, head)` in insertion order
    fn edges(&self) -> Vec<Edge> {
        self.forward_edges().map(|e| self.arc(e).edge()).collect_vec()
    }
}

/// Trait for creating a new empty network
pub trait GraphNew {
    /// Creates an empty network with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges into a network
pub trait NetworkEdgeEditing<T: FlowNum>: GraphNew {
    /// Adds the edge `(u, v)` with the given capacity and per-unit cost together with its dual.
    /// Returns the id of the forward arc.
    ///
    /// # Errors
    /// Fails if `u >= n`, `v >= n` or `capacity < 0`.
    fn try_add_edge(&mut self, u: Node, v: Node, capacity: T, cost: T) -> Result<EdgeId>;

    /// Adds the edge `(u, v)` with the given capacity and per-unit cost together with its dual.
    /// ** Panics if `u >= n || v >= n` or `capacity < 0` **
    fn add_edge(&mut self, u: Node, v: Node, capacity: T, cost: T) -> EdgeId {
        match self.try_add_edge(u, v, capacity, cost) {
            Ok(e) => e,
            Err(err) => panic!("{err}"),
        }
    }

    /// Adds all edges `(u, v, capacity, cost)` in the collection
    /// ** Panics if any edge is invalid **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = (Node, Node, T, T)>) {
        for (u, v, capacity, cost) in edges {
            self.add_edge(u, v, capacity, cost);
        }
    }
}

/// A super trait for creating a network from scratch from a set of edges and a number of nodes
pub trait NetworkFromScratch<T: FlowNum> {
    /// Create a network from a number of nodes and `(u, v, capacity, cost)`-tuples
    /// ** Panics if any edge is invalid **
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = (Node, Node, T, T)>) -> Self;
}

impl<T: FlowNum, G: GraphNew + NetworkEdgeEditing<T>> NetworkFromScratch<T> for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = (Node, Node, T, T)>) -> Self {
        let mut network = Self::new(n);
        network.add_edges(edges);
        network
    }
}
