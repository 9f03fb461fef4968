/*!
# Network Generators

Builders for random flow networks, mainly used to cross-check the flow algorithms against each
other and against exhaustive search.

The usage workflow mirrors the other configurable structs of this crate:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).capacities(1, 10)`).
3. Generate edges via `generate()` or `stream()`, or a whole network via [`RandomNetwork`].

Edges are produced as `(tail, head, capacity, cost)`-tuples which can be passed directly to
[`NetworkFromScratch::from_edges`] or [`NetworkEdgeEditing::add_edges`].
*/

use rand::{distr::uniform::SampleUniform, Rng};

use crate::prelude::*;

mod gnp;

pub use gnp::*;

/// Edge as produced by generators: `(tail, head, capacity, cost)`
pub type WeightedEdge<T> = (Node, Node, T, T);

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes of the generated network.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average out-degree.
pub trait AverageDegreeGen {
    /// Set the expected number of edges leaving a node.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random network generator.
pub trait NetworkGenerator<T: FlowNum> {
    /// Number of nodes the generated edges refer to
    fn number_of_nodes(&self) -> NumNodes;

    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<T>>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<T>>
    where
        R: Rng;
}

/// Trait for building whole networks from random models.
pub trait RandomNetwork<T: FlowNum>: Sized {
    /// Creates a random `G(n,p)` network without self-loops where every edge has capacity `1`
    /// and cost `0`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a network with the edges of a configured generator.
    fn from_generator<R, G>(rng: &mut R, generator: &G) -> Self
    where
        R: Rng,
        G: NetworkGenerator<T>;
}

impl<T, N> RandomNetwork<T> for N
where
    T: FlowNum + SampleUniform,
    N: NetworkFromScratch<T>,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_generator(rng, &Gnp::new().nodes(n).prob(p))
    }

    fn from_generator<R, G>(rng: &mut R, generator: &G) -> Self
    where
        R: Rng,
        G: NetworkGenerator<T>,
    {
        Self::from_edges(generator.number_of_nodes(), generator.stream(rng))
    }
}
