use itertools::Itertools;

use super::*;

/// A G(n, p) network can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average out-degree of a node
    AvgDeg(f64),
}

fn is_valid_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

/// `G(n,p)` networks contain every possible directed edge `(u, v)` with probability `p`
/// independent from each other. Capacities and costs are drawn uniformly from inclusive ranges.
///
/// Self-loops are skipped unless enabled via [`Gnp::loops`].
#[derive(Debug, Copy, Clone)]
pub struct Gnp<T> {
    n: NumNodes,
    p: GnpType,
    capacities: (T, T),
    costs: (T, T),
    loops: bool,
}

impl<T: FlowNum> Default for Gnp<T> {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            capacities: (T::one(), T::one()),
            costs: (T::zero(), T::zero()),
            loops: false,
        }
    }
}

impl<T: FlowNum + SampleUniform> Gnp<T> {
    /// Creates a new `G(n,p)` generator with unit capacities and zero costs
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(is_valid_probability(prob));
        self.p = GnpType::Prob(prob);
        self
    }

    /// Capacities are drawn uniformly from `lo..=hi`
    /// ** Panics if `lo < 0` or `lo > hi` **
    pub fn capacities(mut self, lo: T, hi: T) -> Self {
        assert!(T::zero() <= lo && lo <= hi);
        self.capacities = (lo, hi);
        self
    }

    /// Costs are drawn uniformly from `lo..=hi`
    /// ** Panics if `lo > hi` **
    pub fn costs(mut self, lo: T, hi: T) -> Self {
        assert!(lo <= hi);
        self.costs = (lo, hi);
        self
    }

    /// Allow or forbid self-loops
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = d / self.n as f64;
                assert!(
                    is_valid_probability(p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl<T> NumNodesGen for Gnp<T> {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl<T> AverageDegreeGen for Gnp<T> {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl<T: FlowNum + SampleUniform> NetworkGenerator<T> for Gnp<T> {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<T>> {
        assert!(self.n > 0, "At least one node must be generated!");
        let p = self.probability();
        let loops = self.loops;
        let (cap_lo, cap_hi) = self.capacities;
        let (cost_lo, cost_hi) = self.costs;

        (0..self.n)
            .cartesian_product(0..self.n)
            .filter(move |&(u, v)| loops || u != v)
            .filter_map(move |(u, v)| {
                if !rng.random_bool(p) {
                    return None;
                }
                let capacity = rng.random_range(cap_lo..=cap_hi);
                let cost = rng.random_range(cost_lo..=cost_hi);
                Some((u, v, capacity, cost))
            })
    }
}
