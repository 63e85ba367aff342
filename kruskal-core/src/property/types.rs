//! Type definitions for MST property-based tests.

use crate::Edge;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and topology are chosen, producing inputs that
/// stress different aspects of the solvers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range; ties are rare.
    Unique,
    /// Weights drawn from a pool of one to three values, stressing ties.
    ManyIdentical,
    /// Random spanning path plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Several components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the node count, generated edges, and the distribution used during
/// generation so failures can be diagnosed.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Generated edges in generation order.
    pub edges: Vec<Edge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Formats the fixture summary appended to failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len()
        )
    }
}
