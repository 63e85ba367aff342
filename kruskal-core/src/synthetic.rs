//! Seeded synthetic graph generation for benchmarks and demos.
//!
//! Generated graphs are always connected: a path `0 - 1 - .. - (n - 1)` is
//! laid down first and random non-loop edges are appended until the edge
//! budget is met. Weights are drawn uniformly from `1..=max_weight`.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::instrument;

use crate::edge::{Edge, Weight};

/// Errors raised while validating a [`SyntheticGraphConfig`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SyntheticError {
    /// The graph must contain at least one node.
    #[error("node_count must be at least 1")]
    ZeroNodes,
    /// Random edges need two distinct endpoints.
    #[error("{edge_count} extra edges requested but a single-node graph cannot hold any")]
    NoRoomForEdges {
        /// Total number of edges requested.
        edge_count: usize,
    },
    /// The edge budget cannot hold the connecting path.
    #[error("edge_count {edge_count} is below the {minimum} edges needed to connect the graph")]
    TooFewEdges {
        /// Requested number of edges.
        edge_count: usize,
        /// Number of path edges required for connectivity.
        minimum: usize,
    },
    /// Weights are drawn from `1..=max_weight`.
    #[error("max_weight must be at least 1 (got {got})")]
    InvalidMaxWeight {
        /// The rejected upper weight bound.
        got: Weight,
    },
}

/// Parameters for a synthetic connected graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntheticGraphConfig {
    /// Number of nodes.
    pub node_count: usize,
    /// Total number of edges, including the connecting path.
    pub edge_count: usize,
    /// Inclusive upper bound for edge weights.
    pub max_weight: Weight,
    /// Seed for the random number generator.
    pub seed: u64,
}

impl Default for SyntheticGraphConfig {
    fn default() -> Self {
        Self {
            node_count: 10_000,
            edge_count: 10_000_000,
            max_weight: 100,
            seed: 42,
        }
    }
}

/// A generated graph ready to be handed to a solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<Edge>,
}

impl SyntheticGraph {
    /// Generates a graph from `config`. The same configuration always
    /// produces the same graph.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration cannot describe a
    /// connected graph.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::synthetic::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     node_count: 50,
    ///     edge_count: 400,
    ///     max_weight: 100,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.edges().len(), 400);
    /// # Ok::<(), kruskal_core::synthetic::SyntheticError>(())
    /// ```
    #[instrument(
        name = "synthetic.generate",
        err,
        skip(config),
        fields(
            nodes = config.node_count,
            edges = config.edge_count,
            seed = config.seed,
        ),
    )]
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        validate_config(config)?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = Vec::with_capacity(config.edge_count);

        for node in 1..config.node_count {
            let weight = rng.gen_range(1..=config.max_weight);
            edges.push(Edge::new(node - 1, node, weight));
        }

        while edges.len() < config.edge_count {
            let u = rng.gen_range(0..config.node_count);
            let v = rng.gen_range(0..config.node_count);
            if u != v {
                let weight = rng.gen_range(1..=config.max_weight);
                edges.push(Edge::new(u, v, weight));
            }
        }

        Ok(Self {
            node_count: config.node_count,
            edges,
        })
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the generated edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the graph and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

fn validate_config(config: &SyntheticGraphConfig) -> Result<(), SyntheticError> {
    if config.node_count == 0 {
        return Err(SyntheticError::ZeroNodes);
    }
    if config.max_weight < 1 {
        return Err(SyntheticError::InvalidMaxWeight {
            got: config.max_weight,
        });
    }
    let minimum = config.node_count - 1;
    if config.edge_count < minimum {
        return Err(SyntheticError::TooFewEdges {
            edge_count: config.edge_count,
            minimum,
        });
    }
    if config.node_count == 1 && config.edge_count > 0 {
        return Err(SyntheticError::NoRoomForEdges {
            edge_count: config.edge_count,
        });
    }
    Ok(())
}
