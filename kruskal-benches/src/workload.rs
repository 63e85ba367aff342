//! Seeded workloads shared by the benchmarks.

use kruskal_core::synthetic::{SyntheticGraph, SyntheticGraphConfig};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;
use crate::params::{MstBenchParams, UnionBenchParams};

/// Seed used for every generated workload.
pub const SEED: u64 = 42;

/// Upper bound for generated edge weights.
pub const MAX_WEIGHT: i64 = 100;

/// Generates the graph described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Synthetic`] when the parameters cannot describe
/// a connected graph.
pub fn graph(params: &MstBenchParams) -> Result<SyntheticGraph, BenchSetupError> {
    let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
        node_count: params.node_count,
        edge_count: params.edge_count,
        max_weight: MAX_WEIGHT,
        seed: SEED,
    })?;
    Ok(graph)
}

/// Generates `params.union_count` random element pairs for a disjoint set of
/// `params.element_count` elements.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `element_count` is zero.
pub fn union_pairs(params: &UnionBenchParams) -> Result<Vec<(usize, usize)>, BenchSetupError> {
    if params.element_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "element_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(SEED);
    Ok((0..params.union_count)
        .map(|_| {
            (
                rng.gen_range(0..params.element_count),
                rng.gen_range(0..params.element_count),
            )
        })
        .collect())
}
