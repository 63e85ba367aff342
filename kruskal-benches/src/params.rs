//! Benchmark parameter types.
//!
//! The `Display` impls double as Criterion benchmark ids.

use std::fmt;

/// Parameters for a solver benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MstBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of edges in the generated graph.
    pub edge_count: usize,
    /// Workers for the partitioned solver; `None` for the sequential one.
    pub workers: Option<usize>,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)?;
        match self.workers {
            Some(workers) => write!(f, ",w={workers}"),
            None => Ok(()),
        }
    }
}

/// Parameters for a disjoint set benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnionBenchParams {
    /// Number of elements in the disjoint set.
    pub element_count: usize,
    /// Number of union operations applied.
    pub union_count: usize,
}

impl fmt::Display for UnionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},unions={}", self.element_count, self.union_count)
    }
}
