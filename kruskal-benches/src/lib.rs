//! Benchmark support crate for kruskal.
//!
//! Provides seeded workloads and parameter types used by the Criterion
//! benchmarks for the disjoint set, the sequential solver and the
//! partitioned solver.

pub mod error;
pub mod params;
pub mod workload;
