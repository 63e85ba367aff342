//! Kruskal core library.
//!
//! Minimum spanning trees over weighted undirected graphs, built on a
//! disjoint set union with path compression and union-by-size. Two solvers
//! are provided: [`solve_sequential`], the classic Kruskal scan, and
//! [`solve_parallel`], which solves contiguous partitions of the edge list on
//! a Rayon pool and merges the partial forests with one final Kruskal pass.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod edge;
mod error;
mod kruskal;
mod partitioned;
#[cfg(feature = "synthetic")]
#[cfg_attr(docsrs, doc(cfg(feature = "synthetic")))]
pub mod synthetic;
mod union_find;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{Solver, SolverBuilder, Strategy, default_worker_count},
    edge::{Edge, NodeId, Weight, total_weight},
    error::{MstError, MstErrorCode, Result},
    kruskal::solve_sequential,
    partitioned::{PartitionPlan, PartitionedSolver, solve_parallel},
    union_find::DisjointSetUnion,
};
