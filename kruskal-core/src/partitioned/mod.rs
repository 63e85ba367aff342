//! Partitioned parallel Kruskal.
//!
//! The edge list is cut into contiguous partitions by input position. Each
//! partition is solved independently on a Rayon worker with its own
//! [`DisjointSetUnion`](crate::DisjointSetUnion), the partial forests are
//! appended to a shared list under a mutex, and a final sequential Kruskal
//! pass over that list removes the cycles introduced by recombination.
//!
//! The partitioning ignores weights and topology, and the final pass only
//! sees the union of the partial forests. The result is a valid spanning
//! forest whose total weight is never below the sequential MST, but it is not
//! promised to be the sequential MST. Callers that need an exact answer should
//! use [`solve_sequential`](crate::solve_sequential).

mod plan;

use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};

use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};
use tracing::{debug, info, instrument};

use crate::{
    edge::Edge,
    error::{MstError, Result},
    kruskal::{assemble_forest, validate_edges},
};

pub use self::plan::PartitionPlan;

/// Runs the partitioned solver on a dedicated pool of `worker_count` threads.
///
/// Builds a fresh worker pool for the call; use [`PartitionedSolver`] to
/// reuse one pool across solves.
///
/// # Errors
///
/// Returns an error when:
/// - `node_count == 0` ([`MstError::EmptyGraph`])
/// - an edge references a node id `>= node_count`
///   ([`MstError::InvalidNodeId`])
/// - `worker_count == 0` ([`MstError::InvalidWorkerCount`])
/// - the worker pool cannot be built ([`MstError::ThreadPool`])
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, solve_parallel, solve_sequential};
///
/// let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)];
/// let tree = solve_parallel(&edges, 3, 1)?;
/// assert_eq!(tree, solve_sequential(&edges, 3)?);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
pub fn solve_parallel(edges: &[Edge], node_count: usize, worker_count: usize) -> Result<Vec<Edge>> {
    PartitionedSolver::new(worker_count)?.solve(edges, node_count)
}

/// Partitioned Kruskal solver bound to a fixed-size worker pool.
///
/// Cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct PartitionedSolver {
    pool: Arc<ThreadPool>,
    worker_count: NonZeroUsize,
}

impl PartitionedSolver {
    /// Builds a solver backed by `worker_count` worker threads. The edge list
    /// is split into the same number of partitions.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidWorkerCount`] when `worker_count == 0` and
    /// [`MstError::ThreadPool`] when the pool cannot be built.
    pub fn new(worker_count: usize) -> Result<Self> {
        let workers = NonZeroUsize::new(worker_count)
            .ok_or(MstError::InvalidWorkerCount { got: worker_count })?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|index| format!("kruskal-worker-{index}"))
            .build()
            .map_err(|error| MstError::ThreadPool {
                message: error.to_string(),
            })?;

        Ok(Self {
            pool: Arc::new(pool),
            worker_count: workers,
        })
    }

    /// Returns the number of workers and partitions used per solve.
    #[must_use]
    #[rustfmt::skip]
    pub const fn worker_count(&self) -> NonZeroUsize { self.worker_count }

    /// Computes a spanning forest with the partition, local-solve, merge
    /// strategy.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] or [`MstError::InvalidNodeId`] for
    /// invalid input, checked before any worker starts, and
    /// [`MstError::LockPoisoned`] if a worker panicked while holding the
    /// result lock.
    #[instrument(
        name = "mst.partitioned",
        err,
        skip(self, edges),
        fields(
            node_count = node_count,
            edges = edges.len(),
            workers = self.worker_count.get(),
        ),
    )]
    pub fn solve(&self, edges: &[Edge], node_count: usize) -> Result<Vec<Edge>> {
        validate_edges(edges, node_count)?;
        let plan = PartitionPlan::new(edges.len(), self.worker_count.get())?;

        let combined = self.solve_partitions(&plan, edges, node_count)?;
        let candidates = combined.len();
        let forest = assemble_forest(combined, node_count);

        info!(
            partitions = plan.partition_count(),
            candidates,
            accepted = forest.len(),
            "partitioned solve completed"
        );
        Ok(forest)
    }

    fn solve_partitions(
        &self,
        plan: &PartitionPlan,
        edges: &[Edge],
        node_count: usize,
    ) -> Result<Vec<Edge>> {
        let partitions: Vec<(usize, &[Edge])> = plan.partitions(edges).enumerate().collect();
        let capacity = node_count
            .saturating_sub(1)
            .saturating_mul(plan.partition_count())
            .min(edges.len());
        let combined = Mutex::new(Vec::with_capacity(capacity));

        self.pool.install(|| {
            partitions
                .into_par_iter()
                .try_for_each(|(index, chunk)| -> Result<()> {
                    let local = assemble_forest(chunk.to_vec(), node_count);
                    debug!(
                        partition = index,
                        chunk_edges = chunk.len(),
                        accepted = local.len(),
                        "partition solved"
                    );
                    combined
                        .lock()
                        .map_err(|_| MstError::LockPoisoned {
                            resource: "partition results",
                        })?
                        .extend(local);
                    Ok(())
                })
        })?;

        combined.into_inner().map_err(|_| MstError::LockPoisoned {
            resource: "partition results",
        })
    }
}
