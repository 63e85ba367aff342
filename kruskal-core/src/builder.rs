//! Builder utilities for configuring MST solvers.
//!
//! Exposes the strategy selection surface and the validation performed before
//! a [`Solver`] is constructed.

use std::{num::NonZeroUsize, thread};

use crate::{
    Result,
    edge::Edge,
    error::MstError,
    kruskal::solve_sequential,
    partitioned::PartitionedSolver,
};

/// Returns the worker count used when none is configured: the available
/// hardware parallelism, or `1` when it cannot be determined.
///
/// # Examples
/// ```
/// assert!(kruskal_core::default_worker_count().get() >= 1);
/// ```
#[must_use]
pub fn default_worker_count() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Selects the algorithm a [`Solver`] runs.
///
/// # Examples
/// ```
/// use kruskal_core::Strategy;
///
/// assert_eq!(Strategy::default(), Strategy::Sequential);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded Kruskal; always returns a minimum spanning forest.
    #[default]
    Sequential,
    /// Partition the edge list across workers and merge the partial forests.
    Partitioned,
}

/// Configures and constructs [`Solver`] instances.
///
/// # Examples
/// ```
/// use kruskal_core::{SolverBuilder, Strategy};
///
/// let solver = SolverBuilder::new()
///     .with_strategy(Strategy::Partitioned)
///     .with_worker_count(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(solver.strategy(), Strategy::Partitioned);
/// assert_eq!(solver.worker_count().get(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolverBuilder {
    strategy: Strategy,
    worker_count: Option<usize>,
}

impl SolverBuilder {
    /// Creates a builder for a sequential solver with the default worker
    /// count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy to use when solving.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> Strategy { self.strategy }

    /// Overrides the number of workers used by [`Strategy::Partitioned`].
    #[must_use]
    pub const fn with_worker_count(mut self, workers: usize) -> Self {
        self.worker_count = Some(workers);
        self
    }

    /// Returns the explicitly configured worker count, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn worker_count(&self) -> Option<usize> { self.worker_count }

    /// Validates the configuration and constructs a [`Solver`].
    ///
    /// The worker pool is only built for [`Strategy::Partitioned`].
    ///
    /// # Errors
    /// Returns [`MstError::InvalidWorkerCount`] when the worker count was set
    /// to zero and [`MstError::ThreadPool`] when the pool cannot be built.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{MstError, SolverBuilder};
    ///
    /// let err = SolverBuilder::new().with_worker_count(0).build().unwrap_err();
    /// assert_eq!(err, MstError::InvalidWorkerCount { got: 0 });
    /// ```
    pub fn build(self) -> Result<Solver> {
        let worker_count = match self.worker_count {
            Some(got) => NonZeroUsize::new(got).ok_or(MstError::InvalidWorkerCount { got })?,
            None => default_worker_count(),
        };

        let backend = match self.strategy {
            Strategy::Sequential => Backend::Sequential,
            Strategy::Partitioned => {
                Backend::Partitioned(PartitionedSolver::new(worker_count.get())?)
            }
        };

        Ok(Solver {
            backend,
            worker_count,
        })
    }
}

#[derive(Debug, Clone)]
enum Backend {
    Sequential,
    Partitioned(PartitionedSolver),
}

/// A configured MST solver.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, SolverBuilder, total_weight};
///
/// let solver = SolverBuilder::new().build()?;
/// let tree = solver.solve(&[Edge::new(0, 1, 2), Edge::new(1, 2, 3)], 3)?;
/// assert_eq!(total_weight(&tree), 5);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    backend: Backend,
    worker_count: NonZeroUsize,
}

impl Solver {
    /// Returns the strategy this solver runs.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        match self.backend {
            Backend::Sequential => Strategy::Sequential,
            Backend::Partitioned(_) => Strategy::Partitioned,
        }
    }

    /// Returns the resolved worker count. Sequential solvers record it but
    /// run on the calling thread.
    #[must_use]
    #[rustfmt::skip]
    pub const fn worker_count(&self) -> NonZeroUsize { self.worker_count }

    /// Computes a spanning forest of `edges` over `node_count` nodes.
    ///
    /// # Errors
    /// Propagates the errors of [`crate::solve_sequential`] or
    /// [`PartitionedSolver::solve`], depending on the strategy.
    pub fn solve(&self, edges: &[Edge], node_count: usize) -> Result<Vec<Edge>> {
        match &self.backend {
            Backend::Sequential => solve_sequential(edges, node_count),
            Backend::Partitioned(solver) => solver.solve(edges, node_count),
        }
    }
}
