//! Contiguous partitioning of an edge list across workers.

use std::{num::NonZeroUsize, ops::Range};

use crate::{
    edge::Edge,
    error::{MstError, Result},
};

/// Splits `edge_count` edges into `partition_count` contiguous ranges.
///
/// Every partition except the last covers `edge_count / partition_count`
/// edges; the last one also absorbs the remainder. When there are more
/// partitions than edges the leading partitions are empty. The ranges never
/// overlap and together cover every edge exactly once.
///
/// # Examples
/// ```
/// use kruskal_core::PartitionPlan;
///
/// let plan = PartitionPlan::new(10, 3)?;
/// let ranges: Vec<_> = plan.ranges().collect();
/// assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PartitionPlan {
    edge_count: usize,
    partition_count: NonZeroUsize,
    chunk_len: usize,
}

impl PartitionPlan {
    /// Plans `partition_count` partitions over `edge_count` edges.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidWorkerCount`] when `partition_count == 0`.
    pub fn new(edge_count: usize, partition_count: usize) -> Result<Self> {
        let partitions = NonZeroUsize::new(partition_count).ok_or(MstError::InvalidWorkerCount {
            got: partition_count,
        })?;
        Ok(Self {
            edge_count,
            partition_count: partitions,
            chunk_len: edge_count / partitions,
        })
    }

    /// Returns the number of planned partitions.
    #[must_use]
    pub const fn partition_count(&self) -> usize {
        self.partition_count.get()
    }

    /// Returns the number of edges the plan covers.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the edge range of partition `index`, or `None` when `index`
    /// is not a planned partition.
    #[must_use]
    pub fn range(&self, index: usize) -> Option<Range<usize>> {
        if index >= self.partition_count() {
            return None;
        }
        let start = index * self.chunk_len;
        let end = if index + 1 == self.partition_count() {
            self.edge_count
        } else {
            start + self.chunk_len
        };
        Some(start..end)
    }

    /// Iterates over every partition range in order.
    pub fn ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.partition_count()).filter_map(|index| self.range(index))
    }

    /// Borrows the partitions of `edges` as read-only slices.
    ///
    /// `edges` must hold exactly [`Self::edge_count`] edges; ranges falling
    /// outside a shorter list yield empty slices.
    pub fn partitions<'a>(&'a self, edges: &'a [Edge]) -> impl Iterator<Item = &'a [Edge]> + 'a {
        self.ranges()
            .map(move |range| edges.get(range).unwrap_or_default())
    }
}
