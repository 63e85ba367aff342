//! Bounds of the partitioned solver relative to the sequential one.
//!
//! With a single worker the partitioned solver must reproduce the sequential
//! forest exactly, edge order included. With more workers its total weight
//! may never drop below the sequential minimum.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{PartitionedSolver, solve_sequential, total_weight};

use super::types::MstFixture;

const WORKER_COUNTS: [usize; 5] = [1, 2, 3, 5, 8];

/// Runs the single-worker equality and weight bound properties.
pub(super) fn run_partition_bounds_property(fixture: &MstFixture) -> TestCaseResult {
    let sequential = solve_sequential(&fixture.edges, fixture.node_count).map_err(|e| {
        TestCaseError::fail(format!("solve_sequential failed: {e} ({})", fixture.describe()))
    })?;
    let minimum = total_weight(&sequential);

    for workers in WORKER_COUNTS {
        let solver = PartitionedSolver::new(workers)
            .map_err(|e| TestCaseError::fail(format!("pool for {workers} workers: {e}")))?;
        let forest = solver.solve(&fixture.edges, fixture.node_count).map_err(|e| {
            TestCaseError::fail(format!(
                "partitioned({workers}) failed: {e} ({})",
                fixture.describe()
            ))
        })?;

        if workers == 1 && forest != sequential {
            return Err(TestCaseError::fail(format!(
                "single worker diverged from sequential: {} vs {} edges ({})",
                forest.len(),
                sequential.len(),
                fixture.describe(),
            )));
        }

        let weight = total_weight(&forest);
        if weight < minimum {
            return Err(TestCaseError::fail(format!(
                "partitioned({workers}) weight {weight} below sequential {minimum} ({})",
                fixture.describe(),
            )));
        }
    }

    Ok(())
}
