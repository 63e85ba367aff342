//! Agreement between the sequential solver and the Prim oracle.
//!
//! For any generated graph the sequential Kruskal forest must have the same
//! total weight, edge count and component count as the oracle's forest.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{solve_sequential, total_weight};

use super::oracle::prim_forest;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = solve_sequential(&fixture.edges, fixture.node_count).map_err(|e| {
        TestCaseError::fail(format!("solve_sequential failed: {e} ({})", fixture.describe()))
    })?;
    let oracle = prim_forest(fixture.node_count, &fixture.edges);

    let weight = total_weight(&forest);
    if weight != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={weight}, oracle={} ({})",
            oracle.total_weight,
            fixture.describe(),
        )));
    }

    if forest.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} ({})",
            forest.len(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }

    let components = fixture.node_count - forest.len();
    if components != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: kruskal={components}, oracle={} ({})",
            oracle.component_count,
            fixture.describe(),
        )));
    }

    Ok(())
}
