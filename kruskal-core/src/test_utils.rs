//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{DisjointSetUnion, Edge};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `KRUSKAL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds edges from `(u, v, weight)` tuples.
pub(crate) fn edges(raw: &[(usize, usize, i64)]) -> Vec<Edge> {
    raw.iter().copied().map(Edge::from).collect()
}

/// Replays `forest` through a fresh disjoint set and returns the resulting
/// component count, or `None` when some edge closes a cycle.
pub(crate) fn replay_forest(node_count: usize, forest: &[Edge]) -> Option<usize> {
    let mut sets = DisjointSetUnion::new(node_count);
    for edge in forest {
        if !sets.union(edge.u(), edge.v()).ok()? {
            return None;
        }
    }
    Some(sets.component_count())
}

/// Counts the connected components of the graph formed by `edges`.
pub(crate) fn component_count(node_count: usize, edges: &[Edge]) -> usize {
    let mut sets = DisjointSetUnion::new(node_count);
    for edge in edges {
        let _ = sets.union(edge.u(), edge.v());
    }
    sets.component_count()
}
