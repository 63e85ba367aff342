//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` instead of `.expect()`.

use kruskal_core::MstError;
use kruskal_core::synthetic::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A solver or its worker pool failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A union workload was requested over an empty disjoint set.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}
