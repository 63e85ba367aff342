//! Error types for the Kruskal core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while building a minimum spanning tree or forest.
///
/// Every variant is a precondition violation or an infrastructure failure;
/// a solve either completes or fails before producing any output.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST over zero nodes.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// An edge referenced a node id that is not present in the graph.
    #[error("edge references node {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid node id referenced by an edge.
        node: usize,
        /// The number of nodes in the graph.
        node_count: usize,
    },
    /// The partitioned solver was asked to run with zero workers.
    #[error("worker_count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The worker count supplied by the caller.
        got: usize,
    },
    /// A disjoint-set operation addressed an element outside the structure.
    #[error("index {index} is out of range for a disjoint set of {len} elements")]
    IndexOutOfRange {
        /// The offending element index.
        index: usize,
        /// The number of elements in the disjoint set.
        len: usize,
    },
    /// A synchronisation primitive became poisoned after a worker panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
    /// The worker pool could not be constructed.
    #[error("failed to build worker pool: {message}")]
    ThreadPool {
        /// Message reported by the pool builder.
        message: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested an MST over zero nodes.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// An edge referenced a node id that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "MST_INVALID_NODE_ID",
        /// The partitioned solver was asked to run with zero workers.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "MST_INVALID_WORKER_COUNT",
        /// A disjoint-set operation addressed an element outside the structure.
        IndexOutOfRange => IndexOutOfRange { .. } => "MST_INDEX_OUT_OF_RANGE",
        /// A synchronisation primitive became poisoned after a worker panic.
        LockPoisoned => LockPoisoned { .. } => "MST_LOCK_POISONED",
        /// The worker pool could not be constructed.
        ThreadPool => ThreadPool { .. } => "MST_THREAD_POOL",
    }
}

impl MstError {
    /// Returns `true` when the error reports a caller-supplied argument
    /// rather than an internal failure.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyGraph | Self::InvalidNodeId { .. } | Self::InvalidWorkerCount { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
