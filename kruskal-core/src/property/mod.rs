//! Property-based tests for the sequential and partitioned solvers.
//!
//! Verifies the sequential solver against an independent Prim oracle,
//! validates structural invariants (acyclicity, edge count, connectivity) of
//! both solvers, and checks the bounds the partitioned solver promises
//! relative to the sequential one across graph topologies with varied weight
//! distributions.

mod bounds;
mod equivalence;
mod oracle;
mod strategies;
mod types;
