//! Support library for the `kruskal` binary.
//!
//! Exposes the command pipeline and logging setup so tests can drive the
//! benchmark without spawning a subprocess.

pub mod cli;
pub mod logging;
