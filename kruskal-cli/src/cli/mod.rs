//! Command-line interface orchestration for the `kruskal` binary.
//!
//! The CLI offers a `bench` command that generates a seeded synthetic graph,
//! solves it with both the sequential and the partitioned solver, and
//! reports costs, timings, speedup and efficiency.

mod commands;

pub use commands::{BenchCommand, BenchmarkReport, Cli, CliError, Command, render_report, run_cli};
