//! Command implementations and argument parsing for the `kruskal` binary.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use kruskal_core::synthetic::{SyntheticError, SyntheticGraph, SyntheticGraphConfig};
use kruskal_core::{
    MstError, PartitionedSolver, default_worker_count, solve_sequential, total_weight,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_NODES: usize = 10_000;
const DEFAULT_EDGES: usize = 10_000_000;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_MAX_WEIGHT: i64 = 100;

/// Width of the label column in the rendered report.
const LABEL_WIDTH: usize = 16;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Build minimum spanning trees sequentially and in parallel."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compare the sequential and partitioned solvers on a synthetic graph.
    Bench(BenchCommand),
}

/// Options accepted by the `bench` command.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct BenchCommand {
    /// Number of nodes in the generated graph.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Total number of edges, including the connecting path.
    #[arg(long, default_value_t = DEFAULT_EDGES)]
    pub edges: usize,

    /// Worker threads for the partitioned solver (defaults to the available
    /// hardware parallelism).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Seed for graph generation.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Inclusive upper bound for edge weights.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: i64,
}

impl BenchCommand {
    fn graph_config(&self) -> SyntheticGraphConfig {
        SyntheticGraphConfig {
            node_count: self.nodes,
            edge_count: self.edges,
            max_weight: self.max_weight,
            seed: self.seed,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested graph could not be generated.
    #[error(transparent)]
    Synthetic(#[from] SyntheticError),
    /// A solver rejected its input or failed to run.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the stable code of the underlying solver error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Core(error) => Some(error.code().as_str()),
            Self::Synthetic(_) => None,
        }
    }
}

/// Outcome of one `bench` run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Nodes in the generated graph.
    pub nodes: usize,
    /// Edges in the generated graph.
    pub edges: usize,
    /// Workers used by the partitioned solver.
    pub threads: usize,
    /// Edges in the partitioned result.
    pub mst_edges: usize,
    /// Edges a spanning tree over `nodes` needs.
    pub target_edges: usize,
    /// Total weight of the partitioned result.
    pub total_cost: i128,
    /// Total weight of the sequential result.
    pub serial_total_cost: i128,
    /// Wall time of the sequential solve.
    pub serial: Duration,
    /// Wall time of the partitioned solve.
    pub parallel: Duration,
}

impl BenchmarkReport {
    /// Serial time divided by parallel time, or `None` when the parallel
    /// solve was too fast to measure.
    #[must_use]
    pub fn speedup(&self) -> Option<f64> {
        let parallel = self.parallel.as_secs_f64();
        (parallel > 0.0).then(|| self.serial.as_secs_f64() / parallel)
    }

    /// Speedup per worker, as a percentage.
    #[must_use]
    pub fn efficiency(&self) -> Option<f64> {
        let threads = u32::try_from(self.threads).ok().filter(|t| *t > 0)?;
        self.speedup()
            .map(|speedup| speedup / f64::from(threads) * 100.0)
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when graph generation or either solve fails.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::{BenchCommand, Cli, Command, run_cli};
///
/// let cli = Cli {
///     command: Command::Bench(BenchCommand {
///         nodes: 100,
///         edges: 1_000,
///         threads: Some(2),
///         seed: 42,
///         max_weight: 100,
///     }),
/// };
/// let report = run_cli(cli)?;
/// assert_eq!(report.mst_edges, report.target_edges);
/// # Ok::<(), kruskal_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<BenchmarkReport, CliError> {
    match cli.command {
        Command::Bench(bench) => {
            Span::current().record("command", field::display("bench"));
            run_bench(&bench)
        }
    }
}

#[instrument(
    name = "cli.bench",
    err,
    skip(command),
    fields(nodes = command.nodes, edges = command.edges, threads = field::Empty),
)]
pub(super) fn run_bench(command: &BenchCommand) -> Result<BenchmarkReport, CliError> {
    let threads = command
        .threads
        .unwrap_or_else(|| default_worker_count().get());
    Span::current().record("threads", threads);
    let solver = PartitionedSolver::new(threads)?;

    let graph = SyntheticGraph::generate(&command.graph_config())?;
    info!(edges = graph.edges().len(), "graph generated");

    let started = Instant::now();
    let serial_tree = solve_sequential(graph.edges(), graph.node_count())?;
    let serial = started.elapsed();
    info!(seconds = serial.as_secs_f64(), "serial benchmark completed");

    let started = Instant::now();
    let tree = solver.solve(graph.edges(), graph.node_count())?;
    let parallel = started.elapsed();
    info!(seconds = parallel.as_secs_f64(), "parallel benchmark completed");

    Ok(BenchmarkReport {
        nodes: graph.node_count(),
        edges: graph.edges().len(),
        threads,
        mst_edges: tree.len(),
        target_edges: graph.node_count().saturating_sub(1),
        total_cost: total_weight(&tree),
        serial_total_cost: total_weight(&serial_tree),
        serial,
        parallel,
    })
}

/// Renders `report` to `writer` as aligned `label: value` lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use kruskal_cli::cli::{BenchmarkReport, render_report};
///
/// let report = BenchmarkReport {
///     nodes: 4,
///     edges: 5,
///     threads: 2,
///     mst_edges: 3,
///     target_edges: 3,
///     total_cost: 6,
///     serial_total_cost: 6,
///     serial: Duration::from_millis(20),
///     parallel: Duration::from_millis(10),
/// };
/// let mut out = Vec::new();
/// render_report(&report, &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.contains("speedup         : 2.00x"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &BenchmarkReport, mut writer: impl Write) -> io::Result<()> {
    let mut line = |label: &str, value: String| writeln!(writer, "{label:<LABEL_WIDTH$}: {value}");

    line("nodes", report.nodes.to_string())?;
    line("edges", report.edges.to_string())?;
    line("threads", report.threads.to_string())?;
    line(
        "mst edges",
        format!("{} (target {})", report.mst_edges, report.target_edges),
    )?;
    line("total cost", report.total_cost.to_string())?;
    line("serial cost", report.serial_total_cost.to_string())?;
    line("serial time", format!("{:.4}s", report.serial.as_secs_f64()))?;
    line("parallel time", format!("{:.4}s", report.parallel.as_secs_f64()))?;
    line(
        "speedup",
        report
            .speedup()
            .map_or_else(|| "n/a".to_owned(), |s| format!("{s:.2}x")),
    )?;
    line(
        "efficiency",
        report
            .efficiency()
            .map_or_else(|| "n/a".to_owned(), |e| format!("{e:.1}%")),
    )
}
