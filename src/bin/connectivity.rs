use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graph_connectivity::{
    loader,
    logging::{self, LogTarget},
    report, Connectivity,
};

/// Finds articulation points, bridges, biconnected and connected components
/// of an undirected graph stored as a binary adjacency matrix.
#[derive(Debug, Parser)]
#[command(name = "connectivity", version, about, long_about = None)]
struct Cli {
    /// Input file: little-endian i16 size N, then N×N i16 matrix cells.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the report.
    #[arg(short, long, value_name = "FILE", default_value = "output.txt")]
    output: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    let _logger = logging::init_logger(level, LogTarget::Stderr)?;

    let graph = loader::read_graph(&cli.input).context("failed to load graph")?;
    let connectivity = Connectivity::analyze(&graph);
    report::write_report(&cli.output, &connectivity).context("failed to write report")?;

    println!("Analysis complete. Results written to {}", cli.output.display());
    Ok(())
}
