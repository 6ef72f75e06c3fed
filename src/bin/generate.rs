use std::path::PathBuf;

use anyhow::{ensure, Context};
use clap::Parser;
use graph_connectivity::{
    generate, loader,
    logging::{self, LogTarget},
};
use rand::{Rng, SeedableRng};

/// Writes a random undirected graph in the binary adjacency-matrix format.
#[derive(Debug, Parser)]
#[command(name = "generate", version, about, long_about = None)]
struct Cli {
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Number of vertices (at most 32767).
    #[arg(short)]
    n: usize,

    /// Probability of each possible edge.
    #[arg(short, default_value_t = 0.1)]
    p: f64,

    /// Split the vertices into this many clusters chained by single edges.
    #[arg(short, long)]
    clusters: Option<usize>,

    /// Seed for the random generator; random if absent.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init_logger("info", LogTarget::Stderr)?;
    ensure!((0.0..=1.0).contains(&cli.p), "p must be in [0, 1]");

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("seed = {seed}");
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let graph = match cli.clusters {
        Some(k) => generate::clustered_graph(cli.n, k, cli.p, &mut rng),
        None => generate::random_graph(cli.n, cli.p, &mut rng),
    }?;
    loader::write_graph(&cli.output, &graph)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    log::info!(
        "wrote {} vertices and {} edges to {}",
        graph.vertex_count(),
        graph.edge_count(),
        cli.output.display()
    );
    Ok(())
}
