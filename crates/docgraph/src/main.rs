use anyhow::Result;
use clap::Parser;

use docgraph::cli::{Cli, Commands};
use docgraph_core::EdgeLabelPolicy;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = docgraph::cli::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Extract { blocks } => docgraph::cli::extract::run(&config, &blocks),
        Commands::Topics { blocks, count } => docgraph::cli::topics::run(&config, &blocks, count),
        Commands::Graph {
            blocks,
            output,
            parallel,
            accumulate_labels,
        } => {
            config.parallel |= parallel;
            if accumulate_labels {
                config.edge_labels = EdgeLabelPolicy::Accumulate;
            }
            docgraph::cli::graph::run(&config, &blocks, output.as_deref())
        }
    }
}
