pub mod extract;
pub mod graph;
pub mod topics;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docgraph_core::{Block, PipelineConfig};

#[derive(Parser)]
#[command(
    name = "docgraph",
    about = "Knowledge graphs from project document blocks",
    version
)]
pub struct Cli {
    /// Pipeline configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print extracted relationships as JSON
    Extract {
        /// JSON array of blocks
        blocks: PathBuf,
    },
    /// Print the most frequent topics, one per line
    Topics {
        /// JSON array of blocks
        blocks: PathBuf,
        /// Number of topics (overrides the config)
        #[arg(short = 'n', long = "count")]
        count: Option<usize>,
    },
    /// Build the knowledge graph and write it as JSON
    Graph {
        /// JSON array of blocks
        blocks: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Extract blocks in parallel
        #[arg(long)]
        parallel: bool,
        /// Keep every distinct relation on an edge instead of only the last
        #[arg(long = "accumulate-labels")]
        accumulate_labels: bool,
    },
}

/// Config file (or defaults) with `DOCGRAPH_*` environment overrides applied.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    let config = match path {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    Ok(config.with_env_overrides())
}

pub fn load_blocks(path: &Path) -> Result<Vec<Block>> {
    docgraph_core::load_blocks(path)
        .with_context(|| format!("Failed to read blocks from {}", path.display()))
}
