use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use docgraph_core::{GraphPipeline, PipelineConfig};

pub fn run(config: &PipelineConfig, blocks_path: &Path, output: Option<&Path>) -> Result<()> {
    let blocks = super::load_blocks(blocks_path)?;
    let pipeline = GraphPipeline::new(config)?;

    let result = pipeline.run(&blocks);
    let export = result.graph.to_export(&result.topics);
    let json = serde_json::to_string_pretty(&export)?;

    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  Wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    let stats = &result.stats;
    eprintln!(
        "{} {} nodes, {} edges from {} relationships",
        style("●").green(),
        style(stats.nodes).bold(),
        style(stats.edges).bold(),
        stats.relationships
    );
    eprintln!(
        "  Blocks: {} processed, {} skipped ({} ms)",
        stats.blocks_processed, stats.blocks_skipped, stats.duration_ms
    );
    if !result.topics.is_empty() {
        eprintln!("  Topics: {}", result.topics.join(", "));
    }
    Ok(())
}
