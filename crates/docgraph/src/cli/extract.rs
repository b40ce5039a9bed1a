use std::path::Path;

use anyhow::Result;
use console::style;
use docgraph_core::{GraphPipeline, PipelineConfig};

pub fn run(config: &PipelineConfig, blocks_path: &Path) -> Result<()> {
    let blocks = super::load_blocks(blocks_path)?;
    let pipeline = GraphPipeline::new(config)?;

    let relationships = pipeline.extract_relationships(&blocks);
    println!("{}", serde_json::to_string_pretty(&relationships)?);

    eprintln!(
        "{} {} relationships from {} blocks",
        style("●").green(),
        relationships.len(),
        blocks.len()
    );
    Ok(())
}
