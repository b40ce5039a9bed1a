use std::path::Path;

use anyhow::Result;
use console::style;
use docgraph_core::{GraphPipeline, PipelineConfig};

pub fn run(config: &PipelineConfig, blocks_path: &Path, count: Option<usize>) -> Result<()> {
    let blocks = super::load_blocks(blocks_path)?;

    let mut config = config.clone();
    if let Some(n) = count {
        config.topic_count = n;
    }
    let pipeline = GraphPipeline::new(&config)?;

    let topics = pipeline.extract_project_topics(&blocks);
    if topics.is_empty() {
        eprintln!("{} No topics found", style("○").dim());
    }
    for topic in topics {
        println!("{topic}");
    }
    Ok(())
}
