use std::sync::Arc;

use serde::Serialize;

use super::bullet::BulletExtractor;
use super::extractor::RelationshipExtractor;
use super::normalizer::EntityFilter;
use super::sentence::SentenceExtractor;
use super::structured::StructuredExtractor;
use super::topics::TopicRanker;
use crate::block::Block;
use crate::config::{EdgeLabelPolicy, PipelineConfig};
use crate::graph::KnowledgeGraph;
use crate::nlp::{LanguageModel, RuleBasedModel};
use crate::relationship::Relationship;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub blocks_processed: usize,
    pub blocks_skipped: usize,
    pub relationships: usize,
    pub nodes: usize,
    pub edges: usize,
    pub duration_ms: u64,
}

pub struct PipelineOutput {
    pub relationships: Vec<Relationship>,
    pub graph: KnowledgeGraph,
    pub topics: Vec<String>,
    pub stats: PipelineStats,
}

/// Blocks in, relationships, topics and the assembled graph out.
pub struct GraphPipeline {
    extractor: RelationshipExtractor,
    ranker: TopicRanker,
    topic_count: usize,
    edge_labels: EdgeLabelPolicy,
}

impl GraphPipeline {
    /// Builds the language model named by the config and wires every stage to it.
    pub fn new(config: &PipelineConfig) -> crate::Result<Self> {
        config.validate()?;
        let model = Arc::new(RuleBasedModel::from_config(config)?);
        Self::with_model(config, model)
    }

    pub fn with_model(
        config: &PipelineConfig,
        model: Arc<dyn LanguageModel>,
    ) -> crate::Result<Self> {
        let filter = EntityFilter::new(&config.filter);
        tracing::debug!(
            "Using language model {} (metadata filter {})",
            model.name(),
            if filter.is_enforced() { "on" } else { "off" }
        );

        let extractor = RelationshipExtractor::new(
            SentenceExtractor::new(Arc::clone(&model), filter.clone()),
            BulletExtractor::new(filter.clone(), config.filter.min_fragment_chars)?,
            StructuredExtractor::new(filter)?,
        )
        .with_parallel(config.parallel);

        Ok(Self {
            extractor,
            ranker: TopicRanker::new(model),
            topic_count: config.topic_count,
            edge_labels: config.edge_labels,
        })
    }

    #[must_use]
    pub fn extract_relationships(&self, blocks: &[Block]) -> Vec<Relationship> {
        self.extractor.extract_relationships(blocks)
    }

    #[must_use]
    pub fn extract_project_topics(&self, blocks: &[Block]) -> Vec<String> {
        self.ranker.extract_project_topics(blocks, self.topic_count)
    }

    #[must_use]
    pub fn run(&self, blocks: &[Block]) -> PipelineOutput {
        let start = std::time::Instant::now();

        let per_block = self.extractor.extract_blocks(blocks);
        let blocks_skipped = per_block.iter().filter(|r| r.is_none()).count();
        let relationships: Vec<Relationship> = per_block.into_iter().flatten().flatten().collect();

        let topics = self.extract_project_topics(blocks);
        let mut graph = KnowledgeGraph::build(&relationships, self.edge_labels);
        graph.assign_topics(&topics);

        let stats = PipelineStats {
            blocks_processed: blocks.len() - blocks_skipped,
            blocks_skipped,
            relationships: relationships.len(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        tracing::info!(
            "Extracted {} relationships from {} blocks ({} skipped): {} nodes, {} edges",
            stats.relationships,
            stats.blocks_processed,
            stats.blocks_skipped,
            stats.nodes,
            stats.edges
        );

        PipelineOutput {
            relationships,
            graph,
            topics,
            stats,
        }
    }
}
