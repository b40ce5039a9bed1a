#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod block;
pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod nlp;
pub mod relationship;

pub use block::{load_blocks, parse_blocks, Block, ExtractionStrategy, SourceType};
pub use config::{EdgeLabelPolicy, FilterConfig, PipelineConfig};
pub use error::{Error, Result};
pub use graph::{build_graph, EdgeRecord, GraphEdge, GraphExport, GraphNode, KnowledgeGraph};
pub use ingest::{
    normalize, BulletExtractor, EntityFilter, Extractor, GraphPipeline, PipelineOutput,
    PipelineStats, RelationshipExtractor, SentenceExtractor, StructuredExtractor, TopicRanker,
};
pub use nlp::{LanguageModel, RuleBasedModel};
pub use relationship::{Relationship, ASSOCIATED_WITH, COMBINED_WITH, DEPENDS_ON};
