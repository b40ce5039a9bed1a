mod bullet;
mod extractor;
mod normalizer;
mod pipeline;
mod sentence;
mod structured;
mod topics;

pub use bullet::BulletExtractor;
pub use extractor::{Extractor, RelationshipExtractor};
pub use normalizer::{normalize, EntityFilter};
pub use pipeline::{GraphPipeline, PipelineOutput, PipelineStats};
pub use sentence::SentenceExtractor;
pub use structured::StructuredExtractor;
pub use topics::TopicRanker;
