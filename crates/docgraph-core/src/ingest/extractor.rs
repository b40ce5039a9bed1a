use rayon::prelude::*;

use super::bullet::BulletExtractor;
use super::sentence::SentenceExtractor;
use super::structured::StructuredExtractor;
use crate::block::{Block, ExtractionStrategy};
use crate::relationship::Relationship;

/// One extraction strategy: a block in, its relationships out.
///
/// Extraction never fails. A block that yields nothing usable produces an
/// empty sequence.
pub trait Extractor: Send + Sync {
    fn strategy(&self) -> ExtractionStrategy;

    fn extract(&self, block: &Block) -> Vec<Relationship>;
}

/// Builds a relationship, logging and dropping candidates that normalize to nothing.
pub(crate) fn candidate(
    subject: &str,
    relation: &str,
    object: &str,
    source_file: &str,
) -> Option<Relationship> {
    match Relationship::new(subject, relation, object, source_file) {
        Ok(rel) => Some(rel),
        Err(e) => {
            tracing::debug!("Skipping candidate from {}: {}", source_file, e);
            None
        }
    }
}

/// Routes each block to the strategy for its source type.
pub struct RelationshipExtractor {
    sentence: SentenceExtractor,
    bullet: BulletExtractor,
    structured: StructuredExtractor,
    parallel: bool,
}

impl RelationshipExtractor {
    #[must_use]
    pub fn new(
        sentence: SentenceExtractor,
        bullet: BulletExtractor,
        structured: StructuredExtractor,
    ) -> Self {
        Self {
            sentence,
            bullet,
            structured,
            parallel: false,
        }
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn extractor(&self, strategy: ExtractionStrategy) -> &dyn Extractor {
        match strategy {
            ExtractionStrategy::Sentence => &self.sentence,
            ExtractionStrategy::Bullet => &self.bullet,
            ExtractionStrategy::Structured => &self.structured,
        }
    }

    /// `None` when the block's source type has no strategy.
    #[must_use]
    pub fn extract_block(&self, block: &Block) -> Option<Vec<Relationship>> {
        let Some(strategy) = block.source_type.strategy() else {
            tracing::debug!(
                "Skipping {} block from {}",
                block.source_type,
                block.source_file
            );
            return None;
        };
        Some(self.extractor(strategy).extract(block))
    }

    /// Per-block results in input order, whether run sequentially or on the rayon pool.
    #[must_use]
    pub fn extract_blocks(&self, blocks: &[Block]) -> Vec<Option<Vec<Relationship>>> {
        if self.parallel {
            blocks.par_iter().map(|b| self.extract_block(b)).collect()
        } else {
            blocks.iter().map(|b| self.extract_block(b)).collect()
        }
    }

    #[must_use]
    pub fn extract_relationships(&self, blocks: &[Block]) -> Vec<Relationship> {
        self.extract_blocks(blocks)
            .into_iter()
            .flatten()
            .flatten()
            .collect()
    }
}
