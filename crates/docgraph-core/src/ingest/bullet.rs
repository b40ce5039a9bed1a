use regex::Regex;

use super::extractor::{candidate, Extractor};
use super::normalizer::EntityFilter;
use crate::block::{Block, ExtractionStrategy};
use crate::relationship::{Relationship, COMBINED_WITH};

const CONNECTOR_PATTERN: &str = r"(?i)\b(?:and|with)\b";

/// Slide bullets: `A and B` / `A with B` become `A combined with B`, one per line.
pub struct BulletExtractor {
    connector: Regex,
    filter: EntityFilter,
    min_fragment_chars: usize,
}

impl BulletExtractor {
    pub fn new(filter: EntityFilter, min_fragment_chars: usize) -> crate::Result<Self> {
        Ok(Self {
            connector: Regex::new(CONNECTOR_PATTERN)?,
            filter,
            min_fragment_chars,
        })
    }

    #[must_use]
    pub fn extract_from_bullets(&self, block: &Block) -> Vec<Relationship> {
        block
            .content
            .lines()
            .filter_map(|line| self.from_line(line, &block.source_file))
            .collect()
    }

    fn from_line(&self, line: &str, source_file: &str) -> Option<Relationship> {
        let mut fragments = self
            .connector
            .split(line)
            .map(str::trim)
            .filter(|f| f.chars().count() >= self.min_fragment_chars)
            .filter(|f| self.filter.accepts(f));

        let first = fragments.next()?;
        let second = fragments.next()?;
        candidate(first, COMBINED_WITH, second, source_file)
    }
}

impl Extractor for BulletExtractor {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::Bullet
    }

    fn extract(&self, block: &Block) -> Vec<Relationship> {
        self.extract_from_bullets(block)
    }
}
