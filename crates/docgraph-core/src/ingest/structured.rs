use regex::Regex;

use super::extractor::{candidate, Extractor};
use super::normalizer::EntityFilter;
use crate::block::{Block, ExtractionStrategy};
use crate::relationship::{Relationship, DEPENDS_ON};

const SERVICE_PATTERN: &str = r"Service:\s*(.+?)\s*\|";
const DEPENDENCY_PATTERN: &str = r"Dependency:\s*(.+)";

/// Spreadsheet rows serialised as `Service: X | ... | Dependency: Y`.
pub struct StructuredExtractor {
    service: Regex,
    dependency: Regex,
    filter: EntityFilter,
}

impl StructuredExtractor {
    pub fn new(filter: EntityFilter) -> crate::Result<Self> {
        Ok(Self {
            service: Regex::new(SERVICE_PATTERN)?,
            dependency: Regex::new(DEPENDENCY_PATTERN)?,
            filter,
        })
    }

    /// At most one relationship per block, and only when both labels are present.
    #[must_use]
    pub fn extract_from_xlsx(&self, block: &Block) -> Vec<Relationship> {
        self.from_row(&block.content, &block.source_file)
            .into_iter()
            .collect()
    }

    fn from_row(&self, content: &str, source_file: &str) -> Option<Relationship> {
        let service = self.service.captures(content)?.get(1)?.as_str();
        let dependency = self.dependency.captures(content)?.get(1)?.as_str().trim();

        if !self.filter.accepts(service) || !self.filter.accepts(dependency) {
            tracing::debug!(
                "Dropping row from {}: {} -> {}",
                source_file,
                service,
                dependency
            );
            return None;
        }
        candidate(service, DEPENDS_ON, dependency, source_file)
    }
}

impl Extractor for StructuredExtractor {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::Structured
    }

    fn extract(&self, block: &Block) -> Vec<Relationship> {
        self.extract_from_xlsx(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::SourceType;
    use crate::config::FilterConfig;

    fn extract(content: &str) -> Vec<Relationship> {
        StructuredExtractor::new(EntityFilter::default())
            .unwrap()
            .extract_from_xlsx(&Block::new("svc.xlsx", SourceType::Xlsx, content))
    }

    #[test]
    fn test_service_dependency_row() {
        let rels = extract("Service: Auth | Region: US | Dependency: Database");

        assert_eq!(
            rels,
            vec![Relationship::new("Auth", DEPENDS_ON, "Database", "svc.xlsx").unwrap()]
        );
    }

    #[test]
    fn test_missing_dependency_yields_nothing() {
        assert!(extract("Service: Auth | Region: US").is_empty());
    }

    #[test]
    fn test_missing_service_yields_nothing() {
        assert!(extract("Region: US | Dependency: Database").is_empty());
        assert!(extract("Service: Auth Dependency: Database").is_empty());
    }

    #[test]
    fn test_captures_are_normalized() {
        let rels = extract("Service:   billing   api | Dependency: payment  gateway  ");

        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].subject, "Billing Api");
        assert_eq!(rels[0].object, "Payment Gateway");
    }

    #[test]
    fn test_dependency_stops_at_line_end() {
        let rels = extract("Service: Auth | Dependency: Database\nOwner: Platform");
        assert_eq!(rels[0].object, "Database");
    }

    #[test]
    fn test_metadata_capture_drops_row() {
        assert!(extract("Service: Auth | Dependency: DB").is_empty());
        assert!(extract("Service: Project | Dependency: Database").is_empty());
    }

    #[test]
    fn test_lenient_filter_keeps_short_captures() {
        let extractor = StructuredExtractor::new(EntityFilter::new(&FilterConfig {
            enforce_metadata_filter: false,
            ..FilterConfig::default()
        }))
        .unwrap();
        let rels = extractor.extract_from_xlsx(&Block::new(
            "svc.xlsx",
            SourceType::Xlsx,
            "Service: Auth | Dependency: DB",
        ));

        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].object, "Db");
    }
}
