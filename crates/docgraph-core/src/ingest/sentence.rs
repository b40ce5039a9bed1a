use std::sync::Arc;

use super::extractor::{candidate, Extractor};
use super::normalizer::EntityFilter;
use crate::block::{Block, ExtractionStrategy};
use crate::nlp::{LanguageModel, Sentence};
use crate::relationship::{Relationship, ASSOCIATED_WITH};

/// Free-text extraction over a dependency parse.
///
/// Every subject is paired with every object of its sentence, with the
/// root's lemma as the relation. A sentence without both roles falls back to
/// pairing its first two nouns as `associated with`.
pub struct SentenceExtractor {
    model: Arc<dyn LanguageModel>,
    filter: EntityFilter,
}

impl SentenceExtractor {
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>, filter: EntityFilter) -> Self {
        Self { model, filter }
    }

    #[must_use]
    pub fn extract_from_sentences(&self, block: &Block) -> Vec<Relationship> {
        self.model
            .parse(&block.content)
            .iter()
            .flat_map(|sentence| self.from_sentence(sentence, &block.source_file))
            .collect()
    }

    fn from_sentence(&self, sentence: &Sentence, source_file: &str) -> Vec<Relationship> {
        let subjects: Vec<&str> = sentence.subjects().map(|t| t.text.as_str()).collect();
        let objects: Vec<&str> = sentence.objects().map(|t| t.text.as_str()).collect();

        let root = sentence.root_token();
        if let Some(root) = root.filter(|_| !subjects.is_empty() && !objects.is_empty()) {
            return subjects
                .iter()
                .flat_map(|s| objects.iter().map(move |o| (*s, *o)))
                .filter(|(s, o)| self.filter.accepts(s) && self.filter.accepts(o))
                .filter_map(|(s, o)| candidate(s, &root.lemma, o, source_file))
                .collect();
        }

        let mut nouns = sentence
            .nominals()
            .map(|t| t.text.as_str())
            .filter(|text| self.filter.accepts(text));

        match (nouns.next(), nouns.next()) {
            (Some(first), Some(second)) => {
                candidate(first, ASSOCIATED_WITH, second, source_file)
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}

impl Extractor for SentenceExtractor {
    fn strategy(&self) -> ExtractionStrategy {
        ExtractionStrategy::Sentence
    }

    fn extract(&self, block: &Block) -> Vec<Relationship> {
        self.extract_from_sentences(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::SourceType;
    use crate::config::FilterConfig;
    use crate::nlp::RuleBasedModel;

    fn extractor() -> SentenceExtractor {
        SentenceExtractor::new(
            Arc::new(RuleBasedModel::new().unwrap()),
            EntityFilter::default(),
        )
    }

    fn triples(text: &str) -> Vec<(String, String, String)> {
        extractor()
            .extract_from_sentences(&Block::new("plan.docx", SourceType::Docx, text))
            .into_iter()
            .map(|r| (r.subject, r.relation, r.object))
            .collect()
    }

    fn triple(s: &str, r: &str, o: &str) -> (String, String, String) {
        (s.into(), r.into(), o.into())
    }

    #[test]
    fn test_subject_verb_object() {
        assert_eq!(
            triples("Alice manages the billing service."),
            vec![triple("Alice", "manage", "Service")]
        );
    }

    #[test]
    fn test_cross_product_of_conjoined_roles() {
        assert_eq!(
            triples("Alice and Bob manage the gateway and the ledger."),
            vec![
                triple("Alice", "manage", "Gateway"),
                triple("Alice", "manage", "Ledger"),
                triple("Bob", "manage", "Gateway"),
                triple("Bob", "manage", "Ledger"),
            ]
        );
    }

    #[test]
    fn test_copula_and_passive() {
        assert_eq!(
            triples("Auth is a microservice."),
            vec![triple("Auth", "be", "Microservice")]
        );
        assert_eq!(
            triples("The ledger is maintained by the finance team."),
            vec![triple("Ledger", "maintain", "Team")]
        );
    }

    #[test]
    fn test_modal_verbs_name_the_relation() {
        assert_eq!(
            triples("Customers can view their invoices."),
            vec![triple("Customers", "view", "Invoices")]
        );
        assert_eq!(
            triples("Analysts may export the reports."),
            vec![triple("Analysts", "export", "Reports")]
        );
    }

    #[test]
    fn test_time_phrase_does_not_replace_target() {
        assert_eq!(
            triples("The billing team migrated the ledger to PostgreSQL last year."),
            vec![
                triple("Team", "migrate", "Ledger"),
                triple("Team", "migrate", "Postgresql"),
            ]
        );
    }

    #[test]
    fn test_noun_fallback() {
        assert_eq!(
            triples("Database Server Cluster"),
            vec![triple("Database", "associated with", "Server")]
        );
    }

    #[test]
    fn test_single_noun_yields_nothing() {
        assert!(triples("Payments").is_empty());
        assert!(triples("").is_empty());
    }

    #[test]
    fn test_one_result_set_per_sentence() {
        let rels = triples("Alice owns billing. Database Server Cluster");
        assert_eq!(
            rels,
            vec![
                triple("Alice", "own", "Billing"),
                triple("Database", "associated with", "Server"),
            ]
        );
    }

    #[test]
    fn test_metadata_nouns_are_skipped_in_fallback() {
        assert_eq!(
            triples("Project Overview Payments Ledger"),
            vec![triple("Payments", "associated with", "Ledger")]
        );
    }

    #[test]
    fn test_metadata_pairs_are_dropped() {
        // "It" is a subject but too short to be a node
        assert!(triples("It uses the ledger.").is_empty());
    }

    #[test]
    fn test_lenient_filter_keeps_short_entities() {
        let extractor = SentenceExtractor::new(
            Arc::new(RuleBasedModel::new().unwrap()),
            EntityFilter::new(&FilterConfig {
                enforce_metadata_filter: false,
                ..FilterConfig::default()
            }),
        );
        let rels = extractor.extract_from_sentences(&Block::new(
            "plan.docx",
            SourceType::Docx,
            "It uses the ledger.",
        ));

        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].subject, "It");
        assert_eq!(rels[0].relation, "use");
    }

    #[test]
    fn test_relationships_carry_source_file() {
        let rels = extractor().extract_from_sentences(&Block::new(
            "roadmap.pdf",
            SourceType::Pdf,
            "Alice manages the ledger.",
        ));
        assert!(rels.iter().all(|r| r.source_file == "roadmap.pdf"));
    }
}
