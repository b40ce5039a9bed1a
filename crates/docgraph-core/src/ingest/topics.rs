use std::collections::HashMap;
use std::sync::Arc;

use crate::block::Block;
use crate::nlp::LanguageModel;

/// Ranks the most frequent noun lemmas across every block.
pub struct TopicRanker {
    model: Arc<dyn LanguageModel>,
}

impl TopicRanker {
    #[must_use]
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Up to `n` lower-cased lemmas, most frequent first; ties keep the order
    /// in which the lemmas first appear.
    #[must_use]
    pub fn extract_project_topics(&self, blocks: &[Block], n: usize) -> Vec<String> {
        if n == 0 || blocks.is_empty() {
            return Vec::new();
        }

        let corpus = blocks
            .iter()
            .map(|b| b.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        for sentence in self.model.parse(&corpus) {
            for token in sentence.nominals() {
                let next = counts.len();
                counts.entry(token.lemma.to_lowercase()).or_insert((0, next)).0 += 1;
            }
        }

        let mut ranked: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(lemma, (count, first))| (lemma, count, first))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(n);

        tracing::debug!("Ranked {} topics", ranked.len());
        ranked.into_iter().map(|(lemma, _, _)| lemma).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::SourceType;
    use crate::nlp::RuleBasedModel;

    fn ranker() -> TopicRanker {
        TopicRanker::new(Arc::new(RuleBasedModel::new().unwrap()))
    }

    fn blocks() -> Vec<Block> {
        vec![
            Block::new("a.docx", SourceType::Docx, "Payments service handles payments."),
            Block::new(
                "b.pptx",
                SourceType::Pptx,
                "The payments team owns the ledger service.",
            ),
        ]
    }

    #[test]
    fn test_most_frequent_first() {
        assert_eq!(
            ranker().extract_project_topics(&blocks(), 3),
            vec!["payment", "service", "team"]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let topics = ranker().extract_project_topics(&blocks(), 10);
        assert_eq!(topics, vec!["payment", "service", "team", "ledger"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(ranker().extract_project_topics(&[], 5).is_empty());
        assert!(ranker().extract_project_topics(&blocks(), 0).is_empty());
    }

    #[test]
    fn test_unsupported_blocks_still_count() {
        let blocks = vec![Block::new(
            "notes.md",
            SourceType::Other("md".into()),
            "Invoices feed the ledger.",
        )];
        let topics = ranker().extract_project_topics(&blocks, 5);
        assert_eq!(topics, vec!["invoice", "ledger"]);
    }
}
