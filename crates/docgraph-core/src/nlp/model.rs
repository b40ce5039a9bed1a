use std::path::Path;

use super::dependency;
use super::lexicon::{Lexicon, LexiconFile};
use super::tagger::Tagger;
use super::tokenizer::Tokenizer;
use super::{LanguageModel, Sentence};
use crate::config::PipelineConfig;

/// Lexicon-driven English model. Deterministic and cheap to share.
#[derive(Debug, Clone)]
pub struct RuleBasedModel {
    tokenizer: Tokenizer,
    lexicon: Lexicon,
}

impl RuleBasedModel {
    pub fn new() -> crate::Result<Self> {
        Self::with_lexicon(Lexicon::builtin())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> crate::Result<Self> {
        let tokenizer = Tokenizer::new()
            .map_err(|e| crate::Error::ParserUnavailable(format!("tokenizer: {e}")))?;
        Ok(Self { tokenizer, lexicon })
    }

    /// Built-in word lists extended with a TOML lexicon file.
    pub fn with_lexicon_file(path: &Path) -> crate::Result<Self> {
        let extra = LexiconFile::load(path)?;
        tracing::debug!(
            "Loaded lexicon {} ({} verbs, {} nouns, {} adjectives)",
            path.display(),
            extra.verbs.len(),
            extra.nouns.len(),
            extra.adjectives.len()
        );
        Self::with_lexicon(Lexicon::builtin().extended(extra))
    }

    pub fn from_config(config: &PipelineConfig) -> crate::Result<Self> {
        match &config.lexicon {
            Some(path) => Self::with_lexicon_file(path),
            None => Self::new(),
        }
    }
}

impl LanguageModel for RuleBasedModel {
    fn name(&self) -> &str {
        "rule-based-en"
    }

    fn parse(&self, text: &str) -> Vec<Sentence> {
        let tagger = Tagger::new(&self.lexicon);
        self.tokenizer
            .sentences(text)
            .into_iter()
            .map(|words| dependency::parse(tagger.tag(&words)))
            .collect()
    }
}
