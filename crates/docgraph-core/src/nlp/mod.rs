//! Sentence analysis: tokens, parts of speech, lemmas and dependency labels.
//!
//! Extractors only see the [`LanguageModel`] trait. The shipped model is
//! [`RuleBasedModel`], a deterministic lexicon-driven analyser for English
//! project prose.

mod dependency;
mod lexicon;
mod model;
mod tagger;
mod tokenizer;

use serde::{Deserialize, Serialize};

pub use lexicon::{Inflection, Lexicon, LexiconFile};
pub use model::RuleBasedModel;
pub use tokenizer::Tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adjective,
    Adverb,
    Determiner,
    Adposition,
    Pronoun,
    CoordConj,
    SubordConj,
    Particle,
    Numeral,
    Punctuation,
}

impl PartOfSpeech {
    #[must_use]
    pub const fn is_nominal(self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }

    /// Universal tag name (`NOUN`, `PROPN`, ...).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::ProperNoun => "PROPN",
            Self::Verb => "VERB",
            Self::Auxiliary => "AUX",
            Self::Adjective => "ADJ",
            Self::Adverb => "ADV",
            Self::Determiner => "DET",
            Self::Adposition => "ADP",
            Self::Pronoun => "PRON",
            Self::CoordConj => "CCONJ",
            Self::SubordConj => "SCONJ",
            Self::Particle => "PART",
            Self::Numeral => "NUM",
            Self::Punctuation => "PUNCT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyLabel {
    Root,
    Nsubj,
    NsubjPass,
    Dobj,
    Attr,
    Pobj,
    Prep,
    Compound,
    Amod,
    Det,
    Nummod,
    Cc,
    Conj,
    Aux,
    AuxPass,
    Xcomp,
    Ccomp,
    Mark,
    Advmod,
    Acomp,
    Neg,
    Punct,
    Dep,
}

impl DependencyLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "ROOT",
            Self::Nsubj => "nsubj",
            Self::NsubjPass => "nsubjpass",
            Self::Dobj => "dobj",
            Self::Attr => "attr",
            Self::Pobj => "pobj",
            Self::Prep => "prep",
            Self::Compound => "compound",
            Self::Amod => "amod",
            Self::Det => "det",
            Self::Nummod => "nummod",
            Self::Cc => "cc",
            Self::Conj => "conj",
            Self::Aux => "aux",
            Self::AuxPass => "auxpass",
            Self::Xcomp => "xcomp",
            Self::Ccomp => "ccomp",
            Self::Mark => "mark",
            Self::Advmod => "advmod",
            Self::Acomp => "acomp",
            Self::Neg => "neg",
            Self::Punct => "punct",
            Self::Dep => "dep",
        }
    }

    /// Grammatical subject, active or passive.
    #[must_use]
    pub const fn is_subject(self) -> bool {
        matches!(self, Self::Nsubj | Self::NsubjPass)
    }

    /// Direct object, attribute or prepositional object.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::Dobj | Self::Attr | Self::Pobj)
    }
}

impl std::fmt::Display for DependencyLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub dep: DependencyLabel,
    /// Index of the governing token within the sentence; the root points at itself
    pub head: usize,
}

impl Token {
    #[must_use]
    pub fn new(text: String, lemma: String, pos: PartOfSpeech) -> Self {
        Self {
            text,
            lemma,
            pos,
            dep: DependencyLabel::Dep,
            head: 0,
        }
    }

    #[must_use]
    pub const fn is_nominal(&self) -> bool {
        self.pos.is_nominal()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub root: Option<usize>,
}

impl Sentence {
    #[must_use]
    pub fn root_token(&self) -> Option<&Token> {
        self.root.and_then(|i| self.tokens.get(i))
    }

    pub fn subjects(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.dep.is_subject())
    }

    pub fn objects(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.dep.is_object())
    }

    pub fn nominals(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_nominal())
    }
}

/// A dependency-parse capable model, built once and shared read-only.
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;

    fn parse(&self, text: &str) -> Vec<Sentence>;
}
