use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How repeated relations between the same ordered pair are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLabelPolicy {
    /// The last relation processed for a pair replaces earlier ones
    #[default]
    LastWriteWins,
    /// The last relation is the label; every distinct relation is kept alongside
    Accumulate,
}

/// Entity noise filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Generic words that never make a useful node (compared case-insensitively)
    pub noise_words: Vec<String>,
    /// Entities shorter than this many characters are noise
    pub min_entity_chars: usize,
    /// Bullet fragments shorter than this many characters are dropped
    pub min_fragment_chars: usize,
    /// Apply the noise check at every extraction path
    /// When false only empty entities are rejected
    pub enforce_metadata_filter: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            noise_words: ["project", "name", "overview", "introduction", "architecture"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            min_entity_chars: 3,
            min_fragment_chars: 4,
            enforce_metadata_filter: true,
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Number of topics ranked per run
    pub topic_count: usize,
    /// Extract blocks on the rayon thread pool
    pub parallel: bool,
    pub edge_labels: EdgeLabelPolicy,
    /// Extra lexicon (TOML) merged into the built-in language model lexicon
    pub lexicon: Option<PathBuf>,
    pub filter: FilterConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            topic_count: 5,
            parallel: false,
            edge_labels: EdgeLabelPolicy::LastWriteWins,
            lexicon: None,
            filter: FilterConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        tracing::debug!("Loaded pipeline config from {}", path.display());
        Ok(config)
    }

    /// Applies `DOCGRAPH_*` environment overrides on top of this config.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = std::env::var("DOCGRAPH_PARALLEL") {
            self.parallel = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Some(n) = std::env::var("DOCGRAPH_TOPIC_COUNT")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.topic_count = n;
        }
        if let Ok(path) = std::env::var("DOCGRAPH_LEXICON") {
            if !path.is_empty() {
                self.lexicon = Some(PathBuf::from(path));
            }
        }
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.topic_count == 0 {
            return Err(crate::Error::InvalidConfig(
                "topic_count must be at least 1".into(),
            ));
        }
        if self.filter.min_fragment_chars == 0 {
            return Err(crate::Error::InvalidConfig(
                "min_fragment_chars must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
