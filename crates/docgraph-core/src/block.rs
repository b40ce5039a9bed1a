use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Extraction strategy a block is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// Free text: dependency parse with noun-pair fallback
    Sentence,
    /// Slide bullets split on connector words
    Bullet,
    /// Pipe-delimited labelled spreadsheet rows
    Structured,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceType {
    Docx,
    Pptx,
    Xlsx,
    Pdf,
    /// Any tag the ingestion side produced that has no strategy
    Other(String),
}

impl SourceType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Docx => "docx",
            Self::Pptx => "pptx",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
            Self::Other(tag) => tag,
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> Option<ExtractionStrategy> {
        match self {
            Self::Docx | Self::Pdf => Some(ExtractionStrategy::Sentence),
            Self::Pptx => Some(ExtractionStrategy::Bullet),
            Self::Xlsx => Some(ExtractionStrategy::Structured),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SourceType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "docx" => Self::Docx,
            "pptx" => Self::Pptx,
            "xlsx" => Self::Xlsx,
            "pdf" => Self::Pdf,
            _ => Self::Other(s),
        }
    }
}

impl From<SourceType> for String {
    fn from(source_type: SourceType) -> Self {
        match source_type {
            SourceType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

/// One unit of extracted text with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub source_file: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub section: String,
    #[serde(default, deserialize_with = "lenient_content")]
    pub content: String,
}

impl Block {
    #[must_use]
    pub fn new(
        source_file: impl Into<String>,
        source_type: SourceType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            source_type,
            section: String::new(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }
}

/// Missing, null or non-string content is read as empty text.
fn lenient_content<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Null => Ok(String::new()),
        other => {
            tracing::debug!("Treating non-string block content as empty: {}", other);
            Ok(String::new())
        }
    }
}

pub fn parse_blocks(json: &str) -> crate::Result<Vec<Block>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_blocks(path: &Path) -> crate::Result<Vec<Block>> {
    let json = std::fs::read_to_string(path)?;
    let blocks = parse_blocks(&json)?;
    tracing::debug!("Loaded {} blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_strategy() {
        assert_eq!(SourceType::Docx.strategy(), Some(ExtractionStrategy::Sentence));
        assert_eq!(SourceType::Pdf.strategy(), Some(ExtractionStrategy::Sentence));
        assert_eq!(SourceType::Pptx.strategy(), Some(ExtractionStrategy::Bullet));
        assert_eq!(SourceType::Xlsx.strategy(), Some(ExtractionStrategy::Structured));
        assert_eq!(SourceType::Other("csv".into()).strategy(), None);
    }

    #[test]
    fn test_unknown_source_type_preserved() {
        let parsed: SourceType = "md".parse().unwrap();
        assert_eq!(parsed, SourceType::Other("md".into()));
        assert_eq!(parsed.to_string(), "md");
    }

    #[test]
    fn test_parse_blocks() {
        let json = r#"[
            {"source_file": "plan.docx", "source_type": "docx", "section": "Paragraph 1", "content": "Alice owns billing."},
            {"source_file": "deck.pptx", "source_type": "pptx", "section": "Slide 2", "content": "Payments and Fraud Detection"}
        ]"#;

        let blocks = parse_blocks(json).unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].source_type, SourceType::Docx);
        assert_eq!(blocks[1].section, "Slide 2");
    }

    #[test]
    fn test_malformed_content_becomes_empty() {
        let json = r#"[
            {"source_file": "a.docx", "source_type": "docx", "section": "P1"},
            {"source_file": "b.docx", "source_type": "docx", "section": "P2", "content": null},
            {"source_file": "c.xlsx", "source_type": "xlsx", "section": "R1", "content": 42}
        ]"#;

        let blocks = parse_blocks(json).unwrap();

        assert!(blocks.iter().all(|b| b.content.is_empty()));
    }

    #[test]
    fn test_block_serialization_keeps_tag() {
        let block = Block::new("notes.md", SourceType::Other("md".into()), "text")
            .with_section("Line 1");
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains(r#""source_type":"md""#));

        let parsed: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, block);
    }

    #[test]
    fn test_load_blocks_missing_file() {
        let result = load_blocks(Path::new("/nonexistent/blocks.json"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
