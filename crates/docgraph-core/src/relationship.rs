use serde::{Deserialize, Serialize};

use crate::ingest::normalize;

pub const ASSOCIATED_WITH: &str = "associated with";
pub const COMBINED_WITH: &str = "combined with";
pub const DEPENDS_ON: &str = "depends on";

/// A (subject, relation, object) fact and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub subject: String,
    pub relation: String,
    pub object: String,
    pub source_file: String,
}

impl Relationship {
    /// Normalizes both entities; either one ending up empty is rejected.
    pub fn new(
        subject: &str,
        relation: impl Into<String>,
        object: &str,
        source_file: impl Into<String>,
    ) -> crate::Result<Self> {
        let subject = normalize(subject);
        if subject.is_empty() {
            return Err(crate::Error::EmptyEntity("subject"));
        }

        let object = normalize(object);
        if object.is_empty() {
            return Err(crate::Error::EmptyEntity("object"));
        }

        Ok(Self {
            subject,
            relation: relation.into(),
            object,
            source_file: source_file.into(),
        })
    }
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -[{}]-> {} ({})",
            self.subject, self.relation, self.object, self.source_file
        )
    }
}
