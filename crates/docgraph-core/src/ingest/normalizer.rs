use std::collections::HashSet;

use crate::config::FilterConfig;

/// Canonical form of an entity: trimmed, inner whitespace collapsed, title-cased.
///
/// Title casing follows the usual word rule: a letter is upper-cased when the
/// character before it is not a letter, lower-cased otherwise, so
/// `"o'neil api"` becomes `"O'Neil Api"`.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
            prev_is_letter = false;
        }
        for c in word.chars() {
            if c.is_alphabetic() {
                if prev_is_letter {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
                prev_is_letter = true;
            } else {
                out.push(c);
                prev_is_letter = false;
            }
        }
    }

    out
}

/// Decides whether a normalized candidate is usable as a graph node.
#[derive(Debug, Clone)]
pub struct EntityFilter {
    noise_words: HashSet<String>,
    min_chars: usize,
    enforce: bool,
}

impl EntityFilter {
    #[must_use]
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            noise_words: config
                .noise_words
                .iter()
                .map(|w| w.trim().to_lowercase())
                .collect(),
            min_chars: config.min_entity_chars,
            enforce: config.enforce_metadata_filter,
        }
    }

    /// Too short, or a domain-generic word such as "overview".
    #[must_use]
    pub fn is_metadata(&self, text: &str) -> bool {
        let text = text.trim();
        text.chars().count() < self.min_chars || self.noise_words.contains(&text.to_lowercase())
    }

    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        if self.enforce {
            !self.is_metadata(text)
        } else {
            !text.trim().is_empty()
        }
    }

    #[must_use]
    pub const fn is_enforced(&self) -> bool {
        self.enforce
    }
}

impl Default for EntityFilter {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title_cases() {
        assert_eq!(normalize("fraud detection"), "Fraud Detection");
        assert_eq!(normalize("  API gateway  "), "Api Gateway");
        assert_eq!(normalize("o'neil"), "O'Neil");
        assert_eq!(normalize("v2api"), "V2Api");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("payments \t  team\n"), "Payments Team");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("the LEDGER service");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_is_metadata() {
        let filter = EntityFilter::default();

        assert!(filter.is_metadata("It"));
        assert!(filter.is_metadata("Overview"));
        assert!(filter.is_metadata("PROJECT"));
        assert!(!filter.is_metadata("Ledger"));
        assert!(!filter.is_metadata("API"));
    }

    #[test]
    fn test_lenient_filter_only_rejects_empty() {
        let filter = EntityFilter::new(&FilterConfig {
            enforce_metadata_filter: false,
            ..FilterConfig::default()
        });

        assert!(filter.accepts("Project"));
        assert!(filter.accepts("Go"));
        assert!(!filter.accepts("  "));
    }

    #[test]
    fn test_custom_noise_words() {
        let filter = EntityFilter::new(&FilterConfig {
            noise_words: vec!["Roadmap".into()],
            ..FilterConfig::default()
        });

        assert!(filter.is_metadata("roadmap"));
        assert!(!filter.is_metadata("Overview"));
    }
}
