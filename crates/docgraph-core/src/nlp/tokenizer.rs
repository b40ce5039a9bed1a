use regex::Regex;

const WORD_PATTERN: &str = r"[\p{L}\p{N}]+(?:['’\-_./&][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]";

/// Lower-cased words after which a period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "e.g", "i.e", "etc", "inc", "ltd", "co", "corp", "vs", "mr", "mrs", "ms", "dr", "st",
    "approx", "dept", "fig",
];

/// Splits text into sentences of word and punctuation tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            word: Regex::new(WORD_PATTERN)?,
        })
    }

    /// Line breaks and terminal punctuation both end a sentence.
    #[must_use]
    pub fn sentences<'t>(&self, text: &'t str) -> Vec<Vec<&'t str>> {
        let mut sentences = Vec::new();

        for line in text.lines() {
            let mut current: Vec<&str> = Vec::new();

            let tokens: Vec<&str> = self.word.find_iter(line).map(|m| m.as_str()).collect();

            for (i, &token) in tokens.iter().enumerate() {
                let abbreviated = token == "."
                    && current
                        .last()
                        .is_some_and(|prev| is_abbreviation(prev, tokens.get(i + 1).copied()));
                let ends_sentence = matches!(token, "." | "!" | "?") && !abbreviated;
                current.push(token);

                if ends_sentence {
                    sentences.push(std::mem::take(&mut current));
                }
            }

            if !current.is_empty() {
                sentences.push(current);
            }
        }

        sentences
    }
}

/// "No." only abbreviates "number" when a numeral follows it.
fn is_abbreviation(word: &str, next: Option<&str>) -> bool {
    let lower = word.to_lowercase();
    if lower == "no" {
        return next.is_some_and(|n| n.starts_with(|c: char| c.is_ascii_digit()));
    }
    ABBREVIATIONS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let tokenizer = Tokenizer::new().unwrap();
        let sentences = tokenizer.sentences("Alice owns billing. Bob runs ops! Why?");

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], vec!["Alice", "owns", "billing", "."]);
        assert_eq!(sentences[2], vec!["Why", "?"]);
    }

    #[test]
    fn test_splits_on_line_breaks() {
        let tokenizer = Tokenizer::new().unwrap();
        let sentences = tokenizer.sentences("Payments\nFraud Detection\n\n");

        assert_eq!(sentences, vec![vec!["Payments"], vec!["Fraud", "Detection"]]);
    }

    #[test]
    fn test_keeps_compound_words() {
        let tokenizer = Tokenizer::new().unwrap();
        let sentences = tokenizer.sentences("The CI/CD pipeline uses v2.1 of Alice's real-time API.");

        assert_eq!(
            sentences[0],
            vec!["The", "CI/CD", "pipeline", "uses", "v2.1", "of", "Alice's", "real-time", "API", "."]
        );
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let tokenizer = Tokenizer::new().unwrap();
        let sentences = tokenizer.sentences("Vendors, e.g. Acme Inc. supply parts.");

        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_no_ends_sentence_unless_numbered() {
        let tokenizer = Tokenizer::new().unwrap();

        let sentences = tokenizer.sentences("The answer is no. Bob owns billing.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1], vec!["Bob", "owns", "billing", "."]);

        assert_eq!(tokenizer.sentences("See item No. 4 for details.").len(), 1);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = Tokenizer::new().unwrap();
        assert!(tokenizer.sentences("").is_empty());
        assert!(tokenizer.sentences("   \n\t").is_empty());
    }
}
