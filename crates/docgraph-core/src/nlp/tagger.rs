use super::lexicon::{self, Inflection, Lexicon};
use super::{PartOfSpeech, Token};

/// Context-free reading of a word, resolved against its neighbours later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    Fixed(PartOfSpeech),
    /// Listed noun that the lexicon also knows as a bare verb
    NounOrVerb,
    KnownVerb(Inflection),
    /// Unknown word ending in `-ed`
    Participle,
    /// Unknown word ending in `-ing`
    Gerund,
    Open,
}

pub(super) struct Tagger<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Tagger<'a> {
    pub(super) const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub(super) fn tag(&self, words: &[&str]) -> Vec<Token> {
        let first_word = words.iter().position(|w| starts_alphanumeric(w));
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let readings: Vec<Reading> = words
            .iter()
            .zip(&lower)
            .enumerate()
            .map(|(i, (word, low))| self.reading(word, low, Some(i) == first_word))
            .collect();

        let mut tags = resolve(&readings, &lower, first_word);
        promote_missing_verb(&mut tags, &lower);

        words
            .iter()
            .zip(&lower)
            .zip(tags)
            .map(|((word, low), pos)| Token::new((*word).to_string(), self.lemma(word, low, pos), pos))
            .collect()
    }

    fn reading(&self, word: &str, lower: &str, sentence_initial: bool) -> Reading {
        if !starts_alphanumeric(word) {
            return Reading::Fixed(PartOfSpeech::Punctuation);
        }
        if word.starts_with(|c: char| c.is_ascii_digit()) {
            return Reading::Fixed(PartOfSpeech::Numeral);
        }
        if is_acronym(word) {
            return Reading::Fixed(PartOfSpeech::ProperNoun);
        }
        if let Some(pos) = lexicon::closed_class(lower) {
            return Reading::Fixed(pos);
        }
        if !sentence_initial && word.starts_with(char::is_uppercase) {
            return Reading::Fixed(PartOfSpeech::ProperNoun);
        }
        if self.lexicon.is_noun(lower) {
            return match self.lexicon.analyze_verb(lower) {
                Some((_, Inflection::Base)) => Reading::NounOrVerb,
                _ => Reading::Fixed(PartOfSpeech::Noun),
            };
        }
        if self.lexicon.is_adjective(lower) {
            return Reading::Fixed(PartOfSpeech::Adjective);
        }
        if let Some((_, inflection)) = self.lexicon.analyze_verb(lower) {
            return Reading::KnownVerb(inflection);
        }
        if lexicon::has_adverb_suffix(lower) {
            return Reading::Fixed(PartOfSpeech::Adverb);
        }
        if lexicon::has_adjective_suffix(lower) {
            return Reading::Fixed(PartOfSpeech::Adjective);
        }
        if lower.chars().count() > 4 && lower.ends_with("ed") {
            return Reading::Participle;
        }
        if lower.chars().count() > 5 && lower.ends_with("ing") {
            return Reading::Gerund;
        }
        Reading::Open
    }

    fn lemma(&self, word: &str, lower: &str, pos: PartOfSpeech) -> String {
        match pos {
            PartOfSpeech::Verb | PartOfSpeech::Auxiliary => self.lexicon.verb_lemma(lower),
            PartOfSpeech::Noun => lexicon::noun_lemma(lower),
            PartOfSpeech::ProperNoun => word.to_string(),
            _ => lower.to_string(),
        }
    }
}

fn starts_alphanumeric(word: &str) -> bool {
    word.starts_with(char::is_alphanumeric)
}

fn is_acronym(word: &str) -> bool {
    let letters = word.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2 && word.chars().all(|c| !c.is_lowercase())
}

fn resolve(readings: &[Reading], lower: &[String], first_word: Option<usize>) -> Vec<PartOfSpeech> {
    let mut tags: Vec<PartOfSpeech> = Vec::with_capacity(readings.len());
    let mut clause_has_verb = false;

    for (i, reading) in readings.iter().enumerate() {
        let prev_content = previous_content(&tags, lower);
        let prev = prev_content.map(|(tag, _)| tag);
        let after_modal = matches!(
            prev_content,
            Some((PartOfSpeech::Auxiliary, word)) if lexicon::is_modal(word)
        );
        let next = readings.get(i + 1).copied();
        let opens_object = matches!(
            next,
            Some(Reading::Fixed(
                PartOfSpeech::Determiner | PartOfSpeech::Pronoun | PartOfSpeech::Numeral
            ))
        );

        let pos = match *reading {
            Reading::Fixed(PartOfSpeech::Adposition) if lower[i] == "to" => {
                if matches!(next, Some(Reading::KnownVerb(Inflection::Base))) {
                    PartOfSpeech::Particle
                } else {
                    PartOfSpeech::Adposition
                }
            }
            Reading::Fixed(PartOfSpeech::SubordConj)
                if lower[i] == "that" && Some(i) == first_word =>
            {
                PartOfSpeech::Determiner
            }
            Reading::Fixed(pos) => pos,
            Reading::KnownVerb(inflection) => {
                resolve_verb(inflection, prev, opens_object, clause_has_verb)
            }
            Reading::Participle => match prev {
                Some(PartOfSpeech::Auxiliary) => PartOfSpeech::Verb,
                Some(PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Pronoun)
                    if !clause_has_verb =>
                {
                    PartOfSpeech::Verb
                }
                _ => PartOfSpeech::Adjective,
            },
            Reading::Gerund => {
                if prev == Some(PartOfSpeech::Auxiliary) {
                    PartOfSpeech::Verb
                } else {
                    PartOfSpeech::Noun
                }
            }
            Reading::NounOrVerb | Reading::Open if after_modal => PartOfSpeech::Verb,
            Reading::NounOrVerb | Reading::Open => PartOfSpeech::Noun,
        };

        match pos {
            PartOfSpeech::Verb | PartOfSpeech::Auxiliary => clause_has_verb = true,
            PartOfSpeech::SubordConj => clause_has_verb = false,
            PartOfSpeech::Punctuation if matches!(lower[i].as_str(), ";" | ":" | "|") => {
                clause_has_verb = false;
            }
            _ => {}
        }
        tags.push(pos);
    }

    tags
}

/// Previous tag and its word, looking through adverbs and negation.
fn previous_content<'w>(
    tags: &[PartOfSpeech],
    lower: &'w [String],
) -> Option<(PartOfSpeech, &'w str)> {
    tags.iter()
        .zip(&lower[..tags.len()])
        .rev()
        .find(|(tag, word)| {
            !(**tag == PartOfSpeech::Adverb
                || (**tag == PartOfSpeech::Particle && matches!(word.as_str(), "not" | "n't")))
        })
        .map(|(tag, word)| (*tag, word.as_str()))
}

fn resolve_verb(
    inflection: Inflection,
    prev: Option<PartOfSpeech>,
    opens_object: bool,
    clause_has_verb: bool,
) -> PartOfSpeech {
    let nominal_reading = if inflection == Inflection::Past {
        PartOfSpeech::Adjective
    } else {
        PartOfSpeech::Noun
    };

    match prev {
        Some(PartOfSpeech::Auxiliary | PartOfSpeech::Particle) => PartOfSpeech::Verb,
        Some(PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Pronoun) => {
            if clause_has_verb || inflection == Inflection::Gerund {
                PartOfSpeech::Noun
            } else {
                PartOfSpeech::Verb
            }
        }
        Some(PartOfSpeech::CoordConj) => {
            if clause_has_verb && opens_object && inflection != Inflection::Gerund {
                PartOfSpeech::Verb
            } else {
                nominal_reading
            }
        }
        Some(PartOfSpeech::SubordConj) => {
            if inflection == Inflection::Gerund {
                PartOfSpeech::Noun
            } else {
                PartOfSpeech::Verb
            }
        }
        None | Some(PartOfSpeech::Punctuation) => match inflection {
            Inflection::Base if opens_object => PartOfSpeech::Verb,
            _ => nominal_reading,
        },
        Some(_) => nominal_reading,
    }
}

/// A verbless sentence may still carry an unknown inflected verb between a
/// nominal and a determiner ("Alice audits the books").
fn promote_missing_verb(tags: &mut [PartOfSpeech], lower: &[String]) {
    if tags
        .iter()
        .any(|t| matches!(t, PartOfSpeech::Verb | PartOfSpeech::Auxiliary))
    {
        return;
    }

    for i in 1..tags.len().saturating_sub(1) {
        let word = lower[i].as_str();
        let inflected = (word.ends_with('s') && !word.ends_with("ss")) || word.ends_with("ed");
        if tags[i] == PartOfSpeech::Noun
            && inflected
            && word.chars().count() > 3
            && matches!(
                tags[i - 1],
                PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Pronoun
            )
            && matches!(
                tags[i + 1],
                PartOfSpeech::Determiner | PartOfSpeech::Pronoun | PartOfSpeech::Numeral
            )
        {
            tags[i] = PartOfSpeech::Verb;
            return;
        }
    }
}
