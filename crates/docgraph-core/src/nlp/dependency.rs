//! Shallow dependency labelling over tagged tokens.
//!
//! Noun chunks are found first; each chunk head then takes a grammatical
//! role from the clause it sits in. Conjoined nominals share the role of
//! their first conjunct, so `Alice and Bob` are both subjects.

use super::lexicon::is_participle;
use super::{DependencyLabel, PartOfSpeech, Sentence, Token};

#[derive(Debug, Clone, Copy)]
struct Chunk {
    start: usize,
    head: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ClauseKind {
    #[default]
    Open,
    Main,
    Copula,
}

#[derive(Debug, Default)]
struct Clause {
    kind: ClauseKind,
    verb: Option<usize>,
    subjects: Vec<usize>,
    /// Auxiliaries and particles waiting for their verb
    deferred: Vec<usize>,
    has_object: bool,
}

struct ClauseParser {
    tokens: Vec<Token>,
    heads: Vec<Option<usize>>,
    root: Option<usize>,
    clause: Clause,
    pending_prep: Option<usize>,
    pending_conj: bool,
    last_role: Option<(DependencyLabel, Option<usize>)>,
}

pub(super) fn parse(tokens: Vec<Token>) -> Sentence {
    if tokens.is_empty() {
        return Sentence::default();
    }

    let chunks = noun_chunks(&tokens);
    let fallback_root = chunks.first().map_or(0, |c| c.head);

    let mut parser = ClauseParser {
        heads: vec![None; tokens.len()],
        tokens,
        root: None,
        clause: Clause::default(),
        pending_prep: None,
        pending_conj: false,
        last_role: None,
    };

    let mut chunks = chunks.into_iter().peekable();
    let mut i = 0;
    while i < parser.tokens.len() {
        if let Some(chunk) = chunks.next_if(|c| c.start == i) {
            parser.chunk(chunk);
            i = chunk.head + 1;
        } else {
            parser.token(i);
            i += 1;
        }
    }
    parser.close_clause();
    parser.finish(fallback_root)
}

const fn is_chunk_pos(pos: PartOfSpeech) -> bool {
    matches!(
        pos,
        PartOfSpeech::Determiner
            | PartOfSpeech::Adjective
            | PartOfSpeech::Numeral
            | PartOfSpeech::Noun
            | PartOfSpeech::ProperNoun
    )
}

/// Runs of determiners, modifiers and nominals, headed by their last nominal.
fn noun_chunks(tokens: &[Token]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let pos = tokens[i].pos;
        if pos == PartOfSpeech::Pronoun {
            chunks.push(Chunk { start: i, head: i });
            i += 1;
            continue;
        }
        if !is_chunk_pos(pos) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i;
        let mut seen_nominal = false;
        while end < tokens.len() && is_chunk_pos(tokens[end].pos) {
            // "gave the team the budget" and "to PostgreSQL last year" hold two chunks
            if seen_nominal
                && matches!(
                    tokens[end].pos,
                    PartOfSpeech::Determiner | PartOfSpeech::Adjective
                )
            {
                break;
            }
            seen_nominal |= tokens[end].is_nominal();
            end += 1;
        }

        if let Some(head) = (start..end).rev().find(|&j| tokens[j].is_nominal()) {
            chunks.push(Chunk { start, head });
            i = head + 1;
        } else {
            i = end;
        }
    }

    chunks
}

impl ClauseParser {
    fn attach(&mut self, i: usize, dep: DependencyLabel, head: Option<usize>) {
        self.tokens[i].dep = dep;
        self.heads[i] = head;
    }

    fn chunk(&mut self, chunk: Chunk) {
        for j in chunk.start..chunk.head {
            let dep = match self.tokens[j].pos {
                PartOfSpeech::Determiner => DependencyLabel::Det,
                PartOfSpeech::Adjective => DependencyLabel::Amod,
                PartOfSpeech::Numeral => DependencyLabel::Nummod,
                _ => DependencyLabel::Compound,
            };
            self.attach(j, dep, Some(chunk.head));
        }
        self.nominal(chunk.head);
    }

    fn nominal(&mut self, i: usize) {
        let conj = std::mem::take(&mut self.pending_conj);

        if let Some(prep) = self.pending_prep.take() {
            self.attach(i, DependencyLabel::Pobj, Some(prep));
            self.last_role = Some((DependencyLabel::Pobj, Some(prep)));
            return;
        }

        if conj {
            if let Some((role, governor)) = self.last_role {
                self.attach(i, role, governor);
                if role.is_subject() {
                    self.clause.subjects.push(i);
                }
                return;
            }
        }

        if self.clause.kind == ClauseKind::Open {
            if self.clause.subjects.is_empty() {
                self.attach(i, DependencyLabel::Nsubj, None);
                self.clause.subjects.push(i);
                self.last_role = Some((DependencyLabel::Nsubj, None));
            } else {
                self.attach(i, DependencyLabel::Dep, None);
            }
            return;
        }

        let verb = self.clause.verb;
        if self.clause.has_object {
            self.attach(i, DependencyLabel::Dep, verb);
        } else {
            let dep = if self.clause.kind == ClauseKind::Copula {
                DependencyLabel::Attr
            } else {
                DependencyLabel::Dobj
            };
            self.attach(i, dep, verb);
            self.clause.has_object = true;
            self.last_role = Some((dep, verb));
        }
    }

    fn token(&mut self, i: usize) {
        let verb = self.clause.verb;

        match self.tokens[i].pos {
            PartOfSpeech::Auxiliary => self.auxiliary(i),
            PartOfSpeech::Verb => self.head_clause(i, ClauseKind::Main),
            PartOfSpeech::Adposition => {
                self.attach(i, DependencyLabel::Prep, verb);
                self.pending_prep = Some(i);
                self.pending_conj = false;
            }
            PartOfSpeech::CoordConj => {
                self.attach(i, DependencyLabel::Cc, None);
                self.pending_conj = self.last_role.is_some();
            }
            PartOfSpeech::SubordConj => {
                self.attach(i, DependencyLabel::Mark, None);
                self.close_clause();
            }
            PartOfSpeech::Particle => {
                let dep = if matches!(self.tokens[i].lemma.as_str(), "not" | "n't") {
                    DependencyLabel::Neg
                } else {
                    DependencyLabel::Aux
                };
                self.attach(i, dep, None);
                self.clause.deferred.push(i);
            }
            PartOfSpeech::Adverb => self.attach(i, DependencyLabel::Advmod, verb),
            PartOfSpeech::Adjective => {
                if self.clause.kind == ClauseKind::Copula && !self.clause.has_object {
                    self.attach(i, DependencyLabel::Acomp, verb);
                } else {
                    self.attach(i, DependencyLabel::Amod, None);
                }
            }
            PartOfSpeech::Determiner => self.attach(i, DependencyLabel::Det, None),
            PartOfSpeech::Numeral => match self.pending_prep.take() {
                Some(prep) => self.attach(i, DependencyLabel::Pobj, Some(prep)),
                None => self.attach(i, DependencyLabel::Nummod, None),
            },
            PartOfSpeech::Punctuation => {
                self.attach(i, DependencyLabel::Punct, None);
                let text = self.tokens[i].text.as_str();
                let closes_clause = matches!(text, ";" | ":" | "|");
                let is_comma = text == ",";

                if closes_clause {
                    self.close_clause();
                } else if is_comma {
                    self.pending_prep = None;
                    self.pending_conj = self.last_role.is_some();
                }
            }
            PartOfSpeech::Noun | PartOfSpeech::ProperNoun | PartOfSpeech::Pronoun => {
                self.nominal(i);
            }
        }
    }

    /// An auxiliary either waits for the verb it supports or is the clause's
    /// own verb (`Auth is a microservice`).
    fn auxiliary(&mut self, i: usize) {
        let next_content = self.tokens[i + 1..]
            .iter()
            .find(|t| {
                !matches!(
                    t.pos,
                    PartOfSpeech::Adverb | PartOfSpeech::Particle | PartOfSpeech::Auxiliary
                )
            })
            .map(|t| t.pos);

        if next_content == Some(PartOfSpeech::Verb) {
            self.attach(i, DependencyLabel::Aux, None);
            self.clause.deferred.push(i);
        } else {
            let kind = if self.tokens[i].lemma == "be" {
                ClauseKind::Copula
            } else {
                ClauseKind::Main
            };
            self.head_clause(i, kind);
        }
    }

    fn head_clause(&mut self, i: usize, kind: ClauseKind) {
        let conj = std::mem::take(&mut self.pending_conj);
        self.pending_prep = None;
        self.last_role = None;

        let deferred = std::mem::take(&mut self.clause.deferred);
        for &a in &deferred {
            self.heads[a] = Some(i);
        }

        if let Some(verb) = self.clause.verb {
            let dep = if conj {
                DependencyLabel::Conj
            } else {
                DependencyLabel::Xcomp
            };
            self.attach(i, dep, Some(verb));
        } else {
            let passive = kind == ClauseKind::Main
                && is_participle(&self.tokens[i].text.to_lowercase())
                && deferred.iter().any(|&a| self.is_be_auxiliary(a));

            if passive {
                for &a in &deferred {
                    if self.is_be_auxiliary(a) {
                        self.tokens[a].dep = DependencyLabel::AuxPass;
                    }
                }
            }

            let subject = if passive {
                DependencyLabel::NsubjPass
            } else {
                DependencyLabel::Nsubj
            };
            for s in self.clause.subjects.clone() {
                self.attach(s, subject, Some(i));
            }

            match self.root {
                None => {
                    self.root = Some(i);
                    self.attach(i, DependencyLabel::Root, None);
                }
                Some(root) => self.attach(i, DependencyLabel::Ccomp, Some(root)),
            }
        }

        self.clause.verb = Some(i);
        self.clause.kind = kind;
        self.clause.has_object = false;
    }

    fn is_be_auxiliary(&self, i: usize) -> bool {
        self.tokens[i].pos == PartOfSpeech::Auxiliary && self.tokens[i].lemma == "be"
    }

    fn close_clause(&mut self) {
        if self.clause.verb.is_none() {
            for s in std::mem::take(&mut self.clause.subjects) {
                self.attach(s, DependencyLabel::Dep, None);
            }
        }
        self.clause = Clause::default();
        self.pending_prep = None;
        self.pending_conj = false;
        self.last_role = None;
    }

    fn finish(mut self, fallback_root: usize) -> Sentence {
        let root = match self.root {
            Some(root) => root,
            None => {
                self.tokens[fallback_root].dep = DependencyLabel::Root;
                fallback_root
            }
        };

        for (j, token) in self.tokens.iter_mut().enumerate() {
            token.head = if j == root {
                root
            } else {
                self.heads[j].unwrap_or(root)
            };
        }

        Sentence {
            tokens: self.tokens,
            root: Some(root),
        }
    }
}
