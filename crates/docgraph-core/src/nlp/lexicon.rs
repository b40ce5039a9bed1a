use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::PartOfSpeech;

const VERBS: &[&str] = &[
    "accept", "access", "add", "adopt", "align", "allow", "analyse", "analyze", "apply",
    "approve", "assess", "assign", "audit", "authenticate", "authorize", "automate", "avoid",
    "back", "balance", "become", "begin", "belong", "bill", "block", "bring", "build", "buy",
    "cache", "calculate", "call", "capture", "change", "check", "choose", "collect", "combine",
    "communicate", "compare", "complete", "compute", "configure", "connect", "consume",
    "contain", "control", "convert", "coordinate", "cover", "create", "deliver", "depend",
    "deploy", "deprecate", "describe", "design", "detect", "develop", "drive", "enable",
    "encrypt", "enforce", "ensure", "enter", "escalate", "establish", "estimate", "evaluate",
    "exchange", "execute", "expand", "export", "expose", "extend", "extract", "feed",
    "fetch", "find",
    "fix", "flag", "flow", "forward", "fund", "gather", "generate", "get", "give", "go",
    "govern", "grow", "guide", "handle", "help", "hold", "host", "identify", "implement",
    "import", "improve", "include", "increase", "index", "ingest", "initiate", "integrate",
    "introduce", "investigate", "invoke", "issue", "keep", "know", "lack", "launch", "lead",
    "leverage", "limit", "link", "load", "log", "maintain", "make", "manage", "map", "measure",
    "meet", "merge", "migrate", "minimize", "mitigate", "monitor", "move", "need", "notify",
    "observe", "offer", "operate", "optimize", "orchestrate", "own", "oversee", "parse",
    "partner", "pay", "perform", "persist", "plan", "power", "prepare", "prevent",
    "prioritize", "process", "produce", "protect", "provide", "provision", "publish", "pull",
    "push", "put", "query", "queue", "raise", "reach", "read", "receive", "recommend",
    "reconcile", "record", "reduce", "refresh", "register", "reject", "release", "rely",
    "remove", "render", "replace", "replicate", "report", "represent", "request", "require",
    "reserve", "resolve", "respond", "restore", "retrieve", "return", "review", "route", "run",
    "save", "scale", "schedule", "scan", "secure", "see", "select", "sell", "send", "serve",
    "set", "share", "ship", "show", "sign", "simplify", "sponsor", "start", "stop", "store",
    "stream", "submit", "supply", "support", "sync", "synchronize", "take", "target", "tell",
    "test", "think", "track", "train", "transfer", "transform", "trigger", "update", "upgrade",
    "upload", "use", "validate", "verify", "view", "work", "write",
];

/// Words that are read as nouns even where a verb reading would fit
const NOUNS: &[&str] = &[
    "account", "api", "application", "architecture", "budget", "client", "cluster",
    "company", "component", "customer", "data", "database", "department", "dependency",
    "feature", "gateway", "infrastructure", "introduction", "invoice", "ledger", "milestone",
    "module", "name", "network", "organization", "overview", "payment", "pipeline",
    "platform", "product", "project", "requirement", "server", "service", "stakeholder",
    "system", "team", "timeline", "user", "vendor",
];

const ADJECTIVES: &[&str] = &[
    "able", "additional", "annual", "automatic", "available", "bad", "best", "better", "big",
    "central", "core", "critical", "current", "daily", "different", "digital", "early",
    "existing", "external", "few", "final", "financial", "first", "global", "good", "high",
    "important", "initial", "internal", "key", "large", "last", "late", "legacy", "less",
    "local", "low", "main", "major", "manual", "many", "minor", "mobile", "monthly", "more",
    "most", "native", "new", "next", "old", "open", "operational", "other", "primary",
    "private", "public", "quarterly", "real", "remote", "responsible", "same", "second",
    "secondary", "several", "shared", "small", "strategic", "technical", "third", "weekly",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "less", "ical"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inflection {
    Base,
    ThirdPerson,
    Past,
    Gerund,
}

/// User extension of the built-in word lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconFile {
    pub verbs: Vec<String>,
    pub nouns: Vec<String>,
    pub adjectives: Vec<String>,
}

impl LexiconFile {
    pub fn load(path: &Path) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::ParserUnavailable(format!(
                "cannot read lexicon {}: {e}",
                path.display()
            ))
        })?;
        toml::from_str(&raw).map_err(|e| {
            crate::Error::ParserUnavailable(format!(
                "invalid lexicon {}: {e}",
                path.display()
            ))
        })
    }
}

/// Open-class word lists plus the morphology that goes with them.
#[derive(Debug, Clone)]
pub struct Lexicon {
    verbs: HashSet<String>,
    nouns: HashSet<String>,
    adjectives: HashSet<String>,
}

impl Lexicon {
    #[must_use]
    pub fn builtin() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| (*w).to_string()).collect();
        Self {
            verbs: owned(VERBS),
            nouns: owned(NOUNS),
            adjectives: owned(ADJECTIVES),
        }
    }

    #[must_use]
    pub fn extended(mut self, extra: LexiconFile) -> Self {
        let lower = |words: Vec<String>| words.into_iter().map(|w| w.trim().to_lowercase());
        self.verbs.extend(lower(extra.verbs));
        self.nouns.extend(lower(extra.nouns));
        self.adjectives.extend(lower(extra.adjectives));
        self
    }

    #[must_use]
    pub fn is_noun(&self, lower: &str) -> bool {
        self.nouns.contains(lower) || self.nouns.contains(&noun_lemma(lower))
    }

    #[must_use]
    pub fn is_adjective(&self, lower: &str) -> bool {
        self.adjectives.contains(lower)
    }

    /// Base form and inflection of a known verb.
    #[must_use]
    pub fn analyze_verb(&self, lower: &str) -> Option<(String, Inflection)> {
        if let Some(base) = irregular_verb(lower) {
            if self.verbs.contains(base) {
                return Some((base.to_string(), Inflection::Past));
            }
        }
        if self.verbs.contains(lower) {
            return Some((lower.to_string(), Inflection::Base));
        }
        verb_candidates(lower)
            .into_iter()
            .find(|(base, _)| self.verbs.contains(base))
    }

    #[must_use]
    pub fn verb_lemma(&self, lower: &str) -> String {
        if let Some(lemma) = aux_lemma(lower) {
            return lemma.to_string();
        }
        if let Some((base, _)) = self.analyze_verb(lower) {
            return base;
        }
        if let Some(base) = irregular_verb(lower) {
            return base.to_string();
        }
        guess_verb_base(lower)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Part of speech for function words; `None` for open-class words.
#[must_use]
pub fn closed_class(lower: &str) -> Option<PartOfSpeech> {
    let pos = match lower {
        "the" | "a" | "an" | "this" | "these" | "those" | "each" | "every" | "some" | "any"
        | "no" | "all" | "both" | "either" | "neither" | "another" | "such" | "my" | "your"
        | "his" | "her" | "its" | "our" | "their" => PartOfSpeech::Determiner,
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
        | "itself" | "themselves" | "ourselves" | "someone" | "something" | "everyone"
        | "everything" | "anyone" | "anything" | "nobody" | "nothing" => PartOfSpeech::Pronoun,
        "of" | "in" | "on" | "at" | "for" | "with" | "by" | "from" | "into" | "onto" | "over"
        | "under" | "through" | "across" | "between" | "via" | "about" | "against" | "during"
        | "without" | "within" | "after" | "before" | "per" | "among" | "toward" | "towards"
        | "upon" | "behind" | "beyond" | "inside" | "outside" | "around" | "along"
        | "throughout" | "despite" | "like" | "than" | "to" => PartOfSpeech::Adposition,
        "and" | "or" | "but" | "nor" | "plus" | "&" => PartOfSpeech::CoordConj,
        "that" | "which" | "who" | "whom" | "whose" | "what" | "where" | "when" | "whereas"
        | "because" | "although" | "though" | "if" | "unless" | "while" | "since" | "whether" => {
            PartOfSpeech::SubordConj
        }
        "be" | "is" | "are" | "was" | "were" | "been" | "being" | "am" | "has" | "have"
        | "had" | "having" | "do" | "does" | "did" | "will" | "would" | "shall" | "should"
        | "can" | "could" | "may" | "might" | "must" => PartOfSpeech::Auxiliary,
        "not" | "n't" => PartOfSpeech::Particle,
        "also" | "very" | "often" | "always" | "never" | "currently" | "only" | "just"
        | "then" | "there" | "here" | "however" | "therefore" | "now" | "still" | "already"
        | "soon" | "together" | "too" | "again" | "instead" => PartOfSpeech::Adverb,
        "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine"
        | "ten" => PartOfSpeech::Numeral,
        _ => return None,
    };
    Some(pos)
}

#[must_use]
pub fn has_adjective_suffix(lower: &str) -> bool {
    lower.chars().count() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s))
}

#[must_use]
pub fn has_adverb_suffix(lower: &str) -> bool {
    lower.chars().count() > 4 && lower.ends_with("ly")
}

/// Whether a verb form can head a passive (`is maintained`, `was built`).
#[must_use]
pub fn is_participle(lower: &str) -> bool {
    lower.ends_with("ed")
        || lower.ends_with("en")
        || matches!(
            lower,
            "built" | "held" | "led" | "made" | "sent" | "kept" | "paid" | "sold" | "told"
                | "found" | "brought" | "bought" | "run" | "set" | "put" | "done" | "met"
        )
}

/// Auxiliaries that are always followed by a bare verb.
#[must_use]
pub fn is_modal(lower: &str) -> bool {
    matches!(
        lower,
        "will" | "would" | "shall" | "should" | "can" | "could" | "may" | "might" | "must"
    )
}

fn aux_lemma(lower: &str) -> Option<&'static str> {
    match lower {
        "be" | "is" | "are" | "was" | "were" | "been" | "being" | "am" => Some("be"),
        "has" | "have" | "had" | "having" => Some("have"),
        "do" | "does" | "did" | "done" => Some("do"),
        _ => None,
    }
}

fn irregular_verb(lower: &str) -> Option<&'static str> {
    let base = match lower {
        "ran" => "run",
        "built" => "build",
        "led" => "lead",
        "made" => "make",
        "wrote" | "written" => "write",
        "sent" => "send",
        "held" => "hold",
        "took" | "taken" => "take",
        "gave" | "given" => "give",
        "got" | "gotten" => "get",
        "kept" => "keep",
        "met" => "meet",
        "paid" => "pay",
        "sold" => "sell",
        "told" => "tell",
        "found" => "find",
        "brought" => "bring",
        "bought" => "buy",
        "thought" => "think",
        "began" | "begun" => "begin",
        "grew" | "grown" => "grow",
        "chose" | "chosen" => "choose",
        "drove" | "driven" => "drive",
        "oversaw" | "overseen" => "oversee",
        "saw" | "seen" => "see",
        "went" | "gone" => "go",
        "knew" | "known" => "know",
        "became" => "become",
        "shown" => "show",
        "fed" => "feed",
        _ => return None,
    };
    Some(base)
}

fn verb_candidates(lower: &str) -> Vec<(String, Inflection)> {
    let mut out = Vec::new();

    if let Some(stem) = lower.strip_suffix("ies") {
        out.push((format!("{stem}y"), Inflection::ThirdPerson));
    }
    if let Some(stem) = lower.strip_suffix("es") {
        out.push((stem.to_string(), Inflection::ThirdPerson));
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if !lower.ends_with("ss") {
            out.push((stem.to_string(), Inflection::ThirdPerson));
        }
    }
    if let Some(stem) = lower.strip_suffix("ied") {
        out.push((format!("{stem}y"), Inflection::Past));
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        out.push((format!("{stem}e"), Inflection::Past));
        out.push((stem.to_string(), Inflection::Past));
        if let Some(single) = undouble(stem) {
            out.push((single, Inflection::Past));
        }
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        out.push((stem.to_string(), Inflection::Gerund));
        out.push((format!("{stem}e"), Inflection::Gerund));
        if let Some(single) = undouble(stem) {
            out.push((single, Inflection::Gerund));
        }
    }

    out.retain(|(base, _)| base.chars().count() >= 2);
    out
}

/// `plann` -> `plan`
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && !"aeiouls".contains(last)).then(|| stem[..stem.len() - last.len_utf8()].to_string())
}

/// Base form of a verb missing from the lexicon, from its suffix alone.
fn guess_verb_base(lower: &str) -> String {
    const E_ENDINGS: &[&str] = &["at", "iz", "ys", "ur", "ov", "iv", "uc", "ag", "bl", "os", "ut"];

    let restore_e = |stem: &str| {
        if E_ENDINGS.iter().any(|e| stem.ends_with(e)) {
            format!("{stem}e")
        } else {
            undouble(stem).unwrap_or_else(|| stem.to_string())
        }
    };

    if let Some(stem) = lower.strip_suffix("ied") {
        return format!("{stem}y");
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        return restore_e(stem);
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        return restore_e(stem);
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = ["ches", "shes", "sses", "xes", "zes"]
        .iter()
        .find_map(|s| lower.strip_suffix(s).map(|_| &lower[..lower.len() - 2]))
    {
        return stem.to_string();
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if !lower.ends_with("ss") {
            return stem.to_string();
        }
    }
    lower.to_string()
}

/// Singular form of a lower-cased noun.
#[must_use]
pub fn noun_lemma(lower: &str) -> String {
    match lower {
        "people" => return "person".into(),
        "children" => return "child".into(),
        "men" => return "man".into(),
        "women" => return "woman".into(),
        "analyses" => return "analysis".into(),
        "criteria" => return "criterion".into(),
        "data" | "series" | "news" | "status" | "analysis" | "business" => {
            return lower.into();
        }
        _ => {}
    }

    if lower.chars().count() <= 3 {
        return lower.into();
    }
    if let Some(stem) = lower.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if ["ches", "shes", "sses", "xes", "zes"]
        .iter()
        .any(|s| lower.ends_with(s))
    {
        return lower[..lower.len() - 2].to_string();
    }
    if lower.ends_with('s') && !["ss", "us", "is", "ous"].iter().any(|s| lower.ends_with(s)) {
        return lower[..lower.len() - 1].to_string();
    }
    lower.into()
}
