//! Symptom text normalization.
//!
//! Lowercases, drops apostrophes ("can't" becomes "cant"), turns any other
//! non-alphanumeric run into a single space, collapses whitespace, then
//! applies spelling corrections. Lexicon phrases are stored in this same
//! normalized form.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static APOSTROPHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['\u{2018}\u{2019}`]").expect("valid apostrophe regex"));
static NON_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]+").expect("valid punctuation regex"));

/// Built-in typo table: (misspelling, correction).
const BUILTIN_CORRECTIONS: &[(&str, &str)] = &[
    ("fevr", "fever"),
    ("feverr", "fever"),
    ("feaver", "fever"),
    ("feber", "fever"),
    ("coough", "cough"),
    ("couf", "cough"),
    ("caugh", "cough"),
    ("colud", "cold"),
    ("coldf", "cold"),
    ("astma", "asthma"),
    ("asthama", "asthma"),
    ("bronchitiss", "bronchitis"),
    ("bronchit", "bronchitis"),
    ("pneumona", "pneumonia"),
    ("pnemonia", "pneumonia"),
    ("throatt", "throat"),
    ("throad", "throat"),
    ("soar throat", "sore throat"),
    ("runnynose", "runny nose"),
    ("sneezee", "sneeze"),
    ("vommit", "vomit"),
    ("vommiting", "vomiting"),
    ("nausia", "nausea"),
    ("stomuch", "stomach"),
    ("stomache", "stomach"),
    ("diarea", "diarrhea"),
    ("diarrhoea", "diarrhea"),
    ("indegestion", "indigestion"),
    ("migrane", "migraine"),
    ("headeache", "headache"),
    ("dipression", "depression"),
    ("anxity", "anxiety"),
    ("insomina", "insomnia"),
    ("fatige", "fatigue"),
    ("diabities", "diabetes"),
    ("diabets", "diabetes"),
    ("maleriya", "malaria"),
    ("dengee", "dengue"),
];

/// Lowercase, strip punctuation, collapse whitespace. No corrections.
pub fn clean(text: &str) -> String {
    let lower = text.to_lowercase();
    let no_apostrophes = APOSTROPHES.replace_all(&lower, "");
    let spaced = NON_TEXT.replace_all(&no_apostrophes, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word and phrase spelling corrections, keyed by cleaned form.
#[derive(Debug, Clone, Default)]
pub struct SpellingCorrections {
    words: HashMap<String, String>,
    /// Multi-word misspellings, longest first.
    phrases: Vec<(Vec<String>, String)>,
}

impl SpellingCorrections {
    pub fn builtin() -> Self {
        let mut corrections = Self::default();
        for (from, to) in BUILTIN_CORRECTIONS {
            corrections.insert(from, to);
        }
        corrections
    }

    /// Add or replace a correction. Identity and empty entries are ignored.
    pub fn insert(&mut self, from: &str, to: &str) {
        let from = clean(from);
        let to = clean(to);
        if from.is_empty() || to.is_empty() || from == to {
            return;
        }

        let tokens: Vec<String> = from.split(' ').map(str::to_string).collect();
        if tokens.len() == 1 {
            self.words.insert(from, to);
            return;
        }

        self.phrases.retain(|(existing, _)| *existing != tokens);
        self.phrases.push((tokens, to));
        self.phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    pub fn len(&self) -> usize {
        self.words.len() + self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply corrections to already-cleaned text in a single left-to-right
    /// pass. Replacements are not re-scanned.
    pub fn apply(&self, cleaned: &str) -> String {
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();
        let mut out: Vec<&str> = Vec::with_capacity(tokens.len());
        let mut i = 0;

        'outer: while i < tokens.len() {
            for (phrase, replacement) in &self.phrases {
                let end = i + phrase.len();
                if end <= tokens.len()
                    && tokens[i..end].iter().zip(phrase).all(|(t, p)| *t == p)
                {
                    out.push(replacement);
                    i = end;
                    continue 'outer;
                }
            }
            let word = tokens[i];
            out.push(self.words.get(word).map(String::as_str).unwrap_or(word));
            i += 1;
        }

        out.join(" ")
    }
}

/// Full normalization: [`clean`] then corrections.
pub fn normalize(text: &str, corrections: &SpellingCorrections) -> String {
    corrections.apply(&clean(text))
}

/// Position of `term` in `haystack` at word boundaries. Both sides must be
/// cleaned (single-space separated).
pub fn find_phrase(haystack: &str, term: &str) -> Option<usize> {
    if term.is_empty() {
        return None;
    }
    let bytes = haystack.as_bytes();
    haystack.match_indices(term).map(|(i, _)| i).find(|&i| {
        let end = i + term.len();
        let starts = i == 0 || bytes[i - 1] == b' ';
        let ends = end == bytes.len() || bytes[end] == b' ';
        starts && ends
    })
}
