//! Token-boundary keyword matching for free-text answers.
//!
//! Keyword phrases are compiled into Aho-Corasick automata once when the catalog loads; answers
//! are tokenized once per scoring run and scanned by every career's automaton.

use std::collections::BTreeSet;

use aho_corasick::{AhoCorasick, MatchKind};

/// Lowercases and strips invisible characters, collapsing runs of whitespace.
pub(crate) fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Canonical lowercase key for a school subject, folding common abbreviations.
pub(crate) fn canonical_subject(value: &str) -> String {
    let normalized = normalize_name(value);
    let canonical = match normalized.as_str() {
        "math" | "maths" => "mathematics",
        "bio" => "biology",
        "chem" => "chemistry",
        "phy" | "phys" => "physics",
        "cs" | "computer" | "computers" | "computer applications" => "computer science",
        "eco" | "econ" => "economics",
        "bst" | "business" => "business studies",
        "accounts" | "accounting" => "accountancy",
        "pol sci" | "civics" => "political science",
        "pe" | "phys ed" => "physical education",
        "arts" | "art" | "drawing" => "fine arts",
        "geo" => "geography",
        _ => return normalized,
    };
    canonical.to_string()
}

/// Title-cases a canonical subject key for display.
pub(crate) fn display_subject(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits text into lowercase alphanumeric tokens. Apostrophes are dropped so that
/// `don't` becomes the single token `dont`.
pub(crate) fn tokenize(value: &str) -> Vec<String> {
    value
        .to_lowercase()
        .replace(['\'', '\u{2019}'], "")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits text into sentences at `.`, `!`, `?` and line breaks.
pub(crate) fn sentences(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(['.', '!', '?', '\n'])
        .filter(|sentence| !sentence.trim().is_empty())
}

/// Free text that has been tokenized once for repeated matching.
///
/// Tokens are joined by single spaces with a space on either side, so a keyword pattern
/// wrapped in spaces can only match whole tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedText {
    padded: String,
}

impl TokenizedText {
    pub fn new(value: &str) -> Self {
        Self::from_tokens(&tokenize(value))
    }

    fn from_tokens(tokens: &[String]) -> Self {
        Self {
            padded: format!(" {} ", tokens.join(" ")),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.padded.trim().is_empty()
    }

    /// Tokens joined by single spaces.
    pub fn as_str(&self) -> &str {
        self.padded.trim()
    }

    /// Splits a sentence into clauses at commas, semicolons and the conjunction `but`.
    pub fn clauses(sentence: &str) -> Vec<TokenizedText> {
        sentence
            .split([',', ';'])
            .flat_map(|segment| {
                tokenize(segment)
                    .split(|token| token == "but")
                    .filter(|clause| !clause.is_empty())
                    .map(TokenizedText::from_tokens)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Default for TokenizedText {
    fn default() -> Self {
        Self::new("")
    }
}

#[derive(Debug, thiserror::Error)]
#[error("failed to compile keyword matcher: {0}")]
pub struct KeywordError(#[from] aho_corasick::BuildError);

/// Plural endings accepted on the last token of a phrase.
const PLURAL_SUFFIXES: [&str; 3] = ["", "s", "es"];

/// Keyword phrases compiled into a single Aho-Corasick automaton.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    phrases: Vec<String>,
    automaton: Option<AhoCorasick>,
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = keywords
            .into_iter()
            .map(|keyword| tokenize(keyword.as_ref()).join(" "))
            .filter(|phrase| !phrase.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        if phrases.is_empty() {
            return Ok(Self {
                phrases,
                automaton: None,
            });
        }

        // Pattern `i` belongs to phrase `i / PLURAL_SUFFIXES.len()`.
        let patterns: Vec<String> = phrases
            .iter()
            .flat_map(|phrase| {
                PLURAL_SUFFIXES
                    .iter()
                    .map(move |suffix| format!(" {phrase}{suffix} "))
            })
            .collect();
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)?;

        Ok(Self {
            phrases,
            automaton: Some(automaton),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn matches(&self, text: &TokenizedText) -> bool {
        self.first_match(text).is_some()
    }

    /// Returns the leftmost phrase (space-joined) found in the text.
    pub fn first_match(&self, text: &TokenizedText) -> Option<String> {
        let found = self.automaton.as_ref()?.find(text.padded.as_str())?;
        let phrase = found.pattern().as_usize() / PLURAL_SUFFIXES.len();
        self.phrases.get(phrase).cloned()
    }
}
