// src/extractors/name.rs

// --- Imports ---
use crate::extractors::normalize::{lines, segments};
use once_cell::sync::Lazy;
use regex::Regex;

// --- Constants ---
// A line longer than this is prose, not a name.
const MAX_NAME_LINE_CHARS: usize = 50;
const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 5;
// How many leading lines the positional scan considers when no contact
// anchor exists, and how many the line-merge strategy inspects.
const ANCHORLESS_SCAN_LINES: usize = 5;
const MERGE_SCAN_LINES: usize = 4;

// Section labels that commonly occupy the top of a résumé.
const HEADER_KEYWORDS: &[&str] = &[
    "curriculum",
    "vitae",
    "resume",
    "cv",
    "contact",
    "profile",
    "about",
    "summary",
    "objective",
    "experience",
    "education",
    "skills",
];

// Job-title vocabulary; a line carrying one of these is a role, not a name.
const TITLE_KEYWORDS: &[&str] = &[
    "analyst",
    "developer",
    "engineer",
    "manager",
    "director",
    "consultant",
    "specialist",
    "senior",
    "junior",
    "lead",
    "architect",
    "admin",
    "officer",
    "data",
    "product",
    "designer",
    "coordinator",
    "executive",
    "intern",
    "trainee",
];

// Lowercase particles that are part of a personal name but do not follow
// standard capitalization rules ("Ahmed bin Khalid", "Ludwig van Beethoven").
const NAME_CONNECTORS: &[&str] = &["bin", "al", "de", "van", "von", "der", "el", "la", "ibn"];

// --- Regex Patterns (Lazy Static) ---
static CONTACT_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    // An email sigil, or a run of 7+ digits allowing common separators,
    // marks the line where contact information starts.
    Regex::new(r"@|(?:\d[\s().+-]*){7,}").expect("Failed to compile CONTACT_MARKER_RE")
});

static LONG_DIGIT_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{5,}").expect("Failed to compile LONG_DIGIT_RUN_RE"));

// --- Word Classification Helpers ---

fn is_connector(word: &str) -> bool {
    NAME_CONNECTORS.contains(&word.to_lowercase().as_str())
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

// A word a personal name could contain: no digits, punctuation limited to
// apostrophes, hyphens, and periods (O'Brien, Jean-Luc, John A. Smith).
fn is_clean_word(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '\'' | '’' | '-' | '.'))
}

fn is_name_word(word: &str) -> bool {
    is_clean_word(word) && (starts_uppercase(word) || is_connector(word))
}

fn contains_keyword(line: &str, keywords: &[&str]) -> bool {
    line.to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .any(|w| keywords.contains(&w))
}

// A line that is nothing but header vocabulary ("RESUME", "Curriculum Vitae").
fn is_bare_header(line: &str) -> bool {
    let lowered = line.to_lowercase();
    let mut words = lowered
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .peekable();
    words.peek().is_some() && words.all(|w| HEADER_KEYWORDS.contains(&w))
}

// Full validation of one candidate line for the positional strategy.
fn accept_name_line(line: &str) -> bool {
    if line.chars().count() > MAX_NAME_LINE_CHARS {
        return false;
    }
    if contains_keyword(line, HEADER_KEYWORDS) || contains_keyword(line, TITLE_KEYWORDS) {
        return false;
    }
    if line.contains('@') || LONG_DIGIT_RUN_RE.is_match(line) {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&words.len()) {
        return false;
    }
    words.iter().all(|w| is_name_word(w))
}

// --- Strategies ---

/// One heuristic in the fallback chain: maps text to a candidate name, or
/// nothing. Strategies are independent and individually testable.
pub trait NameStrategy {
    fn label(&self) -> &'static str;
    fn resolve(&self, text: &str) -> Option<String>;
}

/// Primary heuristic: locate the line where contact information starts
/// (the contact anchor) and search only the lines above it. Without an
/// anchor, the first few lines are scanned instead.
pub struct ContactAnchorStrategy;

impl NameStrategy for ContactAnchorStrategy {
    fn label(&self) -> &'static str {
        "contact-anchor"
    }

    fn resolve(&self, text: &str) -> Option<String> {
        let segs = segments(text);
        let anchor = segs.iter().position(|line| CONTACT_MARKER_RE.is_match(line));
        let search = match anchor {
            Some(idx) => &segs[..idx],
            None => &segs[..segs.len().min(ANCHORLESS_SCAN_LINES)],
        };
        if let Some(idx) = anchor {
            tracing::trace!("Contact anchor at line {}", idx);
        }
        search
            .iter()
            .find(|line| accept_name_line(line))
            .map(|line| line.to_string())
    }
}

/// Walks the tokens of the first meaningful line, collecting leading
/// capitalized words and connectors until contact info or lowercase prose
/// interrupts.
pub struct TokenWalkStrategy;

impl NameStrategy for TokenWalkStrategy {
    fn label(&self) -> &'static str {
        "token-walk"
    }

    fn resolve(&self, text: &str) -> Option<String> {
        let all_lines = lines(text);
        let line = all_lines.iter().find(|line| !is_bare_header(line))?;

        let mut collected: Vec<&str> = Vec::new();
        for token in line.split_whitespace() {
            if token.contains('@')
                || token.contains('|')
                || token.chars().any(|c| c.is_ascii_digit())
            {
                break;
            }
            if is_name_word(token) {
                collected.push(token);
                if collected.len() == MAX_NAME_WORDS {
                    break;
                }
            } else if !collected.is_empty() {
                break;
            }
        }

        if (MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&collected.len()) {
            Some(collected.join(" "))
        } else {
            None
        }
    }
}

/// Repairs word-per-line PDF extraction: merges consecutive leading lines
/// that are each a single capitalized word into one name.
pub struct LineMergeStrategy;

impl NameStrategy for LineMergeStrategy {
    fn label(&self) -> &'static str {
        "line-merge"
    }

    fn resolve(&self, text: &str) -> Option<String> {
        let mut merged: Vec<String> = Vec::new();
        for line in lines(text).into_iter().take(MERGE_SCAN_LINES) {
            let single_cap_word = !line.contains(' ')
                && is_clean_word(&line)
                && starts_uppercase(&line)
                && !is_bare_header(&line);
            if single_cap_word {
                merged.push(line);
            } else if merged.is_empty() {
                continue;
            } else {
                break;
            }
        }
        // 2-4 merged words form a plausible name
        if (2..=MERGE_SCAN_LINES).contains(&merged.len()) {
            Some(merged.join(" "))
        } else {
            None
        }
    }
}

/// Last resort: the first non-empty line, if it is short enough to be a
/// name, long enough to not be noise, and looks like words rather than
/// markup.
pub struct FirstLineStrategy;

impl NameStrategy for FirstLineStrategy {
    fn label(&self) -> &'static str {
        "first-line"
    }

    fn resolve(&self, text: &str) -> Option<String> {
        let all_lines = lines(text);
        let line = all_lines.first()?;
        let len = line.chars().count();
        if len > 3
            && len < 30
            && !is_bare_header(line)
            && line.split_whitespace().all(is_clean_word)
        {
            Some(line.to_string())
        } else {
            None
        }
    }
}

// --- Resolver ---

/// Ordered fallback chain over the four strategies; first success wins.
/// All strategies failing is a normal "unknown" outcome, not an error.
pub struct NameResolver {
    strategies: Vec<Box<dyn NameStrategy + Send + Sync>>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(ContactAnchorStrategy),
                Box::new(TokenWalkStrategy),
                Box::new(LineMergeStrategy),
                Box::new(FirstLineStrategy),
            ],
        }
    }

    pub fn resolve(&self, text: &str) -> Option<String> {
        for strategy in &self.strategies {
            if let Some(name) = strategy.resolve(text) {
                tracing::debug!("Resolved name '{}' via strategy '{}'", name, strategy.label());
                return Some(name);
            }
            tracing::trace!("Name strategy '{}' produced nothing", strategy.label());
        }
        tracing::debug!("No name found by any strategy");
        None
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}
