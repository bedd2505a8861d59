// src/extractors/skills.rs

// --- Imports ---
use crate::profile::vocab::{SkillVocabulary, DEFAULT_VOCABULARY};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

// --- Constants ---
/// Minimum similarity score (0-100 scale) for the fuzzy fallback to accept
/// a match. Calibrated so OCR-level typos in real skill tokens clear it
/// while coincidental collisions on unrelated 4-6 letter words do not.
/// Empirically chosen; do not retune without test evidence.
pub const FUZZY_MIN_SCORE: f64 = 85.0;
/// Tokens shorter than this never enter the fuzzy fallback.
pub const MIN_FUZZY_TOKEN_CHARS: usize = 4;

// --- Regex Patterns (Lazy Static) ---
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    // Permissive tokenization: keep # + . / - inside tokens so that
    // "c#", "c++", "node.js" and "ci/cd" survive as single tokens.
    Regex::new(r"[a-z0-9#+./-]+").expect("Failed to compile TOKEN_RE")
});

// --- Matcher ---

/// Resolves free-form skill mentions against a closed vocabulary through
/// four layers, unioned: alias resolution, symbol-bearing substring match,
/// word-boundary match, and an edit-distance fuzzy fallback.
pub struct SkillMatcher {
    vocab: &'static SkillVocabulary,
    min_fuzzy_score: f64,
    // Word-boundary patterns precompiled for every key the tokenizer can
    // represent; symbol-bearing keys are matched by substring instead.
    word_patterns: Vec<(&'static str, Regex)>,
    symbol_keys: Vec<&'static str>,
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self::with_vocabulary(&DEFAULT_VOCABULARY)
    }

    pub fn with_vocabulary(vocab: &'static SkillVocabulary) -> Self {
        let mut word_patterns = Vec::new();
        let mut symbol_keys = Vec::new();
        for key in vocab.skills() {
            if SkillVocabulary::is_symbol_key(key) {
                symbol_keys.push(*key);
            } else if let Ok(re) = Regex::new(&format!(r"\b{}\b", regex::escape(key))) {
                word_patterns.push((*key, re));
            }
        }
        Self {
            vocab,
            min_fuzzy_score: FUZZY_MIN_SCORE,
            word_patterns,
            symbol_keys,
        }
    }

    /// Overrides the fuzzy acceptance threshold (0-100 scale).
    pub fn with_min_score(mut self, score: f64) -> Self {
        self.min_fuzzy_score = score;
        self
    }

    /// Extracts the canonical skill set from free text. Order-independent
    /// and total over any input; an empty result is a normal outcome.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<String> = TOKEN_RE
            .find_iter(&lowered)
            .map(|m| m.as_str().trim_end_matches('.').to_string())
            .filter(|t| !t.is_empty())
            .collect();

        let mut matched: BTreeSet<&'static str> = BTreeSet::new();
        // Tokens accounted for by layers 1-3; the fuzzy fallback skips them.
        let mut consumed: HashSet<&str> = HashSet::new();

        // Layer 1: alias resolution (js -> javascript, k8s -> kubernetes)
        for token in &tokens {
            if let Some(key) = self.vocab.resolve_alias(token) {
                tracing::trace!("Alias '{}' resolved to '{}'", token, key);
                matched.insert(key);
                consumed.insert(token);
            }
        }

        // Layer 2: symbol-bearing keys by raw substring (word-boundary
        // tokenization cannot represent "c#" or "ci/cd")
        for key in &self.symbol_keys {
            if lowered.contains(key) {
                tracing::trace!("Symbol skill '{}' found by substring", key);
                matched.insert(key);
                consumed.insert(key);
            }
        }

        // Layer 3: whole-word / whole-phrase matches for everything else
        for (key, re) in &self.word_patterns {
            if re.is_match(&lowered) {
                tracing::trace!("Skill '{}' found at word boundary", key);
                matched.insert(key);
                for part in key.split_whitespace() {
                    consumed.insert(part);
                }
            }
        }

        // Layer 4: fuzzy fallback for leftover tokens, tolerating typos in
        // scanned resumes
        for token in &tokens {
            if consumed.contains(token.as_str())
                || token.chars().count() < MIN_FUZZY_TOKEN_CHARS
                || !token.chars().any(|c| c.is_ascii_alphabetic())
            {
                continue;
            }
            if let Some((key, score)) = self.best_fuzzy_match(token) {
                if score >= self.min_fuzzy_score {
                    tracing::debug!(
                        "Fuzzy-matched token '{}' to '{}' (score {:.1})",
                        token,
                        key,
                        score
                    );
                    matched.insert(key);
                }
            }
        }

        matched
            .into_iter()
            .map(|key| self.vocab.display_label(key))
            .collect()
    }

    fn best_fuzzy_match(&self, token: &str) -> Option<(&'static str, f64)> {
        self.vocab
            .skills()
            .iter()
            .map(|key| (*key, similarity_score(token, key)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Similarity on a 0-100 scale: Levenshtein distance normalized by the
/// combined length of both strings, so a one-character slip in a typical
/// skill token scores in the low 90s while short unrelated words fall far
/// below the acceptance threshold.
fn similarity_score(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100.0;
    }
    let distance = strsim::levenshtein(a, b);
    100.0 * (1.0 - distance as f64 / total as f64)
}
