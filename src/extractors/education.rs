// src/extractors/education.rs

// --- Imports ---
use crate::extractors::normalize::{lines, normalize};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// --- Constants ---
// Accepted span lengths for regex captures; rejects both noise fragments
// and runaway matches.
const MIN_MATCH_CHARS: usize = 10;
const MAX_MATCH_CHARS: usize = 100;
// Accepted line lengths for the keyword fallback scan.
const MIN_LINE_CHARS: usize = 10;
const MAX_LINE_CHARS: usize = 150;

/// Maximum education entries retained, most complete (longest) first.
pub const MAX_EDUCATION_ENTRIES: usize = 3;
/// Word-overlap ratio above which a shorter candidate is considered a
/// near-duplicate of an already-kept entry. Empirically chosen; do not
/// retune without test evidence.
pub const EDUCATION_OVERLAP_LIMIT: f64 = 0.6;

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "bsc",
    "msc",
    "mba",
    "degree in",
];

// Bare section labels that carry a degree keyword's vocabulary but no
// actual degree.
const SECTION_HEADERS: &[&str] = &["education", "education history", "academic background"];

// --- Regex Patterns (Lazy Static) ---
// Progressively looser templates; all of them run and their matches pool
// into one candidate list, deduplication collapses the overlap.
static DEGREE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Degree + field + comma-separated institution:
        // "Bachelor's Degree in Computer Science, University of California"
        r"(?i)\b(?:bachelor|master|doctor(?:ate)?)(?:['’]s)?\s+(?:degree\s+)?(?:of|in)\s+[a-z][a-z&\- ]{2,50},\s*[a-z][a-z&.\- ]{2,60}",
        // Qualifier + field, institution optional in the tail:
        // "Master of Science in Data Science from Stanford University"
        r"(?i)\b(?:bachelor|master|doctor(?:ate)?|ph\.?\s?d\.?)(?:['’]s)?\s+(?:degree\s+)?(?:of|in)\s+[a-z][a-z&\- ]{2,60}",
        // Short forms: "B.S. in Computer Science", "MSc in Robotics".
        // Dotted variants require their dots so that ordinary words like
        // "be" or "ma" cannot match.
        r"(?i)\b(?:b\.sc?\.?|b\.a\.?|b\.e\.?|m\.sc?\.?|m\.a\.?|m\.b\.a\.?|ph\.?d\.?|bsc|msc|mba|phd|btech|mtech)\s+(?:in\s+)?[a-z][a-z&\- ]{1,50}",
    ]
    .iter()
    .filter_map(|pat| Regex::new(pat).ok())
    .collect()
});

// --- Extractor ---

/// Pattern-matches degree/institution phrases and deduplicates
/// near-identical or subsumed entries, keeping the most descriptive
/// phrasing.
pub struct EducationExtractor {
    overlap_limit: f64,
    max_entries: usize,
}

impl EducationExtractor {
    pub fn new() -> Self {
        Self {
            overlap_limit: EDUCATION_OVERLAP_LIMIT,
            max_entries: MAX_EDUCATION_ENTRIES,
        }
    }

    /// Overrides the near-duplicate word-overlap limit (0.0-1.0).
    pub fn with_overlap_limit(mut self, limit: f64) -> Self {
        self.overlap_limit = limit;
        self
    }

    /// Extracts up to `max_entries` degree descriptions, longest first.
    /// An empty result is a normal outcome.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        let mut candidates: Vec<String> = Vec::new();

        for (idx, re) in DEGREE_PATTERNS.iter().enumerate() {
            for m in re.find_iter(&normalized) {
                let span = m.as_str().trim().to_string();
                let span_len = span.chars().count();
                if (MIN_MATCH_CHARS..=MAX_MATCH_CHARS).contains(&span_len) {
                    tracing::trace!("Degree pattern {} captured '{}'", idx, span);
                    candidates.push(span);
                } else {
                    tracing::trace!(
                        "Degree pattern {} span rejected ({} chars): '{}'",
                        idx,
                        span_len,
                        span
                    );
                }
            }
        }

        // Line-based fallback when no template hits: any line of plausible
        // length carrying a degree keyword, bare section headers excluded.
        if candidates.is_empty() {
            for line in lines(text) {
                let len = line.chars().count();
                if !(MIN_LINE_CHARS..=MAX_LINE_CHARS).contains(&len) {
                    continue;
                }
                let lowered = line.to_lowercase();
                let trimmed = lowered.trim_end_matches(':').trim();
                if SECTION_HEADERS.contains(&trimmed) {
                    continue;
                }
                if DEGREE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
                    tracing::trace!("Fallback line scan captured '{}'", line);
                    candidates.push(line);
                }
            }
        }

        self.dedup(candidates)
    }

    // Longest-first greedy dedup: a candidate survives only if it is not a
    // substring of an already-kept entry and shares at most
    // `overlap_limit` of its words with each kept entry.
    fn dedup(&self, mut candidates: Vec<String>) -> Vec<String> {
        candidates.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        let mut kept: Vec<String> = Vec::new();
        for candidate in candidates {
            let lowered = candidate.to_lowercase();
            let words = word_set(&lowered);
            if words.is_empty() {
                continue;
            }
            let redundant = kept.iter().any(|entry| {
                let entry_lowered = entry.to_lowercase();
                if entry_lowered.contains(&lowered) {
                    return true;
                }
                let overlap = words.intersection(&word_set(&entry_lowered)).count();
                overlap as f64 / words.len() as f64 > self.overlap_limit
            });
            if redundant {
                tracing::trace!("Dropping near-duplicate education entry '{}'", candidate);
                continue;
            }
            kept.push(candidate);
            if kept.len() == self.max_entries {
                break;
            }
        }
        kept
    }
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn word_set(text: &str) -> HashSet<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bachelors_with_institution() {
        let education =
            EducationExtractor::new().extract("Education: Bachelor's Degree in Computer Science, MIT");
        assert!(!education.is_empty());
        assert!(education.iter().any(|e| e.to_lowercase().contains("bachelor")));
    }

    #[test]
    fn test_masters_phrase() {
        let education = EducationExtractor::new()
            .extract("Master of Science in Data Science from Stanford University");
        assert!(!education.is_empty());
        assert!(education.iter().any(|e| e.to_lowercase().contains("master")));
    }

    #[test]
    fn test_short_form_degree() {
        let education = EducationExtractor::new().extract("B.S. in Computer Engineering");
        assert!(!education.is_empty(), "got {:?}", education);
    }

    #[test]
    fn test_multiple_degrees() {
        let text = "Education:\nBachelor's Degree in Computer Science, University of California\nMaster's Degree in Business Administration, Harvard Business School";
        let education = EducationExtractor::new().extract(text);
        assert!(!education.is_empty());
        assert!(education.len() <= MAX_EDUCATION_ENTRIES);
    }

    #[test]
    fn test_subsumed_entry_dropped() {
        // The shorter candidate's words are fully contained in the longer
        // one; only the longer survives.
        let extractor = EducationExtractor::new();
        let kept = extractor.dedup(vec![
            "Bachelor's Degree in Computer Science".to_string(),
            "Bachelor's Degree in Computer Science, University of California".to_string(),
        ]);
        assert_eq!(
            kept,
            vec!["Bachelor's Degree in Computer Science, University of California".to_string()]
        );
    }

    #[test]
    fn test_distinct_degrees_both_kept() {
        let extractor = EducationExtractor::new();
        let kept = extractor.dedup(vec![
            "Master's Degree in Business Administration, Harvard".to_string(),
            "Bachelor's Degree in Physics, Caltech".to_string(),
        ]);
        assert_eq!(kept.len(), 2);
        // Longest first
        assert!(kept[0].chars().count() >= kept[1].chars().count());
    }

    #[test]
    fn test_entries_capped_at_three() {
        let extractor = EducationExtractor::new();
        let kept = extractor.dedup(vec![
            "Bachelor of Arts in History of Science, Yale University".to_string(),
            "Master of Science in Applied Mathematics, ETH Zurich".to_string(),
            "Doctorate in Theoretical Physics, Princeton University".to_string(),
            "MBA in Finance, London Business School".to_string(),
        ]);
        assert_eq!(kept.len(), MAX_EDUCATION_ENTRIES);
    }

    #[test]
    fn test_fallback_line_scan() {
        // No template matches, but the line carries a degree keyword
        let education = EducationExtractor::new().extract("MBA - Wharton School 2015\nother text");
        assert!(!education.is_empty(), "got {:?}", education);
    }

    #[test]
    fn test_bare_section_header_excluded() {
        let education = EducationExtractor::new().extract("Education History:\nnothing else here");
        assert!(education.is_empty(), "got {:?}", education);
    }

    #[test]
    fn test_noise_fragment_rejected_by_span_filter() {
        // Matches the short-form template but falls under the minimum
        // span length
        let education = EducationExtractor::new().extract("MSc in AI");
        assert!(education.is_empty(), "got {:?}", education);
    }

    #[test]
    fn test_word_overlap_dedup_without_substring() {
        // Not a substring, but nearly every word is contained in the
        // longer entry
        let extractor = EducationExtractor::new();
        let kept = extractor.dedup(vec![
            "Stanford University Computer Science Degree".to_string(),
            "Degree in Computer Science from Stanford University".to_string(),
        ]);
        assert_eq!(
            kept,
            vec!["Degree in Computer Science from Stanford University".to_string()]
        );
    }

    #[test]
    fn test_absent() {
        assert!(EducationExtractor::new().extract("no schooling mentioned").is_empty());
        assert!(EducationExtractor::new().extract("").is_empty());
    }
}
