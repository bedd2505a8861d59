// src/extractors/experience.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
// Priority-ordered; the first pattern's first match wins. No aggregation
// across multiple mentions.
static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // "5 years experience", "5+ years of experience"
        r"(\d+)\s*\+?\s*years?\s*(?:of)?\s*experience",
        // "experience: 5+ years"
        r"experience\s*[:.]?\s*(\d+)\s*\+?\s*years?",
        // "5-7 years ... experience"
        r"(\d+)\s*-\s*\d+\s*years?\s*(?:of)?\s*experience",
    ]
    .iter()
    .filter_map(|pat| Regex::new(pat).ok())
    .collect()
});

/// Extracts a single "years of experience" integer from common phrasings.
/// First value found by pattern priority, not an aggregate.
pub fn extract_experience_years(text: &str) -> Option<u32> {
    let lowered = text.to_lowercase();
    for (idx, re) in EXPERIENCE_PATTERNS.iter().enumerate() {
        if let Some(caps) = re.captures(&lowered) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                tracing::debug!("Experience pattern {} matched: {} years", idx, years);
                return Some(years);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_of_experience_phrase() {
        assert_eq!(extract_experience_years("7 years of experience in backend work"), Some(7));
        assert_eq!(extract_experience_years("5+ years experience"), Some(5));
    }

    #[test]
    fn test_experience_colon_phrase() {
        assert_eq!(extract_experience_years("Experience: 12 years"), Some(12));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_experience_years("10 Years Of EXPERIENCE"), Some(10));
    }

    #[test]
    fn test_first_match_wins_by_priority() {
        // Both the colon form and the plain form appear; the plain form has
        // higher pattern priority regardless of text position.
        let text = "Experience: 3 years. Previously 8 years of experience abroad.";
        assert_eq!(extract_experience_years(text), Some(8));
    }

    #[test]
    fn test_absent() {
        assert_eq!(extract_experience_years("worked for many years"), None);
        assert_eq!(extract_experience_years(""), None);
    }
}
