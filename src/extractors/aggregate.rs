// src/extractors/aggregate.rs

// --- Imports ---
use crate::extractors::education::EducationExtractor;
use crate::extractors::name::NameResolver;
use crate::extractors::normalize::normalize;
use crate::extractors::skills::SkillMatcher;
use crate::extractors::{contact, experience};
use crate::profile::ParsedProfile;

// --- Constants ---
/// Characters of normalized input carried in the diagnostic preview.
pub const PREVIEW_CHARS: usize = 500;

/// Composes the per-field extractors into one structured result.
///
/// Pure and synchronous: no I/O, no mutable shared state. One instance can
/// serve concurrent parses, since the underlying vocabulary and pattern
/// tables are immutable after startup.
pub struct ProfileExtractor {
    names: NameResolver,
    skills: SkillMatcher,
    education: EducationExtractor,
}

impl ProfileExtractor {
    pub fn new() -> Self {
        Self {
            names: NameResolver::new(),
            skills: SkillMatcher::new(),
            education: EducationExtractor::new(),
        }
    }

    /// Overrides the fuzzy acceptance threshold of the skill matcher.
    pub fn with_min_fuzzy_score(mut self, score: f64) -> Self {
        self.skills = SkillMatcher::new().with_min_score(score);
        self
    }

    /// Parses already-decoded résumé text into a structured profile.
    /// Absent fields are normal outcomes; this never fails on malformed
    /// text.
    pub fn parse(&self, text: &str) -> ParsedProfile {
        let normalized = normalize(text);
        tracing::debug!(
            "Parsing resume text ({} chars raw, {} normalized)",
            text.chars().count(),
            normalized.chars().count()
        );

        let profile = ParsedProfile {
            // Positional extractors read the raw line structure; pattern
            // extractors read the normalized text.
            name: self.names.resolve(text),
            email: contact::extract_email(&normalized),
            phone: contact::extract_phone(&normalized),
            skills: self.skills.extract_skills(&normalized),
            experience_years: experience::extract_experience_years(&normalized),
            education: self.education.extract(text),
            raw_preview: normalized.chars().take(PREVIEW_CHARS).collect(),
        };

        tracing::info!(
            "Parse complete: {} of 6 fields populated, {} skill(s), {} education entr(ies)",
            profile.populated_field_count(),
            profile.skills.len(),
            profile.education.len()
        );
        profile
    }
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_block_scenario() {
        let extractor = ProfileExtractor::new();
        let profile = extractor.parse("John Smith\njohn.smith@email.com\n+1234567890");
        assert_eq!(profile.name.as_deref(), Some("John Smith"));
        assert_eq!(profile.email.as_deref(), Some("john.smith@email.com"));
        assert_eq!(profile.phone.as_deref(), Some("+1234567890"));
    }

    #[test]
    fn test_full_resume() {
        let text = "Jane Doe\njane.doe@corp.example\n+1 555-123-4567\n\nSummary\n8 years of experience building services in Python and Docker.\n\nEducation\nBachelor's Degree in Computer Science, University of Washington";
        let profile = ProfileExtractor::new().parse(text);
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane.doe@corp.example"));
        assert_eq!(profile.experience_years, Some(8));
        assert!(profile.skills.contains("Python"));
        assert!(profile.skills.contains("Docker"));
        assert!(!profile.education.is_empty());
    }

    #[test]
    fn test_invalid_text_yields_empty_profile() {
        let profile = ProfileExtractor::new().parse("##invalid###");
        assert_eq!(profile.name, None);
        assert_eq!(profile.email, None);
        assert_eq!(profile.phone, None);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience_years, None);
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let profile = ProfileExtractor::new().parse("");
        assert_eq!(profile.populated_field_count(), 0);
        assert_eq!(profile.raw_preview, "");
    }

    #[test]
    fn test_preview_is_bounded() {
        let text = "word ".repeat(500);
        let profile = ProfileExtractor::new().parse(&text);
        assert!(profile.raw_preview.chars().count() <= PREVIEW_CHARS);
    }
}
