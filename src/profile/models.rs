// src/profile/models.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Structured candidate facts extracted from one résumé text.
///
/// Absent fields are a normal outcome, not an error: a résumé with no
/// recognizable phone number simply carries `phone: None`. `skills` holds
/// canonical display labels with duplicates collapsed; a `BTreeSet` keeps
/// the serialized output stable across runs. `education` holds at most
/// three entries, most complete (longest) first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: BTreeSet<String>,
    pub experience_years: Option<u32>,
    pub education: Vec<String>,
    /// First 500 characters of the normalized input. Diagnostic only,
    /// not authoritative data.
    pub raw_preview: String,
}

impl ParsedProfile {
    /// Number of top-level fields that were actually populated.
    pub fn populated_field_count(&self) -> usize {
        let mut count = 0;
        if self.name.is_some() {
            count += 1;
        }
        if self.email.is_some() {
            count += 1;
        }
        if self.phone.is_some() {
            count += 1;
        }
        if !self.skills.is_empty() {
            count += 1;
        }
        if self.experience_years.is_some() {
            count += 1;
        }
        if !self.education.is_empty() {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_field_count() {
        let mut profile = ParsedProfile {
            name: None,
            email: None,
            phone: None,
            skills: BTreeSet::new(),
            experience_years: None,
            education: Vec::new(),
            raw_preview: String::new(),
        };
        assert_eq!(profile.populated_field_count(), 0);

        profile.name = Some("John Smith".to_string());
        profile.skills.insert("Python".to_string());
        assert_eq!(profile.populated_field_count(), 2);
    }
}
