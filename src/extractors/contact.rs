// src/extractors/contact.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // Canonical local@domain.tld shape: alphanumerics plus ._%+- in the
    // local part, dotted labels in the domain, 2+ letter TLD.
    Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b")
        .expect("Failed to compile EMAIL_RE")
});

// Ordered most-specific-first. The permissive digit-run fallback must come
// last: trying it earlier would truncate a longer international number.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // International with country code and flexible separators:
        // +1 555-123-4567, +44 (20) 7946 0958
        r"\+\d{1,3}[\s.-]?\(?\d{2,4}\)?(?:[\s.-]?\d{2,4}){1,4}",
        // International without separators: +1234567890
        r"\+\d{8,15}",
        // Generic grouped formats: (234) 567-8900, 234.567.8900
        r"\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}",
        // Bare digit-run fallback
        r"\b\d{8,12}\b",
    ]
    .iter()
    .filter_map(|pat| Regex::new(pat).ok())
    .collect()
});

/// Returns the leftmost well-formed email token, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Returns the first match of the first phone pattern that hits.
/// Patterns are tried most-specific-first so that a full international
/// number wins over a partial digit-run match.
pub fn extract_phone(text: &str) -> Option<String> {
    for (idx, re) in PHONE_PATTERNS.iter().enumerate() {
        if let Some(m) = re.find(text) {
            tracing::debug!("Phone pattern {} matched '{}'", idx, m.as_str());
            return Some(m.as_str().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_email_exact_token() {
        let text = "John Smith john.smith@email.com +1234567890";
        assert_eq!(extract_email(text), Some("john.smith@email.com".to_string()));
    }

    #[test]
    fn test_extract_email_case_insensitive() {
        assert_eq!(
            extract_email("Contact: Jane.DOE+work@Example.ORG"),
            Some("Jane.DOE+work@Example.ORG".to_string())
        );
    }

    #[test]
    fn test_extract_email_leftmost_wins() {
        let text = "first@one.com second@two.com";
        assert_eq!(extract_email(text), Some("first@one.com".to_string()));
    }

    #[test]
    fn test_extract_email_absent() {
        assert_eq!(extract_email("no contact information here"), None);
        assert_eq!(extract_email(""), None);
    }

    #[test]
    fn test_phone_international_with_separators() {
        assert_eq!(
            extract_phone("Call +1 555-123-4567 any time"),
            Some("+1 555-123-4567".to_string())
        );
    }

    #[test]
    fn test_phone_international_without_separators_not_truncated() {
        // The full number must survive; a looser pattern tried first would
        // have cut it short.
        assert_eq!(extract_phone("+1234567890"), Some("+1234567890".to_string()));
    }

    #[test]
    fn test_phone_grouped_formats() {
        assert_eq!(
            extract_phone("(234) 567-8900"),
            Some("(234) 567-8900".to_string())
        );
        assert_eq!(extract_phone("234.567.8900"), Some("234.567.8900".to_string()));
    }

    #[test]
    fn test_phone_bare_digit_fallback() {
        assert_eq!(extract_phone("id 87654321 on file"), Some("87654321".to_string()));
    }

    #[test]
    fn test_phone_absent() {
        assert_eq!(extract_phone("no numbers at all"), None);
        assert_eq!(extract_phone(""), None);
    }
}
