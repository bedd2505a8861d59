// src/extractors/normalize.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns (Lazy Static) ---
static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RUN_RE"));

/// Collapses every maximal whitespace run (newlines, tabs, repeated spaces)
/// into a single ASCII space and canonicalizes pipe-delimited section
/// separators to `" | "`.
///
/// PDF text extraction frequently emits one word per line; multi-word
/// patterns (names, degree phrases) can only match after this repair.
/// Pure function, total over any input; empty input yields empty output,
/// and the operation is idempotent.
pub fn normalize(text: &str) -> String {
    let collapsed = WHITESPACE_RUN_RE.replace_all(text, " ");
    let respaced = collapsed
        .split('|')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" | ");
    respaced.trim().to_string()
}

/// Splits raw text into non-empty lines on newlines only, collapsing
/// whitespace within each line. Preserves pipe characters in place for
/// extractors that treat them as in-line tokens.
pub fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(collapse_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Splits raw text into non-empty segments, treating both newlines and
/// pipes as separators. Columnar résumé layouts pack several logical
/// lines into one physical line delimited by pipes; the positional
/// extractors need each of those as its own unit.
pub fn segments(text: &str) -> Vec<String> {
    text.split(['\n', '|'])
        .map(collapse_line)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn collapse_line(line: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(line, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("John\n\nSmith\t Developer"), "John Smith Developer");
        assert_eq!(normalize("  leading and trailing  "), "leading and trailing");
    }

    #[test]
    fn test_word_per_line_repair() {
        let word_per_line = "Bachelor\nof\nScience\nin\nPhysics";
        assert_eq!(normalize(word_per_line), "Bachelor of Science in Physics");
    }

    #[test]
    fn test_pipe_respacing() {
        assert_eq!(normalize("John Smith|Developer"), "John Smith | Developer");
        assert_eq!(normalize("a |  b|c"), "a | b | c");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "John\nSmith",
            "a | b|c",
            "  spaced\t\tout  text \n",
            "",
            "##invalid###",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_lines_keeps_pipes_in_place() {
        let text = "Robert Williams | robert@email.com\n\nSkills";
        assert_eq!(
            lines(text),
            vec!["Robert Williams | robert@email.com".to_string(), "Skills".to_string()]
        );
    }

    #[test]
    fn test_segments_split_on_newline_and_pipe() {
        let text = "Robert Williams | robert@email.com | +1 555-000-1234\nSkills";
        assert_eq!(
            segments(text),
            vec![
                "Robert Williams".to_string(),
                "robert@email.com".to_string(),
                "+1 555-000-1234".to_string(),
                "Skills".to_string(),
            ]
        );
    }
}
