// src/profile/vocab.rs
use once_cell::sync::Lazy;
use std::collections::HashMap;

// --- Static Tables ---
// Canonical skill keys, lower-case. Multi-word entries ("machine learning")
// are matched as whole phrases; entries carrying symbol characters
// ("c#", "node.js") are matched by raw substring search since word-boundary
// tokenization cannot represent them.
const SKILL_KEYS: &[&str] = &[
    // Languages
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "rust",
    "php",
    "ruby",
    "kotlin",
    "swift",
    "bash",
    // Web & frameworks
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "spring",
    "rails",
    "laravel",
    ".net",
    "html",
    "css",
    "sass",
    "rest",
    "api",
    "graphql",
    "microservices",
    // Data stores & pipelines
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "kafka",
    "rabbitmq",
    "spark",
    "hadoop",
    // ML & analytics
    "machine learning",
    "deep learning",
    "data analysis",
    "data science",
    "nlp",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    "excel",
    "powerpoint",
    "power bi",
    "tableau",
    // Infrastructure & tooling
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "terraform",
    "ansible",
    "jenkins",
    "git",
    "linux",
    "ci/cd",
    "devops",
    // Design
    "ui/ux",
    "figma",
    // Process & soft skills
    "agile",
    "scrum",
    "communication",
    "leadership",
    "project management",
    "teamwork",
    "problem solving",
];

// Informal tokens seen in the wild, mapped to their canonical key.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("k8s", "kubernetes"),
    ("nodejs", "node.js"),
    ("node", "node.js"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("angularjs", "angular"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("mongo", "mongodb"),
    ("ml", "machine learning"),
    ("tf", "tensorflow"),
    ("sklearn", "scikit-learn"),
    ("cpp", "c++"),
    ("csharp", "c#"),
    ("dotnet", ".net"),
];

// Keys whose display form is not derivable from title-casing. Symbol-bearing
// keys already render in their literal vocabulary form and need no entry.
const SPECIAL_DISPLAY: &[(&str, &str)] = &[("nlp", "NLP")];

// --- Vocabulary ---

/// Closed skill vocabulary: canonical keys plus an alias table.
///
/// Constructed once at startup and shared immutably across all parses;
/// never mutated afterwards, so concurrent use needs no locking.
pub struct SkillVocabulary {
    skills: Vec<&'static str>,
    aliases: HashMap<&'static str, &'static str>,
    special_display: HashMap<&'static str, &'static str>,
}

/// Process-wide default vocabulary, built on first use.
pub static DEFAULT_VOCABULARY: Lazy<SkillVocabulary> =
    Lazy::new(SkillVocabulary::from_default_tables);

impl SkillVocabulary {
    /// Builds the vocabulary from the built-in static tables.
    pub fn from_default_tables() -> Self {
        Self {
            skills: SKILL_KEYS.to_vec(),
            aliases: SKILL_ALIASES.iter().copied().collect(),
            special_display: SPECIAL_DISPLAY.iter().copied().collect(),
        }
    }

    /// All canonical skill keys.
    pub fn skills(&self) -> &[&'static str] {
        &self.skills
    }

    /// Resolves an informal token ("k8s") to its canonical key, if known.
    pub fn resolve_alias(&self, token: &str) -> Option<&'static str> {
        self.aliases.get(token).copied()
    }

    /// True if the key carries characters that word-boundary tokenization
    /// cannot represent (anything outside lower-case alphanumerics and
    /// spaces, e.g. "c#", "ci/cd", "scikit-learn").
    pub fn is_symbol_key(key: &str) -> bool {
        key.chars()
            .any(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && c != ' ')
    }

    /// Display form for a canonical key: symbol-bearing keys keep their
    /// literal vocabulary form, a fixed set has explicit casing, everything
    /// else renders in title case.
    pub fn display_label(&self, key: &str) -> String {
        if let Some(label) = self.special_display.get(key) {
            return (*label).to_string();
        }
        if Self::is_symbol_key(key) {
            return key.to_string();
        }
        title_case(key)
    }
}

fn title_case(key: &str) -> String {
    key.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
