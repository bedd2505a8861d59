// src/profile/mod.rs
pub mod models;
pub mod vocab;

// Re-export key profile types for convenience
pub use models::ParsedProfile;
pub use vocab::SkillVocabulary;
