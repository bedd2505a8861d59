// src/extractors/mod.rs
pub mod aggregate;
pub mod contact;
pub mod education;
pub mod experience;
pub mod name;
pub mod normalize;
pub mod skills;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use aggregate::ProfileExtractor;
#[allow(unused_imports)]
pub use education::EducationExtractor;
#[allow(unused_imports)]
pub use name::{NameResolver, NameStrategy};
#[allow(unused_imports)]
pub use skills::SkillMatcher;
