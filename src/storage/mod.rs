// src/storage/mod.rs
use crate::profile::ParsedProfile;
use crate::utils::error::StorageError;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves the parsed profile as pretty-printed JSON, named after the
    /// input file's stem.
    pub fn save_profile(
        &self,
        stem: &str,
        profile: &ParsedProfile,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_profile.json", stem));

        let profile_json = serde_json::to_string_pretty(profile)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, profile_json).map_err(StorageError::IoError)?;

        tracing::info!("Saved profile to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves extraction metadata for the profile in JSON format
    pub fn save_profile_metadata(
        &self,
        stem: &str,
        profile: &ParsedProfile,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_profile_meta.json", stem));

        let metadata = serde_json::json!({
            "source_stem": stem,
            "parsed_at": chrono::Utc::now().to_rfc3339(),
            "populated_field_count": profile.populated_field_count(),
            "has_name": profile.name.is_some(),
            "has_email": profile.email.is_some(),
            "has_phone": profile.phone.is_some(),
            "has_experience_years": profile.experience_years.is_some(),
            "skill_count": profile.skills.len(),
            "education_count": profile.education.len(),
            "preview_chars": profile.raw_preview.chars().count(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
