// src/main.rs
mod extractors;
mod profile;
mod storage;
mod utils;

use clap::Parser;
use extractors::ProfileExtractor;
use std::path::{Path, PathBuf};
use storage::StorageManager;
use utils::error::InputError;
use utils::AppError;

/// Command Line Interface for the résumé field extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// A résumé text file, or a directory of .txt files
    input: PathBuf,

    /// Output directory for parsed profiles
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Override the fuzzy-match acceptance score (0-100)
    #[arg(long)]
    min_fuzzy_score: Option<f64>,

    /// Print each parsed profile to stdout as JSON
    #[arg(short, long)]
    print: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Initialize the extractor, applying any threshold override
    let mut extractor = ProfileExtractor::new();
    if let Some(score) = args.min_fuzzy_score {
        if !(0.0..=100.0).contains(&score) {
            return Err(AppError::Config(format!(
                "min_fuzzy_score must be within 0-100, got {}",
                score
            )));
        }
        tracing::debug!("Overriding fuzzy-match score threshold to {}", score);
        extractor = extractor.with_min_fuzzy_score(score);
    }

    // 5. Collect input files
    let inputs = collect_inputs(&args.input)?;
    tracing::info!("Found {} input file(s)", inputs.len());

    // 6. Process each file
    let mut success_count = 0;
    let mut failure_count = 0;

    for path in &inputs {
        tracing::info!("Processing file: {}", path.display());

        match read_text(path) {
            Ok(text) => {
                let profile = extractor.parse(&text);

                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "profile".to_string());

                if args.print {
                    match serde_json::to_string_pretty(&profile) {
                        Ok(json) => println!("{}", json),
                        Err(e) => tracing::warn!("Failed to render profile JSON: {}", e),
                    }
                }

                match storage.save_profile(&stem, &profile) {
                    Ok(path) => tracing::info!("Saved profile to: {}", path.display()),
                    Err(e) => tracing::error!("Failed to save profile: {}", e),
                }

                match storage.save_profile_metadata(&stem, &profile) {
                    Ok(path) => tracing::info!("Saved metadata to: {}", path.display()),
                    Err(e) => tracing::error!("Failed to save metadata: {}", e),
                }

                success_count += 1;
            }
            Err(e) => {
                // Undecoded or unreadable input is the collaborator's error
                // category; the file is skipped, not fatal for the batch.
                tracing::error!("Skipping {}: {}", path.display(), e);
                failure_count += 1;
            }
        }
    }

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        success_count,
        failure_count
    );

    if success_count == 0 && failure_count > 0 {
        return Err(AppError::Processing(format!(
            "Failed to parse any of {} input file(s)",
            failure_count
        )));
    }

    Ok(())
}

/// Expands the input path into the list of files to parse: the path itself,
/// or every .txt file directly under it when it is a directory.
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>, AppError> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(input)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("txt"))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(InputError::NoInputFiles(input.to_path_buf()).into());
    }

    Ok(files)
}

/// Reads a file as UTF-8 text. Anything that fails here is an upstream
/// decode problem, never passed into the extraction core.
fn read_text(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path).map_err(|e| InputError::Unreadable(path.to_path_buf(), e))?;
    String::from_utf8(bytes).map_err(|_| InputError::NotText(path.to_path_buf()))
}
