// src/utils/error.rs
#![allow(dead_code)]
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application.
// "Field not found" during extraction is NOT an error: the core extractors
// are total over any string and report absent fields as None or empty
// collections. Errors only arise at the edges (input decode, storage).
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file {}: {}", .0.display(), .1)]
    Unreadable(PathBuf, std::io::Error),

    #[error("Input file {} is not valid UTF-8 text (undecoded binary?)", .0.display())]
    NotText(PathBuf),

    #[error("No .txt files found under {}", .0.display())]
    NoInputFiles(PathBuf),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Input decode failed: {0}")]
    Input(#[from] InputError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
