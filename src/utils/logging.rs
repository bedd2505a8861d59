// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the tracing subscriber for the whole process.
///
/// Verbosity comes from the `RUST_LOG` environment variable and defaults
/// to "info"; the extraction internals (strategy decisions, pattern hits,
/// fuzzy scores) log at debug and trace.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();

    tracing::debug!("Logging setup complete.");
}
