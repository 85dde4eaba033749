//! Tracing setup. Output goes to a file so it does not tear the UI.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_tracing(log_file: &Path, default_filter: &str) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("Invalid log filter {:?}", default_filter))?;

    // Already initialized is fine (tests, repeated runs in one process).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
