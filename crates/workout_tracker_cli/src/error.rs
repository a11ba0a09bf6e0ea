//! Input-boundary errors for the CLI.

use thiserror::Error;

/// Errors that abort a run: an unreadable input source or invalid JSON.
/// Per-entry classification failures never surface here; they become
/// diagnostic output lines instead.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        source: std::io::Error,
    },

    #[error("invalid packages JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
