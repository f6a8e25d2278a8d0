use std::path::PathBuf;

use thiserror::Error;

use crate::source::SourceError;

/// Custom error types for autosuggest
#[derive(Debug, Error)]
pub enum AutosuggestError {
    #[error("Invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Suggestion source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
