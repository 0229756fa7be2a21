//! Error types for the auto-detection audit.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an audit run.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Corpus directory or sample file could not be read
    #[error("cannot read corpus for '{language}' at {}: {source}", path.display())]
    Corpus {
        language: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error outside any specific corpus
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

impl AuditError {
    /// Create a corpus error for a language directory or one of its samples.
    pub fn corpus(
        language: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        AuditError::Corpus {
            language: language.into(),
            path: path.into(),
            source,
        }
    }
}
