//! Error types for the catalog pipeline and CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by catalog operations.
///
/// Documents skipped for a missing `name` are not errors; they are reported
/// through [`crate::catalog::SkippedDocument`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Agents directory not found: {}", .0.display())]
    SourceDirMissing(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
