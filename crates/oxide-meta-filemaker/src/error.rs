//! Error types for snapshot loading and the CLI.

use std::path::PathBuf;

use oxide_meta_core::IntrospectError;

/// Errors that can occur outside of a single table introspection.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// Introspection of a table failed.
    #[error(transparent)]
    Introspect(#[from] IntrospectError),

    /// IO error while reading a snapshot file.
    #[error("Failed to read snapshot '{path}': {source}")]
    Io {
        /// Path to the snapshot file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Snapshot content is not valid JSON for the expected layout.
    #[error("Invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested table is not in the snapshot.
    #[error("Table not found: {0}")]
    TableNotFound(String),
}

/// Result type for snapshot and CLI operations.
pub type Result<T> = std::result::Result<T, MetaError>;
