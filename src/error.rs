//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for the application layer (CLI, server, loaders).
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned by a [`LocationStore`](crate::store::LocationStore) query.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Dataset file could not be read.
    #[error("failed to read dataset at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Dataset file was read but is not a JSON array of location records.
    #[error("failed to parse dataset at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The backing store could not answer the query.
    #[error("location store unavailable: {0}")]
    Unavailable(String),
}

/// Error returned by [`LookupEngine`](crate::lookup::LookupEngine) operations.
///
/// A store failure anywhere in the pipeline fails the whole lookup; there are
/// no partial results.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup failed: {0}")]
    Store(#[from] StoreError),
}
