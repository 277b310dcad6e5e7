//! Station store error types.

use std::path::PathBuf;

/// Errors that can occur when loading or querying stations.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The station file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// Reload was requested on a store that was not loaded from a file
    #[error("station store has no source file to reload from")]
    NoSource,

    /// A background load task failed
    #[error("load task failed: {message}")]
    Task { message: String },
}
