//! Error types for local-store
//!
//! Every fallible operation on a [`LocalStore`](crate::LocalStore) returns
//! [`StoreError`]. Callers that treat storage as best-effort (as the dashboard
//! does) log these and move on.

use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error reading or writing the backing file
    #[error("Failed to access storage file {path}: {source}")]
    Io {
        /// Path to the backing file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a JSON object of string values
    #[error("Failed to parse storage file {path}: {message}")]
    Parse {
        /// Path to the backing file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Writing the item would exceed the configured quota
    #[error("Storage quota exceeded writing '{key}': {required} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Total size the store would have after the write
        required: usize,
        /// Configured quota in bytes
        quota: usize,
    },

    /// Rename of the temp file failed; the temp file is left in place
    #[error("Failed to write storage atomically: {path} - Safety copy at: {temp_path}")]
    WriteAtomic {
        /// Path to the backing file
        path: PathBuf,
        /// Path to the temporary safety copy
        temp_path: PathBuf,
    },
}

/// Result type alias for local-store operations
pub type Result<T> = std::result::Result<T, StoreError>;
