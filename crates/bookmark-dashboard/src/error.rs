//! Top-level error type for the `bmd` command line.
//!
//! The reducer itself never fails: it ignores references it cannot resolve.
//! The CLI checks references before dispatching so a typo is reported instead
//! of silently doing nothing.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::error::ConfigError;
use crate::model::ParseEnumError;
use crate::upload::UploadError;

/// Errors surfaced to the user by `bmd`.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration could not be loaded or written.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The state store failed.
    #[error(transparent)]
    Store(#[from] local_store::StoreError),

    /// An image upload failed.
    #[error(transparent)]
    Upload(#[from] UploadError),

    /// The view could not be serialized.
    #[error("Failed to serialize dashboard: {0}")]
    Json(#[from] serde_json::Error),

    /// A closed enum value was not recognized.
    #[error(transparent)]
    InvalidValue(#[from] ParseEnumError),

    /// The log file could not be opened.
    #[error("Failed to open log file {path}")]
    LogFile {
        /// Configured log file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The async runtime could not be started.
    #[error("Failed to start runtime")]
    Runtime(#[source] std::io::Error),

    /// A background task panicked or was cancelled.
    #[error("Background task failed")]
    Task(#[from] tokio::task::JoinError),

    /// No page has this id.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// No widget on the active page has this id.
    #[error("Unknown widget on active page: {0}")]
    UnknownWidget(String),

    /// The widget has no bookmark with this id.
    #[error("Unknown bookmark in widget {widget_id}: {bookmark_id}")]
    UnknownBookmark {
        /// Widget that was searched.
        widget_id: String,
        /// Missing bookmark.
        bookmark_id: String,
    },

    /// The dashboard must keep at least one page.
    #[error("Cannot remove the last page")]
    LastPage,

    /// Input the reducer would ignore, e.g. an empty title.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
