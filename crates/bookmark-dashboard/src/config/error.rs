//! Errors from reading, parsing and writing `config.toml`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why the configuration could not be loaded or written.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Cannot read configuration {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid TOML, or a value of the wrong type.
    ///
    /// `line` and `column` are 1-based, or 0 when the parser gave no position.
    #[error("Invalid configuration at {path}:{line}:{column}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// `--config` named a file that does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// `config init` without `--force` found an existing file.
    #[error("Configuration already exists at {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },

    /// Writing the template or its backup failed.
    #[error("Cannot write configuration {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
