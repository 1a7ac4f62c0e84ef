//! `config.toml`: storage location and quota, display width, logging.

/// Template written by `bmd config init`.
pub mod default;

pub mod error;

/// Reading and parsing with line:column errors.
pub mod loader;

/// `[storage]`, `[display]` and `[logging]` sections.
pub mod schema;

/// Config and data directory resolution.
pub mod xdg;
