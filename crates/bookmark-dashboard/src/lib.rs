//! Bookmark Dashboard library
//!
//! A personalizable dashboard of bookmark collections: pages hold widgets,
//! widgets hold bookmarks. This crate owns everything except the pixels:
//!
//! - the data model and its persisted shape ([`model`], [`persistence`])
//! - every state transition as a pure reducer ([`state`]) behind a single
//!   writer that broadcasts committed snapshots ([`store`])
//! - which background, header and panel colors win ([`style`])
//! - column counts, container spans and masonry row spans ([`layout`])
//! - the render-ready view handed to a drawing surface ([`view`])
//!
//! The `bmd` binary drives all of it from the command line.

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Top-level error type for the command line.
pub mod error;

/// Bookmark icon sources.
pub mod icons;

/// Short random identifiers.
pub mod id;

/// Column counts, container spans and masonry row spans.
pub mod layout;

/// Tracing subscriber setup.
pub mod logging;

/// Pages, widgets, bookmarks and settings.
pub mod model;

/// Loading and saving through the local store.
pub mod persistence;

/// Built-in presets and the seed dashboard.
pub mod presets;

/// Actions and the reducer.
pub mod state;

/// Single-writer state store with change broadcast.
pub mod store;

/// Background, header and widget color resolution.
pub mod style;

/// Image uploads as `data:` URLs.
pub mod upload;

/// Render-ready dashboard view.
pub mod view;

pub use error::DashboardError;
pub use model::{AppSettings, AppState, Bookmark, Page, Widget};
pub use persistence::Persistence;
pub use state::Action;
pub use store::DashboardStore;
pub use view::DashboardView;
