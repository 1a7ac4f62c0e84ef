//! File-backed key-value storage with browser local-storage semantics
//!
//! This crate provides a tiny string-to-string store persisted as a single
//! JSON object on disk. It mirrors the surface of the web `localStorage` API
//! (`getItem`, `setItem`, `removeItem`) including a size quota, so code that
//! was written against local storage can keep its failure model: reads of
//! missing keys return `None`, oversized writes fail with
//! [`StoreError::QuotaExceeded`].
//!
//! Writes are atomic: the new content goes to a timestamped temp file which is
//! fsynced and renamed over the backing file.
//!
//! # Examples
//!
//! ```no_run
//! use local_store::LocalStore;
//!
//! let store = LocalStore::open("/tmp/storage.json");
//! store.set_item("greeting", "hello")?;
//! assert_eq!(store.get_item("greeting")?, Some("hello".to_string()));
//! # Ok::<(), local_store::StoreError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::{LocalStore, DEFAULT_QUOTA_BYTES};
