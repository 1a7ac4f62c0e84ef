//! Backing-file I/O for [`LocalStore`]
//!
//! The file holds one JSON object whose values are all strings:
//! ```json
//! { "twlf_portal_data_v1": "{\"pages\":[...]}" }
//! ```
//! A missing file is an empty store. Anything else that is not an object of
//! strings is reported as [`StoreError::Parse`].

use crate::error::{Result, StoreError};
use chrono::Local;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Default quota, matching the 5 MiB most browsers grant an origin.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// String key-value store persisted to a single JSON file.
///
/// The store holds no in-memory cache: every call reads the file, so two
/// handles on the same path always observe each other's writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStore {
    path: PathBuf,
    quota: usize,
}

impl LocalStore {
    /// Opens a store backed by `path` with [`DEFAULT_QUOTA_BYTES`].
    ///
    /// Nothing is touched on disk until the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota: DEFAULT_QUOTA_BYTES,
        }
    }

    /// Replaces the quota (in bytes of keys plus values).
    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = quota;
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configured quota in bytes.
    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file exists but cannot be read.
    /// Returns `StoreError::Parse` if the file is not an object of strings.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut items = self.read_items()?;
        Ok(items.remove(key))
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::QuotaExceeded` if the store would grow past the
    /// quota; the file is left untouched in that case.
    /// Returns `StoreError::Io` / `StoreError::WriteAtomic` on write failure.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_items()?;
        items.insert(key.to_string(), value.to_string());

        let required = used_bytes(&items);
        if required > self.quota {
            log::warn!(
                "refusing to write '{}': {} bytes exceeds quota of {}",
                key,
                required,
                self.quota
            );
            return Err(StoreError::QuotaExceeded {
                key: key.to_string(),
                required,
                quota: self.quota,
            });
        }

        self.write_items(&items)?;
        log::debug!("stored '{}' ({} bytes total)", key, required);
        Ok(())
    }

    /// Removes `key`. Returns `true` if it was present.
    pub fn remove_item(&self, key: &str) -> Result<bool> {
        let mut items = self.read_items()?;
        if items.remove(key).is_none() {
            return Ok(false);
        }
        self.write_items(&items)?;
        Ok(true)
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read_items()?.into_keys().collect())
    }

    /// Bytes currently counted against the quota.
    pub fn used_bytes(&self) -> Result<usize> {
        Ok(used_bytes(&self.read_items()?))
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Temp-file-then-rename write.
    ///
    /// The temp file sits next to the target as
    /// `<name>.tmp.<timestamp>.<random>`, so concurrent writers never share
    /// one. It is deleted if writing or syncing fails. On rename failure it
    /// is kept as a safety copy and reported in the error.
    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(io_err)?;

        let json = serde_json::to_string_pretty(items).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let mut temp = Builder::new()
            .prefix(&temp_prefix(&self.path))
            .tempfile_in(dir)
            .map_err(io_err)?;
        temp.write_all(json.as_bytes()).map_err(io_err)?;
        temp.as_file().sync_all().map_err(io_err)?;

        temp.persist(&self.path).map_err(|e| {
            let temp_path = e.file.path().to_path_buf();
            if let Err(keep) = e.file.keep() {
                log::warn!("could not keep temp file {}: {}", temp_path.display(), keep);
            }
            StoreError::WriteAtomic {
                path: self.path.clone(),
                temp_path,
            }
        })?;

        Ok(())
    }
}

/// `<name>.tmp.<timestamp>.`; the temp file builder appends a random part.
fn temp_prefix(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "storage.json".to_string());
    let timestamp = Local::now().format("%Y%m%d-%H%M%S%.6f");
    format!("{file_name}.tmp.{timestamp}.")
}

fn used_bytes(items: &BTreeMap<String, String>) -> usize {
    items.iter().map(|(k, v)| k.len() + v.len()).sum()
}
