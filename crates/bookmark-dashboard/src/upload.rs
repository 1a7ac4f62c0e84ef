//! Image uploads as embedded `data:` URLs.
//!
//! An upload reads the file asynchronously, encodes it and merges it into
//! whatever state is current when the read completes. Uploads are not
//! ordered against each other or against other actions; the last one to
//! finish wins.

use base64::Engine;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::state::{Action, BackgroundChoice, BookmarkChanges};
use crate::store::DashboardStore;

/// File extensions accepted for uploads.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "ico"];

/// Errors from reading an upload.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The file could not be read.
    #[error("Failed to read upload: {path}")]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not an accepted image type.
    #[error("Unsupported image type: {path} (accepted: .png, .jpg, .jpeg, .ico)")]
    UnsupportedType {
        /// Rejected file.
        path: PathBuf,
    },

    /// The file has no content.
    #[error("Upload is empty: {path}")]
    Empty {
        /// Empty file.
        path: PathBuf,
    },
}

/// `true` if `path` has one of the [`ACCEPTED_EXTENSIONS`] (any case).
pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Encodes `bytes` as `data:<mime>;base64,<payload>`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{payload}")
}

/// Reads an image file into a `data:` URL.
pub async fn read_data_url(path: &Path) -> Result<String, UploadError> {
    if !is_accepted(path) {
        return Err(UploadError::UnsupportedType {
            path: path.to_path_buf(),
        });
    }
    let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(UploadError::Empty {
            path: path.to_path_buf(),
        });
    }
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(encode_data_url(mime.essence_str(), &bytes))
}

/// Where an uploaded image ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadTarget {
    /// Custom app icon.
    AppIcon,
    /// Global background image.
    GlobalBackground,
    /// Background image of one page.
    PageBackground(String),
    /// Custom icon of one bookmark on the active page.
    BookmarkIcon {
        /// Owning widget.
        widget_id: String,
        /// Target bookmark.
        bookmark_id: String,
    },
}

impl UploadTarget {
    /// The action merging `data` into this target.
    pub fn into_action(self, data: String) -> Action {
        match self {
            UploadTarget::AppIcon => Action::SetCustomAppIcon(data),
            UploadTarget::GlobalBackground => {
                Action::SetGlobalBackground(BackgroundChoice::Image(data))
            }
            UploadTarget::PageBackground(page_id) => Action::SetPageBackground {
                page_id,
                choice: BackgroundChoice::Image(data),
            },
            UploadTarget::BookmarkIcon {
                widget_id,
                bookmark_id,
            } => Action::UpdateBookmark {
                widget_id,
                bookmark_id,
                changes: BookmarkChanges {
                    icon_url: Some(Some(data)),
                    ..Default::default()
                },
            },
        }
    }
}

/// Reads `path` in the background and dispatches the result into `store`.
///
/// The handle may be dropped; the upload still completes. Read failures are
/// logged and returned through the handle.
pub fn spawn_upload(
    store: &DashboardStore,
    path: PathBuf,
    target: UploadTarget,
) -> JoinHandle<Result<(), UploadError>> {
    let store = store.clone();
    tokio::spawn(async move {
        let data = match read_data_url(&path).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, "upload failed");
                return Err(e);
            }
        };
        tracing::debug!(path = %path.display(), bytes = data.len(), ?target, "upload read");
        store.dispatch(target.into_action(data)).await;
        Ok(())
    })
}
