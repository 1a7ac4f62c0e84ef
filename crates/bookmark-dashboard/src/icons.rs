//! Bookmark icon resolution.

use url::Url;

use crate::model::{present, Bookmark};

/// Icon shown when a bookmark URL has no usable host.
pub const PLACEHOLDER_ICON: &str = "https://via.placeholder.com/64?text=?";

/// Icon the surface swaps in when a resolved icon fails to load.
pub const BROKEN_ICON: &str = "https://via.placeholder.com/48?text=LINK";

/// Favicon service URL for the host of `url`, or [`PLACEHOLDER_ICON`] when
/// the URL does not parse or has no host (`mailto:` and the like).
pub fn favicon_url(url: &str) -> String {
    match Url::parse(url).ok().as_ref().and_then(Url::host_str) {
        Some(host) => format!("https://www.google.com/s2/favicons?domain={host}&sz=64"),
        None => PLACEHOLDER_ICON.to_string(),
    }
}

/// Image source for a bookmark: its custom icon if set, else its favicon.
pub fn icon_src(bookmark: &Bookmark) -> String {
    present(&bookmark.icon_url)
        .map(str::to_string)
        .unwrap_or_else(|| favicon_url(&bookmark.url))
}
