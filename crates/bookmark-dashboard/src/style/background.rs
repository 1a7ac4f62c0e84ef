//! Page background resolution.
//!
//! Priority, first match wins:
//! 1. page custom image
//! 2. page custom color
//! 3. global custom image
//! 4. global custom color
//! 5. page preset, else global preset
//!
//! Colors that are not `#RRGGBB` count as unset and fall through.

use serde::Serialize;

use crate::model::{present, AppSettings, Page};
use crate::style::color::is_hex_color;

/// The background that wins resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Background {
    /// Embedded image, drawn full-cover, fixed and centered.
    Image(String),
    /// Flat `#RRGGBB` color.
    Color(String),
    /// Preset class token.
    Preset(String),
}

impl Background {
    /// Inline style declarations for the page root, if any.
    pub fn inline_style(&self) -> Option<String> {
        match self {
            Background::Image(data) => Some(format!(
                "background-image: url({data}); background-size: cover; \
                 background-position: center; background-attachment: fixed"
            )),
            Background::Color(color) => Some(format!("background-color: {color}")),
            Background::Preset(_) => None,
        }
    }

    /// Class token for the page root, if any.
    pub fn class(&self) -> Option<&str> {
        match self {
            Background::Preset(token) => Some(token),
            _ => None,
        }
    }
}

/// Decorative layer drawn between the background and the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    /// Soft colored glows, for preset and flat-color backgrounds.
    Ambient,
    /// Translucent black wash keeping text legible over photographs.
    Darken,
}

/// Output of [`resolve_background`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBackground {
    /// Winning background.
    pub background: Background,
    /// Overlay to draw on top of it.
    pub overlay: Overlay,
}

fn valid_color(value: &Option<String>) -> Option<&str> {
    present(value).filter(|c| is_hex_color(c))
}

/// Resolves the effective background of `page` under `settings`.
///
/// `page` is `None` only for a dashboard with no pages, in which case the
/// global chain applies.
pub fn resolve_background(page: Option<&Page>, settings: &AppSettings) -> ResolvedBackground {
    let page_image = page.and_then(|p| present(&p.custom_background_image_data));
    let page_color = page.and_then(|p| valid_color(&p.custom_background_color));
    let global_image = present(&settings.custom_background_image_data);
    let global_color = valid_color(&settings.custom_background_color);

    let background = if let Some(data) = page_image {
        Background::Image(data.to_string())
    } else if let Some(color) = page_color {
        Background::Color(color.to_string())
    } else if let Some(data) = global_image {
        Background::Image(data.to_string())
    } else if let Some(color) = global_color {
        Background::Color(color.to_string())
    } else {
        let preset = page
            .and_then(|p| present(&p.background))
            .unwrap_or(&settings.background);
        Background::Preset(preset.to_string())
    };

    let overlay = if page_image.is_some() || global_image.is_some() {
        Overlay::Darken
    } else {
        Overlay::Ambient
    };

    ResolvedBackground {
        background,
        overlay,
    }
}
