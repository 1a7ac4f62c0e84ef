//! Header and widget accent colors.

use serde::Serialize;

use crate::model::{present, AppSettings, Widget};
use crate::presets::HEADER_GLASS_DARK;
use crate::style::color::{hex_to_rgba, is_hex_color, Rgba};

/// Opacity applied to every widget panel color, keeping the glass look.
pub const WIDGET_ACCENT_ALPHA: f32 = 0.4;

/// Panel class used when a widget has no usable accent color.
pub const DEFAULT_PANEL_CLASS: &str = "bg-slate-900/40";

/// Effective header styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum HeaderStyle {
    /// Custom `#RRGGBB` color as an inline background.
    Custom(String),
    /// Preset class token.
    Preset(String),
}

/// Resolves the header style.
///
/// A valid custom color wins outright. Otherwise the preset token is used; an
/// empty token (left behind when a custom color was chosen and later became
/// unusable) falls back to the glass-dark preset.
pub fn resolve_header(settings: &AppSettings) -> HeaderStyle {
    if let Some(color) = present(&settings.custom_header_color).filter(|c| is_hex_color(c)) {
        return HeaderStyle::Custom(color.to_string());
    }
    if settings.header_style.is_empty() {
        HeaderStyle::Preset(HEADER_GLASS_DARK.to_string())
    } else {
        HeaderStyle::Preset(settings.header_style.clone())
    }
}

/// Effective widget panel fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelFill {
    /// Accent color at [`WIDGET_ACCENT_ALPHA`].
    Tinted(Rgba),
    /// [`DEFAULT_PANEL_CLASS`].
    Default,
}

impl PanelFill {
    /// Inline style for the panel, if tinted.
    pub fn inline_style(&self) -> Option<String> {
        match self {
            PanelFill::Tinted(rgba) => Some(format!("background-color: {rgba}")),
            PanelFill::Default => None,
        }
    }

    /// Class for the panel, if not tinted.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            PanelFill::Tinted(_) => None,
            PanelFill::Default => Some(DEFAULT_PANEL_CLASS),
        }
    }
}

/// The `#RRGGBB` accent a widget resolves to, if any: its own color when
/// valid, else the global widget color when valid.
pub fn widget_accent<'a>(widget: &'a Widget, settings: &'a AppSettings) -> Option<&'a str> {
    present(&widget.custom_background_color)
        .filter(|c| is_hex_color(c))
        .or_else(|| present(&settings.custom_widget_color).filter(|c| is_hex_color(c)))
}

/// Resolves the widget panel fill.
pub fn resolve_widget_fill(widget: &Widget, settings: &AppSettings) -> PanelFill {
    widget_accent(widget, settings)
        .and_then(|hex| hex_to_rgba(hex, WIDGET_ACCENT_ALPHA))
        .map(PanelFill::Tinted)
        .unwrap_or(PanelFill::Default)
}
