//! Style resolution: which background, header and widget colors win.
//!
//! Everything here is total. Malformed or empty values are treated as unset
//! and resolution falls through to the next level, ending at a preset.

mod accent;
mod background;
mod color;

pub use accent::{
    resolve_header, resolve_widget_fill, widget_accent, HeaderStyle, PanelFill,
    DEFAULT_PANEL_CLASS, WIDGET_ACCENT_ALPHA,
};
pub use background::{resolve_background, Background, Overlay, ResolvedBackground};
pub use color::{hex_to_rgba, is_hex_color, HexColor, Rgba};
