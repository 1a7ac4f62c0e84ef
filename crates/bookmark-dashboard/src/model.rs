//! Dashboard data model: pages own widgets, widgets own bookmarks.
//!
//! The serde shape of these types *is* the persisted record: camelCase keys,
//! optional fields omitted when absent. Records written by earlier versions
//! that lack `settings` are patched up by the persistence layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::presets;

/// Error type for parsing one of the closed model enums from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Which enum was being parsed (e.g. `"widget size"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for ParseEnumError {}

/// Implements `Display`, `FromStr` and `ALL` for a fieldless enum using the
/// same lowercase names serde uses.
macro_rules! closed_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The lowercase wire name of this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

/// How a widget lays out its bookmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStyle {
    /// Compact rows: icon and title.
    List,
    /// Rows with icon, title and description.
    Detailed,
    /// Square icon tiles.
    Grid,
}

closed_enum!(ViewStyle, "view style", {
    List => "list",
    Detailed => "detailed",
    Grid => "grid",
});

/// Footprint of a widget on the page grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    /// A quarter of the page on wide screens.
    Small,
    /// Half of the page.
    Medium,
    /// Three quarters of the page on wide screens.
    Large,
    /// The full page width.
    Full,
}

closed_enum!(WidgetSize, "widget size", {
    Small => "small",
    Medium => "medium",
    Large => "large",
    Full => "full",
});

/// Tile density of a widget in grid view. Smaller tiles pack more per row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridItemSize {
    /// Dense tiles.
    Small,
    /// Medium tiles.
    Medium,
    /// Large tiles (the default when unset).
    #[default]
    Large,
}

closed_enum!(GridItemSize, "grid item size", {
    Small => "small",
    Medium => "medium",
    Large => "large",
});

/// Built-in application icons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppIcon {
    /// Generic layout glyph.
    #[default]
    Layout,
    /// Scales of justice.
    Scale,
    /// Briefcase.
    Briefcase,
    /// Gavel.
    Gavel,
    /// Shield.
    Shield,
}

closed_enum!(AppIcon, "app icon", {
    Layout => "layout",
    Scale => "scale",
    Briefcase => "briefcase",
    Gavel => "gavel",
    Shield => "shield",
});

/// Widget type tag. Only bookmark widgets exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// A list of links.
    #[default]
    Bookmarks,
}

/// A single link entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Opaque short identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Optional one-line description (shown in detailed view).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Custom icon: a URL or an embedded `data:` URL. Falls back to a favicon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A titled, sized, styled collection of bookmarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Opaque short identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Type tag, always `bookmarks`.
    #[serde(rename = "type", default)]
    pub kind: WidgetKind,
    /// Footprint on the page grid.
    pub size: WidgetSize,
    /// Bookmark presentation.
    pub view_style: ViewStyle,
    /// Tile density in grid view; `None` means [`GridItemSize::Large`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_item_size: Option<GridItemSize>,
    /// Owned bookmarks, in display order.
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    /// `#RRGGBB` panel color overriding the global widget accent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_background_color: Option<String>,
}

impl Widget {
    /// Creates an empty medium list widget, the shape every new widget starts in.
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            kind: WidgetKind::Bookmarks,
            size: WidgetSize::Medium,
            view_style: ViewStyle::List,
            grid_item_size: None,
            bookmarks: Vec::new(),
            custom_background_color: None,
        }
    }

    /// Effective grid density, defaulting to large.
    pub fn grid_density(&self) -> GridItemSize {
        self.grid_item_size.unwrap_or_default()
    }

    /// Looks up a bookmark by id.
    pub fn bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }
}

/// A named collection of widgets with an optional background override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Opaque short identifier.
    pub id: String,
    /// Tab title.
    pub title: String,
    /// Subtitle shown under the page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owned widgets, in display order.
    #[serde(default)]
    pub widgets: Vec<Widget>,
    /// Background preset token overriding the global preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Embedded background image overriding everything else.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_background_image_data: Option<String>,
    /// `#RRGGBB` flat background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_background_color: Option<String>,
}

impl Page {
    /// Creates a page with no widgets and no background override.
    pub fn new(id: String, title: String, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
            widgets: Vec::new(),
            background: None,
            custom_background_image_data: None,
            custom_background_color: None,
        }
    }

    /// Looks up a widget by id.
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }
}

/// Global appearance settings.
///
/// Every field has a default, so a partially-shaped stored record still
/// deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Title shown next to the logo.
    pub app_name: String,
    /// Built-in icon, used when no custom icon is uploaded.
    pub app_icon: AppIcon,
    /// Embedded custom icon replacing `app_icon`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_app_icon_data: Option<String>,
    /// Global background preset token.
    pub background: String,
    /// Embedded global background image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_background_image_data: Option<String>,
    /// Global `#RRGGBB` flat background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_background_color: Option<String>,
    /// Header preset token. Empty while a custom header color is active.
    pub header_style: String,
    /// Custom header color overriding `header_style`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_header_color: Option<String>,
    /// Global widget panel color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_widget_color: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        presets::default_settings()
    }
}

/// Root aggregate: the whole persisted dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Pages in tab order.
    pub pages: Vec<Page>,
    /// Id of the page being shown. May be stale; see [`AppState::active_page`].
    pub active_page_id: String,
    /// Global settings.
    pub settings: AppSettings,
}

impl AppState {
    /// The active page, falling back to the first page when `active_page_id`
    /// matches nothing. `None` only if there are no pages at all.
    pub fn active_page(&self) -> Option<&Page> {
        self.page(&self.active_page_id).or_else(|| self.pages.first())
    }

    /// Id of the page [`active_page`](Self::active_page) resolves to.
    pub fn resolved_active_id(&self) -> Option<&str> {
        self.active_page().map(|p| p.id.as_str())
    }

    /// Looks up a page by id.
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }
}

/// Treats `None` and the empty string alike: stored records use `""` as a
/// cleared value in places.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
