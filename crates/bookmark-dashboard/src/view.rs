//! Render-ready view of the dashboard.
//!
//! [`DashboardView::build`] runs style resolution and the layout engine over
//! a state snapshot and returns plain data a rendering surface can draw
//! without further decisions. It serializes to JSON for `bmd show --json`
//! and prints as a text outline otherwise.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::config::schema::DisplayConfig;
use crate::icons::{icon_src, BROKEN_ICON};
use crate::layout::{column_spec, container_span, WidthTier, DEFAULT_ROW_SPAN};
use crate::model::{present, AppIcon, AppState, GridItemSize, Page, ViewStyle, Widget, WidgetSize};
use crate::style::{
    resolve_background, resolve_header, resolve_widget_fill, Background, HeaderStyle, Overlay,
};

/// Text size class of bookmark labels in grid view.
pub fn text_size_class(density: GridItemSize) -> &'static str {
    match density {
        GridItemSize::Small => "text-[9px]",
        GridItemSize::Medium => "text-[10px]",
        GridItemSize::Large => "text-xs",
    }
}

/// Which app icon to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AppIconView {
    /// A built-in glyph.
    Builtin(AppIcon),
    /// Uploaded image data.
    Custom(String),
}

/// One navigation tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    /// Page id.
    pub id: String,
    /// Tab label.
    pub title: String,
    /// Whether this tab is the resolved active page.
    pub active: bool,
}

/// One bookmark entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkView {
    /// Bookmark id.
    pub id: String,
    /// Label.
    pub title: String,
    /// Link target.
    pub url: String,
    /// Shown in detailed view only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resolved icon image source.
    pub icon_src: String,
    /// Image to swap in when `icon_src` fails to load.
    pub fallback_icon_src: &'static str,
}

/// One widget panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetView {
    /// Widget id, also the resize-observer region id.
    pub id: String,
    /// Panel title.
    pub title: String,
    /// Declared size.
    pub size: WidgetSize,
    /// Bookmark presentation.
    pub view_style: ViewStyle,
    /// Effective grid density.
    pub grid_item_size: GridItemSize,
    /// Container span classes on the 12-column page grid.
    pub container_class: String,
    /// Container span at the current width tier.
    pub container_span: u16,
    /// Bookmark column classes.
    pub column_class: String,
    /// Bookmark columns at the current width tier.
    pub columns: u16,
    /// Inline panel style when tinted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_style: Option<String>,
    /// Panel class when not tinted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel_class: Option<&'static str>,
    /// Masonry rows to span.
    pub row_span: u32,
    /// Shown in the panel header.
    pub bookmark_count: usize,
    /// Label size in grid view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size_class: Option<&'static str>,
    /// Entries in display order.
    pub bookmarks: Vec<BookmarkView>,
}

impl WidgetView {
    fn build(
        widget: &Widget,
        state: &AppState,
        tier: WidthTier,
        row_spans: &HashMap<String, u32>,
    ) -> Self {
        let columns = column_spec(widget);
        let span = container_span(widget.size);
        let fill = resolve_widget_fill(widget, &state.settings);
        let text_size_class = match widget.view_style {
            ViewStyle::Grid => Some(text_size_class(widget.grid_density())),
            ViewStyle::List | ViewStyle::Detailed => None,
        };
        let show_description = widget.view_style == ViewStyle::Detailed;

        Self {
            id: widget.id.clone(),
            title: widget.title.clone(),
            size: widget.size,
            view_style: widget.view_style,
            grid_item_size: widget.grid_density(),
            container_class: span.classes("col-span"),
            container_span: span.at(tier),
            column_class: columns.classes("grid-cols"),
            columns: columns.at(tier),
            panel_style: fill.inline_style(),
            panel_class: fill.class(),
            row_span: row_spans
                .get(&widget.id)
                .copied()
                .unwrap_or(DEFAULT_ROW_SPAN),
            bookmark_count: widget.bookmarks.len(),
            text_size_class,
            bookmarks: widget
                .bookmarks
                .iter()
                .map(|b| BookmarkView {
                    id: b.id.clone(),
                    title: b.title.clone(),
                    url: b.url.clone(),
                    description: if show_description {
                        present(&b.description).map(str::to_string)
                    } else {
                        None
                    },
                    icon_src: icon_src(b),
                    fallback_icon_src: BROKEN_ICON,
                })
                .collect(),
        }
    }
}

/// The active page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    /// Page id.
    pub id: String,
    /// Page heading.
    pub title: String,
    /// Subtitle, with the configured fallback for pages without one.
    pub description: String,
    /// Widget panels in display order.
    pub widgets: Vec<WidgetView>,
}

/// Everything needed to draw one frame of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    /// Title next to the logo.
    pub app_name: String,
    /// Logo.
    pub app_icon: AppIconView,
    /// Header styling.
    pub header: HeaderStyle,
    /// Page background.
    pub background: Background,
    /// Inline style of the page root for image and color backgrounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_style: Option<String>,
    /// Class of the page root for preset backgrounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_class: Option<String>,
    /// Layer over the background.
    pub overlay: Overlay,
    /// Tier the layout was computed for.
    pub width_tier: WidthTier,
    /// Navigation tabs.
    pub tabs: Vec<TabView>,
    /// Active page, `None` only for a dashboard without pages.
    pub page: Option<PageView>,
}

impl DashboardView {
    /// Composes the view of `state` for a viewport `viewport_width` pixels
    /// wide. `row_spans` holds the latest span per widget id; widgets without
    /// an entry use [`DEFAULT_ROW_SPAN`].
    pub fn build(
        state: &AppState,
        viewport_width: u32,
        row_spans: &HashMap<String, u32>,
        display: &DisplayConfig,
    ) -> Self {
        let tier = WidthTier::from_width(viewport_width);
        let active = state.active_page();
        let resolved = resolve_background(active, &state.settings);
        let active_id = active.map(|p| p.id.as_str());

        Self {
            app_name: state.settings.app_name.clone(),
            app_icon: match present(&state.settings.custom_app_icon_data) {
                Some(data) => AppIconView::Custom(data.to_string()),
                None => AppIconView::Builtin(state.settings.app_icon),
            },
            header: resolve_header(&state.settings),
            background_style: resolved.background.inline_style(),
            background_class: resolved.background.class().map(str::to_string),
            background: resolved.background,
            overlay: resolved.overlay,
            width_tier: tier,
            tabs: state
                .pages
                .iter()
                .map(|p| TabView {
                    id: p.id.clone(),
                    title: p.title.clone(),
                    active: Some(p.id.as_str()) == active_id,
                })
                .collect(),
            page: active.map(|page| page_view(page, state, tier, row_spans, display)),
        }
    }
}

fn page_view(
    page: &Page,
    state: &AppState,
    tier: WidthTier,
    row_spans: &HashMap<String, u32>,
    display: &DisplayConfig,
) -> PageView {
    PageView {
        id: page.id.clone(),
        title: page.title.clone(),
        description: present(&page.description)
            .unwrap_or(&display.empty_description)
            .to_string(),
        widgets: page
            .widgets
            .iter()
            .map(|w| WidgetView::build(w, state, tier, row_spans))
            .collect(),
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} layout)", self.app_name, self.width_tier)?;
        let tabs: Vec<String> = self
            .tabs
            .iter()
            .map(|t| {
                if t.active {
                    format!("[{}]", t.title)
                } else {
                    t.title.clone()
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join("  "))?;

        let Some(page) = &self.page else {
            return writeln!(f, "(no pages)");
        };
        writeln!(f)?;
        writeln!(f, "{}  ({})", page.title, page.id)?;
        writeln!(f, "{}", page.description)?;
        if page.widgets.is_empty() {
            writeln!(f)?;
            writeln!(f, "  (no widgets)")?;
        }
        for widget in &page.widgets {
            writeln!(f)?;
            writeln!(
                f,
                "  {} ({}) [{} {}, span {}/12, {} col, {} rows, {} links]",
                widget.title,
                widget.id,
                widget.size,
                widget.view_style,
                widget.container_span,
                widget.columns,
                widget.row_span,
                widget.bookmark_count
            )?;
            for (index, bookmark) in widget.bookmarks.iter().enumerate() {
                writeln!(
                    f,
                    "    {index}. {}  {}  ({})",
                    bookmark.title, bookmark.url, bookmark.id
                )?;
                if let Some(description) = &bookmark.description {
                    writeln!(f, "       {description}")?;
                }
            }
        }
        Ok(())
    }
}
