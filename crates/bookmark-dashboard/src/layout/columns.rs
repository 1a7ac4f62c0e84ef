//! Column tables: bookmark columns inside a widget and the widget's own span
//! on the 12-column page grid.

use super::breakpoints::Responsive;
use crate::model::{GridItemSize, ViewStyle, Widget, WidgetSize};

/// Columns of bookmarks for list and detailed views, keyed by widget size.
pub fn list_columns(size: WidgetSize) -> Responsive {
    match size {
        WidgetSize::Small => Responsive::uniform(1),
        WidgetSize::Medium => Responsive::new(1, 2, 2, 2),
        WidgetSize::Large => Responsive::new(1, 2, 2, 3),
        WidgetSize::Full => Responsive::new(1, 2, 3, 4),
    }
}

/// Used if a combination is ever missing from [`GRID_COLUMNS`].
const GRID_FALLBACK: Responsive = Responsive::new(4, 4, 4, 2);

/// Tile columns for grid view over every widget size and density.
const GRID_COLUMNS: [((WidgetSize, GridItemSize), Responsive); 12] = [
    ((WidgetSize::Small, GridItemSize::Large), Responsive::new(4, 4, 4, 2)),
    ((WidgetSize::Small, GridItemSize::Medium), Responsive::new(6, 6, 6, 3)),
    ((WidgetSize::Small, GridItemSize::Small), Responsive::new(8, 8, 8, 4)),
    ((WidgetSize::Medium, GridItemSize::Large), Responsive::new(4, 4, 4, 4)),
    ((WidgetSize::Medium, GridItemSize::Medium), Responsive::new(6, 6, 6, 6)),
    ((WidgetSize::Medium, GridItemSize::Small), Responsive::new(8, 8, 8, 8)),
    ((WidgetSize::Large, GridItemSize::Large), Responsive::new(4, 4, 8, 6)),
    ((WidgetSize::Large, GridItemSize::Medium), Responsive::new(6, 6, 12, 9)),
    ((WidgetSize::Large, GridItemSize::Small), Responsive::new(8, 8, 16, 12)),
    ((WidgetSize::Full, GridItemSize::Large), Responsive::new(4, 4, 8, 8)),
    ((WidgetSize::Full, GridItemSize::Medium), Responsive::new(6, 6, 12, 12)),
    ((WidgetSize::Full, GridItemSize::Small), Responsive::new(8, 8, 16, 16)),
];

/// Tile columns for grid view.
pub fn grid_columns(size: WidgetSize, density: GridItemSize) -> Responsive {
    GRID_COLUMNS
        .iter()
        .find(|(key, _)| *key == (size, density))
        .map(|(_, spec)| *spec)
        .unwrap_or(GRID_FALLBACK)
}

/// Column directive for a widget's bookmarks.
pub fn column_spec(widget: &Widget) -> Responsive {
    match widget.view_style {
        ViewStyle::Grid => grid_columns(widget.size, widget.grid_density()),
        ViewStyle::List | ViewStyle::Detailed => list_columns(widget.size),
    }
}

/// Span of a widget container on the 12-column page grid.
pub fn container_span(size: WidgetSize) -> Responsive {
    match size {
        WidgetSize::Small => Responsive::new(12, 12, 6, 3),
        WidgetSize::Medium => Responsive::new(12, 12, 6, 6),
        WidgetSize::Large => Responsive::new(12, 12, 12, 9),
        WidgetSize::Full => Responsive::uniform(12),
    }
}
