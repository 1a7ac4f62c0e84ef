//! Read-only commands: `show` and `page list`.

use std::collections::HashMap;

use bookmark_dashboard::config::schema::DisplayConfig;
use bookmark_dashboard::error::Result;
use bookmark_dashboard::layout::{ResizeObserver, RowSpanTracker};
use bookmark_dashboard::model::{AppState, ViewStyle};
use bookmark_dashboard::view::{DashboardView, WidgetView};

/// Height of one line of terminal output, in the pixels the masonry grid uses.
const LINE_HEIGHT_PX: f64 = 20.0;

/// Renders the active page as text or JSON.
pub(crate) fn run(state: &AppState, width: u32, json: bool, display: &DisplayConfig) -> Result<()> {
    let row_spans = measure_row_spans(state, width, display);
    let view = DashboardView::build(state, width, &row_spans, display);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{view}");
    }
    Ok(())
}

/// Prints one line per page, marking the active one.
pub(crate) fn list_pages(state: &AppState) {
    let active = state.resolved_active_id();
    for page in &state.pages {
        let marker = if Some(page.id.as_str()) == active { "*" } else { " " };
        println!("{marker} {}\t{}\t{} widgets", page.id, page.title, page.widgets.len());
    }
}

/// Measures every widget on the active page as the text renderer lays it
/// out and returns the resulting masonry row spans.
///
/// Widgets are first laid out at the configured viewport width. When `width`
/// differs, the surface is resized and every region re-measured through the
/// observer.
pub(crate) fn measure_row_spans(
    state: &AppState,
    width: u32,
    display: &DisplayConfig,
) -> HashMap<String, u32> {
    let Some(page) = state.active_page() else {
        return HashMap::new();
    };

    let initial = heights(state, display.viewport_width, display);
    let observer = ResizeObserver::new();
    let trackers: Vec<RowSpanTracker> = page
        .widgets
        .iter()
        .map(|w| {
            let mut tracker = RowSpanTracker::new(w.id.clone());
            tracker.sync(w, || initial.get(&w.id).copied());
            tracker.attach(&observer);
            tracker
        })
        .collect();

    if width != display.viewport_width {
        for (id, height) in heights(state, width, display) {
            observer.notify(&id, Some(height));
        }
    }

    trackers
        .iter()
        .map(|t| (t.widget_id().to_string(), t.row_span()))
        .collect()
}

/// Text height of each widget on the active page at `width`.
fn heights(state: &AppState, width: u32, display: &DisplayConfig) -> HashMap<String, f64> {
    let view = DashboardView::build(state, width, &HashMap::new(), display);
    view.page
        .map(|page| {
            page.widgets
                .iter()
                .map(|w| (w.id.clone(), text_height(w)))
                .collect()
        })
        .unwrap_or_default()
}

/// Rendered height of a widget panel: a header line plus one line per row
/// of bookmarks, two in detailed view.
fn text_height(widget: &WidgetView) -> f64 {
    let columns = usize::from(widget.columns.max(1));
    let rows = widget.bookmarks.len().div_ceil(columns);
    let lines_per_row = match widget.view_style {
        ViewStyle::Detailed => 2,
        ViewStyle::List | ViewStyle::Grid => 1,
    };
    (1 + rows * lines_per_row) as f64 * LINE_HEIGHT_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmark_dashboard::layout::MASONRY_GAP_PX;
    use bookmark_dashboard::presets::initial_state;

    #[test]
    fn test_every_widget_gets_a_measured_span() {
        let state = initial_state();
        let spans = measure_row_spans(&state, 1280, &DisplayConfig::default());
        assert_eq!(spans.len(), 4);
        for widget in &state.pages[0].widgets {
            assert!(spans[&widget.id] > 1, "{} not measured", widget.title);
        }
    }

    #[test]
    fn test_detailed_rows_are_taller() {
        let state = initial_state();
        let spans = measure_row_spans(&state, 1280, &DisplayConfig::default());
        let widgets = &state.pages[0].widgets;
        // Legal Research: 4 detailed bookmarks in 2 columns = 2 rows of 2 lines.
        let expected = (1.0 + 4.0) * LINE_HEIGHT_PX + MASONRY_GAP_PX;
        assert_eq!(spans[&widgets[1].id], expected as u32);
    }

    #[test]
    fn test_narrow_viewport_is_taller() {
        let state = initial_state();
        let display = DisplayConfig::default();
        let wide = measure_row_spans(&state, 1280, &display);
        let narrow = measure_row_spans(&state, 320, &display);
        // News & Updates: one list column when narrow, three when wide.
        let news = &state.pages[0].widgets[3].id;
        assert!(narrow[news] > wide[news]);
    }

    #[test]
    fn test_resize_matches_direct_layout() {
        let state = initial_state();
        let wide_first = DisplayConfig::default();
        let narrow_first = DisplayConfig {
            viewport_width: 320,
            ..DisplayConfig::default()
        };
        assert_eq!(
            measure_row_spans(&state, 320, &wide_first),
            measure_row_spans(&state, 320, &narrow_first)
        );
        assert_eq!(
            measure_row_spans(&state, 1280, &narrow_first),
            measure_row_spans(&state, 1280, &wide_first)
        );
    }
}
