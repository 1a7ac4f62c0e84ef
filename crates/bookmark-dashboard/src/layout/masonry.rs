//! Masonry row spans from measured content height.
//!
//! The page grid uses 1px rows, so a widget spans its content height plus
//! the gap between widgets. Each widget gets a [`RowSpanTracker`] that
//! re-measures when its content or configuration changes and listens to
//! resize notifications while attached.

use std::sync::Arc;
use tokio::sync::watch;

use super::observer::{ResizeObserver, Subscription};
use crate::model::{Bookmark, GridItemSize, ViewStyle, Widget, WidgetSize};

/// Vertical gap between widgets, in pixels.
pub const MASONRY_GAP_PX: f64 = 24.0;

/// Span used before the first successful measurement.
pub const DEFAULT_ROW_SPAN: u32 = 1;

/// Row span for a measured content height.
///
/// `None` for heights that cannot be used (negative, NaN, infinite), in which
/// case the previous span should be kept.
pub fn row_span(height_px: f64) -> Option<u32> {
    if !height_px.is_finite() || height_px < 0.0 {
        return None;
    }
    let span = (height_px + MASONRY_GAP_PX).ceil();
    if span >= f64::from(u32::MAX) {
        Some(u32::MAX)
    } else {
        Some(span as u32)
    }
}

/// Everything that affects a widget's rendered height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutKey {
    bookmarks: Vec<Bookmark>,
    view_style: ViewStyle,
    size: WidgetSize,
    density: GridItemSize,
}

impl LayoutKey {
    /// Captures the height-relevant parts of `widget`.
    pub fn of(widget: &Widget) -> Self {
        Self {
            bookmarks: widget.bookmarks.clone(),
            view_style: widget.view_style,
            size: widget.size,
            density: widget.grid_density(),
        }
    }
}

/// Per-widget row span state.
#[derive(Debug)]
pub struct RowSpanTracker {
    widget_id: String,
    key: Option<LayoutKey>,
    span: Arc<watch::Sender<u32>>,
    subscription: Option<Subscription>,
}

impl RowSpanTracker {
    /// Creates a tracker at [`DEFAULT_ROW_SPAN`], not yet attached.
    pub fn new(widget_id: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(DEFAULT_ROW_SPAN);
        Self {
            widget_id: widget_id.into(),
            key: None,
            span: Arc::new(tx),
            subscription: None,
        }
    }

    /// Widget this tracker belongs to.
    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }

    /// Current row span.
    pub fn row_span(&self) -> u32 {
        *self.span.borrow()
    }

    /// Starts listening to resize notifications for this widget's region.
    /// Re-attaching replaces the previous subscription.
    pub fn attach(&mut self, observer: &ResizeObserver) {
        let span = Arc::clone(&self.span);
        self.subscription = Some(observer.observe(&self.widget_id, move |height| {
            update(&span, height);
        }));
    }

    /// Re-measures if the widget's content or configuration changed since
    /// the last usable measurement. Returns `true` if `measure` was called.
    ///
    /// An unusable height keeps the previous span and leaves the widget
    /// pending, so the next call measures again.
    pub fn sync<F>(&mut self, widget: &Widget, measure: F) -> bool
    where
        F: FnOnce() -> Option<f64>,
    {
        let key = LayoutKey::of(widget);
        if self.key.as_ref() == Some(&key) {
            return false;
        }
        let height = measure();
        if height.and_then(row_span).is_some() {
            self.key = Some(key);
        }
        self.apply_measurement(height);
        true
    }

    /// Applies one measurement. Unusable heights leave the span unchanged.
    /// Returns the span now in effect.
    pub fn apply_measurement(&self, height: Option<f64>) -> u32 {
        update(&self.span, height);
        self.row_span()
    }
}

fn update(span: &watch::Sender<u32>, height: Option<f64>) {
    if let Some(new) = height.and_then(row_span) {
        span.send_if_modified(|current| {
            if *current == new {
                false
            } else {
                *current = new;
                true
            }
        });
    }
}
