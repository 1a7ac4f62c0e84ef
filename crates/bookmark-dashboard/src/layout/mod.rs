//! Layout engine for widgets.
//!
//! Decides how many columns a widget renders its bookmarks in, how wide the
//! widget is on the page grid, and how many masonry rows it occupies.

mod breakpoints;
mod columns;
mod masonry;
mod observer;

pub use breakpoints::{Responsive, WidthTier};
pub use columns::{column_spec, container_span, grid_columns, list_columns};
pub use masonry::{
    row_span, LayoutKey, RowSpanTracker, DEFAULT_ROW_SPAN, MASONRY_GAP_PX,
};
pub use observer::{ResizeObserver, Subscription};
