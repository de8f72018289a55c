//! Viewport rendering core: clip-draw primitives, field layout, graph
//! cells, column dispatch, and the dirty-tracking redraw scheduler.
//!
//! Data flows top-down (scheduler, column dispatcher, field layout and
//! graph renderer, clip-draw primitives, width engine in `core-text`),
//! and control returns bottom-up as a single boolean "viewport full"
//! signal that short-circuits the whole chain. That boolean is the only
//! abort mechanism in the crate: layout exhaustion is expected, frequent,
//! and never an error, so nothing here converts it into a `Result`.
//!
//! Invariants:
//! - The column cursor (`View::col`) is monotonically non-decreasing while
//!   a row renders and never exceeds `view.width + view.pos.col`; every
//!   primitive that writes cells reports `true` exactly when that bound is
//!   reached.
//! - Every field drawn through the layout engine consumes exactly
//!   `width + 1` columns unless the viewport itself runs out first.
//! - A row paints atomically from the caller's perspective: nothing here
//!   yields, suspends, or touches the view concurrently.
//!
//! Failure handling: row-source failure and output-encoding failure both
//! degrade to "viewport full" for the affected row: stop drawing, leave
//! the rest of the pass intact. The one hard assertion is the graph lane
//! palette bound, which a row source can only violate by breaking its
//! contract.

pub mod columns;
pub mod draw;
pub mod field;
pub mod format;
pub mod graph;
pub mod redraw;
pub mod style;
pub mod writer;

pub use columns::{RowSource, view_columns_draw};
pub use draw::RowPainter;
pub use redraw::{draw_view_line, redraw_view, redraw_view_dirty, redraw_view_from};
pub use style::{CellStyle, style_for};
pub use writer::{Pane, PaneCommand};
