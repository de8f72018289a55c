//! Display-width text primitives for viewport rendering.
//!
//! Everything the renderer knows about text measurement lives here: how many
//! terminal cells a grapheme occupies, how much of a string fits in a column
//! budget after a horizontal-scroll skip, and how tabs expand against a tab
//! stop. The renderer above never touches `unicode_width` directly; all
//! width decisions flow through this crate so a future width-override table
//! has a single insertion point.
//!
//! Invariants:
//! * Widths are measured per grapheme cluster, never per `char`.
//! * Control characters (including bare `\t` outside the tab-aware paths)
//!   measure 0 cells.
//! * `clip` reports columns in *virtual* coordinates: the skipped prefix
//!   counts toward the result so a caller tracking a running column stays
//!   consistent across successive clipped runs.

pub mod clip;
pub mod expand;
pub mod width;

pub use clip::{Clip, clip};
pub use expand::{EXPAND_CHUNK, expand_tabs_chunk};
pub use width::{display_width, egc_width, width_max};
