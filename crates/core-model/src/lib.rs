//! Presentation-state model for viewport rendering.
//!
//! A `View` owns everything the renderer needs to lay one pane of rows out:
//! cell geometry, scroll position, the per-row column cursor, the column
//! descriptor list, and the widths computed for auto-sized columns. Row
//! *content* deliberately lives elsewhere: the row source owns its line
//! buffer and hands the renderer materialized values per row, so the model
//! here is purely about where cells go, never about what the rows mean.
//!
//! Core invariants (must hold after every public call):
//! * `view.col` is monotonically non-decreasing while one row renders,
//!   starts at 0, and never exceeds `view.width + view.pos.col`; `advance`
//!   clamps structurally so no caller can break this.
//! * `columns_info.len() == columns.len()` after `columns_info_init`.
//! * At most one line per view carries `SELECTED`: the one whose absolute
//!   index equals `pos.lineno`; the redraw scheduler maintains this.
//!
//! Forward roadmap: multiple panes over one row buffer would lift
//! `ViewPosition` into a per-pane handle; the descriptor list already
//! supports that since it is per-`View` configuration, not global state.

use core_text::display_width;

pub mod graph;
pub mod line;
pub mod mode;
pub mod refs;

pub use graph::{GRAPH_PALETTE_SIZE, GraphCanvas, GraphSymbol, LaneShape};
pub use line::{Line, LineFlags, LineKind};
pub use mode::FileMode;
pub use refs::{Ref, RefKind};

/// Scroll/selection position of one view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewPosition {
    /// Index of the first materialized row shown at the top of the pane.
    pub offset: usize,
    /// Absolute index of the selected row.
    pub lineno: usize,
    /// Horizontal scroll offset in display columns.
    pub col: usize,
}

/// Semantic kind of one configured column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Date,
    Author,
    Ref,
    Id,
    LineNumber,
    Mode,
    FileSize,
    CommitTitle,
    FileName,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Static per-view column configuration.
///
/// A `width` of 0 marks the column auto-sized: its effective width is
/// computed from row content during reflow (and, for `Id`, falls back to
/// the option-default width policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub kind: ColumnKind,
    pub width: usize,
    pub align: Align,
}

impl ColumnDescriptor {
    pub fn new(kind: ColumnKind, width: usize, align: Align) -> Self {
        Self { kind, width, align }
    }
}

/// Effective width of one column, recomputed on reflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnInfo {
    pub width: usize,
}

/// Commit timestamp as seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

/// Materialized field values for one row, borrowed from the row source.
///
/// Only fields backing the view's configured columns need to be populated;
/// everything defaults to absent and absent values render as blank padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnValues<'a> {
    pub date: Option<Timestamp>,
    pub author: Option<&'a str>,
    pub commit_ref: Option<&'a Ref>,
    pub id: Option<&'a str>,
    pub mode: Option<FileMode>,
    pub file_size: Option<u64>,
    pub graph: Option<&'a GraphCanvas>,
    pub refs: Option<&'a [Ref]>,
    pub commit_title: Option<&'a str>,
    pub file_name: Option<&'a str>,
    pub text: Option<&'a str>,
}

/// One rendering pane mapping a scrollable row buffer onto a fixed terminal
/// rectangle.
#[derive(Debug, Clone)]
pub struct View {
    /// Pane width in character cells.
    pub width: usize,
    /// Pane height in rows.
    pub height: usize,
    pub pos: ViewPosition,
    /// Column cursor for the row currently being rendered, in virtual
    /// coordinates (horizontally scrolled-off cells included).
    pub col: usize,
    /// Kind whose display attribute is currently active, for attribute
    /// -change coalescing.
    pub curtype: LineKind,
    /// Digits needed to render the largest absolute line number.
    pub digits: usize,
    columns: Vec<ColumnDescriptor>,
    pub columns_info: Vec<ColumnInfo>,
    layout_stamp: Option<u64>,
}

impl View {
    pub fn new(width: usize, height: usize, columns: Vec<ColumnDescriptor>) -> Self {
        let columns_info = columns
            .iter()
            .map(|d| ColumnInfo { width: d.width })
            .collect();
        Self {
            width,
            height,
            pos: ViewPosition::default(),
            col: 0,
            curtype: LineKind::None,
            digits: 0,
            columns,
            columns_info,
            layout_stamp: None,
        }
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Remaining column budget for the current row.
    #[inline]
    pub fn max_len(&self) -> usize {
        (self.width + self.pos.col).saturating_sub(self.col)
    }

    /// Advance the column cursor, clamped to the row bound.
    #[inline]
    pub fn advance(&mut self, cols: usize) {
        self.col = (self.col + cols).min(self.width + self.pos.col);
    }

    /// Reset per-row cursor state before painting a row.
    pub fn reset_row(&mut self) {
        self.col = 0;
        self.curtype = LineKind::None;
    }

    /// Record the layout stamp of the active option set; reports whether it
    /// differs from the last pass (a reflow is then due).
    pub fn columns_info_changed(&mut self, stamp: u64) -> bool {
        if self.layout_stamp == Some(stamp) {
            return false;
        }
        self.layout_stamp = Some(stamp);
        true
    }

    /// Reset computed widths to their configured baselines.
    pub fn columns_info_init(&mut self) {
        self.columns_info = self
            .columns
            .iter()
            .map(|d| ColumnInfo { width: d.width })
            .collect();
    }

    /// Widen auto-sized columns from one row's content.
    pub fn columns_info_update(&mut self, values: &ColumnValues<'_>) {
        for (desc, info) in self.columns.iter().zip(self.columns_info.iter_mut()) {
            if desc.width != 0 {
                continue;
            }
            let text = match desc.kind {
                ColumnKind::Author => values.author,
                ColumnKind::Ref => values.commit_ref.map(|r| r.name.as_str()),
                ColumnKind::FileName => values.file_name,
                _ => None,
            };
            if let Some(text) = text {
                info.width = info.width.max(display_width(text));
            }
        }
    }
}

/// Digits needed to print the largest 1-based index of `count` rows.
pub fn digits_for(count: usize) -> usize {
    let mut digits = 1;
    let mut rest = count.max(1);
    while rest >= 10 {
        rest /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> View {
        View::new(
            20,
            5,
            vec![
                ColumnDescriptor::new(ColumnKind::Author, 0, Align::Left),
                ColumnDescriptor::new(ColumnKind::Id, 7, Align::Left),
            ],
        )
    }

    #[test]
    fn max_len_tracks_virtual_bound() {
        let mut v = view();
        assert_eq!(v.max_len(), 20);
        v.pos.col = 5;
        assert_eq!(v.max_len(), 25);
        v.advance(10);
        assert_eq!(v.max_len(), 15);
    }

    #[test]
    fn advance_clamps_at_row_bound() {
        let mut v = view();
        v.advance(100);
        assert_eq!(v.col, 20);
        assert_eq!(v.max_len(), 0);
        v.advance(1);
        assert_eq!(v.col, 20, "cursor never exceeds width + pos.col");
    }

    #[test]
    fn reset_row_clears_cursor_and_attribute() {
        let mut v = view();
        v.advance(7);
        v.curtype = LineKind::Date;
        v.reset_row();
        assert_eq!(v.col, 0);
        assert_eq!(v.curtype, LineKind::None);
    }

    #[test]
    fn layout_stamp_triggers_reflow_once() {
        let mut v = view();
        assert!(v.columns_info_changed(42), "first pass always reflows");
        assert!(!v.columns_info_changed(42));
        assert!(v.columns_info_changed(43));
    }

    #[test]
    fn auto_columns_widen_from_content() {
        let mut v = view();
        v.columns_info_init();
        let values = ColumnValues {
            author: Some("Ada Lovelace"),
            ..Default::default()
        };
        v.columns_info_update(&values);
        assert_eq!(v.columns_info[0].width, 12);
        assert_eq!(v.columns_info[1].width, 7, "fixed columns never widen");
        let shorter = ColumnValues {
            author: Some("Bob"),
            ..Default::default()
        };
        v.columns_info_update(&shorter);
        assert_eq!(v.columns_info[0].width, 12, "width only grows");
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digits_for(0), 1);
        assert_eq!(digits_for(9), 1);
        assert_eq!(digits_for(10), 2);
        assert_eq!(digits_for(4321), 4);
    }
}
