//! Redraw scheduler.
//!
//! Decides which rows must be repainted and in what order, manages the
//! selection-state transition, and batches the terminal refresh. The
//! per-row state machine is driven by two line flags: `DIRTY` (content or
//! selection changed, set by collaborators, cleared only by painting) and
//! `CLEAREOL` (trailing cells must be erased before the repaint).
//!
//! Return-value contract of `draw_view_line`: `false` means the physical
//! row is beyond the materialized row count; callers must stop iterating
//! forward, since rows past content end are never individually cleared.
//! Any painted row reports `true` (the dispatcher's viewport-full result),
//! so scans terminate exactly at the content boundary.

use crate::columns::RowSource;
use crate::draw::RowPainter;
use crate::writer::Pane;
use core_config::DisplayOptions;
use core_model::{LineFlags, LineKind, View, digits_for};
use tracing::trace;

/// Paint one viewport row. Clears the row's repaint flags, re-establishes
/// the selection if this is the cursor row, and delegates the body to the
/// row source's draw callback.
pub fn draw_view_line<S: RowSource + ?Sized>(
    view: &mut View,
    source: &mut S,
    pane: &mut Pane,
    opts: &DisplayOptions,
    row: usize,
) -> bool {
    let index = view.pos.offset + row;
    if index >= source.line_count() {
        return false;
    }
    let selected = index == view.pos.lineno;

    pane.move_to(row, 0);
    match source.line_mut(index) {
        Some(line) => {
            if line.flags.contains(LineFlags::CLEAREOL) {
                pane.clear_to_eol();
            }
            line.flags
                .remove(LineFlags::SELECTED | LineFlags::DIRTY | LineFlags::CLEAREOL);
        }
        None => return false,
    }
    view.reset_row();

    if selected {
        // The selected flag is still clear here, so the cursor style is not
        // suppressed by the coalescing rule; the whole row then renders
        // under it.
        RowPainter::new(view, pane, opts, false).set_attr(LineKind::Cursor);
        if let Some(line) = source.line_mut(index) {
            line.flags.insert(LineFlags::SELECTED);
        }
        source.select(index);
    }

    source.draw(view, pane, opts, index, row)
}

/// Repaint only dirty rows within the visible height, top to bottom, and
/// issue one batched refresh if anything was repainted.
pub fn redraw_view_dirty<S: RowSource + ?Sized>(
    view: &mut View,
    source: &mut S,
    pane: &mut Pane,
    opts: &DisplayOptions,
) {
    let mut dirty = false;
    for row in 0..view.height {
        let index = view.pos.offset + row;
        if index >= source.line_count() {
            break;
        }
        if !source.line(index).is_some_and(|line| line.is_dirty()) {
            continue;
        }
        dirty = true;
        if !draw_view_line(view, source, pane, opts, row) {
            break;
        }
    }

    if !dirty {
        return;
    }
    trace!(target: "render.redraw", "dirty_rows_flushed");
    pane.refresh();
}

/// Repaint every row from `row` to the bottom of the viewport, reflowing
/// computed column widths first if the layout configuration changed.
pub fn redraw_view_from<S: RowSource + ?Sized>(
    view: &mut View,
    source: &mut S,
    pane: &mut Pane,
    opts: &DisplayOptions,
    row: usize,
) {
    debug_assert!(row < view.height);

    if view.columns_info_changed(opts.layout_stamp()) {
        trace!(target: "render.redraw", rows = source.line_count(), "columns_reflow");
        view.columns_info_init();
        view.digits = digits_for(source.line_count());
        for index in 0..source.line_count() {
            if let Some(values) = source.columns(index) {
                view.columns_info_update(&values);
            }
        }
    }

    for row in row..view.height {
        if !draw_view_line(view, source, pane, opts, row) {
            break;
        }
    }

    pane.refresh();
}

/// Erase the pane and repaint everything.
pub fn redraw_view<S: RowSource + ?Sized>(
    view: &mut View,
    source: &mut S,
    pane: &mut Pane,
    opts: &DisplayOptions,
) {
    pane.erase();
    redraw_view_from(view, source, pane, opts, 0);
}
