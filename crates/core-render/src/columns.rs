//! Column dispatcher and the row-source seam.
//!
//! `RowSource` is the polymorphic collaborator that owns the materialized
//! line buffer and produces per-row field values; the renderer only ever
//! sees it through this trait. `view_columns_draw` walks the view's column
//! descriptors in order and invokes the matching field or graph operation,
//! stopping at the first component that reports the viewport full; later
//! columns are simply clipped, which is not an error.
//!
//! A row source that cannot produce column values aborts the row: the
//! dispatcher reports viewport-full so the scheduler treats the row as
//! unrenderable for this pass.

use crate::draw::RowPainter;
use crate::writer::Pane;
use core_config::DisplayOptions;
use core_model::{ColumnKind, ColumnValues, Line, LineKind, View};

pub trait RowSource {
    /// Number of materialized rows.
    fn line_count(&self) -> usize;

    fn line(&self, index: usize) -> Option<&Line>;

    fn line_mut(&mut self, index: usize) -> Option<&mut Line>;

    /// Populate the column-value bundle for one row. `None` means the row
    /// cannot be rendered this pass.
    fn columns(&self, index: usize) -> Option<ColumnValues<'_>>;

    /// Notification hook invoked when a row becomes the selected row.
    fn select(&mut self, _index: usize) {}

    /// Per-row paint; the default is the column dispatcher.
    fn draw(
        &mut self,
        view: &mut View,
        pane: &mut Pane,
        opts: &DisplayOptions,
        index: usize,
        row: usize,
    ) -> bool {
        view_columns_draw(self, view, pane, opts, index, row)
    }
}

/// Draw one row by walking the view's configured columns in order.
pub fn view_columns_draw<S: RowSource + ?Sized>(
    source: &S,
    view: &mut View,
    pane: &mut Pane,
    opts: &DisplayOptions,
    index: usize,
    row: usize,
) -> bool {
    let Some(line) = source.line(index) else {
        return true;
    };
    let line_kind = line.kind;
    let selected = line.is_selected();

    let Some(values) = source.columns(index) else {
        return true;
    };

    // Descriptor list and computed widths are snapshotted so the painter
    // can hold the view mutably for the rest of the row.
    let columns: Vec<_> = view
        .columns()
        .iter()
        .zip(view.columns_info.iter())
        .map(|(desc, info)| (desc.kind, desc.align, info.width))
        .collect();

    let mut p = RowPainter::new(view, pane, opts, selected);
    for (kind, align, width) in columns {
        let full = match kind {
            ColumnKind::Date => p.draw_date(values.date),
            ColumnKind::Author => {
                let width = if opts.author_width > 0 {
                    opts.author_width
                } else {
                    width
                };
                p.draw_author(values.author, width)
            }
            ColumnKind::Ref => {
                let badge_kind = match values.commit_ref {
                    Some(r) if r.valid => LineKind::from_ref(r),
                    _ => LineKind::Default,
                };
                let name = values.commit_ref.map(|r| r.name.as_str());
                p.draw_field(badge_kind, name, width, align, false)
            }
            ColumnKind::Id => {
                if width == 0 {
                    p.draw_id(values.id)
                } else if opts.show_id {
                    p.draw_id_custom(LineKind::Id, values.id, width)
                } else {
                    false
                }
            }
            ColumnKind::LineNumber => p.draw_lineno(row),
            ColumnKind::Mode => p.draw_mode(values.mode),
            ColumnKind::FileSize => p.draw_file_size(
                values.file_size.unwrap_or(0),
                width,
                values.mode.is_none_or(|mode| mode.is_dir()),
            ),
            ColumnKind::CommitTitle => {
                if let Some(canvas) = values.graph {
                    if p.draw_graph(canvas) {
                        return true;
                    }
                }
                if let Some(refs) = values.refs {
                    if p.draw_refs(refs) {
                        return true;
                    }
                }
                p.draw_commit_title(values.commit_title.unwrap_or(""))
            }
            ColumnKind::FileName => {
                let width = if opts.filename_width > 0 {
                    opts.filename_width
                } else {
                    width
                };
                p.draw_filename(values.file_name, true, values.mode, width)
            }
            ColumnKind::Text => p.draw_text(line_kind, values.text.unwrap_or("")),
        };
        if full {
            return true;
        }
    }

    true
}

impl RowPainter<'_> {
    /// Ref badges: `[name]` per ref followed by one blank cell; skipped
    /// entirely when ref display is off or the list is empty.
    pub fn draw_refs(&mut self, refs: &[core_model::Ref]) -> bool {
        if !self.opts().show_refs || refs.is_empty() {
            return false;
        }
        for r in refs {
            let kind = LineKind::from_ref(r);
            if self.draw_formatted(kind, format_args!("[{}]", r.name)) {
                return true;
            }
            if self.draw_text(LineKind::Default, " ") {
                return true;
            }
        }
        false
    }
}
