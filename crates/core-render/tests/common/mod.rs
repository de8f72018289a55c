//! Shared fixtures: a small commit-log row source and pane introspection
//! helpers used across the integration suites.

use core_config::DisplayOptions;
use core_model::{
    Align, ColumnDescriptor, ColumnKind, ColumnValues, GraphCanvas, GraphSymbol, LaneShape, Line,
    LineKind, Ref, RefKind, Timestamp, View,
};
use core_render::writer::{Pane, PaneCommand};
use core_render::RowSource;

pub struct CommitRow {
    pub id: String,
    pub author: String,
    pub title: String,
    pub time: Timestamp,
    pub refs: Vec<Ref>,
    pub graph: GraphCanvas,
}

pub struct CommitLogSource {
    pub lines: Vec<Line>,
    pub rows: Vec<CommitRow>,
    pub selections: Vec<usize>,
}

impl CommitLogSource {
    pub fn sample(count: usize) -> Self {
        let rows: Vec<CommitRow> = (0..count)
            .map(|i| CommitRow {
                id: format!("{i:07x}abcdef"),
                author: if i % 2 == 0 {
                    "Ada Lovelace".to_string()
                } else {
                    "Grace Hopper".to_string()
                },
                title: format!("commit {i}: adjust the flux capacitor"),
                time: Timestamp(1_146_320_460 + i as i64 * 3600),
                refs: if i == 0 {
                    vec![Ref::new("main", RefKind::Head)]
                } else {
                    Vec::new()
                },
                graph: GraphCanvas::new(vec![
                    GraphSymbol::commit(LaneShape::Vertical, 0),
                    GraphSymbol::lane(LaneShape::Vertical, 1),
                ]),
            })
            .collect();
        Self {
            lines: rows.iter().map(|_| Line::new(LineKind::Default)).collect(),
            rows,
            selections: Vec::new(),
        }
    }

    pub fn mark_clean(&mut self) {
        for line in &mut self.lines {
            line.flags = core_model::LineFlags::empty();
        }
    }
}

impl RowSource for CommitLogSource {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    fn line_mut(&mut self, index: usize) -> Option<&mut Line> {
        self.lines.get_mut(index)
    }

    fn columns(&self, index: usize) -> Option<ColumnValues<'_>> {
        let row = self.rows.get(index)?;
        Some(ColumnValues {
            date: Some(row.time),
            author: Some(&row.author),
            id: Some(&row.id),
            graph: Some(&row.graph),
            refs: Some(&row.refs),
            commit_title: Some(&row.title),
            ..Default::default()
        })
    }

    fn select(&mut self, index: usize) {
        self.selections.push(index);
    }
}

pub fn log_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new(ColumnKind::LineNumber, 0, Align::Left),
        ColumnDescriptor::new(ColumnKind::Date, 0, Align::Left),
        ColumnDescriptor::new(ColumnKind::Author, 0, Align::Left),
        ColumnDescriptor::new(ColumnKind::Id, 0, Align::Left),
        ColumnDescriptor::new(ColumnKind::CommitTitle, 0, Align::Left),
    ]
}

pub fn log_view(width: usize, height: usize) -> View {
    View::new(width, height, log_columns())
}

pub fn default_opts() -> DisplayOptions {
    let mut opts = DisplayOptions::default();
    opts.show_line_numbers = true;
    opts.show_id = true;
    opts
}

/// Reconstruct the text painted per pane row from the command stream.
pub fn rendered_rows(pane: &Pane) -> Vec<(u16, String)> {
    let mut rows: Vec<(u16, String)> = Vec::new();
    for cmd in pane.commands() {
        match cmd {
            PaneCommand::MoveTo { row, .. } => rows.push((*row, String::new())),
            PaneCommand::Print(text) => {
                if let Some((_, buf)) = rows.last_mut() {
                    buf.push_str(text);
                }
            }
            PaneCommand::PutGlyph(glyph) => {
                if let Some((_, buf)) = rows.last_mut() {
                    buf.push(*glyph);
                }
            }
            _ => {}
        }
    }
    rows
}

/// Text of one rendered row, flattening repeated repaints to the last one.
pub fn row_text(pane: &Pane, row: u16) -> String {
    rendered_rows(pane)
        .into_iter()
        .filter(|(r, _)| *r == row)
        .map(|(_, text)| text)
        .next_back()
        .unwrap_or_default()
}
