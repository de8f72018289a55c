//! Lore entrypoint: paint a sample commit-log view once through the real
//! rendering pipeline. Row fetching and input handling live outside the
//! rendering core, so the demo materializes a static row buffer, renders a
//! frame, holds it briefly, and restores the terminal.

use anyhow::Result;
use clap::Parser;
use core_config::{DisplayOptions, GraphicsMode, load_from};
use core_model::{
    Align, ColumnDescriptor, ColumnKind, ColumnValues, GraphCanvas, GraphSymbol, LaneShape, Line,
    LineKind, Ref, RefKind, Timestamp, View,
};
use core_render::writer::Pane;
use core_render::{RowSource, redraw_view};
use core_terminal::{CrosstermBackend, TerminalBackend, TerminalCapabilities};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "lore", version, about = "Lore revision-log renderer demo")]
struct Args {
    /// Optional configuration file path (overrides discovery of `lore.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// How long to hold the painted frame before restoring the terminal.
    #[arg(long = "hold-ms", default_value_t = 1500)]
    hold_ms: u64,
}

struct SampleRow {
    id: String,
    author: String,
    title: String,
    time: Timestamp,
    refs: Vec<Ref>,
    graph: GraphCanvas,
}

struct SampleLog {
    lines: Vec<Line>,
    rows: Vec<SampleRow>,
}

impl SampleLog {
    fn seeded() -> Self {
        let seeds: [(&str, &str, &str, &[(LaneShape, u8, bool)]); 6] = [
            (
                "9f2a11d",
                "Ada Lovelace",
                "render: clamp the column cursor at the row bound",
                &[(LaneShape::Vertical, 0, true)],
            ),
            (
                "3be90c4",
                "Grace Hopper",
                "graph: elide the first symbol's leading half-cell",
                &[(LaneShape::Vertical, 0, false), (LaneShape::MergeUp, 1, true)],
            ),
            (
                "77d01ae",
                "Ada Lovelace",
                "config: fail soft on unparsable option files",
                &[(LaneShape::Vertical, 0, true), (LaneShape::Vertical, 1, false)],
            ),
            (
                "c41f0b2",
                "Margaret Hamilton",
                "fields: reserve the separator column in every span",
                &[(LaneShape::Vertical, 0, false), (LaneShape::BranchDown, 1, true)],
            ),
            (
                "b8e3f55",
                "Grace Hopper",
                "scheduler: batch the refresh after a dirty scan",
                &[(LaneShape::Vertical, 0, true)],
            ),
            (
                "0d9c7a3",
                "Margaret Hamilton",
                "initial import",
                &[(LaneShape::Vertical, 0, true)],
            ),
        ];
        let rows: Vec<SampleRow> = seeds
            .iter()
            .enumerate()
            .map(|(i, (id, author, title, lanes))| SampleRow {
                id: id.to_string(),
                author: author.to_string(),
                title: title.to_string(),
                time: Timestamp(1_722_800_000 - i as i64 * 86_400),
                refs: if i == 0 {
                    vec![
                        Ref::new("main", RefKind::Head),
                        Ref::new("v0.1.0", RefKind::Tag),
                    ]
                } else {
                    Vec::new()
                },
                graph: GraphCanvas::new(
                    lanes
                        .iter()
                        .map(|(shape, color, commit)| {
                            if *commit {
                                GraphSymbol::commit(*shape, *color)
                            } else {
                                GraphSymbol::lane(*shape, *color)
                            }
                        })
                        .collect(),
                ),
            })
            .collect();
        Self {
            lines: rows.iter().map(|_| Line::new(LineKind::Default)).collect(),
            rows,
        }
    }
}

impl RowSource for SampleLog {
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
}

fn log_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new(ColumnKind::LineNumber, 0, Align::Left),
        ColumnDescriptor::new(ColumnKind::Date, 0, Align::Left),
        ColumnDescriptor::new(ColumnKind::Author, 0, Align::Left),
        ColumnDescriptor::new(ColumnKind::Id, 0, Align::Left),
        ColumnDescriptor::new(ColumnKind::CommitTitle, 0, Align::Left),
    ]
}

fn effective_options(args: &Args, capabilities: TerminalCapabilities) -> Result<DisplayOptions> {
    let mut opts = load_from(args.config.clone())?;
    opts.show_line_numbers = true;
    opts.show_id = true;
    if !capabilities.utf8_graphics && opts.graphics == GraphicsMode::Utf8 {
        info!(target: "runtime", "terminal lacks utf-8 graphics, falling back to ascii");
        opts.graphics = GraphicsMode::Ascii;
    }
    Ok(opts)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let capabilities = TerminalCapabilities::detect();
    let opts = effective_options(&args, capabilities)?;

    let mut backend = CrosstermBackend::new();
    backend.set_title("lore")?;
    let (columns, rows) = backend.dimensions()?;
    let guard = backend.enter_guard()?;

    let mut source = SampleLog::seeded();
    let mut view = View::new(
        columns as usize,
        (rows as usize).min(source.line_count()),
        log_columns(),
    );
    view.pos.lineno = 0;

    info!(
        target: "runtime",
        width = view.width,
        height = view.height,
        rows = source.line_count(),
        "painting sample log"
    );

    let mut pane = Pane::new();
    redraw_view(&mut view, &mut source, &mut pane, &opts);
    pane.present(&mut stdout(), opts.encoding())?;

    std::thread::sleep(Duration::from_millis(args.hold_ms));
    guard.leave()?;
    Ok(())
}
