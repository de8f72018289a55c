//! Graph cell rendering parity: the three glyph encodings must consume
//! identical cell counts even though glyph content differs.

mod common;

use common::row_text;
use core_config::{DisplayOptions, GraphicsMode};
use core_model::{
    Align, ColumnDescriptor, ColumnKind, ColumnValues, GraphCanvas, GraphSymbol, LaneShape, Line,
    LineKind, View,
};
use core_render::writer::Pane;
use core_render::{RowSource, redraw_view};

struct GraphSource {
    lines: Vec<Line>,
    titles: Vec<String>,
    canvases: Vec<GraphCanvas>,
}

impl GraphSource {
    fn new(canvases: Vec<GraphCanvas>) -> Self {
        Self {
            lines: canvases.iter().map(|_| Line::new(LineKind::Default)).collect(),
            titles: (0..canvases.len()).map(|i| format!("t{i}")).collect(),
            canvases,
        }
    }
}

impl RowSource for GraphSource {
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
        Some(ColumnValues {
            graph: Some(&self.canvases[index]),
            commit_title: Some(&self.titles[index]),
            ..Default::default()
        })
    }
}

fn title_view() -> View {
    View::new(
        60,
        2,
        vec![ColumnDescriptor::new(ColumnKind::CommitTitle, 0, Align::Left)],
    )
}

fn three_lane_canvas() -> GraphCanvas {
    GraphCanvas::new(vec![
        GraphSymbol::commit(LaneShape::Vertical, 0),
        GraphSymbol::lane(LaneShape::Cross, 1),
        GraphSymbol::lane(LaneShape::BranchDown, 2),
    ])
}

#[test]
fn title_column_starts_after_identical_cell_count_in_every_mode() {
    let mut title_cols = Vec::new();
    for mode in [GraphicsMode::Ascii, GraphicsMode::Graphic, GraphicsMode::Utf8] {
        let mut source = GraphSource::new(vec![three_lane_canvas(), three_lane_canvas()]);
        let mut view = title_view();
        let mut pane = Pane::new();
        let mut opts = DisplayOptions::default();
        opts.graphics = mode;
        redraw_view(&mut view, &mut source, &mut pane, &opts);
        let text = row_text(&pane, 0);
        let at = text.find("t0").unwrap_or_else(|| panic!("title in {mode:?}: {text:?}"));
        // Byte offsets differ across encodings; columns must not.
        title_cols.push(text[..at].chars().count());
    }
    // 1 + 2 + 2 glyph cells + 1 separator = 6 in every encoding.
    assert_eq!(title_cols, vec![6, 6, 6]);
}

#[test]
fn lane_colors_cycle_through_the_palette() {
    let canvas = GraphCanvas::new(
        (0..7)
            .map(|c| GraphSymbol::lane(LaneShape::Vertical, c))
            .collect(),
    );
    let mut source = GraphSource::new(vec![canvas]);
    let mut view = title_view();
    // Keep the cursor off the canvas row so the lane styles are observable.
    view.pos.lineno = 1;
    let mut pane = Pane::new();
    let opts = DisplayOptions::default();
    redraw_view(&mut view, &mut source, &mut pane, &opts);

    use core_render::PaneCommand;
    let styles: Vec<_> = pane
        .commands()
        .iter()
        .filter_map(|c| match c {
            PaneCommand::SetStyle(s) => Some(*s),
            _ => None,
        })
        .collect();
    // Seven lanes, seven distinct palette styles before the separator reset.
    let lane_styles = &styles[..7];
    for pair in lane_styles.windows(2) {
        assert_ne!(pair[0], pair[1], "adjacent lanes differ in color");
    }
}

#[test]
fn empty_canvas_renders_only_the_separator() {
    let mut source = GraphSource::new(vec![GraphCanvas::default()]);
    let mut view = title_view();
    let mut pane = Pane::new();
    let opts = DisplayOptions::default();
    redraw_view(&mut view, &mut source, &mut pane, &opts);
    let text = row_text(&pane, 0);
    assert!(text.starts_with(" t0"), "one blank, then the title: {text:?}");
}
