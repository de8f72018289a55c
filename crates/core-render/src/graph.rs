//! Revision-graph cell renderer.
//!
//! Renders one canvas left-to-right, one symbol per lane, through exactly
//! one of three interchangeable glyph encodings selected once per canvas:
//! ASCII text, raw line-drawing glyphs written cell-by-cell (bypassing the
//! text/encoding path so they survive the cursor highlight), or UTF-8
//! line-drawing text. Every symbol consumes two glyph cells except the
//! first of the row, whose leading half-cell is elided; one blank separator
//! cell follows the canvas. The cell count is identical across encodings
//! even though glyph content differs.
//!
//! A symbol's color index must stay below the palette size; a violation is
//! a row-source contract breach and fails hard.

use crate::draw::RowPainter;
use core_config::GraphicsMode;
use core_model::{GRAPH_PALETTE_SIZE, GraphCanvas, GraphSymbol, LaneShape, LineKind};

/// Resolve the display kind for one symbol: commit nodes override the lane
/// palette.
fn symbol_kind(symbol: &GraphSymbol) -> LineKind {
    if symbol.commit {
        return LineKind::GraphCommit;
    }
    assert!(
        (symbol.color as usize) < GRAPH_PALETTE_SIZE,
        "graph lane color {} outside the fixed palette",
        symbol.color
    );
    LineKind::Palette(symbol.color)
}

/// Two glyph cells for one symbol: leading half-cell, then the lane cell.
fn symbol_cells(symbol: &GraphSymbol, ascii: bool) -> [char; 2] {
    let (dash, blank) = if ascii { ('-', ' ') } else { ('─', ' ') };
    let leading = match symbol.shape {
        LaneShape::Horizontal | LaneShape::Cross | LaneShape::BranchDown | LaneShape::MergeUp => {
            dash
        }
        LaneShape::Vertical | LaneShape::Blank => blank,
    };
    let main = if symbol.commit {
        if ascii { '*' } else { '●' }
    } else {
        match symbol.shape {
            LaneShape::Vertical => {
                if ascii {
                    '|'
                } else {
                    '│'
                }
            }
            LaneShape::Horizontal => dash,
            LaneShape::Cross => {
                if ascii {
                    '+'
                } else {
                    '┼'
                }
            }
            LaneShape::BranchDown => {
                if ascii {
                    '.'
                } else {
                    '╮'
                }
            }
            LaneShape::MergeUp => {
                if ascii {
                    '\''
                } else {
                    '╯'
                }
            }
            LaneShape::Blank => ' ',
        }
    };
    [leading, main]
}

impl RowPainter<'_> {
    /// Render one graph canvas followed by its blank separator cell.
    pub fn draw_graph(&mut self, canvas: &GraphCanvas) -> bool {
        let mode = self.opts().graphics;
        for (i, symbol) in canvas.symbols.iter().enumerate() {
            let kind = symbol_kind(symbol);
            let first = i == 0;
            let full = match mode {
                GraphicsMode::Ascii => self.draw_symbol_text(symbol, kind, first, true),
                GraphicsMode::Utf8 => self.draw_symbol_text(symbol, kind, first, false),
                GraphicsMode::Graphic => {
                    let cells = symbol_cells(symbol, false);
                    self.draw_static(kind, &cells[usize::from(first)..], false)
                }
            };
            if full {
                return true;
            }
        }
        self.draw_text(LineKind::Default, " ")
    }

    fn draw_symbol_text(
        &mut self,
        symbol: &GraphSymbol,
        kind: LineKind,
        first: bool,
        ascii: bool,
    ) -> bool {
        let cells = symbol_cells(symbol, ascii);
        let text: String = cells[usize::from(first)..].iter().collect();
        self.draw_text(kind, &text)
    }
}
