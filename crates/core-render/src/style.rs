//! Display attribute palette.
//!
//! Maps a `LineKind` to the concrete terminal attribute it renders with.
//! Styling stays separate from emission: the pane writer receives fully
//! resolved `CellStyle` values and never consults kinds, so a future theme
//! table only touches this module.

use core_model::{GRAPH_PALETTE_SIZE, LineKind};
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Color,
    pub bold: bool,
    pub reverse: bool,
}

impl CellStyle {
    const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bold: false,
            reverse: false,
        }
    }

    const fn bold(fg: Color) -> Self {
        Self {
            fg,
            bold: true,
            reverse: false,
        }
    }
}

/// Fixed lane color palette for the revision graph.
const GRAPH_PALETTE: [Color; GRAPH_PALETTE_SIZE] = [
    Color::Magenta,
    Color::Blue,
    Color::Yellow,
    Color::Cyan,
    Color::Green,
    Color::Grey,
    Color::Red,
];

pub fn style_for(kind: LineKind) -> CellStyle {
    match kind {
        LineKind::None | LineKind::Default | LineKind::CommitTitle => CellStyle::fg(Color::Reset),
        LineKind::Cursor => CellStyle {
            fg: Color::Reset,
            bold: true,
            reverse: true,
        },
        LineKind::Delimiter => CellStyle::fg(Color::Magenta),
        LineKind::Overflow => CellStyle::fg(Color::Red),
        LineKind::Date => CellStyle::fg(Color::Blue),
        LineKind::Author => CellStyle::fg(Color::Green),
        LineKind::Id => CellStyle::fg(Color::Magenta),
        LineKind::Mode => CellStyle::fg(Color::Cyan),
        LineKind::FileSize => CellStyle::fg(Color::Reset),
        LineKind::LineNumber => CellStyle::fg(Color::Cyan),
        LineKind::File => CellStyle::fg(Color::Reset),
        LineKind::Directory => CellStyle::bold(Color::Blue),
        LineKind::GraphCommit => CellStyle::fg(Color::Blue),
        LineKind::Palette(index) => CellStyle::fg(GRAPH_PALETTE[index as usize]),
        LineKind::RefHead => CellStyle::bold(Color::Cyan),
        LineKind::RefBranch => CellStyle::bold(Color::Green),
        LineKind::RefTag => CellStyle::bold(Color::Yellow),
        LineKind::RefRemote => CellStyle::fg(Color::Yellow),
        LineKind::RefTracked => CellStyle::bold(Color::Blue),
    }
}
