//! Revision-graph lane data for one row.
//!
//! The canvas is produced by the row source's graph layout and is read-only
//! to the renderer. A symbol describes one lane crossing the row: its
//! connector shape, its lane color, and whether this row's commit node sits
//! on it. Color indices are a row-source contract and must stay below
//! `GRAPH_PALETTE_SIZE`; the renderer treats a violation as a fatal logic
//! error, not a recoverable condition.

/// Number of entries in the fixed lane color palette.
pub const GRAPH_PALETTE_SIZE: usize = 7;

/// Connector shape of one lane at one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneShape {
    /// Lane passes straight through.
    Vertical,
    /// Lane is routed horizontally across this cell.
    Horizontal,
    /// Horizontal routing crossing a continuing lane.
    Cross,
    /// Lane forks downward out of the horizontal run.
    BranchDown,
    /// Lane merges upward into the horizontal run.
    MergeUp,
    /// No connector in this lane.
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSymbol {
    pub shape: LaneShape,
    /// Lane color index, `< GRAPH_PALETTE_SIZE`.
    pub color: u8,
    /// Commit node marker; overrides the lane palette color.
    pub commit: bool,
}

impl GraphSymbol {
    pub fn lane(shape: LaneShape, color: u8) -> Self {
        Self {
            shape,
            color,
            commit: false,
        }
    }

    pub fn commit(shape: LaneShape, color: u8) -> Self {
        Self {
            shape,
            color,
            commit: true,
        }
    }
}

/// Ordered lane symbols for one row, leftmost lane first.
#[derive(Debug, Clone, Default)]
pub struct GraphCanvas {
    pub symbols: Vec<GraphSymbol>,
}

impl GraphCanvas {
    pub fn new(symbols: Vec<GraphSymbol>) -> Self {
        Self { symbols }
    }
}
