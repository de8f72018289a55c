//! Per-row repaint state and display kinds.

use crate::refs::{Ref, RefKind};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LineFlags: u8 {
        /// Content or selection changed since the last paint.
        const DIRTY = 0b0000_0001;
        /// Trailing cells must be erased before the repaint.
        const CLEAREOL = 0b0000_0010;
        /// This is the view's selected row.
        const SELECTED = 0b0000_0100;
    }
}

/// One materialized row's repaint bookkeeping. The row source owns the
/// content; the scheduler owns these flags.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    /// Semantic category driving the default display attribute.
    pub kind: LineKind,
    pub flags: LineFlags,
}

impl Line {
    pub fn new(kind: LineKind) -> Self {
        Self {
            kind,
            flags: LineFlags::DIRTY,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.flags.contains(LineFlags::DIRTY)
    }

    pub fn is_selected(&self) -> bool {
        self.flags.contains(LineFlags::SELECTED)
    }
}

/// Display-attribute category of a run of cells.
///
/// `None` is the neutral "no attribute emitted yet" state used for
/// attribute-change coalescing at the start of each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    None,
    Default,
    Cursor,
    /// Truncation marker cell.
    Delimiter,
    /// Commit-title tail past the overflow budget.
    Overflow,
    Date,
    Author,
    Id,
    Mode,
    FileSize,
    LineNumber,
    File,
    Directory,
    CommitTitle,
    /// Commit node in the revision graph; overrides the lane palette.
    GraphCommit,
    /// Revision-graph lane color, index < `GRAPH_PALETTE_SIZE`.
    Palette(u8),
    RefHead,
    RefBranch,
    RefTag,
    RefRemote,
    RefTracked,
}

impl LineKind {
    /// Display kind for a ref badge.
    pub fn from_ref(r: &Ref) -> Self {
        match r.kind {
            RefKind::Head => LineKind::RefHead,
            RefKind::Branch => LineKind::RefBranch,
            RefKind::Tag => LineKind::RefTag,
            RefKind::Remote => LineKind::RefRemote,
            RefKind::Tracked => LineKind::RefTracked,
        }
    }
}
