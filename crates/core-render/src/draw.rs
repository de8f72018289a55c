//! Clip-draw primitives.
//!
//! `RowPainter` is the exclusively-owned layout cursor for one row: it
//! borrows the view (column cursor + attribute coalescing state), the pane
//! writer, and the immutable option set for the duration of a single row
//! paint. Every primitive returns the viewport-full signal (`true` means
//! "no further cells fit on this row") which callers use to short-circuit
//! the rest of the column pipeline. That boolean is ordinary control flow,
//! never an error.
//!
//! Invariants:
//! * `view.col` only moves through `View::advance`, so it can never exceed
//!   `view.width + view.pos.col`.
//! * Attribute writes are coalesced: a style is emitted only when the kind
//!   changes and the row is not selected (selected rows keep the cursor
//!   style throughout).
//! * The truncation marker is one cell, styled as `Delimiter`, and only
//!   appended when at least one source cell was actually painted.

use crate::style::style_for;
use crate::writer::Pane;
use core_config::DisplayOptions;
use core_model::{LineKind, View};
use core_text::{EXPAND_CHUNK, clip, expand_tabs_chunk};

/// Blank run used by `draw_space`; padding is chunked through the normal
/// character path in runs of this size.
const SPACES: &str = "                    ";

pub struct RowPainter<'a> {
    pub(crate) view: &'a mut View,
    pub(crate) pane: &'a mut Pane,
    pub(crate) opts: &'a DisplayOptions,
    pub(crate) selected: bool,
}

impl<'a> RowPainter<'a> {
    pub fn new(
        view: &'a mut View,
        pane: &'a mut Pane,
        opts: &'a DisplayOptions,
        selected: bool,
    ) -> Self {
        Self {
            view,
            pane,
            opts,
            selected,
        }
    }

    pub fn view(&self) -> &View {
        self.view
    }

    pub fn opts(&self) -> &DisplayOptions {
        self.opts
    }

    /// Remaining column budget on this row.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.view.max_len()
    }

    /// True once the row's column budget is spent.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.view.max_len() == 0
    }

    pub(crate) fn set_attr(&mut self, kind: LineKind) {
        if !self.selected && self.view.curtype != kind {
            self.pane.set_style(style_for(kind));
            self.view.curtype = kind;
        }
    }

    /// Write up to `max_len` display columns of `text`, honoring the
    /// horizontal scroll skip, appending a `~` marker cell on truncation
    /// when `use_tilde` is set.
    pub fn draw_chars(&mut self, kind: LineKind, text: &str, max_len: usize, use_tilde: bool) -> bool {
        // Clamp to the live budget so chunked re-entry cannot overrun.
        let max_len = max_len.min(self.max_len());
        if max_len == 0 {
            return self.is_full();
        }

        let skip = self.view.pos.col.saturating_sub(self.view.col);
        let clipped = clip(text, skip, max_len, use_tilde, self.opts.tab_size);

        if !encodes_cleanly(self.opts, clipped.text) {
            // Fail closed: an unconvertible run stops the row rather than
            // corrupting the terminal buffer.
            return true;
        }

        let mut cols = clipped.cols;
        self.set_attr(kind);
        if !clipped.text.is_empty() {
            self.pane.print(clipped.text);
            if clipped.trimmed && use_tilde {
                self.set_attr(LineKind::Delimiter);
                self.pane.put_glyph('~');
                cols += 1;
            }
        }

        self.view.advance(cols);
        self.is_full()
    }

    /// Pad with blank cells, clamped to `max`.
    pub fn draw_space(&mut self, kind: LineKind, max: usize, spaces: usize) -> bool {
        let mut spaces = spaces.min(max);
        while spaces > 0 {
            let len = spaces.min(SPACES.len());
            if self.draw_chars(kind, &SPACES[..len], len, false) {
                return true;
            }
            spaces -= len;
        }
        self.is_full()
    }

    /// Expand tabs, then feed the expansion through `draw_chars` in bounded
    /// chunks until the string is consumed or the row fills.
    pub fn draw_text_expanded(
        &mut self,
        kind: LineKind,
        text: &str,
        max_len: usize,
        use_tilde: bool,
    ) -> bool {
        let mut rest = text;
        let mut scratch = String::new();
        loop {
            let consumed = expand_tabs_chunk(rest, self.opts.tab_size, &mut scratch, EXPAND_CHUNK);
            if self.draw_chars(kind, &scratch, max_len, use_tilde) {
                return true;
            }
            rest = &rest[consumed..];
            if rest.is_empty() {
                break;
            }
        }
        self.is_full()
    }

    /// Draw `text` into the remaining row budget with tab expansion and a
    /// truncation marker.
    pub fn draw_text(&mut self, kind: LineKind, text: &str) -> bool {
        self.draw_text_expanded(kind, text, self.max_len(), true)
    }

    /// Draw `text` with the first `overflow` columns in `kind` and the
    /// remainder restyled as `Overflow`. With `on` false this is plain
    /// `draw_text`.
    pub fn draw_text_overflow(
        &mut self,
        kind: LineKind,
        text: &str,
        on: bool,
        overflow: usize,
    ) -> bool {
        let mut text = text;
        let mut kind = kind;
        if on {
            let max = self.max_len().min(overflow);
            if self.draw_text_expanded(kind, text, max, max < overflow) {
                return true;
            }
            // Byte-offset split, nudged to the next char boundary.
            let mut cut = overflow.min(text.len());
            while cut < text.len() && !text.is_char_boundary(cut) {
                cut += 1;
            }
            text = &text[cut..];
            kind = LineKind::Overflow;
        }
        if !text.is_empty() && self.draw_text(kind, text) {
            return true;
        }
        self.is_full()
    }

    /// Format, then `draw_text`.
    pub fn draw_formatted(&mut self, kind: LineKind, args: std::fmt::Arguments<'_>) -> bool {
        let text = args.to_string();
        self.draw_text(kind, &text)
    }

    /// Write pre-shaped glyphs cell-by-cell, bypassing tab expansion and
    /// encoding conversion so line-drawing characters render correctly,
    /// particularly under the cursor highlight.
    pub fn draw_static(&mut self, kind: LineKind, glyphs: &[char], separator: bool) -> bool {
        let skip = self.view.pos.col.saturating_sub(self.view.col);
        let max = self.max_len();
        let size = glyphs.len().min(max);

        self.set_attr(kind);
        for glyph in glyphs.iter().take(size).skip(skip) {
            self.pane.put_glyph(*glyph);
        }

        self.view.advance(size);
        if separator {
            if size < max && skip <= size {
                self.pane.put_glyph(' ');
            }
            self.view.advance(1);
        }

        self.is_full()
    }
}

fn encodes_cleanly(opts: &DisplayOptions, text: &str) -> bool {
    match opts.encoding() {
        Some(enc) => {
            let (_, _, had_errors) = enc.encode(text);
            !had_errors
        }
        None => true,
    }
}
