//! Field layout engine.
//!
//! `draw_field` produces one aligned, fixed-width column cell; the typed
//! wrappers apply option-driven suppression and domain formatting before
//! delegating. The central layout invariant: every field consumes exactly
//! `width + 1` columns (the +1 reserves the mandatory single-space
//! separator), or less only when the viewport itself runs out. Shorter text
//! is padded, longer text is clipped (with a marker where the wrapper asks
//! for one), so column edges line up regardless of row content.

use crate::draw::RowPainter;
use crate::format::{
    DATE_SHORT_WIDTH, DATE_WIDTH, MODE_WIDTH, author_trim, format_author, format_date,
    format_file_size, format_mode,
};
use core_config::{AuthorDisplay, DateDisplay, FileSizeDisplay, FilenameDisplay, GraphicsMode};
use core_model::{Align, FileMode, LineKind, Timestamp};
use core_text::{display_width, width_max};

impl RowPainter<'_> {
    /// Draw one `width + 1`-column field. `None` text renders the whole
    /// reserved span as blank padding ("column present, value absent").
    pub fn draw_field(
        &mut self,
        kind: LineKind,
        text: Option<&str>,
        width: usize,
        align: Align,
        trim: bool,
    ) -> bool {
        let mut max = self.max_len().min(width + 1);
        let mut start = self.view.col;

        let Some(text) = text else {
            return self.draw_space(kind, max, max);
        };

        if align == Align::Right {
            let textlen = width_max(text, max);
            // Fail-soft: wide text in a narrow column makes this negative;
            // the pad is skipped and the clip below truncates.
            let leftpad = max as isize - textlen as isize - 1;
            if leftpad > 0 {
                let leftpad = leftpad as usize;
                if self.draw_space(kind, leftpad, leftpad) {
                    return true;
                }
                max -= leftpad;
                start += leftpad;
            }
        }

        self.draw_chars(kind, text, max.saturating_sub(1), trim)
            || self.draw_space(
                LineKind::Default,
                max.saturating_sub(self.view.col - start),
                max,
            )
    }

    pub fn draw_date(&mut self, date: Option<Timestamp>) -> bool {
        if self.opts.date == DateDisplay::No {
            return false;
        }
        let cols = if self.opts.date == DateDisplay::Short {
            DATE_SHORT_WIDTH
        } else {
            DATE_WIDTH
        };
        let text = date.and_then(|ts| format_date(ts, self.opts.date));
        self.draw_field(LineKind::Date, text.as_deref(), cols, Align::Left, false)
    }

    pub fn draw_author(&mut self, author: Option<&str>, width: usize) -> bool {
        if self.opts.author == AuthorDisplay::No {
            return false;
        }
        let trim = author_trim(width);
        let text = author.and_then(|name| format_author(name, width, self.opts.author));
        self.draw_field(LineKind::Author, text.as_deref(), width, Align::Left, trim)
    }

    /// Always-available id field for explicit per-column use.
    pub fn draw_id_custom(&mut self, kind: LineKind, id: Option<&str>, width: usize) -> bool {
        self.draw_field(kind, id, width, Align::Left, false)
    }

    /// Option-gated id field with the default width policy.
    pub fn draw_id(&mut self, id: Option<&str>) -> bool {
        if !self.opts.show_id {
            return false;
        }
        let width = self.opts.id_width;
        self.draw_id_custom(LineKind::Id, id, width)
    }

    pub fn draw_filename(
        &mut self,
        file_name: Option<&str>,
        auto_enabled: bool,
        mode: Option<FileMode>,
        width: usize,
    ) -> bool {
        if self.opts.filename == FilenameDisplay::No {
            return false;
        }
        if self.opts.filename == FilenameDisplay::Auto && !auto_enabled {
            return false;
        }
        let trim = file_name.is_some_and(|name| display_width(name) >= width);
        let kind = if mode.is_some_and(FileMode::is_dir) {
            LineKind::Directory
        } else {
            LineKind::File
        };
        self.draw_field(kind, file_name, width, Align::Left, trim)
    }

    /// `pad` reserves the span without a value (directories have no size).
    pub fn draw_file_size(&mut self, size: u64, width: usize, pad: bool) -> bool {
        if width == 0 || self.opts.file_size == FileSizeDisplay::No {
            return false;
        }
        let text = if pad {
            None
        } else {
            format_file_size(size, self.opts.file_size)
        };
        self.draw_field(
            LineKind::FileSize,
            text.as_deref(),
            width,
            Align::Right,
            false,
        )
    }

    pub fn draw_mode(&mut self, mode: Option<FileMode>) -> bool {
        let text = mode.map(format_mode);
        self.draw_field(
            LineKind::Mode,
            text.as_deref(),
            MODE_WIDTH,
            Align::Left,
            false,
        )
    }

    /// Line-number cell: a formatted number on the first line and every
    /// `interval`-th line, blank padding of the same width otherwise,
    /// always followed by a one-cell separator glyph.
    pub fn draw_lineno_custom(&mut self, lineno: usize, show: bool, interval: usize) -> bool {
        if !show {
            return false;
        }
        let interval = interval.max(1);
        let digits = self.view.digits.max(3);
        let max = self.max_len().min(digits);
        let separator = if self.opts.graphics == GraphicsMode::Ascii {
            '|'
        } else {
            '│'
        };

        let text = if lineno == 1 || lineno % interval == 0 {
            if self.view.digits <= 9 {
                Some(format!("{lineno:0digits$}"))
            } else {
                Some(lineno.to_string())
            }
        } else {
            None
        };
        match text {
            Some(text) => {
                self.draw_chars(LineKind::LineNumber, &text, max, true);
            }
            None => {
                self.draw_space(LineKind::LineNumber, max, digits);
            }
        }
        self.draw_static(LineKind::Default, &[separator], true)
    }

    /// 1-based absolute line number for a 0-based viewport row.
    pub fn draw_lineno(&mut self, row: usize) -> bool {
        let lineno = row + self.view.pos.offset + 1;
        self.draw_lineno_custom(
            lineno,
            self.opts.show_line_numbers,
            self.opts.line_number_interval,
        )
    }

    /// Commit title, restyled past the configured overflow budget.
    pub fn draw_commit_title(&mut self, title: &str) -> bool {
        let overflow = self.opts.title_overflow;
        self.draw_text_overflow(LineKind::CommitTitle, title, overflow > 0, overflow)
    }
}
