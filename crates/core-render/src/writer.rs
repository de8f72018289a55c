//! Pane writer: queued terminal command abstraction.
//!
//! The rendering core never talks to the terminal directly; it records
//! `PaneCommand`s against a `Pane` and the binary presents them in one
//! batch. This keeps every draw operation synchronous and testable (tests
//! assert on the recorded command stream) while enforcing the
//! batched-refresh discipline: `refresh()` marks a batch boundary, and a
//! scan that repainted nothing never marks one.
//!
//! Design invariants:
//! * Commands preserve ordering; nothing is flushed mid-row.
//! * Positions are absolute (row, col) with origin (0,0); the scheduler
//!   guarantees bounds.
//! * `Print` text flows through the optional output-encoding conversion at
//!   present time; `PutGlyph` cells bypass it so line-drawing glyphs reach
//!   the terminal untouched.

use crate::style::CellStyle;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum PaneCommand {
    MoveTo { row: u16, col: u16 },
    SetStyle(CellStyle),
    Print(String),
    PutGlyph(char),
    ClearToEol,
    Erase,
}

#[derive(Debug, Default)]
pub struct Pane {
    cmds: Vec<PaneCommand>,
    refreshes: usize,
}

impl Pane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cmds.push(PaneCommand::MoveTo {
            row: row as u16,
            col: col as u16,
        });
    }

    pub fn set_style(&mut self, style: CellStyle) {
        self.cmds.push(PaneCommand::SetStyle(style));
    }

    pub fn print(&mut self, text: &str) {
        if !text.is_empty() {
            self.cmds.push(PaneCommand::Print(text.to_string()));
        }
    }

    pub fn put_glyph(&mut self, glyph: char) {
        self.cmds.push(PaneCommand::PutGlyph(glyph));
    }

    pub fn clear_to_eol(&mut self) {
        self.cmds.push(PaneCommand::ClearToEol);
    }

    pub fn erase(&mut self) {
        self.cmds.push(PaneCommand::Erase);
    }

    /// Mark a batch boundary (one terminal refresh).
    pub fn refresh(&mut self) {
        self.refreshes += 1;
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    pub fn commands(&self) -> &[PaneCommand] {
        &self.cmds
    }

    pub fn take_commands(&mut self) -> Vec<PaneCommand> {
        std::mem::take(&mut self.cmds)
    }

    /// Translate and flush every recorded command to the terminal.
    pub fn present(
        &mut self,
        out: &mut impl Write,
        encoding: Option<&'static encoding_rs::Encoding>,
    ) -> Result<()> {
        for cmd in self.cmds.drain(..) {
            match cmd {
                PaneCommand::MoveTo { row, col } => {
                    queue!(out, MoveTo(col, row))?;
                }
                PaneCommand::SetStyle(style) => {
                    queue!(out, SetAttribute(Attribute::Reset))?;
                    queue!(out, SetForegroundColor(style.fg))?;
                    if style.bold {
                        queue!(out, SetAttribute(Attribute::Bold))?;
                    }
                    if style.reverse {
                        queue!(out, SetAttribute(Attribute::Reverse))?;
                    }
                }
                PaneCommand::Print(text) => match encoding {
                    Some(enc) => {
                        let (bytes, _, _) = enc.encode(&text);
                        out.write_all(&bytes)?;
                    }
                    None => {
                        queue!(out, Print(text))?;
                    }
                },
                PaneCommand::PutGlyph(glyph) => {
                    queue!(out, Print(glyph))?;
                }
                PaneCommand::ClearToEol => {
                    queue!(out, Clear(ClearType::UntilNewLine))?;
                }
                PaneCommand::Erase => {
                    queue!(out, Clear(ClearType::All))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
