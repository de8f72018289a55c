//! Display option loading and validation.
//!
//! Parses `lore.toml` (or an override path provided by the binary) into the
//! immutable `DisplayOptions` structure that is threaded through the whole
//! rendering call tree. There is deliberately no global option state: the
//! renderer receives a `&DisplayOptions` per frame, so tests and future
//! per-view overrides construct their own.
//!
//! Fail-soft policy: a missing file or a parse error falls back to
//! defaults, and degenerate values (tab size 0, line-number interval 0) are
//! clamped with an info log rather than rejected. Unknown TOML fields are
//! ignored so the file format can grow without breaking older binaries.

use anyhow::Result;
use serde::Deserialize;
use std::hash::{Hash, Hasher};
use std::{fs, path::PathBuf};
use tracing::info;

/// Date column rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateDisplay {
    No,
    Short,
    #[default]
    Long,
}

/// Author column rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorDisplay {
    No,
    #[default]
    Full,
    Abbreviated,
}

/// Filename column rendering mode. `Auto` shows the column only on rows
/// that request it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameDisplay {
    No,
    #[default]
    Auto,
    Always,
}

/// File-size column rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileSizeDisplay {
    No,
    #[default]
    Bytes,
    Units,
}

/// Revision-graph glyph encoding, selected once per canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphicsMode {
    Ascii,
    /// Line-drawing glyphs written cell-by-cell, bypassing the text
    /// encoding path.
    Graphic,
    #[default]
    Utf8,
}

/// Immutable option set consumed by the rendering call tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub tab_size: usize,
    pub date: DateDisplay,
    pub author: AuthorDisplay,
    /// 0 selects the width computed from row content.
    pub author_width: usize,
    pub show_id: bool,
    pub id_width: usize,
    pub filename: FilenameDisplay,
    /// 0 selects the width computed from row content.
    pub filename_width: usize,
    pub file_size: FileSizeDisplay,
    pub show_line_numbers: bool,
    pub line_number_interval: usize,
    pub show_refs: bool,
    /// Commit-title overflow budget in columns; 0 disables overflow
    /// highlighting.
    pub title_overflow: usize,
    pub graphics: GraphicsMode,
    /// Output encoding label; `None` (or any UTF-8 label) writes through.
    pub output_encoding: Option<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            tab_size: 8,
            date: DateDisplay::default(),
            author: AuthorDisplay::default(),
            author_width: 0,
            show_id: false,
            id_width: 7,
            filename: FilenameDisplay::default(),
            filename_width: 0,
            file_size: FileSizeDisplay::default(),
            show_line_numbers: false,
            line_number_interval: 5,
            show_refs: true,
            title_overflow: 0,
            graphics: GraphicsMode::default(),
            output_encoding: None,
        }
    }
}

impl DisplayOptions {
    /// Resolved output encoding, `None` when output is plain UTF-8.
    pub fn encoding(&self) -> Option<&'static encoding_rs::Encoding> {
        let label = self.output_encoding.as_deref()?;
        let enc = encoding_rs::Encoding::for_label(label.as_bytes())?;
        if enc == encoding_rs::UTF_8 {
            None
        } else {
            Some(enc)
        }
    }

    /// Stable stamp over the fields that affect column layout; a change
    /// forces the view to reflow its computed column widths.
    pub fn layout_stamp(&self) -> u64 {
        let mut hasher = std::hash::DefaultHasher::new();
        self.date.hash(&mut hasher);
        self.author.hash(&mut hasher);
        self.author_width.hash(&mut hasher);
        self.show_id.hash(&mut hasher);
        self.id_width.hash(&mut hasher);
        self.filename.hash(&mut hasher);
        self.filename_width.hash(&mut hasher);
        self.file_size.hash(&mut hasher);
        self.show_line_numbers.hash(&mut hasher);
        self.show_refs.hash(&mut hasher);
        hasher.finish()
    }

    /// Clamp degenerate values in place, logging anything adjusted.
    pub fn validate(&mut self) {
        if self.tab_size == 0 {
            info!(target: "config", "tab_size 0 clamped to 1");
            self.tab_size = 1;
        }
        if self.line_number_interval == 0 {
            info!(target: "config", "line_number_interval 0 clamped to 1");
            self.line_number_interval = 1;
        }
        if self.show_id && self.id_width == 0 {
            info!(target: "config", "id_width 0 clamped to 7");
            self.id_width = 7;
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ViewFileConfig {
    #[serde(default)]
    pub tab_size: Option<usize>,
    #[serde(default)]
    pub date: Option<DateDisplay>,
    #[serde(default)]
    pub author: Option<AuthorDisplay>,
    #[serde(default)]
    pub author_width: Option<usize>,
    #[serde(default)]
    pub show_id: Option<bool>,
    #[serde(default)]
    pub id_width: Option<usize>,
    #[serde(default)]
    pub filename: Option<FilenameDisplay>,
    #[serde(default)]
    pub filename_width: Option<usize>,
    #[serde(default)]
    pub file_size: Option<FileSizeDisplay>,
    #[serde(default)]
    pub show_line_numbers: Option<bool>,
    #[serde(default)]
    pub line_number_interval: Option<usize>,
    #[serde(default)]
    pub show_refs: Option<bool>,
    #[serde(default)]
    pub title_overflow: Option<usize>,
    #[serde(default)]
    pub graphics: Option<GraphicsMode>,
    #[serde(default)]
    pub output_encoding: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub view: ViewFileConfig,
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ConfigFile {
    pub fn into_options(self) -> DisplayOptions {
        let mut opts = DisplayOptions::default();
        let v = self.view;
        apply(&mut opts.tab_size, v.tab_size);
        apply(&mut opts.date, v.date);
        apply(&mut opts.author, v.author);
        apply(&mut opts.author_width, v.author_width);
        apply(&mut opts.show_id, v.show_id);
        apply(&mut opts.id_width, v.id_width);
        apply(&mut opts.filename, v.filename);
        apply(&mut opts.filename_width, v.filename_width);
        apply(&mut opts.file_size, v.file_size);
        apply(&mut opts.show_line_numbers, v.show_line_numbers);
        apply(&mut opts.line_number_interval, v.line_number_interval);
        apply(&mut opts.show_refs, v.show_refs);
        apply(&mut opts.title_overflow, v.title_overflow);
        apply(&mut opts.graphics, v.graphics);
        opts.output_encoding = v.output_encoding;
        opts.validate();
        opts
    }
}

/// Best-effort config path following platform conventions.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("lore.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("lore").join("lore.toml");
    }
    PathBuf::from("lore.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<DisplayOptions> {
    let path = path.unwrap_or_else(discover);
    if let Ok(content) = fs::read_to_string(&path) {
        match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => Ok(file.into_options()),
            Err(err) => {
                info!(target: "config", %err, "config parse failed, using defaults");
                Ok(DisplayOptions::default())
            }
        }
    } else {
        Ok(DisplayOptions::default())
    }
}
