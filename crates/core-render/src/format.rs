//! Field value formatting.
//!
//! Turns semantic row values (timestamps, author idents, sizes, mode bits)
//! into the strings the field layout engine pads and clips. Formatting is
//! pure and option-driven; suppression (a display mode of "no") is handled
//! by the typed field wrappers, so these helpers only ever see values that
//! will be rendered.

use chrono::{DateTime, Local};
use core_config::{AuthorDisplay, DateDisplay, FileSizeDisplay};
use core_model::{FileMode, Timestamp};
use core_text::display_width;
use unicode_segmentation::UnicodeSegmentation;

/// Fixed column width of a long date, `2006-04-29 14:21`.
pub const DATE_WIDTH: usize = 16;
/// Fixed column width of a short date, `2006-04-29`.
pub const DATE_SHORT_WIDTH: usize = 10;
/// Fixed column width of a mode string, `-rw-r--r--`.
pub const MODE_WIDTH: usize = 10;

pub fn format_date(ts: Timestamp, display: DateDisplay) -> Option<String> {
    let utc = DateTime::from_timestamp(ts.0, 0)?;
    let local = utc.with_timezone(&Local);
    match display {
        DateDisplay::No => None,
        DateDisplay::Short => Some(local.format("%Y-%m-%d").to_string()),
        DateDisplay::Long => Some(local.format("%Y-%m-%d %H:%M").to_string()),
    }
}

/// Whether an author column of `width` gets a truncation marker when the
/// name overflows. Very narrow columns stay marker-free: the marker would
/// eat most of the field.
pub fn author_trim(width: usize) -> bool {
    width > 5
}

pub fn format_author(name: &str, width: usize, display: AuthorDisplay) -> Option<String> {
    match display {
        AuthorDisplay::No => None,
        AuthorDisplay::Full => Some(name.to_string()),
        AuthorDisplay::Abbreviated => {
            if display_width(name) <= width {
                return Some(name.to_string());
            }
            let initials: String = name
                .split_whitespace()
                .filter_map(|word| word.graphemes(true).next())
                .collect();
            if initials.is_empty() {
                Some(name.to_string())
            } else {
                Some(initials)
            }
        }
    }
}

pub fn format_file_size(size: u64, display: FileSizeDisplay) -> Option<String> {
    match display {
        FileSizeDisplay::No => None,
        FileSizeDisplay::Bytes => Some(size.to_string()),
        FileSizeDisplay::Units => {
            const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
            let mut value = size as f64;
            let mut unit = 0;
            while value >= 1024.0 && unit + 1 < UNITS.len() {
                value /= 1024.0;
                unit += 1;
            }
            if unit == 0 {
                Some(format!("{size}{}", UNITS[0]))
            } else if value >= 10.0 {
                Some(format!("{value:.0}{}", UNITS[unit]))
            } else {
                Some(format!("{value:.1}{}", UNITS[unit]))
            }
        }
    }
}

pub fn format_mode(mode: FileMode) -> String {
    let kind = if mode.is_dir() {
        'd'
    } else if mode.is_symlink() {
        'l'
    } else {
        '-'
    };
    let mut out = String::with_capacity(MODE_WIDTH);
    out.push(kind);
    let bits = mode.permissions();
    for shift in [6, 3, 0] {
        let triple = (bits >> shift) & 0o7;
        out.push(if triple & 0o4 != 0 { 'r' } else { '-' });
        out.push(if triple & 0o2 != 0 { 'w' } else { '-' });
        out.push(if triple & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}
