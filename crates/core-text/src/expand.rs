//! Bounded tab expansion.
//!
//! Tab stops are resolved against display columns, so the expansion of a
//! long string is produced in chunks: the caller hands over a scratch
//! `String` and an output byte budget, gets back how many source bytes were
//! consumed, and re-enters with the remainder until the source is
//! exhausted. The chunk budget bounds scratch growth for pathological
//! inputs while the re-entry loop keeps arbitrarily long strings renderable.
//!
//! Progress guarantee: a non-empty source always consumes at least one
//! grapheme per call, even when that grapheme's expansion alone exceeds the
//! budget, so callers may loop on the return value without a liveness
//! guard.

use crate::width::egc_width;
use unicode_segmentation::UnicodeSegmentation;

/// Output budget per expansion pass, in bytes.
///
/// Comfortably wider than any sane viewport so a second pass only happens
/// once the current row's budget is already spent.
pub const EXPAND_CHUNK: usize = 1024;

/// Expand tabs in `src` into `out` (cleared first), writing at most `budget`
/// bytes. Returns the number of source bytes consumed.
pub fn expand_tabs_chunk(src: &str, tab_size: usize, out: &mut String, budget: usize) -> usize {
    out.clear();
    let tab = tab_size.max(1);
    let mut col = 0;
    let mut consumed = 0;
    for egc in src.graphemes(true) {
        if egc == "\t" {
            let spaces = tab - (col % tab);
            if !out.is_empty() && out.len() + spaces > budget {
                break;
            }
            for _ in 0..spaces {
                out.push(' ');
            }
            col += spaces;
        } else {
            if !out.is_empty() && out.len() + egc.len() > budget {
                break;
            }
            out.push_str(egc);
            col += egc_width(egc);
        }
        consumed += egc.len();
    }
    consumed
}
