//! Grapheme-cluster display width.
//!
//! A single authoritative function (`egc_width`) returns the terminal column
//! width of one grapheme cluster; string-level helpers fold over it. The
//! baseline comes from `unicode-width` with two renderer-specific rules on
//! top:
//! * control characters occupy 0 cells (they never advance the cursor the
//!   way the terminal's own echo would), and
//! * a cluster reduced to zero by combining-mark accounting still measures
//!   at least the width of its base, which `unicode-width` already handles
//!   at the cluster level.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display column width of a single grapheme cluster.
///
/// Precondition: `egc` is one grapheme cluster slice; callers segment first.
#[inline]
pub fn egc_width(egc: &str) -> usize {
    if egc.chars().all(char::is_control) {
        return 0;
    }
    UnicodeWidthStr::width(egc)
}

/// Display column width of an entire string.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).map(egc_width).sum()
}

/// Display width of `text`, scanning no further than `max` columns.
///
/// Used for right-alignment arithmetic where only "fits or not" matters; a
/// string wider than `max` reports exactly `max` without walking its tail.
pub fn width_max(text: &str, max: usize) -> usize {
    let mut cols = 0;
    for egc in text.graphemes(true) {
        cols += egc_width(egc);
        if cols >= max {
            return max;
        }
    }
    cols
}
