//! Skip/limit clipping for one run of text.
//!
//! `clip` answers the question every clip-draw primitive asks: given a
//! horizontal-scroll skip and a column budget, which byte range of this
//! string is actually painted, how many columns does the run consume, and
//! was anything cut off?
//!
//! Column accounting contract:
//! * The returned `cols` is measured in virtual coordinates: columns eaten
//!   by the skipped prefix are included. A caller maintaining a running
//!   column cursor adds `cols` and the next run's skip computation stays
//!   correct even when a run vanishes entirely into the scrolled-off
//!   region.
//! * When truncation occurs and `reserve_marker` is set, the fitted text is
//!   shrunk until one column of the budget remains free for the caller's
//!   truncation marker cell.
//! * Tabs advance to the next multiple of `tab_size` relative to the start
//!   of the run.

use crate::width::egc_width;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip<'a> {
    /// Byte range of the input that should be painted.
    pub text: &'a str,
    /// Columns consumed in virtual coordinates (skipped prefix included,
    /// marker cell excluded).
    pub cols: usize,
    /// True when the input did not fit inside `skip + max_cols`.
    pub trimmed: bool,
}

fn grapheme_cols(egc: &str, col: usize, tab_size: usize) -> usize {
    if egc == "\t" {
        let tab = tab_size.max(1);
        tab - (col % tab)
    } else {
        egc_width(egc)
    }
}

/// Clip `text` to at most `max_cols` display columns after skipping the
/// first `skip` columns.
pub fn clip(text: &str, skip: usize, max_cols: usize, reserve_marker: bool, tab_size: usize) -> Clip<'_> {
    let mut cols = 0;
    let mut start = 0;
    let mut iter = text.grapheme_indices(true);

    // Skip phase: consume graphemes until `skip` columns are behind us. A
    // cluster straddling the boundary is dropped whole; its overshoot still
    // counts toward `cols` so the virtual cursor stays aligned.
    while cols < skip {
        match iter.next() {
            Some((idx, egc)) => {
                cols += grapheme_cols(egc, cols, tab_size);
                start = idx + egc.len();
            }
            None => {
                return Clip {
                    text: "",
                    cols,
                    trimmed: false,
                };
            }
        }
    }

    // Fit phase: accept graphemes while they stay inside the budget.
    let budget = skip + max_cols;
    let mut end = start;
    let mut fitted: Vec<(usize, usize)> = Vec::new(); // (start byte, cols) per cluster
    let mut trimmed = false;
    for (idx, egc) in iter {
        let w = grapheme_cols(egc, cols, tab_size);
        if cols + w > budget {
            trimmed = true;
            break;
        }
        fitted.push((idx, w));
        cols += w;
        end = idx + egc.len();
    }

    // Give back trailing clusters until the marker cell fits.
    if trimmed && reserve_marker {
        while cols + 1 > budget {
            match fitted.pop() {
                Some((idx, w)) => {
                    cols -= w;
                    end = idx;
                }
                None => break,
            }
        }
    }

    Clip {
        text: &text[start..end],
        cols,
        trimmed,
    }
}
