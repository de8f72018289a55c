//! Terminal capability probing.
//!
//! Records the booleans the renderer consults when picking a graph glyph
//! encoding: whether the terminal can be trusted with UTF-8 line-drawing
//! glyphs at all. Detection runs once at startup and must be cheap; today
//! it inspects the locale environment rather than emitting a probe
//! sequence and measuring the response.
//!
//! Future extensions: distinguish legacy DEC graphics support from plain
//! ASCII fallback, detect truecolor depth for the lane palette.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TerminalCapabilities {
    /// UTF-8 line-drawing glyphs render correctly.
    pub utf8_graphics: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        let locale = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LC_CTYPE"))
            .or_else(|_| std::env::var("LANG"))
            .unwrap_or_default();
        let lowered = locale.to_ascii_lowercase();
        Self {
            utf8_graphics: lowered.contains("utf-8") || lowered.contains("utf8"),
        }
    }
}
