//! Cell-width measurement and caret arithmetic for single-line text.
//!
//! Offsets are byte offsets into UTF-8 strings and always land on grapheme boundaries, so a caret
//! never splits a combining sequence or a wide glyph.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells.
pub fn width(s: &str) -> i32 {
    UnicodeWidthStr::width(s) as i32
}

/// The longest prefix of `s` that fits into `max` cells.
pub fn fit(s: &str, max: i32) -> &str {
    if max <= 0 {
        return "";
    }
    let mut used = 0;
    let mut end = 0;
    for (idx, g) in s.grapheme_indices(true) {
        let w = width(g);
        if used + w > max {
            break;
        }
        used += w;
        end = idx + g.len();
    }
    &s[..end]
}

/// Start of the grapheme ending at `offset`, or 0.
pub fn prev_boundary(s: &str, offset: usize) -> usize {
    s[..offset.min(s.len())]
        .grapheme_indices(true)
        .next_back()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// End of the grapheme starting at `offset`, or `s.len()`.
pub fn next_boundary(s: &str, offset: usize) -> usize {
    let offset = offset.min(s.len());
    s[offset..]
        .graphemes(true)
        .next()
        .map(|g| offset + g.len())
        .unwrap_or(s.len())
}

/// Byte offset of the grapheme drawn at cell `col`, or `s.len()` past the end.
pub fn offset_at_column(s: &str, col: i32) -> usize {
    let mut used = 0;
    for (idx, g) in s.grapheme_indices(true) {
        let w = width(g);
        if col < used + w {
            return idx;
        }
        used += w;
    }
    s.len()
}

/// First byte to draw so that the caret at `caret` stays within `avail` cells (one cell is kept
/// for the caret itself when it sits at the end).
pub fn window_start(s: &str, caret: usize, avail: i32) -> usize {
    let caret = caret.min(s.len());
    if avail <= 0 || width(&s[..caret]) < avail {
        return 0;
    }
    let mut start = caret;
    let mut used = 1;
    for (idx, g) in s[..caret].grapheme_indices(true).rev() {
        let w = width(g);
        if used + w > avail {
            break;
        }
        used += w;
        start = idx;
    }
    start
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
