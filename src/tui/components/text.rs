//! Text helpers for single-line field editing.
//!
//! Cursor positions are byte offsets into the field value and always sit on a
//! char boundary. Display math uses terminal column widths so CJK and emoji
//! input lines up with the cursor.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Terminal column width of `text`.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// The visible window of `text` for a field `width` columns wide, scrolled so
/// the byte position `cursor` stays in view.
///
/// Returns the visible slice and the cursor's column within it.
pub fn visible_window(text: &str, cursor: usize, width: usize) -> (&str, usize) {
    if width == 0 {
        return ("", 0);
    }
    // Keep one column free for the cursor when it sits at the end.
    let budget = width.saturating_sub(1).max(1);
    let before = &text[..cursor];

    let mut start = cursor;
    let mut used = 0;
    for (i, c) in before.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = i;
    }

    let mut end = cursor;
    let mut total = used;
    for (i, c) in text[cursor..].char_indices() {
        let w = c.width().unwrap_or(0);
        if total + w > width {
            break;
        }
        total += w;
        end = cursor + i + c.len_utf8();
    }

    (&text[start..end], used)
}

/// Cut `text` to at most `width` columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
