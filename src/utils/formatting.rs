//! Formatting utilities used for CLI and export outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Collapse newlines and whitespace runs into single spaces for one-line
/// previews of entry text.
pub fn flatten(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to a maximum display width, appending an ellipsis when cut.
/// Counts display columns, not bytes or chars; entry text is arbitrary
/// Unicode.
pub fn truncate_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;

    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.push('…');
    out
}

/// One-line preview of entry text for table listings.
pub fn preview(s: &str, max: usize) -> String {
    truncate_width(&flatten(s), max)
}

/// Star marker for listings.
pub fn star_marker(starred: bool) -> &'static str {
    if starred { "★" } else { " " }
}
