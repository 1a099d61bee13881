//! Terminal width helpers used when printing matched lines.

use terminal_size::{Width, terminal_size};

const FALLBACK_COLUMNS: usize = 80;

pub fn terminal_columns() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .filter(|w| *w > 0)
        .unwrap_or(FALLBACK_COLUMNS)
}

/// Truncate text to a width, appending an ellipsis when needed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut out =
        text.chars().take(max_width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}
