//! Formatting utilities used for CLI outputs.

use crate::models::WorkDay;
use unicode_width::UnicodeWidthStr;

/// Pad to a display width (day labels contain umlauts).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Blocks of a day joined as `08:00 - 12:00, 12:30 - 16:30`.
pub fn describe_blocks(day: &WorkDay) -> String {
    if day.blocks().is_empty() {
        return "--:--".to_string();
    }
    day.blocks()
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
