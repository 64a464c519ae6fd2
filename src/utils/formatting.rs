//! Formatting utilities used for CLI and export outputs.

use crate::models::JobStatus;
use crate::utils::colors::{GREEN, GREY, RED, RESET, YELLOW};
use unicode_width::UnicodeWidthChar;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Cut `s` after `max` characters, appending `suffix` when something was cut.
pub fn truncate_chars(s: &str, max: usize, suffix: &str) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}{}", &s[..idx], suffix),
        None => s.to_string(),
    }
}

/// Cut `s` so that it fits in `width` terminal columns (ellipsis included).
pub fn fit_width(s: &str, width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Status label with its ANSI color.
pub fn colorize_status(status: JobStatus) -> String {
    let color = match status {
        JobStatus::NotApplied => GREY,
        JobStatus::Applied => YELLOW,
        JobStatus::Rejected => RED,
        JobStatus::Accepted => GREEN,
    };
    format!("{color}{}{RESET}", status.to_db_str())
}

/// Placeholder for empty fields in human readable output.
pub fn or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "-" } else { s }
}
