//! Plain string formatting used by the song panel.
//!
//! Everything here is pure so the panel layout can be checked without a
//! terminal or a running player.

use std::time::Duration;

/// Glyph used for the filled part of the progress bar.
pub const FILLED_CELL: char = '█';
/// Glyph used for the remaining part of the progress bar.
pub const EMPTY_CELL: char = '-';

const ELLIPSIS: &str = "...";

/// Format a number of seconds as `MM:SS`.
///
/// Minutes keep counting past an hour (`3725` -> `62:05`).
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `format_time` for a `Duration`, dropping the sub-second part.
pub fn format_duration(d: Duration) -> String {
    format_time(d.as_secs())
}

/// Cut `text` down to at most `max` chars, ending with `...` when shortened.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    if max < ELLIPSIS.len() {
        return ELLIPSIS[..max].to_string();
    }

    let mut out: String = text.chars().take(max - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Number of filled cells in a progress bar of `width` cells.
pub fn progress_filled(position: Duration, length: Duration, width: usize) -> usize {
    if length.is_zero() || width == 0 {
        return 0;
    }

    let ratio = position.as_secs_f64() / length.as_secs_f64();
    let filled = (ratio * width as f64).floor();
    if filled.is_nan() || filled <= 0.0 {
        0
    } else {
        (filled as usize).min(width)
    }
}

/// Render an unstyled progress bar, e.g. `[█████-----]`.
pub fn progress_bar(position: Duration, length: Duration, width: usize) -> String {
    let filled = progress_filled(position, length, width);
    let mut bar = String::with_capacity(width * FILLED_CELL.len_utf8() + 2);
    bar.push('[');
    bar.extend(std::iter::repeat_n(FILLED_CELL, filled));
    bar.extend(std::iter::repeat_n(EMPTY_CELL, width - filled));
    bar.push(']');
    bar
}

/// `position/length` as `MM:SS/MM:SS`.
pub fn progress_time(position: Duration, length: Duration) -> String {
    format!("{}/{}", format_duration(position), format_duration(length))
}
