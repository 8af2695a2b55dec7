//! Bottom bar text.

use crate::view_state::viewport::Position;
use unicode_width::UnicodeWidthChar;

/// Key summary shown when help is toggled on.
pub const HELP_TEXT: &str =
    " ENTER, j: DOWN - k: UP - SPACE: PAGE_DOWN - b: PAGE_UP - g: TOP - G: END - v: VIEW - q: EXIT ";

/// Position readout: ` name: current of total (percent%) `.
pub fn status_text(name: &str, position: Position) -> String {
    format!(
        " {}: {} of {} ({}%) ",
        name, position.current_line, position.total_lines, position.percent
    )
}

/// Pad or clip `text` to exactly `width` terminal columns.
///
/// Clipping never splits a wide character; the gap it would leave is filled
/// with a space so the bar still spans the full row.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
