//! Viewport controller: scroll position and everything derived from it.
//!
//! All navigation arithmetic lives here, isolated from rendering and input
//! handling. Each movement clamps itself so that
//! `0 <= scroll_offset <= max(0, line_count - rows)` holds after every call.

use super::types::ViewportDimensions;
use crate::model::line_store::{LineStore, NUMBER_SEPARATOR};

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// Signed number of lines the offset actually moved (positive = down).
    pub delta: isize,
    /// The request ran into the first or last line before completing.
    pub at_boundary: bool,
}

impl ScrollOutcome {
    /// Whether the offset changed at all.
    pub fn moved(&self) -> bool {
        self.delta != 0
    }

    fn blocked() -> Self {
        Self {
            delta: 0,
            at_boundary: true,
        }
    }
}

/// Human-readable position for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based number of the last visible line, 0 for empty input.
    pub current_line: usize,
    /// Total number of lines.
    pub total_lines: usize,
    /// `floor(100 * scroll_offset / total_lines)`, 0 for empty input.
    pub percent: usize,
}

/// Scroll state over a frozen [`LineStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    scroll_offset: usize,
    dimensions: ViewportDimensions,
    line_count: usize,
    digit_width: usize,
    show_line_numbers: bool,
}

impl Viewport {
    /// Viewport at the top of `store`.
    pub fn new(store: &LineStore, dimensions: ViewportDimensions, show_line_numbers: bool) -> Self {
        Self {
            scroll_offset: 0,
            dimensions,
            line_count: store.len(),
            digit_width: store.digit_width(),
            show_line_numbers,
        }
    }

    /// Index of the first visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Number of text rows.
    pub fn rows(&self) -> usize {
        usize::from(self.dimensions.height())
    }

    /// Number of text columns.
    pub fn cols(&self) -> usize {
        usize::from(self.dimensions.width())
    }

    /// Current dimensions.
    pub fn dimensions(&self) -> ViewportDimensions {
        self.dimensions
    }

    /// Number of lines in the underlying store.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Width of the line number column.
    pub fn digit_width(&self) -> usize {
        self.digit_width
    }

    /// Whether line numbers are displayed.
    pub fn show_line_numbers(&self) -> bool {
        self.show_line_numbers
    }

    /// Switch line number display on or off.
    pub fn set_line_numbers(&mut self, show: bool) {
        self.show_line_numbers = show;
    }

    /// Largest valid scroll offset.
    pub fn max_offset(&self) -> usize {
        self.line_count.saturating_sub(self.rows())
    }

    /// Bytes skipped at the start of every stored line when rendering.
    ///
    /// Zero with numbering on, otherwise the width of the `"N: "` prefix.
    pub fn display_offset(&self) -> usize {
        if self.show_line_numbers {
            0
        } else {
            self.digit_width + NUMBER_SEPARATOR.len()
        }
    }

    /// Move down by up to `n` lines, stopping at the last page.
    pub fn scroll_down(&mut self, n: usize) -> ScrollOutcome {
        let step = n.min(self.max_offset() - self.scroll_offset);
        self.scroll_offset += step;
        ScrollOutcome {
            delta: to_delta(step),
            at_boundary: step < n,
        }
    }

    /// Move up by up to `n` lines, stopping at the first line.
    pub fn scroll_up(&mut self, n: usize) -> ScrollOutcome {
        let step = n.min(self.scroll_offset);
        self.scroll_offset -= step;
        ScrollOutcome {
            delta: -to_delta(step),
            at_boundary: step < n,
        }
    }

    /// Jump to the first line. Reports a boundary if already there.
    pub fn jump_to_top(&mut self) -> ScrollOutcome {
        if self.scroll_offset == 0 {
            return ScrollOutcome::blocked();
        }
        let step = self.scroll_offset;
        self.scroll_offset = 0;
        ScrollOutcome {
            delta: -to_delta(step),
            at_boundary: false,
        }
    }

    /// Jump to the last page. Reports a boundary if already there.
    pub fn jump_to_bottom(&mut self) -> ScrollOutcome {
        let max = self.max_offset();
        if self.scroll_offset == max {
            return ScrollOutcome::blocked();
        }
        let step = max - self.scroll_offset;
        self.scroll_offset = max;
        ScrollOutcome {
            delta: to_delta(step),
            at_boundary: false,
        }
    }

    /// Display text of every visible line, top to bottom.
    ///
    /// Returns `min(rows, line_count - scroll_offset)` entries.
    pub fn visible_lines<'a>(&self, store: &'a LineStore) -> Vec<&'a str> {
        let offset = self.display_offset();
        store
            .lines()
            .iter()
            .skip(self.scroll_offset)
            .take(self.rows())
            .map(|line| line.display(offset))
            .collect()
    }

    /// Display text for one viewport row, `None` past the end of the buffer.
    pub fn line_at_row<'a>(&self, store: &'a LineStore, row: usize) -> Option<&'a str> {
        if row >= self.rows() {
            return None;
        }
        store
            .get(self.scroll_offset + row)
            .map(|line| line.display(self.display_offset()))
    }

    /// Adopt new dimensions and pull the offset back into range.
    pub fn resize(&mut self, dimensions: ViewportDimensions) {
        self.dimensions = dimensions;
        self.scroll_offset = self.scroll_offset.min(self.max_offset());
    }

    /// Status bar position.
    pub fn position(&self) -> Position {
        if self.line_count == 0 {
            return Position {
                current_line: 0,
                total_lines: 0,
                percent: 0,
            };
        }
        Position {
            current_line: (self.scroll_offset + self.rows()).min(self.line_count),
            total_lines: self.line_count,
            percent: 100 * self.scroll_offset / self.line_count,
        }
    }
}

fn to_delta(step: usize) -> isize {
    isize::try_from(step).unwrap_or(isize::MAX)
}
