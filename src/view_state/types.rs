//! Core newtypes for the view-state layer.

/// Viewport dimensions in terminal cells.
///
/// Both dimensions are at least 1; a zero reported by the terminal during a
/// resize is bumped so that page arithmetic never divides the screen into
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportDimensions {
    width: u16,
    height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions, clamping zeros to 1.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Dimensions of the scrollable region of a full terminal: every row but
    /// the bottom one, which holds the status bar.
    pub fn for_terminal(width: u16, height: u16) -> Self {
        Self::new(width, height.saturating_sub(STATUS_BAR_HEIGHT))
    }

    /// Width in terminal columns.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in terminal rows.
    pub fn height(&self) -> u16 {
        self.height
    }
}

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;
