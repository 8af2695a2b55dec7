//! Application state.
//!
//! AppState is the root state type: the frozen line store, the viewport over
//! it, the source descriptor, and whether the status bar shows help. It is
//! pure data; terminal effects live in `view`.

use crate::model::line_store::LineStore;
use crate::source::SourceDescriptor;
use crate::view_state::types::ViewportDimensions;
use crate::view_state::viewport::Viewport;

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Scroll offset**: moves between `0` and `viewport.max_offset()`, driven
///   by `scroll_handler`
/// - **Help**: toggled by `?`, cleared by any navigation
#[derive(Debug, Clone)]
pub struct AppState {
    store: LineStore,
    source: SourceDescriptor,

    /// Scroll position and display mode over `store`.
    pub viewport: Viewport,

    /// Whether the status bar shows the key summary instead of the position.
    pub help_visible: bool,
}

impl AppState {
    /// State positioned at the top of `store`.
    pub fn new(
        store: LineStore,
        source: SourceDescriptor,
        dimensions: ViewportDimensions,
        show_line_numbers: bool,
    ) -> Self {
        let viewport = Viewport::new(&store, dimensions, show_line_numbers);
        Self {
            store,
            source,
            viewport,
            help_visible: false,
        }
    }

    /// The loaded lines.
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    /// Where the lines came from.
    pub fn source(&self) -> &SourceDescriptor {
        &self.source
    }

    /// Visible display text for one viewport row.
    pub fn row_text(&self, row: usize) -> Option<&str> {
        self.viewport.line_at_row(&self.store, row)
    }

    /// Flip the help display.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}
