//! Bar styling.
//!
//! The pager draws text in the terminal's default colors. Only the bottom bar
//! is styled: the position readout and the inline help each get their own
//! attribute, with a monochrome fallback when colors are off.

use ratatui::style::{Color, Modifier, Style};

/// Logical text attribute requested by the pager loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attr {
    /// Buffer text.
    #[default]
    Normal,
    /// Position readout on the bottom row.
    StatusBar,
    /// Key summary on the bottom row.
    HelpBar,
}

/// Concrete styles for each [`Attr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyles {
    normal: Style,
    status: Style,
    help: Style,
}

impl BarStyles {
    /// Styles for a colored or monochrome terminal.
    ///
    /// Without colors the status bar is reverse video and the help bar is
    /// reverse video plus bold, so the two stay distinguishable.
    pub fn new(color: bool) -> Self {
        if color {
            Self {
                normal: Style::default(),
                status: Style::default().fg(Color::Black).bg(Color::White),
                help: Style::default().fg(Color::Black).bg(Color::Magenta),
            }
        } else {
            Self {
                normal: Style::default(),
                status: Style::default().add_modifier(Modifier::REVERSED),
                help: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            }
        }
    }

    /// Style for an attribute.
    pub fn style(&self, attr: Attr) -> Style {
        match attr {
            Attr::Normal => self.normal,
            Attr::StatusBar => self.status,
            Attr::HelpBar => self.help,
        }
    }
}

impl Default for BarStyles {
    fn default() -> Self {
        Self::new(true)
    }
}
