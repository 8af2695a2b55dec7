//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions the pager reacts to.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll down by one line. Default: j/↓/Enter
    ScrollDown,
    /// Scroll up by one line. Default: k/↑
    ScrollUp,
    /// Scroll down by one viewport height. Default: Space/Page Down
    PageDown,
    /// Scroll up by one viewport height. Default: b/Page Up
    PageUp,
    /// Jump to the first line. Default: g/Home
    ScrollToTop,
    /// Jump to the last page. Default: G/End
    ScrollToBottom,

    // Application
    /// Hand the source file to an external viewer and exit. Default: v
    OpenInViewer,
    /// Toggle the key summary on the status bar. Default: ?
    ToggleHelp,
    /// Exit the pager. Default: q/Esc/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action moves the viewport.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollDown
                | KeyAction::ScrollUp
                | KeyAction::PageDown
                | KeyAction::PageUp
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_actions_are_navigation() {
        for action in [
            KeyAction::ScrollDown,
            KeyAction::ScrollUp,
            KeyAction::PageDown,
            KeyAction::PageUp,
            KeyAction::ScrollToTop,
            KeyAction::ScrollToBottom,
        ] {
            assert!(action.is_navigation(), "{action:?} should be navigation");
        }
    }

    #[test]
    fn application_actions_are_not_navigation() {
        for action in [KeyAction::OpenInViewer, KeyAction::ToggleHelp, KeyAction::Quit] {
            assert!(!action.is_navigation(), "{action:?} should not be navigation");
        }
    }
}
