//! Vertical scrolling keyboard action handler.
//!
//! Translates navigation actions into viewport operations. Pages are one
//! viewport height.

use crate::model::KeyAction;
use crate::state::AppState;
use crate::view_state::viewport::ScrollOutcome;

/// Apply a navigation action to the viewport.
///
/// Any navigation attempt hides the inline help. Returns `None` for actions
/// that do not move the viewport, leaving the state untouched.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) -> Option<ScrollOutcome> {
    if !action.is_navigation() {
        return None;
    }

    state.help_visible = false;
    let page = state.viewport.rows();
    let viewport = &mut state.viewport;

    let outcome = match action {
        KeyAction::ScrollDown => viewport.scroll_down(1),
        KeyAction::ScrollUp => viewport.scroll_up(1),
        KeyAction::PageDown => viewport.scroll_down(page),
        KeyAction::PageUp => viewport.scroll_up(page),
        KeyAction::ScrollToTop => viewport.jump_to_top(),
        KeyAction::ScrollToBottom => viewport.jump_to_bottom(),
        KeyAction::OpenInViewer | KeyAction::ToggleHelp | KeyAction::Quit => return None,
    };

    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::line_store::LineStore;
    use crate::source::SourceDescriptor;
    use crate::view_state::types::ViewportDimensions;

    fn state(lines: usize, rows: u16) -> AppState {
        AppState::new(
            LineStore::from_lines((0..lines).map(|n| n.to_string())),
            SourceDescriptor::pipe(),
            ViewportDimensions::new(80, rows),
            false,
        )
    }

    #[test]
    fn scroll_down_moves_one_line() {
        let mut state = state(100, 10);
        let outcome = handle_scroll_action(&mut state, KeyAction::ScrollDown).unwrap();
        assert_eq!(outcome.delta, 1);
        assert_eq!(state.viewport.scroll_offset(), 1);
    }

    #[test]
    fn page_down_moves_one_viewport_height() {
        let mut state = state(100, 10);
        handle_scroll_action(&mut state, KeyAction::PageDown);
        assert_eq!(state.viewport.scroll_offset(), 10);
        handle_scroll_action(&mut state, KeyAction::PageUp);
        assert_eq!(state.viewport.scroll_offset(), 0);
    }

    #[test]
    fn page_up_at_top_reports_boundary() {
        let mut state = state(100, 10);
        let outcome = handle_scroll_action(&mut state, KeyAction::PageUp).unwrap();
        assert!(outcome.at_boundary);
        assert!(!outcome.moved());
    }

    #[test]
    fn jumps_reach_both_ends() {
        let mut state = state(100, 10);
        handle_scroll_action(&mut state, KeyAction::ScrollToBottom);
        assert_eq!(state.viewport.scroll_offset(), 90);
        handle_scroll_action(&mut state, KeyAction::ScrollToTop);
        assert_eq!(state.viewport.scroll_offset(), 0);
    }

    #[test]
    fn navigation_hides_help() {
        let mut state = state(100, 10);
        state.help_visible = true;
        handle_scroll_action(&mut state, KeyAction::ScrollUp);
        assert!(!state.help_visible);
    }

    #[test]
    fn non_navigation_actions_are_ignored() {
        let mut state = state(100, 10);
        state.help_visible = true;
        for action in [KeyAction::Quit, KeyAction::ToggleHelp, KeyAction::OpenInViewer] {
            assert_eq!(handle_scroll_action(&mut state, action), None);
        }
        assert!(state.help_visible);
        assert_eq!(state.viewport.scroll_offset(), 0);
    }
}
