//! Scrolling and section navigation keyboard action handler.
//!
//! Pure functions that transform AppState in response to scroll and
//! navigation actions. Form actions are ignored here.

use crate::model::{KeyAction, SectionId};
use crate::state::AppState;

/// Handle a scroll or navigation keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The action to handle
///
/// Page moves use the page height below the navbar.
pub fn handle_scroll_action(state: &mut AppState, action: KeyAction) {
    let page = isize::try_from(state.page_rows()).unwrap_or(isize::MAX);

    match action {
        KeyAction::ScrollUp => state.scroll_by(-1),
        KeyAction::ScrollDown => state.scroll_by(1),
        KeyAction::PageUp => state.scroll_by(-page),
        KeyAction::PageDown => state.scroll_by(page),
        KeyAction::ScrollToTop => state.scroll_to(0),
        KeyAction::ScrollToBottom => state.scroll_to(usize::MAX),
        KeyAction::JumpTo(section) => state.jump_to(section),
        KeyAction::NextSection => {
            let current = state.active_section();
            state.jump_to(current.next().unwrap_or(SectionId::Contact));
        }
        KeyAction::PrevSection => {
            let target = previous_section_target(state);
            state.jump_to(target);
        }
        KeyAction::ToggleMenu => {
            // The collapsed menu only exists on narrow viewports.
            if state.device_class().is_mobile() {
                state.navbar.menu_open = !state.navbar.menu_open;
            }
        }
        _ => {}
    }
}

/// Mid-section, "previous" means back to the current section's top.
fn previous_section_target(state: &AppState) -> SectionId {
    let current = state.active_section();
    let top = state.layout().section(current).top;
    if state.scroll_rows() > top {
        current
    } else {
        current.prev().unwrap_or(SectionId::Home)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
