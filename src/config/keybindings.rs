//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::model::section::SectionId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions while browsing the page.
///
/// Form editing bypasses this table; see [`KeyBindings::form_action`].
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Fixed bindings used while a form field has focus.
    ///
    /// Returns `None` for keys that should be treated as text input.
    pub fn form_action(key: KeyEvent) -> Option<KeyAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(KeyAction::LeaveForm),
            (KeyCode::Tab, KeyModifiers::NONE) => Some(KeyAction::NextField),
            (KeyCode::BackTab, _) => Some(KeyAction::PrevField),
            (KeyCode::Enter, KeyModifiers::NONE) => Some(KeyAction::Submit),
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(KeyAction::Quit),
            _ => None,
        }
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);

        // Arrow keys and paging
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        keys.bind(KeyCode::Char(' '), KeyModifiers::NONE, KeyAction::PageDown);

        // Section navigation
        for section in SectionId::ALL {
            let digit = char::from_digit(section.index() as u32 + 1, 10);
            if let Some(digit) = digit {
                keys.bind(
                    KeyCode::Char(digit),
                    KeyModifiers::NONE,
                    KeyAction::JumpTo(section),
                );
            }
        }
        keys.bind(KeyCode::Char(']'), KeyModifiers::NONE, KeyAction::NextSection);
        keys.bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::NextSection);
        keys.bind(KeyCode::Char('['), KeyModifiers::NONE, KeyAction::PrevSection);
        keys.bind(KeyCode::Char('p'), KeyModifiers::NONE, KeyAction::PrevSection);
        keys.bind(KeyCode::Char('m'), KeyModifiers::NONE, KeyAction::ToggleMenu);

        // Contact form
        keys.bind(KeyCode::Char('c'), KeyModifiers::NONE, KeyAction::EditForm);
        keys.bind(KeyCode::Char('i'), KeyModifiers::NONE, KeyAction::EditForm);

        // Application
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_and_arrow_keys_scroll() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get(key(KeyCode::Char('j'))), Some(KeyAction::ScrollDown));
        assert_eq!(keys.get(key(KeyCode::Up)), Some(KeyAction::ScrollUp));
        assert_eq!(
            keys.get(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(KeyAction::ScrollToBottom)
        );
    }

    #[test]
    fn digits_jump_to_sections_in_document_order() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.get(key(KeyCode::Char('1'))),
            Some(KeyAction::JumpTo(SectionId::Home))
        );
        assert_eq!(
            keys.get(key(KeyCode::Char('7'))),
            Some(KeyAction::JumpTo(SectionId::Contact))
        );
        assert_eq!(keys.get(key(KeyCode::Char('8'))), None);
    }

    #[test]
    fn quit_is_bound_to_q_and_ctrl_c() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(
            keys.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn form_keys_treat_letters_as_text() {
        assert_eq!(KeyBindings::form_action(key(KeyCode::Char('q'))), None);
        assert_eq!(
            KeyBindings::form_action(key(KeyCode::Enter)),
            Some(KeyAction::Submit)
        );
        assert_eq!(
            KeyBindings::form_action(key(KeyCode::Esc)),
            Some(KeyAction::LeaveForm)
        );
        assert_eq!(
            KeyBindings::form_action(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(KeyAction::PrevField)
        );
    }
}
