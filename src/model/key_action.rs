//! Domain-level keyboard actions independent of key bindings.

use super::section::SectionId;

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// While the contact form is being edited, printable keys go to the form
/// instead and only `Esc`, `Tab` and `Enter` keep a meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the page up by one row. Default: k/↑
    ScrollUp,
    /// Scroll the page down by one row. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the top of the page. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the page. Default: G/End
    ScrollToBottom,

    // Navigation
    /// Jump to a section's anchor. Default: 1-7
    JumpTo(SectionId),
    /// Jump to the next section. Default: ]/n
    NextSection,
    /// Jump to the previous section. Default: [/p
    PrevSection,
    /// Open or close the collapsed mobile menu. Default: m
    ToggleMenu,

    // Contact form
    /// Jump to the contact form and start editing it. Default: c/i
    EditForm,
    /// Move to the next form field. Default: Tab
    NextField,
    /// Move to the previous form field. Default: Shift+Tab
    PrevField,
    /// Submit the contact form. Default: Enter (while editing)
    Submit,
    /// Stop editing the form. Default: Esc
    LeaveForm,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
