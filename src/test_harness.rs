//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with a virtual clock, so tests can step
//! through entrance animations and the contact lifecycle deterministically
//! while simulating keys, mouse and resizes.

use crate::config::ResolvedConfig;
use crate::model::PortfolioContent;
use crate::state::AppState;
use crate::view::TuiApp;
use crate::view_state::Timestamp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

/// Convert a ratatui buffer to a string, one line per row.
///
/// Trailing whitespace is trimmed from each row; blank rows are kept so
/// row indexes match the screen.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Built-in content on a `width` x `height` terminal with default config.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_config(&ResolvedConfig::default(), width, height)
    }

    /// Built-in content with a specific configuration.
    pub fn with_config(config: &ResolvedConfig, width: u16, height: u16) -> Self {
        let content = PortfolioContent::builtin().expect("built-in content must parse");
        let state = AppState::new(content, config, width, height);
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        Self {
            app: TuiApp::new_for_test(terminal, state),
            running: true,
        }
    }

    /// Send a single key event
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Move the virtual clock forward by `millis`, firing due timers.
    pub fn advance_ms(&mut self, millis: u64) {
        let target = self
            .state()
            .now()
            .saturating_add(Duration::from_millis(millis));
        self.app.app_state_mut().advance_to(target);
    }

    /// Move the virtual clock to an absolute time.
    pub fn advance_to_ms(&mut self, millis: u64) {
        self.app
            .app_state_mut()
            .advance_to(Timestamp::from_millis(millis));
    }

    /// Send a mouse event of `kind` at a cell.
    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return;
        }
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Resize both the state and the backing terminal.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.resize_backend_test(width, height);
        self.app.handle_resize_test(width, height);
    }

    /// Read-only access to the app state for assertions.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running (did not quit).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return the screen text.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
