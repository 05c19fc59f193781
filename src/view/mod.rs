//! TUI rendering and terminal management (impure shell)

mod contact;
mod helpers;
mod hero;
mod navbar;
mod page;
mod sections;
mod styles;

pub use hero::hero_density;
pub use page::{render_page, PageContext};
pub use styles::{ColorConfig, PageStyles};

use crate::config::keybindings::KeyBindings;
use crate::integration;
use crate::model::{AppError, KeyAction, SectionId};
use crate::state::{
    handle_form_action, handle_form_input, handle_scroll_action, AppState, FormInput,
};
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Redraw interval while an entrance animation is running.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Longest wait for input when nothing is scheduled.
pub const IDLE_INTERVAL: Duration = Duration::from_secs(1);

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: isize = 3;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// How the page is first shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchOptions {
    /// Disable colors.
    pub no_color: bool,
    /// Section to open at instead of the top.
    pub start_section: Option<SectionId>,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: PageStyles,
    started: Instant,
    today: NaiveDate,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, styles: PageStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            started: Instant::now(),
            today: Local::now().date_naive(),
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). The poll timeout follows
    /// the state's next wakeup, so an idle page does not redraw.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self.poll_timeout();
            if event::poll(timeout)? {
                // Timers due before the input must fire first.
                self.tick();
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
                self.draw()?;
            } else {
                self.tick();
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wall-clock reading on the core's timeline.
    fn wall_now(&self) -> crate::view_state::Timestamp {
        integration::timestamp_since(self.started, Instant::now())
    }

    fn poll_timeout(&self) -> Duration {
        let now = self.wall_now();
        match self.app_state.next_wakeup() {
            Some(wakeup) if wakeup <= self.app_state.now() => FRAME_INTERVAL,
            Some(wakeup) => wakeup
                .saturating_since(now)
                .clamp(Duration::from_millis(1), IDLE_INTERVAL),
            None => IDLE_INTERVAL,
        }
    }

    /// Bring the state's clock up to wall time.
    fn tick(&mut self) {
        let now = self.wall_now();
        if self.app_state.advance_to(now) {
            debug!(at = ?now.elapsed(), "timers fired");
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Special case: Ctrl+C should always quit, even while editing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.app_state.should_quit = true;
            return true;
        }

        if self.app_state.form.is_editing() {
            self.handle_form_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");

        match action {
            KeyAction::Quit => {
                self.app_state.should_quit = true;
                return true;
            }
            KeyAction::EditForm
            | KeyAction::NextField
            | KeyAction::PrevField
            | KeyAction::Submit
            | KeyAction::LeaveForm => handle_form_action(&mut self.app_state, action),
            _ => handle_scroll_action(&mut self.app_state, action),
        }
        false
    }

    /// Keys while a form field has focus: text goes into the field.
    fn handle_form_key(&mut self, key: KeyEvent) {
        if let Some(action) = KeyBindings::form_action(key) {
            handle_form_action(&mut self.app_state, action);
            return;
        }
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                handle_form_input(&mut self.app_state, FormInput::Char(ch));
            }
            KeyCode::Backspace => handle_form_input(&mut self.app_state, FormInput::Backspace),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.app_state.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.app_state.scroll_by(WHEEL_ROWS),
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.app_state.on_pointer_move(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.app_state.on_resize(width.max(1), height.max(1));
    }

    /// Remeasure the page for the real terminal size, then open at
    /// `start_section` if one was requested.
    fn fit_to_terminal(&mut self, start_section: Option<SectionId>) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.handle_resize(size.width, size.height);
        info!(columns = size.width, rows = size.height, "terminal ready");
        if let Some(section) = start_section {
            self.app_state.jump_to(section);
        }
        Ok(())
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            app_state,
            styles,
            today,
            ..
        } = self;
        terminal.draw(|frame| render_page(frame, app_state, styles, *today))?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Uses a fixed date so footers render deterministically.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: PageStyles::with_color_config(ColorConfig::new(false)),
            started: Instant::now(),
            today: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Get mutable app state (test-only accessor)
    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse);
    }

    /// Handle a resize event (test-only accessor)
    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height);
    }

    /// Startup sizing (test-only accessor)
    pub(crate) fn fit_to_terminal_test(
        &mut self,
        start_section: Option<SectionId>,
    ) -> Result<(), TuiError> {
        self.fit_to_terminal(start_section)
    }

    /// Render a frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

#[cfg(test)]
impl TuiApp<ratatui::backend::TestBackend> {
    /// Resize the test backend (test-only accessor)
    pub(crate) fn resize_backend_test(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(app_state: AppState, options: LaunchOptions) -> Result<(), TuiError> {
    let styles = PageStyles::with_color_config(ColorConfig::from_env_and_args(options.no_color));
    let mut app = TuiApp::new(app_state, styles)?;

    // Run the app and ensure cleanup happens even on error
    let result = app
        .fit_to_terminal(options.start_section)
        .and_then(|()| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
