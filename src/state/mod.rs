//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod form_handler;
pub mod layout;
pub mod scroll_handler;
pub mod sections;

// Re-export for convenience
pub use app_state::{AppState, FormState, NavbarState};
pub use form_handler::{handle_form_action, handle_form_input, FormInput};
pub use layout::{PageLayout, SectionLayout};
pub use scroll_handler::handle_scroll_action;
pub use sections::{Group, SectionState, SectionTimings};
