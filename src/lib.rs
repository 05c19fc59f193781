//! folio
//!
//! Terminal rendition of a single-page animated portfolio.
//!
//! The crate follows a Pure Core / Impure Shell split:
//!
//! - `view_state`: viewport, scroll progress, visibility and animation
//!   sequencing on a cooperative clock. No terminal access.
//! - `model` and `state`: content, page layout and the application state
//!   that wires the core together.
//! - `view`: ratatui rendering and the crossterm event loop.
//! - `config` and `logging`: startup concerns.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

// Re-export main loop integration
pub mod integration;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
