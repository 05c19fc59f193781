//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests that drive the TUI shell with simulated
//! keys, mouse events and a virtual clock.

mod acceptance_reveal;
