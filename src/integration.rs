//! Pure glue between terminal events and the view-state core.
//!
//! The core speaks CSS-like pixels and a monotonic [`Timestamp`]; the
//! terminal speaks cells and [`Instant`]s. These functions translate between
//! the two so the event loop stays a thin shell.

use crate::config::ResolvedConfig;
use crate::view_state::{PointerPosition, Span, Timestamp, ViewportSize};
use std::time::Instant;

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Pixels per column.
    pub width_px: f64,
    /// Pixels per row.
    pub height_px: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 8.0,
            height_px: 16.0,
        }
    }
}

impl CellMetrics {
    /// Metrics from the resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            width_px: f64::from(config.cell_width_px),
            height_px: f64::from(config.cell_height_px),
        }
    }

    /// Viewport size of a `columns` x `rows` terminal area.
    pub fn viewport(&self, columns: u16, rows: u16) -> ViewportSize {
        ViewportSize::new(
            f64::from(columns) * self.width_px,
            f64::from(rows) * self.height_px,
        )
    }

    /// Pointer position at the centre of a cell.
    pub fn pointer(&self, column: u16, row: u16) -> PointerPosition {
        PointerPosition::new(
            (f64::from(column) + 0.5) * self.width_px,
            (f64::from(row) + 0.5) * self.height_px,
        )
    }

    /// Terminal cell under a pointer position.
    pub fn cell(&self, pointer: PointerPosition) -> (u16, u16) {
        let to_cell =
            |px: f64, size: f64| (px / size).floor().clamp(0.0, f64::from(u16::MAX)) as u16;
        (
            to_cell(pointer.x, self.width_px),
            to_cell(pointer.y, self.height_px),
        )
    }

    /// Vertical offset in pixels of `rows` rows.
    pub fn rows_to_px(&self, rows: usize) -> f64 {
        rows as f64 * self.height_px
    }

    /// Vertical span in pixels of `len` rows starting at row `top`.
    pub fn row_span(&self, top: usize, len: usize) -> Span {
        Span::from_top(self.rows_to_px(top), self.rows_to_px(len))
    }
}

/// Clock reading for the core, relative to when the shell started.
pub fn timestamp_since(started: Instant, now: Instant) -> Timestamp {
    Timestamp::from_elapsed(now.saturating_duration_since(started))
}
