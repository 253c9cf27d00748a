//! Cursor state
//!
//! The text-insertion point within the buffer, plus visibility and the
//! cell-relative cursor height used by block renderers.

use serde::{Deserialize, Serialize};

use super::bounds::{ensure_below, ensure_in_range};
use super::geometry::{Coordinate, Size};
use super::ConsoleError;

/// Cursor state.
///
/// Both axes use the exclusive buffer bound, so the cursor always
/// addresses a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    left: usize,
    top: usize,
    visible: bool,
    size_percent: u8,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            visible: true,
            size_percent: 100,
        }
    }
}

impl Cursor {
    /// Create a cursor at the home position.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.left, self.top)
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Cursor height as a percentage of the character cell, 1 to 100.
    pub fn size_percent(&self) -> u8 {
        self.size_percent
    }

    /// Move the cursor. Returns whether it moved.
    pub(crate) fn set_position(
        &mut self,
        position: Coordinate,
        buffer: Size,
    ) -> Result<bool, ConsoleError> {
        ensure_below("position.left", position.left, buffer.width, "the buffer width")?;
        ensure_below("position.top", position.top, buffer.height, "the buffer height")?;
        if self.left == position.left && self.top == position.top {
            return Ok(false);
        }
        self.left = position.left;
        self.top = position.top;
        Ok(true)
    }

    /// Set the cursor height percentage. Returns whether it changed.
    pub(crate) fn set_size_percent(&mut self, percent: u8) -> Result<bool, ConsoleError> {
        ensure_in_range("size", percent as usize, 1, 100)?;
        if self.size_percent == percent {
            return Ok(false);
        }
        self.size_percent = percent;
        Ok(true)
    }

    /// Show or hide the cursor. Returns whether visibility changed.
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        true
    }

    /// Pull the cursor back inside a shrunk buffer.
    pub(crate) fn clamp_to(&mut self, buffer: Size) {
        self.left = self.left.min(buffer.width.saturating_sub(1));
        self.top = self.top.min(buffer.height.saturating_sub(1));
    }
}
