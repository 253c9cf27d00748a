//! Console Core Module
//!
//! Platform-independent console state management. This module contains:
//! - Screen buffer owning the cell grid
//! - Viewport window constrained to the buffer
//! - Cursor state and positioning
//! - Terminal orchestrator exposing the validated public surface
//! - Deterministic snapshot generation
//!
//! The core is single-threaded and synchronous. Every operation
//! validates eagerly, before any mutation: it either fully succeeds or
//! leaves no observable change.

mod bounds;
mod buffer;
mod cell;
mod color;
mod cursor;
mod geometry;
mod snapshot;
mod terminal;
mod viewport;

pub use buffer::{ScreenBuffer, MAX_DIMENSION};
pub use cell::Cell;
pub use color::{Color, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
pub use cursor::Cursor;
pub use geometry::{Area, Coordinate, Size};
pub use snapshot::{CellSnapshot, CursorSnapshot, Snapshot, WindowSnapshot};
pub use terminal::Terminal;
pub use viewport::Viewport;

use thiserror::Error;

/// Error type for console operations.
///
/// There are exactly two kinds: a value that is structurally impossible
/// (`InvalidArgument`) and a value that violates the current geometry
/// (`OutOfRange`). A failed operation leaves the terminal exactly as it
/// was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// The value can never be valid, e.g. a zero-sized dimension.
    #[error("invalid argument `{name}`: {constraint}")]
    InvalidArgument {
        /// The property or parameter that was rejected.
        name: &'static str,
        /// The constraint the value failed.
        constraint: String,
    },

    /// The value is structurally fine but conflicts with the current
    /// buffer, window, or cursor state.
    #[error("`{name}` out of range: {constraint}")]
    OutOfRange {
        /// The property or parameter that was rejected.
        name: &'static str,
        /// The constraint the value failed.
        constraint: String,
    },
}
