//! Viewport window
//!
//! The sub-rectangle of the screen buffer considered "on screen". The
//! viewport never owns cells; it is a constrained rectangle whose
//! legality is re-checked on every mutation of itself, and defended by
//! the terminal on every mutation of the buffer size.

use serde::{Deserialize, Serialize};

use super::bounds::{checked_edge, ensure_at_most, ensure_below, ensure_positive};
use super::buffer::MAX_DIMENSION;
use super::geometry::{Coordinate, Size};
use super::ConsoleError;

/// The window onto the screen buffer.
///
/// Invariant: `left + width <= buffer_width` and
/// `top + height <= buffer_height` after every successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    left: usize,
    top: usize,
    width: usize,
    height: usize,
}

impl Viewport {
    /// Create a viewport of `size` anchored at the origin, validated
    /// against the display bound and the buffer like any later resize.
    pub(crate) fn at_origin(size: Size, largest: Size, buffer: Size) -> Result<Self, ConsoleError> {
        let mut viewport = Self {
            left: 0,
            top: 0,
            width: 0,
            height: 0,
        };
        viewport.set_size(size, largest, buffer)?;
        Ok(viewport)
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// One past the rightmost visible column.
    pub fn right(&self) -> usize {
        self.left + self.width
    }

    /// One past the bottom visible row.
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Move the window within the buffer. Returns whether it moved.
    pub(crate) fn set_position(
        &mut self,
        position: Coordinate,
        buffer: Size,
    ) -> Result<bool, ConsoleError> {
        let right = checked_edge("position.left + window width", position.left, self.width)?;
        let bottom = checked_edge("position.top + window height", position.top, self.height)?;
        ensure_at_most(
            "position.left + window width",
            right,
            buffer.width,
            "the buffer width",
        )?;
        ensure_at_most(
            "position.top + window height",
            bottom,
            buffer.height,
            "the buffer height",
        )?;

        if self.left == position.left && self.top == position.top {
            return Ok(false);
        }
        self.left = position.left;
        self.top = position.top;
        Ok(true)
    }

    /// Resize the window. The new size must be positive, stay under the
    /// display-provided largest window bound, and keep the window inside
    /// the buffer. Returns whether the size changed.
    pub(crate) fn set_size(
        &mut self,
        size: Size,
        largest: Size,
        buffer: Size,
    ) -> Result<bool, ConsoleError> {
        ensure_positive("size.width", size.width)?;
        ensure_positive("size.height", size.height)?;

        let right = checked_edge("window left + size.width", self.left, size.width)?;
        let bottom = checked_edge("window top + size.height", self.top, size.height)?;
        ensure_below(
            "window left + size.width",
            right,
            MAX_DIMENSION,
            "the maximum buffer extent",
        )?;
        ensure_below(
            "window top + size.height",
            bottom,
            MAX_DIMENSION,
            "the maximum buffer extent",
        )?;
        ensure_at_most(
            "size.width",
            size.width,
            largest.width,
            "the largest window width",
        )?;
        ensure_at_most(
            "size.height",
            size.height,
            largest.height,
            "the largest window height",
        )?;
        ensure_at_most(
            "window left + size.width",
            right,
            buffer.width,
            "the buffer width",
        )?;
        ensure_at_most(
            "window top + size.height",
            bottom,
            buffer.height,
            "the buffer height",
        )?;

        if self.width == size.width && self.height == size.height {
            return Ok(false);
        }
        self.width = size.width;
        self.height = size.height;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUFFER: Size = Size {
        width: 80,
        height: 25,
    };
    const LARGEST: Size = Size {
        width: 200,
        height: 100,
    };

    fn viewport() -> Viewport {
        Viewport::at_origin(Size::new(40, 20), LARGEST, BUFFER).unwrap()
    }

    #[test]
    fn test_at_origin_validates_size() {
        assert!(Viewport::at_origin(Size::new(0, 20), LARGEST, BUFFER).is_err());
        assert!(Viewport::at_origin(Size::new(81, 20), LARGEST, BUFFER).is_err());
        assert!(Viewport::at_origin(Size::new(40, 101), LARGEST, BUFFER).is_err());
    }

    #[test]
    fn test_position_within_buffer() {
        let mut vp = viewport();
        assert!(vp.set_position(Coordinate::new(40, 5), BUFFER).unwrap());
        assert_eq!(vp.position(), Coordinate::new(40, 5));

        // 41 + 40 > 80
        assert!(vp.set_position(Coordinate::new(41, 5), BUFFER).is_err());
        assert_eq!(vp.position(), Coordinate::new(40, 5));
    }

    #[test]
    fn test_position_noop_reports_unchanged() {
        let mut vp = viewport();
        assert!(!vp.set_position(Coordinate::new(0, 0), BUFFER).unwrap());
    }

    #[test]
    fn test_size_rejects_zero_and_oversize() {
        let mut vp = viewport();
        assert!(matches!(
            vp.set_size(Size::new(0, 5), LARGEST, BUFFER),
            Err(ConsoleError::InvalidArgument { .. })
        ));
        assert!(matches!(
            vp.set_size(Size::new(201, 5), LARGEST, BUFFER),
            Err(ConsoleError::OutOfRange { .. })
        ));
        assert_eq!(vp.size(), Size::new(40, 20));
    }

    #[test]
    fn test_size_stays_inside_buffer_from_current_position() {
        let mut vp = viewport();
        vp.set_position(Coordinate::new(20, 0), BUFFER).unwrap();
        // 20 + 61 > 80
        assert!(vp.set_size(Size::new(61, 20), LARGEST, BUFFER).is_err());
        assert!(vp.set_size(Size::new(60, 25), LARGEST, BUFFER).unwrap());
        assert_eq!(vp.right(), 80);
        assert_eq!(vp.bottom(), 25);
    }
}
