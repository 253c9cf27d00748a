//! Console cell
//!
//! One cell of the screen buffer: a character plus its foreground and
//! background colors. Cells are immutable values; the buffer replaces
//! them wholesale rather than mutating them in place.

use serde::{Deserialize, Serialize};

use super::color::{Color, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

/// A single cell in the screen buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character in this cell. Empty for a blank cell.
    pub content: String,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Cell {
    /// Create a cell holding a single character.
    pub fn new(c: char, fg: Color, bg: Color) -> Self {
        Self {
            content: c.to_string(),
            fg,
            bg,
        }
    }

    /// Create a blank cell painted in the given colors.
    pub fn empty(fg: Color, bg: Color) -> Self {
        Self {
            content: String::new(),
            fg,
            bg,
        }
    }

    /// Check if this cell has no character.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the display width of this cell's content.
    pub fn width(&self) -> usize {
        use unicode_width::UnicodeWidthStr;
        self.content.width()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty(DEFAULT_FOREGROUND, DEFAULT_BACKGROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.fg, Color::White);
        assert_eq!(cell.bg, Color::Black);
    }

    #[test]
    fn test_cell_new() {
        let cell = Cell::new('A', Color::Green, Color::Black);
        assert_eq!(cell.content, "A");
        assert!(!cell.is_empty());
    }

    #[test]
    fn test_cell_width() {
        let cell = Cell::new('A', Color::White, Color::Black);
        assert_eq!(cell.width(), 1);

        let wide = Cell::new('中', Color::White, Color::Black);
        assert_eq!(wide.width(), 2);

        assert_eq!(Cell::default().width(), 0);
    }
}
