//! Console color palette
//!
//! The fixed 16-color palette the console paints with. Colors are
//! opaque tokens compared by identity; the core never parses or mixes
//! colors, and the one validation path it needs is "is this name one of
//! the known tokens" (`Color::from_name`).

use serde::{Deserialize, Serialize};

/// Default foreground color for new terminals.
pub const DEFAULT_FOREGROUND: Color = Color::White;

/// Default background color for new terminals.
pub const DEFAULT_BACKGROUND: Color = Color::Black;

/// A named console color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Blue,
    Cyan,
    DarkBlue,
    DarkCyan,
    DarkGray,
    DarkGreen,
    DarkMagenta,
    DarkRed,
    DarkYellow,
    Gray,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl Color {
    /// Every palette color, in name order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Cyan,
        Color::DarkBlue,
        Color::DarkCyan,
        Color::DarkGray,
        Color::DarkGreen,
        Color::DarkMagenta,
        Color::DarkRed,
        Color::DarkYellow,
        Color::Gray,
        Color::Green,
        Color::Magenta,
        Color::Red,
        Color::White,
        Color::Yellow,
    ];

    /// The palette name of this color.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::DarkBlue => "darkBlue",
            Color::DarkCyan => "darkCyan",
            Color::DarkGray => "darkGray",
            Color::DarkGreen => "darkGreen",
            Color::DarkMagenta => "darkMagenta",
            Color::DarkRed => "darkRed",
            Color::DarkYellow => "darkYellow",
            Color::Gray => "gray",
            Color::Green => "green",
            Color::Magenta => "magenta",
            Color::Red => "red",
            Color::White => "white",
            Color::Yellow => "yellow",
        }
    }

    /// Look up a palette color by name.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// The CSS color string a canvas painter uses for this color.
    ///
    /// `DarkGray` and `Gray` swap their CSS names: CSS `gray` is darker
    /// than CSS `darkgray`.
    pub fn style(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::DarkBlue => "darkblue",
            Color::DarkCyan => "darkcyan",
            Color::DarkGray => "gray",
            Color::DarkGreen => "darkgreen",
            Color::DarkMagenta => "darkmagenta",
            Color::DarkRed => "darkred",
            Color::DarkYellow => "darkyellow",
            Color::Gray => "darkgray",
            Color::Green => "green",
            Color::Magenta => "magenta",
            Color::Red => "red",
            Color::White => "white",
            Color::Yellow => "yellow",
        }
    }

    /// RGB triple for painters that mix pixel values themselves.
    /// CSS has no `darkyellow`; `DarkYellow` maps to the ochre triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Cyan => (0, 255, 255),
            Color::DarkBlue => (0, 0, 139),
            Color::DarkCyan => (0, 139, 139),
            Color::DarkGray => (128, 128, 128),
            Color::DarkGreen => (0, 100, 0),
            Color::DarkMagenta => (139, 0, 139),
            Color::DarkRed => (139, 0, 0),
            Color::DarkYellow => (139, 139, 0),
            Color::Gray => (169, 169, 169),
            Color::Green => (0, 128, 0),
            Color::Magenta => (255, 0, 255),
            Color::Red => (255, 0, 0),
            Color::White => (255, 255, 255),
            Color::Yellow => (255, 255, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_complete() {
        assert_eq!(Color::ALL.len(), 16);
        for color in Color::ALL {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Color::from_name("mauve"), None);
        assert_eq!(Color::from_name(""), None);
    }

    #[test]
    fn test_gray_css_swap() {
        assert_eq!(Color::DarkGray.style(), "gray");
        assert_eq!(Color::Gray.style(), "darkgray");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_FOREGROUND, Color::White);
        assert_eq!(DEFAULT_BACKGROUND, Color::Black);
    }
}
