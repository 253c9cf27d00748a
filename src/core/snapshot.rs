//! Deterministic snapshot generation
//!
//! Snapshots capture the complete console state in a serializable form
//! for testing and debugging. Equal state always produces identical
//! snapshots.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::color::Color;
use super::terminal::Terminal;

/// A complete snapshot of the console state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Buffer dimensions
    pub width: usize,
    pub height: usize,
    /// Buffer content, row-major.
    pub cells: Vec<Vec<CellSnapshot>>,
    /// Cursor state
    pub cursor: CursorSnapshot,
    /// Window geometry
    pub window: WindowSnapshot,
    /// Current colors
    pub foreground: Color,
    pub background: Color,
}

/// Snapshot of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    /// Character content
    pub content: String,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

/// Snapshot of the cursor state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub left: usize,
    pub top: usize,
    pub visible: bool,
    pub size: u8,
}

/// Snapshot of the window geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            content: cell.content.clone(),
            fg: cell.fg,
            bg: cell.bg,
        }
    }
}

impl Snapshot {
    /// Capture the state of `terminal`.
    pub fn from_terminal(terminal: &Terminal) -> Self {
        let buffer = terminal.buffer();
        let cells = buffer
            .cells()
            .chunks(buffer.width())
            .map(|row| row.iter().map(CellSnapshot::from).collect())
            .collect();
        let cursor = terminal.cursor();
        let viewport = terminal.viewport();

        Self {
            width: buffer.width(),
            height: buffer.height(),
            cells,
            cursor: CursorSnapshot {
                left: cursor.left(),
                top: cursor.top(),
                visible: cursor.visible(),
                size: cursor.size_percent(),
            },
            window: WindowSnapshot {
                left: viewport.left(),
                top: viewport.top(),
                width: viewport.width(),
                height: viewport.height(),
            },
            foreground: terminal.foreground_color(),
            background: terminal.background_color(),
        }
    }

    /// Render the buffer as text, one line per row. Blank cells become
    /// spaces; trailing blanks are trimmed per line.
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.height);
        for row in &self.cells {
            let mut line = String::with_capacity(self.width);
            for cell in row {
                if cell.content.is_empty() {
                    line.push(' ');
                } else {
                    line.push_str(&cell.content);
                }
            }
            lines.push(line.trim_end().to_string());
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Compare buffer content only, ignoring cursor and window state.
    pub fn content_equals(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::geometry::Coordinate;

    fn terminal() -> Terminal {
        Terminal::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_snapshot_dimensions() {
        let snapshot = terminal().snapshot();
        assert_eq!(snapshot.width, 80);
        assert_eq!(snapshot.height, 25);
        assert_eq!(snapshot.cells.len(), 25);
        assert_eq!(snapshot.cells[0].len(), 80);
    }

    #[test]
    fn test_to_text_renders_cells() {
        let mut term = terminal();
        for (i, c) in "hello".chars().enumerate() {
            term.set_cell(Coordinate::new(i, 0), Cell::new(c, Color::White, Color::Black))
                .unwrap();
        }
        let text = term.snapshot().to_text();
        assert!(text.starts_with("hello\n"));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut term = terminal();
        term.set_cell(
            Coordinate::new(3, 4),
            Cell::new('X', Color::Red, Color::Black),
        )
        .unwrap();

        let snapshot = term.snapshot();
        let json = snapshot.to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap();
        assert!(snapshot.content_equals(&restored));
        assert_eq!(restored.cells[4][3].fg, Color::Red);
    }

    #[test]
    fn test_content_equals_ignores_cursor() {
        let mut term = terminal();
        let before = term.snapshot();
        term.set_cursor_position(Coordinate::new(5, 5)).unwrap();
        let after = term.snapshot();
        assert!(before.content_equals(&after));
        assert_ne!(before.cursor, after.cursor);
    }
}
