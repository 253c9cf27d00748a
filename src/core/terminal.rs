//! Terminal orchestrator
//!
//! Composes the screen buffer, viewport window, and cursor behind a
//! validated public surface. Every parameter is checked before any
//! state changes; successful non-idempotent mutations fire a
//! fire-and-forget notification at the display collaborator.

use crate::config::Config;
use crate::display::{Display, HeadlessDisplay};
use crate::keyboard::{HeadlessKeyboard, Keyboard};

use super::bounds::{ensure_at_least, ensure_dimension};
use super::buffer::ScreenBuffer;
use super::cell::Cell;
use super::color::Color;
use super::cursor::Cursor;
use super::geometry::{Area, Coordinate, Size};
use super::snapshot::Snapshot;
use super::viewport::Viewport;
use super::ConsoleError;

/// The console: a screen buffer, a window onto it, and a cursor.
///
/// The terminal exclusively owns all three; rendering and input go
/// through the injected [`Display`] and [`Keyboard`] collaborators.
pub struct Terminal {
    buffer: ScreenBuffer,
    viewport: Viewport,
    cursor: Cursor,
    foreground: Color,
    background: Color,
    default_foreground: Color,
    default_background: Color,
    display: Box<dyn Display>,
    keyboard: Box<dyn Keyboard>,
}

impl Terminal {
    /// Create a headless terminal from `config`.
    pub fn new(config: &Config) -> Result<Self, ConsoleError> {
        Self::with_collaborators(
            config,
            Box::new(HeadlessDisplay::default()),
            Box::new(HeadlessKeyboard),
        )
    }

    /// Create a terminal wired to the given collaborators.
    ///
    /// The whole configuration is validated before anything is built: a
    /// window that does not fit the buffer or exceeds the display's
    /// largest-window bounds is rejected.
    pub fn with_collaborators(
        config: &Config,
        display: Box<dyn Display>,
        keyboard: Box<dyn Keyboard>,
    ) -> Result<Self, ConsoleError> {
        let fill = Cell::empty(config.foreground, config.background);
        let buffer = ScreenBuffer::new(config.buffer_size(), &fill)?;
        let largest = Size::new(
            display.largest_window_width(),
            display.largest_window_height(),
        );
        let viewport = Viewport::at_origin(config.window_size(), largest, buffer.size())?;

        tracing::debug!(
            width = buffer.width(),
            height = buffer.height(),
            window_width = viewport.width(),
            window_height = viewport.height(),
            "terminal created"
        );
        Ok(Self {
            buffer,
            viewport,
            cursor: Cursor::new(),
            foreground: config.foreground,
            background: config.background,
            default_foreground: config.foreground,
            default_background: config.background,
            display,
            keyboard,
        })
    }

    // Buffer ------------------------------------------------------------

    pub fn buffer_width(&self) -> usize {
        self.buffer.width()
    }

    pub fn buffer_height(&self) -> usize {
        self.buffer.height()
    }

    pub fn buffer_size(&self) -> Size {
        self.buffer.size()
    }

    /// Read-only view of the cell storage.
    pub fn buffer(&self) -> &ScreenBuffer {
        &self.buffer
    }

    /// Resize the screen buffer, preserving the logical position of
    /// every surviving cell. A buffer smaller than the current window
    /// extent is rejected; shrink the window first.
    pub fn set_buffer_size(&mut self, size: Size) -> Result<(), ConsoleError> {
        ensure_dimension("size.width", size.width)?;
        ensure_dimension("size.height", size.height)?;
        ensure_at_least(
            "size.width",
            size.width,
            self.viewport.right(),
            "the window's right edge",
        )?;
        ensure_at_least(
            "size.height",
            size.height,
            self.viewport.bottom(),
            "the window's bottom edge",
        )?;

        let fill = self.default_cell();
        if self.buffer.resize(size, &fill)? {
            self.cursor.clamp_to(size);
            self.display.buffer_resized(size);
        }
        Ok(())
    }

    /// Resize the buffer width, keeping the current height.
    pub fn set_buffer_width(&mut self, width: usize) -> Result<(), ConsoleError> {
        self.set_buffer_size(Size::new(width, self.buffer.height()))
    }

    /// Resize the buffer height, keeping the current width.
    pub fn set_buffer_height(&mut self, height: usize) -> Result<(), ConsoleError> {
        self.set_buffer_size(Size::new(self.buffer.width(), height))
    }

    /// Read one cell of the buffer.
    pub fn cell(&self, position: Coordinate) -> Result<Cell, ConsoleError> {
        self.buffer.cell(position.left, position.top)
    }

    /// Replace one cell of the buffer.
    pub fn set_cell(&mut self, position: Coordinate, cell: Cell) -> Result<(), ConsoleError> {
        self.buffer.put_cell(position.left, position.top, cell)?;
        self.display
            .cells_changed(Area::new(position.left, position.top, 1, 1));
        Ok(())
    }

    /// Clear the whole buffer to blank cells in the colors current at
    /// the time of the call, not the colors each cell was written with.
    pub fn clear(&mut self) {
        let fill = self.default_cell();
        self.buffer.fill(&fill);
        tracing::debug!("buffer cleared");
        self.display.cells_changed(Area::full(self.buffer.size()));
    }

    /// Copy the `source` rectangle of the buffer to `target`, filling
    /// the vacated source cells with `replace`; `None` fills with the
    /// blank cell in the current colors.
    pub fn move_area(
        &mut self,
        source: Area,
        target: Coordinate,
        replace: Option<Cell>,
    ) -> Result<(), ConsoleError> {
        let replace = replace.unwrap_or_else(|| self.default_cell());
        if self.buffer.move_area(source, target, &replace)? {
            self.display.cells_changed(source);
            self.display
                .cells_changed(Area::new(target.left, target.top, source.width, source.height));
        }
        Ok(())
    }

    // Window ------------------------------------------------------------

    pub fn window_left(&self) -> usize {
        self.viewport.left()
    }

    pub fn window_top(&self) -> usize {
        self.viewport.top()
    }

    pub fn window_width(&self) -> usize {
        self.viewport.width()
    }

    pub fn window_height(&self) -> usize {
        self.viewport.height()
    }

    pub fn window_position(&self) -> Coordinate {
        self.viewport.position()
    }

    pub fn window_size(&self) -> Size {
        self.viewport.size()
    }

    /// Move the window relative to the screen buffer.
    pub fn set_window_position(&mut self, position: Coordinate) -> Result<(), ConsoleError> {
        if self.viewport.set_position(position, self.buffer.size())? {
            self.display.viewport_moved(position);
        }
        Ok(())
    }

    /// Move the window's left edge, keeping its top.
    pub fn set_window_left(&mut self, left: usize) -> Result<(), ConsoleError> {
        self.set_window_position(Coordinate::new(left, self.viewport.top()))
    }

    /// Move the window's top edge, keeping its left.
    pub fn set_window_top(&mut self, top: usize) -> Result<(), ConsoleError> {
        self.set_window_position(Coordinate::new(self.viewport.left(), top))
    }

    /// Resize the window.
    pub fn set_window_size(&mut self, size: Size) -> Result<(), ConsoleError> {
        let largest = Size::new(
            self.display.largest_window_width(),
            self.display.largest_window_height(),
        );
        if self.viewport.set_size(size, largest, self.buffer.size())? {
            self.display.viewport_resized(size);
        }
        Ok(())
    }

    /// Resize the window width, keeping the current height.
    pub fn set_window_width(&mut self, width: usize) -> Result<(), ConsoleError> {
        self.set_window_size(Size::new(width, self.viewport.height()))
    }

    /// Resize the window height, keeping the current width.
    pub fn set_window_height(&mut self, height: usize) -> Result<(), ConsoleError> {
        self.set_window_size(Size::new(self.viewport.width(), height))
    }

    pub fn largest_window_width(&self) -> usize {
        self.display.largest_window_width()
    }

    pub fn largest_window_height(&self) -> usize {
        self.display.largest_window_height()
    }

    // Cursor ------------------------------------------------------------

    pub fn cursor_left(&self) -> usize {
        self.cursor.left()
    }

    pub fn cursor_top(&self) -> usize {
        self.cursor.top()
    }

    /// Get the position of the cursor.
    pub fn cursor_position(&self) -> Coordinate {
        self.cursor.position()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.visible()
    }

    /// Cursor height as a percentage of the character cell.
    pub fn cursor_size(&self) -> u8 {
        self.cursor.size_percent()
    }

    /// Move the cursor within the buffer.
    pub fn set_cursor_position(&mut self, position: Coordinate) -> Result<(), ConsoleError> {
        self.cursor.set_position(position, self.buffer.size())?;
        Ok(())
    }

    /// Move the cursor column, keeping its row.
    pub fn set_cursor_left(&mut self, left: usize) -> Result<(), ConsoleError> {
        self.set_cursor_position(Coordinate::new(left, self.cursor.top()))
    }

    /// Move the cursor row, keeping its column.
    pub fn set_cursor_top(&mut self, top: usize) -> Result<(), ConsoleError> {
        self.set_cursor_position(Coordinate::new(self.cursor.left(), top))
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor.set_visible(visible);
    }

    /// Set the cursor height percentage, 1 to 100.
    pub fn set_cursor_size(&mut self, percent: u8) -> Result<(), ConsoleError> {
        self.cursor.set_size_percent(percent)?;
        Ok(())
    }

    // Colors ------------------------------------------------------------

    pub fn foreground_color(&self) -> Color {
        self.foreground
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn set_foreground_color(&mut self, color: Color) {
        self.foreground = color;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
    }

    /// Restore the construction-time default foreground and background.
    pub fn reset_color(&mut self) {
        self.foreground = self.default_foreground;
        self.background = self.default_background;
    }

    // Keyboard ----------------------------------------------------------

    /// Whether a key press is waiting in the input stream.
    pub fn key_available(&self) -> bool {
        self.keyboard.key_available()
    }

    /// Whether the CAPS LOCK keyboard toggle is on.
    pub fn caps_lock(&self) -> bool {
        self.keyboard.caps_lock()
    }

    /// Whether the NUM LOCK keyboard toggle is on.
    pub fn number_lock(&self) -> bool {
        self.keyboard.number_lock()
    }

    /// Input source for the line-reading layer above the core.
    pub fn keyboard_mut(&mut self) -> &mut dyn Keyboard {
        &mut *self.keyboard
    }

    // Snapshots ----------------------------------------------------------

    /// Capture the complete terminal state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_terminal(self)
    }

    pub(crate) fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub(crate) fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Blank cell in the colors current at the time of the call.
    fn default_cell(&self) -> Cell {
        Cell::empty(self.foreground, self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal() -> Terminal {
        Terminal::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_default_construction() {
        let term = terminal();
        assert_eq!(term.buffer_size(), Size::new(80, 25));
        assert_eq!(term.window_size(), Size::new(80, 25));
        assert_eq!(term.window_position(), Coordinate::new(0, 0));
        assert_eq!(term.cursor_position(), Coordinate::new(0, 0));
        assert_eq!(term.foreground_color(), Color::White);
        assert_eq!(term.background_color(), Color::Black);
    }

    #[test]
    fn test_window_too_large_for_buffer_is_rejected() {
        let config = Config {
            width: 40,
            height: 20,
            window_width: 41,
            window_height: 20,
            ..Config::default()
        };
        assert!(Terminal::new(&config).is_err());
    }

    #[test]
    fn test_buffer_shrink_blocked_by_window() {
        let mut term = terminal();
        let err = term.set_buffer_size(Size::new(79, 25)).unwrap_err();
        assert!(matches!(err, ConsoleError::OutOfRange { .. }));
        assert_eq!(term.buffer_size(), Size::new(80, 25));

        term.set_window_size(Size::new(40, 20)).unwrap();
        term.set_buffer_size(Size::new(79, 25)).unwrap();
        assert_eq!(term.buffer_size(), Size::new(79, 25));
    }

    #[test]
    fn test_buffer_shrink_clamps_cursor() {
        let mut term = terminal();
        term.set_window_size(Size::new(10, 5)).unwrap();
        term.set_cursor_position(Coordinate::new(79, 24)).unwrap();
        term.set_buffer_size(Size::new(40, 12)).unwrap();
        assert_eq!(term.cursor_position(), Coordinate::new(39, 11));
    }

    #[test]
    fn test_per_dimension_buffer_setters() {
        let mut term = terminal();
        term.set_window_size(Size::new(40, 20)).unwrap();
        term.set_buffer_width(120).unwrap();
        assert_eq!(term.buffer_size(), Size::new(120, 25));
        term.set_buffer_height(50).unwrap();
        assert_eq!(term.buffer_size(), Size::new(120, 50));
    }

    #[test]
    fn test_clear_uses_current_colors() {
        let mut term = terminal();
        term.set_cell(
            Coordinate::new(1, 1),
            Cell::new('A', Color::Red, Color::Blue),
        )
        .unwrap();
        term.set_background_color(Color::DarkGreen);
        term.clear();

        let cell = term.cell(Coordinate::new(1, 1)).unwrap();
        assert!(cell.is_empty());
        assert_eq!(cell.bg, Color::DarkGreen);
    }

    #[test]
    fn test_reset_color_restores_defaults() {
        let mut term = terminal();
        term.set_foreground_color(Color::Yellow);
        term.set_background_color(Color::DarkBlue);
        term.reset_color();
        assert_eq!(term.foreground_color(), Color::White);
        assert_eq!(term.background_color(), Color::Black);
    }

    #[test]
    fn test_headless_keyboard_passthrough() {
        let mut term = terminal();
        assert!(!term.key_available());
        assert!(!term.caps_lock());
        assert!(!term.number_lock());
        assert_eq!(term.keyboard_mut().poll_key(), None);
    }
}
