//! Screen buffer
//!
//! The full off-screen character grid. Storage is a flat row-major
//! `Vec<Cell>`; every algorithm addresses it through the single
//! `index(x, y) = y * width + x` mapping, never through a second ad-hoc
//! flat offset.

use serde::{Deserialize, Serialize};

use super::bounds::{checked_edge, ensure_at_most, ensure_below, ensure_dimension};
use super::cell::Cell;
use super::geometry::{Area, Coordinate, Size};
use super::ConsoleError;

/// Exclusive upper bound for buffer dimensions. Keeps `width * height`
/// and every `left + width` edge far from `usize` overflow, including
/// on 32-bit targets.
pub const MAX_DIMENSION: usize = 1 << 15;

/// The screen buffer: sole owner of the cell storage. The viewport and
/// cursor hold coordinates into it, never copies of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenBuffer {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl ScreenBuffer {
    /// Create a buffer of `size` filled with clones of `fill`.
    pub fn new(size: Size, fill: &Cell) -> Result<Self, ConsoleError> {
        ensure_dimension("size.width", size.width)?;
        ensure_dimension("size.height", size.height)?;
        Ok(Self {
            cells: vec![fill.clone(); size.cells()],
            width: size.width,
            height: size.height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Number of cells the buffer holds, always `width * height`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn ensure_in_bounds(
        &self,
        name_x: &'static str,
        x: usize,
        name_y: &'static str,
        y: usize,
    ) -> Result<(), ConsoleError> {
        ensure_below(name_x, x, self.width, "the buffer width")?;
        ensure_below(name_y, y, self.height, "the buffer height")?;
        Ok(())
    }

    /// Read one cell. The cell is returned by value; the buffer stays
    /// the sole owner of its storage.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, ConsoleError> {
        self.ensure_in_bounds("x", x, "y", y)?;
        Ok(self.cells[self.index(x, y)].clone())
    }

    /// Replace one cell.
    pub fn put_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), ConsoleError> {
        self.ensure_in_bounds("x", x, "y", y)?;
        let i = self.index(x, y);
        self.cells[i] = cell;
        Ok(())
    }

    /// Replace every cell with clones of `fill`.
    pub fn fill(&mut self, fill: &Cell) {
        for cell in &mut self.cells {
            *cell = fill.clone();
        }
    }

    /// Resize to `new_size`, preserving the logical `(x, y)` position of
    /// every surviving cell. Cells in newly added rows or columns get
    /// `fill`; cells beyond the new extent are dropped. No-op when the
    /// size is unchanged. Returns whether the buffer changed.
    ///
    /// The storage is swapped in a single assignment, so callers never
    /// observe a partially resized buffer.
    pub fn resize(&mut self, new_size: Size, fill: &Cell) -> Result<bool, ConsoleError> {
        ensure_dimension("size.width", new_size.width)?;
        ensure_dimension("size.height", new_size.height)?;
        if new_size.width == self.width && new_size.height == self.height {
            return Ok(false);
        }

        let mut cells = vec![fill.clone(); new_size.cells()];
        // Copy by (x, y) pairs bounded per axis: a single linear cutoff
        // scrambles rows whenever the width changes.
        let copy_width = self.width.min(new_size.width);
        let copy_height = self.height.min(new_size.height);
        for y in 0..copy_height {
            for x in 0..copy_width {
                cells[y * new_size.width + x] = self.cells[self.index(x, y)].clone();
            }
        }

        tracing::debug!(
            old_width = self.width,
            old_height = self.height,
            width = new_size.width,
            height = new_size.height,
            "buffer resized"
        );
        self.cells = cells;
        self.width = new_size.width;
        self.height = new_size.height;
        Ok(true)
    }

    /// Copy the `source` rectangle to `target` and fill the vacated
    /// source cells with `replace`. No-op when source and target
    /// coincide; zero-area rectangles are legal and write nothing.
    /// Returns whether any cell changed.
    ///
    /// The source is snapshotted before any write: source and target may
    /// overlap (e.g. shifting a region by one column), and reading the
    /// source while writing the target would corrupt the overlap.
    pub fn move_area(
        &mut self,
        source: Area,
        target: Coordinate,
        replace: &Cell,
    ) -> Result<bool, ConsoleError> {
        let source_right = checked_edge("source.left + source.width", source.left, source.width)?;
        let source_bottom = checked_edge("source.top + source.height", source.top, source.height)?;
        let target_right = checked_edge("target.left + source.width", target.left, source.width)?;
        let target_bottom = checked_edge("target.top + source.height", target.top, source.height)?;

        self.ensure_in_bounds("source.left", source.left, "source.top", source.top)?;
        ensure_at_most(
            "source.left + source.width",
            source_right,
            self.width,
            "the buffer width",
        )?;
        ensure_at_most(
            "source.top + source.height",
            source_bottom,
            self.height,
            "the buffer height",
        )?;
        self.ensure_in_bounds("target.left", target.left, "target.top", target.top)?;
        ensure_at_most(
            "target.left + source.width",
            target_right,
            self.width,
            "the buffer width",
        )?;
        ensure_at_most(
            "target.top + source.height",
            target_bottom,
            self.height,
            "the buffer height",
        )?;

        if source.top_left() == target || source.is_empty() {
            return Ok(false);
        }

        // Snapshot the source rectangle, row-major and offset-relative
        // against the area width.
        let mut saved = Vec::with_capacity(source.size().cells());
        for y in source.top..source.bottom() {
            for x in source.left..source.right() {
                saved.push(self.cells[self.index(x, y)].clone());
            }
        }

        for y in source.top..source.bottom() {
            for x in source.left..source.right() {
                let i = self.index(x, y);
                self.cells[i] = replace.clone();
            }
        }

        // Overlapping target writes land after the replacement fill, so
        // moved content wins in the overlap.
        for (offset, cell) in saved.into_iter().enumerate() {
            let x = target.left + offset % source.width;
            let y = target.top + offset / source.width;
            let i = self.index(x, y);
            self.cells[i] = cell;
        }

        tracing::debug!(
            source_left = source.left,
            source_top = source.top,
            width = source.width,
            height = source.height,
            target_left = target.left,
            target_top = target.top,
            "buffer area moved"
        );
        Ok(true)
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
