//! Grid module - the persistent playfield of locked cells
//!
//! The grid is 20 rows by 10 columns stored as a flat row-major array, so a
//! reset or a line clear never allocates.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Collision treats rows above the top (negative y) as open space. Pieces may
//! spawn or rotate partially above the visible grid; only the sides, the floor,
//! and locked cells block them.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, Color, COLS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = ROWS * COLS;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x as usize >= COLS || y < 0 || y as usize >= ROWS {
            return None;
        }
        Some((y as usize) * COLS + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * COLS;
        &self.cells[start..start + COLS]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(COLS)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < ROWS && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Whether `piece` at its current position hits a wall, the floor, or a locked cell.
    ///
    /// Cells above the top row never collide on their own.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| {
            if x < 0 || x as usize >= COLS || y as i32 >= ROWS as i32 {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write the piece's color into every grid cell it covers.
    ///
    /// The position is expected to be collision-free. Cells above the top row
    /// have nowhere to go and are dropped; returns how many cells were written.
    pub fn place(&mut self, piece: &Piece) -> usize {
        let color = piece.color();
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, Some(color)) {
                written += 1;
            }
        }
        written
    }

    /// Clear all full rows and return the row indices that were cleared (bottom to top).
    ///
    /// Rows above each cleared row shift down and empty rows fill the top. Every
    /// full row is removed in a single pass, including adjacent ones.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = ROWS;

        for read_y in (0..ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * COLS;
                    self.cells.copy_within(src..src + COLS, write_y * COLS);
                }
            }
        }

        self.cells[..write_y * COLS].fill(None);
        cleared_rows
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with one color
    pub fn fill_row(&mut self, y: usize, color: Color) {
        if y < ROWS {
            let start = y * COLS;
            self.cells[start..start + COLS].fill(Some(color));
        }
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_rows(&self, out: &mut [[Cell; COLS]; ROWS]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
