//! Frame - a renderable description of the game at one instant.
//!
//! Produced by [`GameState::frame`](crate::GameState::frame) without side effects.
//! Render sinks (the terminal view, or a JSON consumer) draw from this alone.

use serde::Serialize;

use crate::pieces::{Piece, Shape};
use crate::types::{Cell, Color, GameStatus, PieceKind, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: Color,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceView {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color(),
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl PieceView {
    /// Whether the piece covers grid cell (x, y)
    pub fn covers(&self, x: usize, y: usize) -> bool {
        let (col, row) = (x as i32 - self.x as i32, y as i32 - self.y as i32);
        col >= 0 && row >= 0 && self.shape.is_filled(row as usize, col as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Frame {
    /// Locked cells, top row first
    pub grid: [[Cell; COLS]; ROWS],
    pub piece: PieceView,
    pub score: u32,
    pub status: GameStatus,
}

impl Frame {
    /// Visible color at (x, y): the active piece drawn over the locked grid
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        if x >= COLS || y >= ROWS {
            return None;
        }
        if self.piece.covers(x, y) {
            return Some(self.piece.color);
        }
        self.grid[y][x]
    }

    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Ended
    }
}
