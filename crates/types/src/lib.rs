//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, so they can be shared by the engine,
//! the terminal front end, and any external render sink.
//!
//! # Grid Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! Pieces spawn at row 0, horizontally centered on their own width.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 500 | Time between forced one-row descents |
//! | `LINE_CLEAR_SCORE` | 10 | Points awarded per cleared row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, PieceKind, COLS, ROWS};
//!
//! assert_eq!(PieceKind::I.color(), Color::Cyan);
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! assert_eq!(ROWS, 20);
//! assert_eq!(COLS, 10);
//! ```

use serde::Serialize;

/// Number of grid rows
pub const ROWS: usize = 20;

/// Number of grid columns
pub const COLS: usize = 10;

/// Default gravity interval in milliseconds
pub const GRAVITY_INTERVAL_MS: u32 = 500;

/// Points awarded for each cleared row
pub const LINE_CLEAR_SCORE: u32 = 10;

/// Color tag of a locked or falling cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// A grid cell
///
/// - `None`: empty
/// - `Some(Color)`: locked block of that color
pub type Cell = Option<Color>;

/// The seven piece kinds
///
/// Each kind has a fixed shape and color:
/// - **I**: cyan, 1x4 bar
/// - **T**: blue
/// - **L**: orange
/// - **O**: yellow, 2x2 square
/// - **S**: green
/// - **Z**: purple (mirror of S)
/// - **J**: red (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    T,
    L,
    O,
    S,
    Z,
    J,
}

impl PieceKind {
    /// All kinds, in catalogue order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
    ];

    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::T => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Purple,
            PieceKind::J => Color::Red,
        }
    }
}

/// Player or host commands applied to the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Drop one row; locks the piece if it cannot descend
    MoveDown,
    /// Rotate 90° in place (no wall kicks)
    Rotate,
    /// Fall to the lowest valid row and lock immediately
    HardDrop,
    /// Start a fresh game
    Restart,
}

/// Whether the session is still accepting moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running,
    Ended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_constants_match_classic_rules() {
        assert_eq!(ROWS, 20);
        assert_eq!(COLS, 10);
        assert_eq!(GRAVITY_INTERVAL_MS, 500);
        assert_eq!(LINE_CLEAR_SCORE, 10);
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        let colors: Vec<Color> = PieceKind::ALL.iter().map(|k| k.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
