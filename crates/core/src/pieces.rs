//! Pieces module - shape matrices, the piece catalogue, and rotation
//!
//! Each shape is a small boolean matrix stored in a fixed 4x4 buffer with explicit
//! dimensions, so rotating never allocates. Rotation is a plain 90° clockwise
//! transpose: no kick table, the caller either accepts the result in place or
//! discards it.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::types::{Color, PieceKind, COLS};

/// Largest side of any shape matrix
pub const MAX_SHAPE: usize = 4;

/// Occupancy matrix of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE]; MAX_SHAPE],
}

const fn matrix<const R: usize, const C: usize>(src: [[u8; C]; R]) -> Shape {
    let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
    let mut r = 0;
    while r < R {
        let mut c = 0;
        while c < C {
            cells[r][c] = src[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    Shape {
        rows: R as u8,
        cols: C as u8,
        cells,
    }
}

const I_SHAPE: Shape = matrix([[1, 1, 1, 1]]);
const T_SHAPE: Shape = matrix([[1, 1, 1], [0, 1, 0]]);
const L_SHAPE: Shape = matrix([[1, 1, 1], [1, 0, 0]]);
const O_SHAPE: Shape = matrix([[1, 1], [1, 1]]);
const S_SHAPE: Shape = matrix([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = matrix([[1, 1, 0], [0, 1, 1]]);
const J_SHAPE: Shape = matrix([[1, 1, 1], [0, 0, 1]]);

/// Get the spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for empty, ragged, or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE || width == 0 || width > MAX_SHAPE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Some(Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (row, col) is filled. Out-of-range reads are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Row slice of length `cols()`
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row][..self.cols()]
    }

    /// Iterate over filled cells as (row, col)
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r, c))
        })
    }

    /// Rotate 90° clockwise.
    ///
    /// Destination row `c` is source column `c` read from the last row up, so a
    /// `rows x cols` matrix becomes `cols x rows`.
    pub fn rotated(&self) -> Shape {
        assert!(self.rows > 0 && self.cols > 0, "cannot rotate an empty shape");

        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        for col in 0..self.cols() {
            for (k, row) in (0..self.rows()).rev().enumerate() {
                cells[col][k] = self.cells[row][col];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows()))?;
        for r in 0..self.rows() {
            seq.serialize_element(self.row(r))?;
        }
        seq.end()
    }
}

/// Column at which a shape of `width` spawns so it sits centered
pub fn spawn_x(width: usize) -> i8 {
    ((COLS / 2) as i8) - (width.div_ceil(2) as i8)
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of `kind` at its spawn position (centered, top row)
    pub fn new(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(shape.cols()),
            y: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Grid coordinates (x, y) of every filled cell at the current position
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(r, c)| (self.x + c as i8, self.y + r as i8))
    }

    /// Same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its shape rotated in place
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_dimensions() {
        assert_eq!((I_SHAPE.rows(), I_SHAPE.cols()), (1, 4));
        assert_eq!((O_SHAPE.rows(), O_SHAPE.cols()), (2, 2));
        for shape in [T_SHAPE, L_SHAPE, S_SHAPE, Z_SHAPE, J_SHAPE] {
            assert_eq!((shape.rows(), shape.cols()), (2, 3));
        }
    }

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).occupied().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_t_shape_layout() {
        let t = get_shape(PieceKind::T);
        assert_eq!(t.row(0), &[true, true, true]);
        assert_eq!(t.row(1), &[false, true, false]);
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let rotated = I_SHAPE.rotated();
        assert_eq!(rotated.rows(), 4);
        assert_eq!(rotated.cols(), 1);
        assert!((0..4).all(|r| rotated.is_filled(r, 0)));
    }

    #[test]
    fn test_rotate_is_clockwise() {
        // 111     11
        // 100  -> 01
        //         01
        let rotated = L_SHAPE.rotated();
        assert_eq!(rotated.row(0), &[true, true]);
        assert_eq!(rotated.row(1), &[false, true]);
        assert_eq!(rotated.row(2), &[false, true]);
    }

    #[test]
    fn test_four_rotations_restore_every_shape() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            let back = shape.rotated().rotated().rotated().rotated();
            assert_eq!(back, shape, "{:?}", kind);
        }
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert_eq!(Shape::from_rows(&[&[1, 1], &[1, 1]]), Some(O_SHAPE));
    }

    #[test]
    fn test_spawn_x_centers_shape() {
        assert_eq!(spawn_x(4), 3);
        assert_eq!(spawn_x(3), 3);
        assert_eq!(spawn_x(2), 4);
        assert_eq!(Piece::new(PieceKind::O).x, 4);
        assert_eq!(Piece::new(PieceKind::I).y, 0);
    }

    #[test]
    fn test_piece_cells_are_absolute() {
        let piece = Piece::new(PieceKind::T).shifted(0, 5);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 5), (4, 5), (5, 5), (4, 6)]);
    }

    #[test]
    fn test_piece_color_follows_kind() {
        assert_eq!(Piece::new(PieceKind::Z).color(), Color::Purple);
    }
}
