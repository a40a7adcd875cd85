//! Piece catalogue and rotation tests

use blockfall::core::{get_shape, Grid, Piece};
use blockfall::types::{Color, PieceKind};

#[test]
fn test_catalogue_colors() {
    let expected = [
        (PieceKind::I, Color::Cyan),
        (PieceKind::T, Color::Blue),
        (PieceKind::L, Color::Orange),
        (PieceKind::O, Color::Yellow),
        (PieceKind::S, Color::Green),
        (PieceKind::Z, Color::Purple),
        (PieceKind::J, Color::Red),
    ];
    for (kind, color) in expected {
        assert_eq!(Piece::new(kind).color(), color);
    }
}

#[test]
fn test_spawn_positions_are_centered() {
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        let width = get_shape(kind).cols() as i8;
        assert_eq!(piece.x, 5 - (width + 1) / 2, "{:?}", kind);
        assert_eq!(piece.y, 0);
    }
}

#[test]
fn test_spawns_fit_empty_grid() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        assert!(!grid.collides(&Piece::new(kind)), "{:?}", kind);
    }
}

#[test]
fn test_rotation_cycle_has_order_four() {
    for kind in PieceKind::ALL {
        let start = Piece::new(kind);
        let mut piece = start;
        for _ in 0..4 {
            piece = piece.rotated();
        }
        assert_eq!(piece, start, "{:?}", kind);
    }
}

#[test]
fn test_rotation_keeps_position() {
    let piece = Piece {
        x: 2,
        y: 7,
        ..Piece::new(PieceKind::S)
    };
    let rotated = piece.rotated();
    assert_eq!((rotated.x, rotated.y), (2, 7));
    assert_eq!(rotated.shape.rows(), 3);
    assert_eq!(rotated.shape.cols(), 2);
}

#[test]
fn test_o_rotation_is_identity() {
    let o = Piece::new(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_t_rotation_sequence() {
    // 111    01    010    10
    // 010 -> 11 -> 111 -> 11
    //        01           10
    let t0 = get_shape(PieceKind::T);
    let t1 = t0.rotated();
    assert_eq!(t1.row(0), &[false, true]);
    assert_eq!(t1.row(1), &[true, true]);
    assert_eq!(t1.row(2), &[false, true]);
    let t2 = t1.rotated();
    assert_eq!(t2.row(0), &[false, true, false]);
    assert_eq!(t2.row(1), &[true, true, true]);
    let t3 = t2.rotated();
    assert_eq!(t3.row(0), &[true, false]);
    assert_eq!(t3.row(1), &[true, true]);
    assert_eq!(t3.row(2), &[true, false]);
}
