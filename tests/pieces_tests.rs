//! Piece catalog, rotation and spawning

use blockfall::core::pieces::{color, shape_matrix, template};
use blockfall::core::{spawn_piece, Board, EntropySource, Piece, SeededSource, SequenceSource};
use blockfall::types::{Color, ShapeKind, SPAWN_COL, SPAWN_ROW};

fn mask(rows: &[&[u8]]) -> Vec<Vec<u8>> {
    rows.iter().map(|r| r.to_vec()).collect()
}

#[test]
fn test_spawn_orientation_matches_template() {
    for kind in ShapeKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.matrix.mask(), mask(template(kind)), "{:?}", kind);
        assert!(piece.matrix.filled().all(|(_, _, c)| c == color(kind)));
    }
}

#[test]
fn test_t_rotates_clockwise() {
    let rotated = Piece::spawn(ShapeKind::T).rotated();
    assert_eq!(
        rotated.matrix.mask(),
        mask(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]])
    );
}

#[test]
fn test_i_rotates_into_third_column() {
    let rotated = shape_matrix(ShapeKind::I).rotate_cw();
    assert_eq!(
        rotated.mask(),
        mask(&[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]])
    );
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in ShapeKind::ALL {
        let start = shape_matrix(kind);
        let mut m = start.clone();
        for _ in 0..4 {
            m = m.rotate_cw();
        }
        assert_eq!(m, start, "{:?}", kind);
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let o = shape_matrix(ShapeKind::O);
    assert_eq!(o.rotate_cw(), o);
}

#[test]
fn test_rotation_keeps_anchor() {
    let piece = Piece::spawn(ShapeKind::L).at(7, 4);
    let rotated = piece.rotated();
    assert_eq!((rotated.row, rotated.col), (7, 4));
    assert_eq!(rotated.kind, ShapeKind::L);
}

#[test]
fn test_spawn_piece_draws_from_source() {
    let mut source = SequenceSource::new(vec![ShapeKind::S, ShapeKind::I]);
    let first = spawn_piece(&mut source);
    let second = spawn_piece(&mut source);

    assert_eq!(first.kind, ShapeKind::S);
    assert_eq!(second.kind, ShapeKind::I);
    assert_eq!((first.row, first.col), (SPAWN_ROW, SPAWN_COL));
    assert_eq!(first.matrix.filled().next().map(|(_, _, c)| c), Some(Color::Green));
}

#[test]
fn test_spawn_randomness_stays_in_catalog() {
    let mut source = EntropySource::new();
    for _ in 0..200 {
        let piece = spawn_piece(&mut source);
        assert_eq!(piece.matrix.mask(), mask(template(piece.kind)));
        assert!(Color::ALL.contains(&color(piece.kind)));
        assert!(piece.fits(&Board::new()));
    }
}

#[test]
fn test_seeded_spawns_are_reproducible() {
    let mut a = SeededSource::new(2024);
    let mut b = SeededSource::new(2024);
    for _ in 0..30 {
        assert_eq!(spawn_piece(&mut a), spawn_piece(&mut b));
    }
}
