//! Pieces tests - shape matrices and clockwise rotation

use game_scores::core::Shape;
use game_scores::types::PieceKind;

// ============== Shape Tests ==============

#[test]
fn test_matrix_sizes() {
    assert_eq!(Shape::new(PieceKind::I).size(), 4);
    assert_eq!(Shape::new(PieceKind::O).size(), 2);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(Shape::new(kind).size(), 3, "{kind:?}");
    }
}

#[test]
fn test_spawn_orientations() {
    assert_eq!(Shape::new(PieceKind::I).to_rows(), [".#..", ".#..", ".#..", ".#.."]);
    assert_eq!(Shape::new(PieceKind::J).to_rows(), [".#.", ".#.", "##."]);
    assert_eq!(Shape::new(PieceKind::L).to_rows(), [".#.", ".#.", ".##"]);
    assert_eq!(Shape::new(PieceKind::O).to_rows(), ["##", "##"]);
    assert_eq!(Shape::new(PieceKind::S).to_rows(), [".##", "##.", "..."]);
    assert_eq!(Shape::new(PieceKind::Z).to_rows(), ["##.", ".##", "..."]);
}

#[test]
fn test_blocks_carry_their_kind() {
    for kind in PieceKind::ALL {
        let shape = Shape::new(kind);
        for (dx, dy) in shape.blocks() {
            assert_eq!(shape.get(dx as usize, dy as usize), Some(kind));
        }
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let shape = Shape::new(kind);
        let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, shape, "{kind:?}");
    }
}

#[test]
fn test_o_rotation_is_noop() {
    let o = Shape::new(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);
}

#[test]
fn test_j_rotation_sequence() {
    let j = Shape::new(PieceKind::J);
    let east = j.rotated_cw();
    assert_eq!(east.to_rows(), ["#..", "###", "..."]);
    let south = east.rotated_cw();
    assert_eq!(south.to_rows(), [".##", ".#.", ".#."]);
}

#[test]
fn test_s_rotation() {
    let s = Shape::new(PieceKind::S).rotated_cw();
    assert_eq!(s.to_rows(), [".#.", ".##", "..#"]);
}

#[test]
fn test_rotation_keeps_block_count() {
    for kind in PieceKind::ALL {
        let mut shape = Shape::new(kind);
        for _ in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.blocks().count(), 4, "{kind:?}");
        }
    }
}
