//! Collision detection between a piece and the settled arena.

use crate::arena::Arena;
use crate::pieces::PieceMatrix;
use crate::types::{Position, EMPTY};

/// Returns true if any occupied piece cell, offset by `pos`, lands outside the
/// arena or on a non-empty arena cell.
///
/// Empty piece cells never collide, so a matrix may hang past the arena edge
/// as long as its occupied cells stay inside.
pub fn collides(arena: &Arena, piece: &PieceMatrix, pos: Position) -> bool {
    piece
        .occupied()
        .any(|(x, y, _)| arena.get(pos.x + x, pos.y + y) != Some(EMPTY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_for;
    use crate::types::PieceKind;

    #[test]
    fn test_no_collision_on_empty_arena() {
        let arena = Arena::new(10, 10);
        let t = shape_for(PieceKind::T);
        assert!(!collides(&arena, &t, Position::new(0, 0)));
    }

    #[test]
    fn test_empty_columns_may_hang_outside() {
        let arena = Arena::new(10, 10);
        // I occupies only matrix column 1.
        let i = shape_for(PieceKind::I);
        assert!(!collides(&arena, &i, Position::new(-1, 0)));
        assert!(collides(&arena, &i, Position::new(-2, 0)));
    }

    #[test]
    fn test_out_of_bounds_collides_on_every_side() {
        let arena = Arena::new(10, 10);
        let o = shape_for(PieceKind::O);
        assert!(collides(&arena, &o, Position::new(-1, 0)));
        assert!(collides(&arena, &o, Position::new(9, 0)));
        assert!(collides(&arena, &o, Position::new(0, -1)));
        assert!(collides(&arena, &o, Position::new(0, 9)));
        assert!(!collides(&arena, &o, Position::new(8, 8)));
    }

    #[test]
    fn test_overlap_with_settled_cell() {
        let mut arena = Arena::new(10, 10);
        arena.set(4, 5, 3);
        let o = shape_for(PieceKind::O);
        assert!(collides(&arena, &o, Position::new(3, 4)));
        assert!(!collides(&arena, &o, Position::new(5, 4)));
    }
}
