//! Pieces module - tetromino catalog and matrix rotation
//!
//! Each piece is a small square matrix of cell values. Rotation is done by
//! transposing the matrix and then reversing either every row (clockwise) or
//! the row order (counter-clockwise).

use arrayvec::ArrayVec;

use crate::types::{PieceKind, EMPTY};

/// Largest supported piece side length
pub const MAX_PIECE_SIZE: usize = 4;

/// A square matrix of piece cells, stored row-major and inline
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceMatrix {
    size: usize,
    cells: ArrayVec<u8, { MAX_PIECE_SIZE * MAX_PIECE_SIZE }>,
}

impl PieceMatrix {
    /// Build a matrix from square rows
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square no wider than
    /// [`MAX_PIECE_SIZE`].
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(size <= MAX_PIECE_SIZE, "piece matrix too large");
        assert!(
            rows.iter().all(|r| r.len() == size),
            "piece matrix must be square"
        );
        Self {
            size,
            cells: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }

    /// Side length; also the matrix width used to bound wall kicks
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at matrix cell (x, y)
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.size + x]
    }

    /// Borrow row `y`
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate the non-empty cells as `(x, y, value)` in matrix coordinates
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != EMPTY)
            .map(move |(i, &v)| ((i % size) as i32, (i / size) as i32, v))
    }

    /// Rotate in place by 90°: `direction > 0` is clockwise, otherwise
    /// counter-clockwise
    pub fn rotate(&mut self, direction: i32) {
        let n = self.size;
        for y in 0..n {
            for x in 0..y {
                self.cells.swap(y * n + x, x * n + y);
            }
        }

        if direction > 0 {
            for row in self.cells.chunks_mut(n) {
                row.reverse();
            }
        } else {
            for y in 0..n / 2 {
                let (top, bottom) = self.cells.split_at_mut((n - 1 - y) * n);
                top[y * n..y * n + n].swap_with_slice(&mut bottom[..n]);
            }
        }
    }

    /// Rotated copy; `self` is left untouched
    pub fn rotated(&self, direction: i32) -> Self {
        let mut out = self.clone();
        out.rotate(direction);
        out
    }
}

/// Fresh copy of the spawn pattern for `kind`
pub fn shape_for(kind: PieceKind) -> PieceMatrix {
    match kind {
        PieceKind::T => PieceMatrix::from_rows(&[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]),
        PieceKind::O => PieceMatrix::from_rows(&[&[2, 2], &[2, 2]]),
        PieceKind::L => PieceMatrix::from_rows(&[&[0, 3, 0], &[0, 3, 0], &[0, 3, 3]]),
        PieceKind::J => PieceMatrix::from_rows(&[&[0, 4, 0], &[0, 4, 0], &[4, 4, 0]]),
        PieceKind::I => PieceMatrix::from_rows(&[
            &[0, 5, 0, 0],
            &[0, 5, 0, 0],
            &[0, 5, 0, 0],
            &[0, 5, 0, 0],
        ]),
        PieceKind::S => PieceMatrix::from_rows(&[&[0, 6, 6], &[6, 6, 0], &[0, 0, 0]]),
        PieceKind::Z => PieceMatrix::from_rows(&[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_cw_t_piece() {
        let mut t = shape_for(PieceKind::T);
        t.rotate(1);
        assert_eq!(t, PieceMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]));
    }

    #[test]
    fn test_rotate_ccw_t_piece() {
        let mut t = shape_for(PieceKind::T);
        t.rotate(-1);
        assert_eq!(t, PieceMatrix::from_rows(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]));
    }

    #[test]
    fn test_zero_direction_is_counter_clockwise() {
        let t = shape_for(PieceKind::T);
        assert_eq!(t.rotated(0), t.rotated(-1));
    }

    #[test]
    fn test_rotate_i_piece_lies_flat() {
        let i = shape_for(PieceKind::I).rotated(1);
        assert_eq!(i.row(1), &[5, 5, 5, 5]);
        assert_eq!(i.occupied().count(), 4);
    }

    #[test]
    fn test_cw_then_ccw_is_identity() {
        for kind in PieceKind::ALL {
            let m = shape_for(kind);
            assert_eq!(m.rotated(1).rotated(-1), m, "{kind:?}");
        }
    }

    #[test]
    fn test_rotated_leaves_original_untouched() {
        let s = shape_for(PieceKind::S);
        let before = s.clone();
        let _ = s.rotated(1);
        assert_eq!(s, before);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_non_square_rejected() {
        let _ = PieceMatrix::from_rows(&[&[1, 1, 1], &[0, 1, 0]]);
    }
}
