//! Pieces module - Tetromino shapes and matrix rotation
//!
//! Every shape is stored as a square matrix (I: 4x4, O: 2x2, the rest 3x3) so a
//! single transform rotates all of them: transpose, then reverse each row.
//! There are no wall kicks; a rotation that collides is rejected by the caller.

use crate::types::PieceKind;

/// Largest matrix side used by any shape
pub const MAX_SHAPE_SIZE: usize = 4;

type Matrix = [[Option<PieceKind>; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

/// A tetromino shape: a `size` x `size` matrix of tagged or empty cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    size: u8,
    cells: Matrix,
}

impl Shape {
    /// Spawn orientation for a piece kind
    pub fn new(kind: PieceKind) -> Self {
        let (size, rows): (u8, &[&str]) = match kind {
            PieceKind::I => (4, &[".#..", ".#..", ".#..", ".#.."]),
            PieceKind::J => (3, &[".#.", ".#.", "##."]),
            PieceKind::L => (3, &[".#.", ".#.", ".##"]),
            PieceKind::O => (2, &["##", "##"]),
            PieceKind::S => (3, &[".##", "##.", "..."]),
            PieceKind::T => (3, &["...", "###", ".#."]),
            PieceKind::Z => (3, &["##.", ".##", "..."]),
        };
        Self::from_rows(kind, size, rows)
    }

    fn from_rows(kind: PieceKind, size: u8, rows: &[&str]) -> Self {
        let mut cells: Matrix = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, b) in row.bytes().enumerate() {
                if b == b'#' {
                    cells[y][x] = Some(kind);
                }
            }
        }
        Self { kind, size, cells }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length of the square matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell at local offset (x, y); None when empty or outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<PieceKind> {
        if x >= self.size as usize || y >= self.size as usize {
            return None;
        }
        self.cells[y][x]
    }

    /// Local offsets (dx, dy) of the non-empty cells, row by row
    pub fn blocks(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.cells[y][x].map(|_| (x as i8, y as i8)))
        })
    }

    /// Rotate 90° clockwise: transpose, then reverse each row
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut transposed: Matrix = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in transposed.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.cells[x][y];
            }
        }
        for row in transposed.iter_mut().take(n) {
            row[..n].reverse();
        }

        Self {
            cells: transposed,
            ..*self
        }
    }

    /// Rows as strings of `#` and `.`, for tests and debugging
    pub fn to_rows(&self) -> Vec<String> {
        let n = self.size as usize;
        (0..n)
            .map(|y| {
                (0..n)
                    .map(|x| if self.cells[y][x].is_some() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_blocks() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::new(kind).blocks().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        let t = Shape::new(PieceKind::T);
        assert_eq!(t.to_rows(), ["...", "###", ".#."]);
        assert_eq!(t.rotated_cw().to_rows(), [".#.", "##.", ".#."]);
    }

    #[test]
    fn i_rotates_to_horizontal() {
        let i = Shape::new(PieceKind::I).rotated_cw();
        assert_eq!(i.to_rows(), ["....", "####", "....", "...."]);
    }

    #[test]
    fn get_outside_matrix_is_empty() {
        let o = Shape::new(PieceKind::O);
        assert_eq!(o.get(0, 0), Some(PieceKind::O));
        assert_eq!(o.get(2, 0), None);
    }
}
