//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of [`Cell`]s stored as a flat array for cache
//! locality. Coordinates: (x, y) where x ranges 0..9 (left to right) and
//! y ranges 0..19 (top to bottom).
//!
//! Only settled pieces are written into the board. The falling piece is kept
//! by the session and composed over the board when a snapshot is taken, so
//! every occupied cell stored here is `Merged`.

use crate::pieces::Shape;
use crate::types::{Cell, CellStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y), or None if out of bounds
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

    /// Mark a cell as settled by a piece of the given kind
    pub fn fill(&mut self, x: i8, y: i8, kind: PieceKind) -> bool {
        self.set(x, y, Cell::merged(kind))
    }

    /// A position is open when it is inside the board and its cell is `Clear`
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        matches!(
            self.get(x, y),
            Some(Cell {
                status: CellStatus::Clear,
                ..
            })
        )
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Collision predicate shared by moves, rotation and spawn.
    ///
    /// True iff some non-empty cell of `shape` placed with its top-left corner
    /// at `(x, y)` lands outside the board or on a cell that is not `Clear`.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .blocks()
            .any(|(dx, dy)| !self.is_open(x + dx, y + dy))
    }

    /// A row is complete when none of its cells is empty
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.is_empty())
    }

    /// Cells of row `y`. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Write every block of `shape` at `(x, y)` into the board as `Merged`.
    ///
    /// Returns false without touching the board if any block would collide.
    pub fn merge_piece(&mut self, shape: &Shape, x: i8, y: i8) -> bool {
        if self.collides(shape, x, y) {
            return false;
        }

        for (dx, dy) in shape.blocks() {
            self.fill(x + dx, y + dy, shape.kind());
        }

        true
    }

    /// Remove every complete row and insert as many empty rows at the top.
    ///
    /// Returns the number of rows removed. Board height never changes.
    /// Uses a two-pointer pass from the bottom, without allocating.
    pub fn sweep_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = Cell::EMPTY;
        }

        cleared
    }

    /// Number of settled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Height of the settled stack in column `x` (0 when the column is empty)
    pub fn column_height(&self, x: i8) -> u8 {
        (0..BOARD_HEIGHT as i8)
            .find(|&y| matches!(self.get(x, y), Some(cell) if !cell.is_empty()))
            .map(|top| BOARD_HEIGHT - top as u8)
            .unwrap_or(0)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows as nested vectors, top row first
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_HEIGHT as usize)
            .map(|y| self.row(y).to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.fill(x, y, PieceKind::I);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
        assert_eq!(Board::index(0, -1), None);
    }

    #[test]
    fn test_fill_marks_cell_merged() {
        let mut board = Board::new();
        assert!(board.fill(5, 10, PieceKind::T));

        assert_eq!(board.get(5, 10), Some(Cell::merged(PieceKind::T)));
        assert!(!board.is_open(5, 10));
        assert_eq!(board.cells[10 * 10 + 5].status, CellStatus::Merged);
    }

    #[test]
    fn test_sweep_keeps_partial_rows_in_order() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.fill(0, 18, PieceKind::J);
        fill_row(&mut board, 17);
        board.fill(4, 16, PieceKind::S);

        assert_eq!(board.sweep_rows(), 2);

        assert_eq!(board.get(0, 19), Some(Cell::merged(PieceKind::J)));
        assert_eq!(board.get(4, 18), Some(Cell::merged(PieceKind::S)));
        assert_eq!(board.filled_count(), 2);
        assert_eq!(board.to_rows().len(), BOARD_HEIGHT as usize);
    }

    #[test]
    fn test_column_height() {
        let mut board = Board::new();
        assert_eq!(board.column_height(2), 0);
        board.fill(2, 15, PieceKind::O);
        assert_eq!(board.column_height(2), 5);
        board.fill(2, 19, PieceKind::O);
        assert_eq!(board.column_height(2), 5);
    }
}
