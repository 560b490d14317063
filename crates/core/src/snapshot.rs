//! Snapshot module - read-only view of a puzzle session for renderers
//!
//! The falling piece is drawn over the merged board as transient `Clear`
//! cells, so a snapshot never feeds back into collision checks.

use crate::game_state::ActivePiece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub settled: bool,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            x: value.x,
            y: value.y,
            settled: value.settled,
        }
    }
}

/// Render-ready view of a puzzle session.
///
/// `cells` is the board with the falling piece composed in as transient
/// (`Clear`) cells; settled cells are `Merged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cells: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: PieceKind,
    pub game_over: bool,
    pub episode_id: u32,
    pub piece_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Rows as strings: `.` empty, uppercase letter merged, lowercase falling
    pub fn to_text(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.kind {
                        None => '.',
                        Some(kind) => {
                            let c = kind.as_str().chars().next().unwrap_or('?');
                            if cell.is_clear() {
                                c
                            } else {
                                c.to_ascii_uppercase()
                            }
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[Cell::EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: PieceKind::I,
            game_over: false,
            episode_id: 0,
            piece_id: 0,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: 0,
        }
    }
}
