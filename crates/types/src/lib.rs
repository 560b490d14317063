//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! The game-side types (board cells, piece kinds, actions) are plain data with
//! no behavior beyond parsing and formatting; the score-record types carry the
//! serde and chrono derives needed by the HTTP service and the leaderboard.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0), i.e. `BOARD_WIDTH / 2 - 2`
//!
//! # Puzzle Timing
//!
//! | Level | Fall interval |
//! |-------|---------------|
//! | 1 | 1000ms |
//! | 2 | 500ms |
//! | 3 | 333ms |
//! | n | `1000 / n` ms |
//!
//! # Examples
//!
//! ```
//! use game_scores_types::{GameAction, GameId, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(GameId::from_str("hangman"), Some(GameId::Hangman));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column where new pieces appear (top-center)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Row where new pieces appear
pub const SPAWN_Y: i8 = 0;

/// Fall interval at level 1; divided by the level afterwards
pub const BASE_DROP_MS: u32 = 1000;

/// A new level is reached once cumulative lines exceed `level * LINES_PER_LEVEL`
pub const LINES_PER_LEVEL: u32 = 10;

/// Puzzle sessions start at level 1
pub const START_LEVEL: u32 = 1;

/// Wrong guesses allowed before a word-guess round is lost
pub const MAX_MISTAKES: u32 = 6;

/// Maximum number of records returned by a leaderboard query
pub const LEADERBOARD_LIMIT: usize = 10;

/// Line clear scoring table, indexed by rows cleared (capped at 4).
///
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 or more lines: 1200 points
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order used by the piece generator
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use game_scores_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Occupancy status of a board cell
///
/// - **Clear**: unoccupied, or covered only by the falling piece in a snapshot
/// - **Merged**: permanently settled by a landed piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStatus {
    #[default]
    Clear,
    Merged,
}

/// A cell on the game board: a piece tag plus an occupancy status.
///
/// A merged cell always carries a tag. A clear cell carries a tag only in
/// rendered snapshots, where it marks the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub kind: Option<PieceKind>,
    pub status: CellStatus,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: None,
        status: CellStatus::Clear,
    };

    /// A settled cell of the given kind
    pub const fn merged(kind: PieceKind) -> Self {
        Self {
            kind: Some(kind),
            status: CellStatus::Merged,
        }
    }

    /// A transient cell of the given kind (falling piece in a snapshot)
    pub const fn transient(kind: PieceKind) -> Self {
        Self {
            kind: Some(kind),
            status: CellStatus::Clear,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
    }

    pub fn is_clear(&self) -> bool {
        self.status == CellStatus::Clear
    }
}

/// Puzzle session events
///
/// Keyboard and timer drivers translate their input into these actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Player-requested single step down
    SoftDrop,
    /// Gravity step from the fall timer
    Tick,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to its lowest position and merge it
    HardDrop,
    /// Abandon the running game
    Forfeit,
    /// Start over with an empty board
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// ```
    /// use game_scores_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "tick" => Some(GameAction::Tick),
            "rotate" => Some(GameAction::Rotate),
            "harddrop" => Some(GameAction::HardDrop),
            "forfeit" => Some(GameAction::Forfeit),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Tick => "tick",
            GameAction::Rotate => "rotate",
            GameAction::HardDrop => "hardDrop",
            GameAction::Forfeit => "forfeit",
            GameAction::Restart => "restart",
        }
    }
}

/// Games that can post scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    #[default]
    Tetris,
    Hangman,
}

impl GameId {
    pub const ALL: [GameId; 2] = [GameId::Tetris, GameId::Hangman];

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tetris" => Some(GameId::Tetris),
            "hangman" => Some(GameId::Hangman),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Tetris => "tetris",
            GameId::Hangman => "hangman",
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated score ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub player_name: String,
    pub score: u32,
    pub game: GameId,
}

/// A persisted score. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub id: i64,
    pub player_name: String,
    pub score: u32,
    pub game: GameId,
    pub created_at: DateTime<Utc>,
}
