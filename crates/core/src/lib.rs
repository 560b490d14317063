//! Core game logic - pure, deterministic, and testable
//!
//! Everything that turns gameplay into a score and scores into a ranking.
//! There are no dependencies on HTTP, storage or terminals here; drivers feed
//! actions in and read snapshots and scores out.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision detection and row sweeping
//! - [`pieces`]: the seven tetromino matrices and clockwise rotation
//! - [`rng`]: seeded uniform piece generator with a one-piece preview
//! - [`scoring`]: line-clear points, level progression, fall interval
//! - [`game_state`]: the falling-block session and its transitions
//! - [`snapshot`]: render-ready copy of a session
//! - [`word_guess`]: word bank, word-guess scoring and round state
//! - [`leaderboard`]: game filter and top-10 ranking
//! - [`submission`]: once-per-round score reporting
//!
//! # Example
//!
//! ```
//! use game_scores_core::GameState;
//! use game_scores_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // One piece on an empty board clears nothing.
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Gravity is driven from outside: call
//! [`GameState::tick`](game_state::GameState::tick) with the elapsed time and
//! the piece steps down every `1000ms / level`.

pub mod board;
pub mod game_state;
pub mod leaderboard;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod submission;
pub mod word_guess;

pub use game_scores_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState, LockEvent};
pub use leaderboard::{top_scores, GameFilter};
pub use pieces::Shape;
pub use rng::{PieceQueue, SimpleRng};
pub use scoring::{drop_interval_ms, line_clear_score, next_level};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use submission::{ScoreSink, SubmissionGate, SubmitOutcome};
pub use word_guess::{compute_score, pick_word, GuessOutcome, RoundStatus, WordGuessSession};
