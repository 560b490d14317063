use thiserror::Error;

/// Why a score submission was rejected. Every variant maps to `400`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("playerName is required")]
    MissingPlayerName,
    #[error("score is required")]
    MissingScore,
    #[error("score must be a non-negative integer, got {0}")]
    InvalidScore(String),
    #[error("unknown game {0:?}, expected one of: tetris, hangman")]
    UnknownGame(String),
}
