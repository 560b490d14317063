//! Leaderboard module - top-N ranking of persisted scores
//!
//! Ranking is a pure function over a slice of records so it can be tested
//! without a store and reused by any backend.

use std::cmp::Ordering;

use crate::types::{GameId, ScoreRecord, LEADERBOARD_LIMIT};

/// Which games a leaderboard covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameFilter {
    #[default]
    All,
    Game(GameId),
    /// Names no known game; matches no record
    Unknown,
}

impl GameFilter {
    /// Parse the `game` query parameter.
    ///
    /// Absent, empty or `all` ranks every game. Any other value keeps only
    /// records of that exact game, so an unknown name yields an empty board.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("all") => GameFilter::All,
            Some(other) => GameId::from_str(other).map_or(GameFilter::Unknown, GameFilter::Game),
        }
    }

    pub fn matches(&self, game: GameId) -> bool {
        match self {
            GameFilter::All => true,
            GameFilter::Game(wanted) => *wanted == game,
            GameFilter::Unknown => false,
        }
    }

    /// The single game kept, if the filter names one
    pub fn game(&self) -> Option<GameId> {
        match self {
            GameFilter::Game(game) => Some(*game),
            GameFilter::All | GameFilter::Unknown => None,
        }
    }
}

/// Leaderboard order: higher score first, then the earlier record, then the
/// lower id.
pub fn rank_order(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Best `LEADERBOARD_LIMIT` records matching `filter`
pub fn top_scores(records: &[ScoreRecord], filter: GameFilter) -> Vec<ScoreRecord> {
    let mut ranked: Vec<&ScoreRecord> = records.iter().filter(|r| filter.matches(r.game)).collect();
    ranked.sort_by(|a, b| rank_order(a, b));
    ranked.into_iter().take(LEADERBOARD_LIMIT).cloned().collect()
}
