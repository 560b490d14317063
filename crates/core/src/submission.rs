//! Submission module - at-most-once score reporting per round
//!
//! When a round ends the driver hands the final score to a [`SubmissionGate`].
//! The gate forwards it to a [`ScoreSink`] once; whatever the result, it stays
//! closed until the next round calls [`SubmissionGate::rearm`]. Failures are
//! handed back so the caller can log them, and are never retried.

use crate::types::{GameId, NewScore, ScoreRecord};

/// Destination for finished-round scores (HTTP client, store, test double)
pub trait ScoreSink {
    fn submit(&mut self, score: NewScore) -> anyhow::Result<ScoreRecord>;
}

impl<S: ScoreSink + ?Sized> ScoreSink for &mut S {
    fn submit(&mut self, score: NewScore) -> anyhow::Result<ScoreRecord> {
        (**self).submit(score)
    }
}

impl<S: ScoreSink + ?Sized> ScoreSink for Box<S> {
    fn submit(&mut self, score: NewScore) -> anyhow::Result<ScoreRecord> {
        (**self).submit(score)
    }
}

/// What `submit_once` did
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The sink accepted the score
    Recorded(ScoreRecord),
    /// The sink was called and failed; the gate is spent anyway
    Failed(anyhow::Error),
    /// A submission already happened this round
    AlreadySubmitted,
    /// Zero scores are never sent
    SkippedZero,
}

impl SubmitOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, SubmitOutcome::Recorded(_))
    }
}

/// Per-round submission guard
#[derive(Debug, Clone)]
pub struct SubmissionGate {
    player_name: String,
    game: GameId,
    armed: bool,
}

impl SubmissionGate {
    pub fn new(player_name: impl Into<String>, game: GameId) -> Self {
        Self {
            player_name: player_name.into(),
            game,
            armed: true,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn game(&self) -> GameId {
        self.game
    }

    /// Whether a submission may still happen this round
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// New round: allow one more submission
    pub fn rearm(&mut self) {
        self.armed = true;
    }

    /// Send `score` to `sink` unless this round already submitted.
    ///
    /// A zero score leaves the gate armed, so a later non-zero result in the
    /// same round can still be recorded.
    pub fn submit_once<S: ScoreSink + ?Sized>(&mut self, sink: &mut S, score: u32) -> SubmitOutcome {
        if !self.armed {
            return SubmitOutcome::AlreadySubmitted;
        }
        if score == 0 {
            return SubmitOutcome::SkippedZero;
        }

        self.armed = false;
        let new_score = NewScore {
            player_name: self.player_name.clone(),
            score,
            game: self.game,
        };
        match sink.submit(new_score) {
            Ok(record) => SubmitOutcome::Recorded(record),
            Err(err) => SubmitOutcome::Failed(err),
        }
    }
}
