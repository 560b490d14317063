//! Reporter module - end-of-round score reporting with logging
//!
//! Wraps a [`SubmissionGate`] and a [`ScoreSink`]. Drivers call
//! [`ScoreReporter::round_finished`] when a round reaches a terminal state and
//! [`ScoreReporter::new_round`] when the next one starts. A failed submission
//! is logged and dropped; the game keeps going.

use crate::core::submission::{ScoreSink, SubmissionGate, SubmitOutcome};
use crate::types::{GameId, ScoreRecord};

pub struct ScoreReporter<S: ScoreSink> {
    sink: S,
    gate: SubmissionGate,
}

impl<S: ScoreSink> ScoreReporter<S> {
    pub fn new(sink: S, player_name: impl Into<String>, game: GameId) -> Self {
        Self {
            sink,
            gate: SubmissionGate::new(player_name, game),
        }
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn new_round(&mut self) {
        self.gate.rearm();
    }

    /// Submit the final score of the current round, at most once.
    ///
    /// Returns the stored record when this call recorded one.
    pub fn round_finished(&mut self, score: u32) -> Option<ScoreRecord> {
        let game = self.gate.game();
        match self.gate.submit_once(&mut self.sink, score) {
            SubmitOutcome::Recorded(record) => {
                tracing::info!(id = record.id, %game, score, "round score submitted");
                Some(record)
            }
            SubmitOutcome::Failed(e) => {
                tracing::warn!(%game, score, "score submission failed: {e:#}");
                None
            }
            SubmitOutcome::AlreadySubmitted => {
                tracing::debug!(%game, "score already submitted this round");
                None
            }
            SubmitOutcome::SkippedZero => {
                tracing::debug!(%game, "zero score not submitted");
                None
            }
        }
    }
}
