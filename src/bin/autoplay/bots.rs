//! Simple bots that play rounds to completion.
//!
//! The puzzle bot tries every rotation and column for the current piece on a
//! clone of the session, hard-drops it, and keeps the placement whose board
//! scores best on a weighted sum of height, holes, bumpiness and lines. The
//! word bot guesses letters in frequency order.

use game_scores::core::{GameState, GuessOutcome, WordGuessSession};
use game_scores::types::{GameAction, BOARD_WIDTH};

/// Letters by frequency in the word bank's language
pub const LETTER_ORDER: &str = "EASITNRULODCMPVQFBGHJXYZKW";

const HEIGHT_WEIGHT: f32 = -0.51;
const LINES_WEIGHT: f32 = 0.76;
const HOLES_WEIGHT: f32 = -0.36;
const BUMPINESS_WEIGHT: f32 = -0.18;

/// Target orientation and column for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rotations: u8,
    pub x: i8,
}

/// Rotate, shift and hard-drop the active piece. Returns false if the
/// placement is unreachable; the state may then be partly moved.
pub fn apply_placement(state: &mut GameState, placement: Placement) -> bool {
    for _ in 0..placement.rotations {
        if !state.apply_action(GameAction::Rotate) {
            return false;
        }
    }

    loop {
        let Some(active) = state.active() else {
            return false;
        };
        let action = match active.x.cmp(&placement.x) {
            std::cmp::Ordering::Less => GameAction::MoveRight,
            std::cmp::Ordering::Greater => GameAction::MoveLeft,
            std::cmp::Ordering::Equal => break,
        };
        if !state.apply_action(action) {
            return false;
        }
    }

    state.apply_action(GameAction::HardDrop)
}

fn evaluate(state: &mut GameState) -> f32 {
    if state.game_over() {
        return f32::MIN;
    }
    let lines = state
        .take_last_event()
        .map(|e| e.lines_cleared)
        .unwrap_or(0);

    let board = state.board();
    let heights: Vec<i32> = (0..BOARD_WIDTH as i8)
        .map(|x| board.column_height(x) as i32)
        .collect();

    let aggregate: i32 = heights.iter().sum();
    let bumpiness: i32 = heights.windows(2).map(|w| (w[0] - w[1]).abs()).sum();
    let holes: i32 = (0..BOARD_WIDTH as i8)
        .map(|x| {
            let top = board.height() as i32 - heights[x as usize];
            (top..board.height() as i32)
                .filter(|&y| board.is_open(x, y as i8))
                .count() as i32
        })
        .sum();

    HEIGHT_WEIGHT * aggregate as f32
        + LINES_WEIGHT * lines as f32
        + HOLES_WEIGHT * holes as f32
        + BUMPINESS_WEIGHT * bumpiness as f32
}

/// Best reachable placement for the active piece, if any
pub fn best_placement(state: &GameState) -> Option<Placement> {
    let mut best: Option<(f32, Placement)> = None;

    for rotations in 0..4u8 {
        for x in -3..BOARD_WIDTH as i8 {
            let placement = Placement { rotations, x };
            let mut sim = state.clone();
            if !apply_placement(&mut sim, placement) {
                continue;
            }
            let value = evaluate(&mut sim);
            if best.map_or(true, |(v, _)| value > v) {
                best = Some((value, placement));
            }
        }
    }

    best.map(|(_, placement)| placement)
}

/// Play one puzzle game with `seed` until it ends or `max_pieces` have been
/// placed; returns the final score.
pub fn play_puzzle(seed: u32, max_pieces: u32) -> u32 {
    let mut state = GameState::new(seed);
    state.start();

    for _ in 0..max_pieces {
        if !state.playing() {
            break;
        }
        let placed = match best_placement(&state) {
            Some(placement) => apply_placement(&mut state, placement),
            None => false,
        };
        if !placed {
            state.apply_action(GameAction::HardDrop);
        }
    }

    if state.playing() {
        state.apply_action(GameAction::Forfeit);
    }
    state.score()
}

/// Guess letters in frequency order until the round ends
pub fn play_word(session: &mut WordGuessSession) -> u32 {
    for letter in LETTER_ORDER.chars() {
        match session.guess(letter) {
            GuessOutcome::Won | GuessOutcome::Lost | GuessOutcome::Finished => break,
            _ => {}
        }
    }
    session.score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_scores::core::RoundStatus;

    #[test]
    fn test_placement_reaches_target_column() {
        let mut state = GameState::new(1);
        state.start();
        let before = state.piece_id();

        assert!(apply_placement(&mut state, Placement { rotations: 0, x: 0 }));
        assert_eq!(state.piece_id(), before + 1);
        assert_eq!(state.board().filled_count(), 4);
    }

    #[test]
    fn test_puzzle_bot_finishes_and_clears_lines() {
        let score = play_puzzle(7, 200);
        assert!(score > 0);
    }

    #[test]
    fn test_puzzle_bot_is_deterministic() {
        assert_eq!(play_puzzle(3, 60), play_puzzle(3, 60));
    }

    #[test]
    fn test_word_bot_ends_round() {
        let mut session = WordGuessSession::new("CHAT");
        let score = play_word(&mut session);
        assert_ne!(session.status(), RoundStatus::Playing);
        assert_eq!(score, session.score());
    }
}
