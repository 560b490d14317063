//! Word-guess tests - scoring formula and round flow

use std::collections::BTreeSet;

use game_scores::core::word_guess::{compute_score, difficulty_factor, pick_word, Difficulty};
use game_scores::core::{GuessOutcome, RoundStatus, SimpleRng, WordGuessSession};

fn set(letters: &str) -> BTreeSet<char> {
    letters.chars().collect()
}

#[test]
fn test_perfect_short_word() {
    // (40 + 40 + 50) * 1
    assert_eq!(compute_score("CHAT", &set("CHAT"), 0), 130);
}

#[test]
fn test_medium_word_with_mistakes() {
    // MAISON: len 6, factor 2, 6 distinct letters all found, 2 mistakes
    // (60 + 60 - 10 + 50) * 2
    assert_eq!(compute_score("MAISON", &set("MAISONXZ"), 2), 320);
}

#[test]
fn test_long_word_factor_four() {
    let word = "ANTICONSTITUTIONNELLEMENT";
    assert_eq!(difficulty_factor(word.len()), 4);
    let all = set(word);
    // 25 letters, 11 distinct: (250 + 110 + 50) * 4
    assert_eq!(all.len(), 11);
    assert_eq!(compute_score(word, &all, 0), 1640);
}

#[test]
fn test_score_ignores_guess_order_and_extra_letters() {
    let a = compute_score("PLUIE", &set("EIULP"), 1);
    let b = compute_score("PLUIE", &set("PLUIEQWXYZ"), 1);
    assert_eq!(a, b);
}

#[test]
fn test_score_never_negative() {
    assert_eq!(compute_score("VENT", &set("QWXYZK"), 6), 10);
    assert_eq!(compute_score("VENT", &set(""), 50), 0);
}

#[test]
fn test_every_band_is_reachable() {
    let mut rng = SimpleRng::new(11);
    let mut seen = [false; 3];
    for _ in 0..300 {
        let word = pick_word(&mut rng);
        for (i, band) in Difficulty::ALL.iter().enumerate() {
            if band.words().contains(&word) {
                seen[i] = true;
            }
        }
    }
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn test_random_round_is_reproducible() {
    let a = WordGuessSession::random(&mut SimpleRng::new(9));
    let b = WordGuessSession::random(&mut SimpleRng::new(9));
    assert_eq!(a.word(), b.word());
}

#[test]
fn test_round_won_with_repeated_letters() {
    let mut round = WordGuessSession::new("POMME");
    assert_eq!(round.masked_word(), "_____");
    assert_eq!(round.guess('m'), GuessOutcome::Hit);
    assert_eq!(round.masked_word(), "__MM_");
    assert_eq!(round.guess('P'), GuessOutcome::Hit);
    assert_eq!(round.guess('O'), GuessOutcome::Hit);
    assert_eq!(round.guess('E'), GuessOutcome::Won);

    assert_eq!(round.status(), RoundStatus::Won);
    // (50 + 40 + 50) * 1
    assert_eq!(round.score(), 140);
}

#[test]
fn test_round_lost_scores_partial_credit() {
    let mut round = WordGuessSession::new("TENNIS");
    for letter in "ABCDFG".chars() {
        round.guess(letter);
    }
    assert_eq!(round.status(), RoundStatus::Lost);
    assert_eq!(round.mistakes(), 6);
    // (60 + 0 - 30 + 0) * 2
    assert_eq!(round.score(), 60);
    assert_eq!(round.guess('T'), GuessOutcome::Finished);
}

#[test]
fn test_more_mistakes_never_score_more() {
    for band in Difficulty::ALL {
        for word in band.words() {
            let all = set(word);
            let mut prev = compute_score(word, &all, 0);
            for mistakes in 1..=6 {
                let cur = compute_score(word, &all, mistakes);
                assert!(cur <= prev, "{word} at {mistakes} mistakes");
                prev = cur;
            }
        }
    }
}
