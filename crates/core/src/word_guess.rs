//! Word-guess module - scoring, word bank and round state
//!
//! A round hides one uppercase word. The player guesses letters; a miss costs
//! a mistake and six mistakes lose the round. The score is computed once, when
//! the round ends:
//!
//! ```text
//! factor  = 1 (len <= 5) | 2 (<= 8) | 3 (<= 12) | 4
//! score   = max(0, (len*10 + correct*10 - mistakes*5 + win_bonus) * factor)
//! ```
//!
//! where `correct` counts distinct letters of the word that were guessed and
//! `win_bonus` is 50 when every distinct letter was found.
//!
//! Each round is scored on its own; starting a new round resets the score.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::MAX_MISTAKES;

/// Difficulty band of the word bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Words of this band
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => EASY_WORDS,
            Difficulty::Medium => MEDIUM_WORDS,
            Difficulty::Hard => HARD_WORDS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

const EASY_WORDS: &[&str] = &[
    "CHAT", "CHIEN", "MAISON", "ARBRE", "FLEUR", "LIVRE", "TABLE", "PORTE", "ROUTE", "POMME",
    "BANANE", "ORANGE", "SOLEIL", "LUNE", "ETOILE", "NUAGE", "PLUIE", "NEIGE", "VENT", "FROID",
    "CHAUD", "JOUR", "NUIT", "MATIN", "SOIR", "ECOLE", "CRAYON", "CAHIER", "STYLO", "GOMME",
];

const MEDIUM_WORDS: &[&str] = &[
    "ORDINATEUR", "TELEPHONE", "TELEVISION", "INTERNET", "CLAVIER", "SOURIS", "MONTAGNE",
    "RIVIERE", "OCEAN", "FORET", "DESERT", "PLAGE", "VOYAGE", "VOITURE", "AVION", "TRAIN",
    "BATEAU", "VELO", "CUISINE", "CHAMBRE", "JARDIN", "PISCINE", "RESTAURANT", "CINEMA",
    "MUSIQUE", "DANSE", "SPORT", "FOOTBALL", "TENNIS", "NATATION",
];

const HARD_WORDS: &[&str] = &[
    "ANTICONSTITUTIONNELLEMENT", "PSYCHOPHYSIOLOGIQUE", "ELECTROCARDIOGRAMME",
    "INCOMPREHENSIBLE", "EXTRAORDINAIRE", "DEVELOPPEMENT", "ARCHITECTURE", "GOUVERNEMENT",
    "INTERNATIONAL", "ENVIRONNEMENT", "TECHNOLOGIE", "PHILOSOPHIE", "INTELLIGENCE",
    "EXPERIENCE", "CONNAISSANCE", "IMAGINATION", "COMMUNICATION", "AUTHENTIFICATION",
    "INFRASTRUCTURE", "VIRTUALISATION", "KUBERNETES", "MICROSERVICE", "ORCHESTRATION",
    "CONTENEURISATION", "PERSISTANCE", "REPLICATION", "SCALABILITE", "DISPONIBILITE",
    "DEPLOIEMENT", "CONFIGURATION",
];

/// Pick a random word: first a band, uniformly, then a word of that band,
/// uniformly. Bands are equally likely whatever their size.
pub fn pick_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let band = Difficulty::ALL[rng.gen_range(0..Difficulty::ALL.len())];
    band.words().choose(rng).copied().unwrap_or("CHAT")
}

/// Multiplier derived from the word length
pub fn difficulty_factor(word_len: usize) -> u32 {
    match word_len {
        0..=5 => 1,
        6..=8 => 2,
        9..=12 => 3,
        _ => 4,
    }
}

/// Distinct letters of a word
pub fn unique_letters(word: &str) -> BTreeSet<char> {
    word.chars().collect()
}

/// Score for a word given the guessed letters and the mistake count
pub fn compute_score(word: &str, guessed: &BTreeSet<char>, mistakes: u32) -> u32 {
    let len = word.chars().count();
    let unique = unique_letters(word);
    let correct = unique.iter().filter(|c| guessed.contains(c)).count();

    let base = len as i64 * 10;
    let bonus = correct as i64 * 10;
    let penalty = mistakes as i64 * 5;
    let win_bonus = if correct == unique.len() { 50 } else { 0 };

    let score = (base + bonus - penalty + win_bonus) * difficulty_factor(len) as i64;
    score.clamp(0, u32::MAX as i64) as u32
}

/// Round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; round continues
    Hit,
    /// Letter is not in the word; round continues
    Miss,
    /// Last missing letter found
    Won,
    /// Mistake limit reached
    Lost,
    /// Letter was guessed before; nothing changes
    AlreadyGuessed,
    /// Not an ASCII letter
    Invalid,
    /// Round already over
    Finished,
}

/// One word-guess round
#[derive(Debug, Clone)]
pub struct WordGuessSession {
    word: String,
    guessed: BTreeSet<char>,
    wrong: Vec<char>,
    mistakes: u32,
    status: RoundStatus,
    score: u32,
}

impl WordGuessSession {
    /// Start a round on a given word (normalized to uppercase)
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_ascii_uppercase(),
            guessed: BTreeSet::new(),
            wrong: Vec::new(),
            mistakes: 0,
            status: RoundStatus::Playing,
            score: 0,
        }
    }

    /// Start a round on a randomly picked word
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(pick_word(rng))
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Wrong letters in the order they were guessed
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn mistakes_left(&self) -> u32 {
        MAX_MISTAKES.saturating_sub(self.mistakes)
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::Playing
    }

    /// Round score; 0 until the round ends
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The word with unguessed letters replaced by `_`
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c } else { '_' })
            .collect()
    }

    fn is_solved(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    /// Guess one letter
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Finished;
        }
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::Invalid;
        }

        let letter = letter.to_ascii_uppercase();
        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        if self.word.contains(letter) {
            if self.is_solved() {
                self.finish(RoundStatus::Won);
                return GuessOutcome::Won;
            }
            return GuessOutcome::Hit;
        }

        self.wrong.push(letter);
        self.mistakes += 1;
        if self.mistakes >= MAX_MISTAKES {
            self.finish(RoundStatus::Lost);
            return GuessOutcome::Lost;
        }
        GuessOutcome::Miss
    }

    /// Give up. An abandoned round scores nothing.
    pub fn forfeit(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.status = RoundStatus::Lost;
        self.score = 0;
        true
    }

    fn finish(&mut self, status: RoundStatus) {
        self.status = status;
        self.score = compute_score(&self.word, &self.guessed, self.mistakes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    fn letters(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    #[test]
    fn test_difficulty_factor_bands() {
        assert_eq!(difficulty_factor(4), 1);
        assert_eq!(difficulty_factor(5), 1);
        assert_eq!(difficulty_factor(6), 2);
        assert_eq!(difficulty_factor(8), 2);
        assert_eq!(difficulty_factor(9), 3);
        assert_eq!(difficulty_factor(12), 3);
        assert_eq!(difficulty_factor(13), 4);
        assert_eq!(difficulty_factor(25), 4);
    }

    #[test]
    fn test_chat_scores_130() {
        assert_eq!(compute_score("CHAT", &letters("CHAT"), 0), 130);
    }

    #[test]
    fn test_partial_guess_has_no_win_bonus() {
        // base 40 + 2 correct * 10 - 3 * 5
        assert_eq!(compute_score("CHAT", &letters("CHXYZ"), 3), 45);
    }

    #[test]
    fn test_score_floors_at_zero() {
        assert_eq!(compute_score("CHAT", &BTreeSet::new(), 100), 0);
    }

    #[test]
    fn test_repeated_letters_count_once() {
        // POMME: 4 distinct letters, len 5
        assert_eq!(compute_score("POMME", &letters("POME"), 1), (50 + 40 - 5 + 50));
    }

    #[test]
    fn test_word_bank_is_uppercase_ascii() {
        for band in Difficulty::ALL {
            assert!(!band.words().is_empty());
            for word in band.words() {
                assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{word}");
            }
        }
    }

    #[test]
    fn test_pick_word_comes_from_bank() {
        let mut rng = SimpleRng::new(5);
        for _ in 0..100 {
            let word = pick_word(&mut rng);
            assert!(Difficulty::ALL.iter().any(|b| b.words().contains(&word)));
        }
    }

    #[test]
    fn test_win_flow() {
        let mut round = WordGuessSession::new("chat");
        assert_eq!(round.word(), "CHAT");
        assert_eq!(round.guess('c'), GuessOutcome::Hit);
        assert_eq!(round.guess('x'), GuessOutcome::Miss);
        assert_eq!(round.guess('H'), GuessOutcome::Hit);
        assert_eq!(round.masked_word(), "CH__");
        assert_eq!(round.score(), 0);
        assert_eq!(round.guess('A'), GuessOutcome::Hit);
        assert_eq!(round.guess('T'), GuessOutcome::Won);

        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.score(), 125);
        assert_eq!(round.guess('Z'), GuessOutcome::Finished);
    }

    #[test]
    fn test_six_misses_lose() {
        let mut round = WordGuessSession::new("CHAT");
        assert_eq!(round.guess('C'), GuessOutcome::Hit);
        for letter in ['B', 'D', 'E', 'F', 'G'] {
            assert_eq!(round.guess(letter), GuessOutcome::Miss);
        }
        assert_eq!(round.mistakes_left(), 1);
        assert_eq!(round.guess('I'), GuessOutcome::Lost);
        assert_eq!(round.wrong_letters(), ['B', 'D', 'E', 'F', 'G', 'I']);
        // 40 + 10 - 30
        assert_eq!(round.score(), 20);
    }

    #[test]
    fn test_duplicate_and_invalid_guesses_are_free() {
        let mut round = WordGuessSession::new("CHAT");
        assert_eq!(round.guess('Q'), GuessOutcome::Miss);
        assert_eq!(round.guess('q'), GuessOutcome::AlreadyGuessed);
        assert_eq!(round.guess('3'), GuessOutcome::Invalid);
        assert_eq!(round.mistakes(), 1);
    }

    #[test]
    fn test_forfeit_scores_nothing() {
        let mut round = WordGuessSession::new("CHAT");
        round.guess('C');
        assert!(round.forfeit());
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.score(), 0);
        assert!(!round.forfeit());
    }
}
