//! State of a single round: one secret word, a budget of wrong guesses.

use std::collections::BTreeSet;

/// Placeholder shown for letters not guessed yet.
pub const MASK: char = '*';

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// The letter occurs in the word.
    Hit,
    /// The letter does not occur; a life was lost.
    Miss,
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was rejected. A rejected guess changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// The letter is not among the letters still on offer (already tried,
    /// or not in a-z at all).
    #[error("letter {0:?} is not on offer")]
    NotOffered(char),

    /// The round is already won or lost.
    #[error("round is over")]
    RoundOver,
}

/// One round of the game.
///
/// Invariants, held after every call:
/// - `letters_left` and `letters_guessed` are disjoint;
/// - `letters_guessed` only holds letters of the word;
/// - `lives` never increases, `letters_left` never grows and
///   `letters_guessed` never shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    word: String,
    lives: u32,
    letters_left: BTreeSet<char>,
    letters_guessed: BTreeSet<char>,
}

impl Round {
    /// Starts a round for `word` with `attempts` lives.
    pub fn new(word: &str, attempts: u32) -> Self {
        Self {
            word: word.to_ascii_lowercase(),
            lives: attempts,
            letters_left: ('a'..='z').collect(),
            letters_guessed: BTreeSet::new(),
        }
    }

    /// The secret word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Wrong guesses still allowed.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Letters that may still be guessed, in alphabetical order.
    pub fn letters_left(&self) -> impl Iterator<Item = char> + '_ {
        self.letters_left.iter().copied()
    }

    /// Correctly guessed letters.
    pub fn letters_guessed(&self) -> &BTreeSet<char> {
        &self.letters_guessed
    }

    /// The word with every unguessed letter replaced by [`MASK`].
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.letters_guessed.contains(&c) {
                    c
                } else {
                    MASK
                }
            })
            .collect()
    }

    pub fn status(&self) -> RoundStatus {
        if self.word.chars().all(|c| self.letters_guessed.contains(&c)) {
            RoundStatus::Won
        } else if self.lives == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Offers `letter` (expected lowercase).
    ///
    /// The letter is taken off the board whether it hits or misses; a miss
    /// costs one life.
    pub fn guess(&mut self, letter: char) -> Result<Guess, GuessError> {
        if self.status() != RoundStatus::InProgress {
            return Err(GuessError::RoundOver);
        }
        if !self.letters_left.remove(&letter) {
            return Err(GuessError::NotOffered(letter));
        }

        if self.word.contains(letter) {
            self.letters_guessed.insert(letter);
            Ok(Guess::Hit)
        } else {
            self.lives = self.lives.saturating_sub(1);
            Ok(Guess::Miss)
        }
    }
}

/// Reads a player's reply as a single letter, ignoring case and
/// surrounding whitespace. Anything else yields `None`.
pub fn parse_letter(reply: &str) -> Option<char> {
    let mut chars = reply.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
