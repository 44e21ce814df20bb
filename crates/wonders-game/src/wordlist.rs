//! The word source: an immutable list of candidate secret words.

use std::path::Path;

use rand::Rng;

use crate::GameError;

/// Word list compiled into the binary, used when no file is given.
const BUILTIN_WORDLIST: &str = include_str!("../wordlists/default.txt");

/// A non-empty, ordered list of lowercase words made of the letters a-z.
///
/// Built once at startup and shared read-only (behind an `Arc`) by every
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Builds a word list from the given words, lower-casing them.
    ///
    /// # Errors
    /// [`GameError::EmptyWordlist`] if there are no words, and
    /// [`GameError::InvalidWord`] for an empty word or one containing
    /// anything other than ASCII letters.
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(|word| {
                let word = word.into().to_ascii_lowercase();
                if is_word(&word) {
                    Ok(word)
                } else {
                    Err(GameError::InvalidWord(word))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(GameError::EmptyWordlist);
        }
        Ok(Self { words })
    }

    /// Parses word-list text: one word per line, `#` starts a comment,
    /// and lines that are blank or not purely alphabetic are skipped.
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let words = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default().trim())
            .filter(|line| is_word(line));
        Self::new(words)
    }

    /// Reads and parses a word-list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            GameError::WordlistIo {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let wordlist = Self::parse(&text)?;
        tracing::info!(
            path = %path.display(),
            words = wordlist.len(),
            "loaded word list"
        );
        Ok(wordlist)
    }

    /// Returns the word list shipped with the game.
    pub fn builtin() -> Result<Self, GameError> {
        Self::parse(BUILTIN_WORDLIST)
    }

    /// Picks a word uniformly at random.
    pub fn random_word(&self) -> &str {
        let index = rand::rng().random_range(0..self.words.len());
        &self.words[index]
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: an empty list cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn is_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}
