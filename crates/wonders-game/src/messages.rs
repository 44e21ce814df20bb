//! Everything the server says to a player, keyed by [`Message`].

use std::fmt;

/// Reply that ends the session at any prompt.
pub const EXIT_SENTINEL: &str = "/";

/// Equivalent ways of asking for another round; one is picked at random.
pub const REPLAY_PROMPTS: [&str; 3] = [
    "Wanna try again?",
    "How about another try?",
    "Let's go again!",
];

/// Formats `count` followed by the matching word form: `1 life`,
/// `0 lives`, `2 lives`.
///
/// Singular only for exactly one, so `21 lives` rather than the
/// last-digit rule some languages use.
pub fn plural(count: u32, singular: &str, plural: &str) -> String {
    let word = if count == 1 { singular } else { plural };
    format!("{count} {word}")
}

fn lives(count: u32) -> String {
    plural(count, "life", "lives")
}

/// A message key together with the values its template needs.
///
/// `Display` renders the template. Multi-line messages are split into one
/// text frame per line when sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    Greeting { attempts: u32 },
    MaskedWord { masked: &'a str },
    LettersLeft { letters: &'a str },
    LetterPrompt,
    InvalidLetter,
    Hit { letter: char, lives: u32 },
    Miss { letter: char, lives: u32 },
    Won { word: &'a str, lives: u32 },
    Lost { word: &'a str },
    Replay { prompt: &'a str },
    YesNo,
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Greeting { attempts } => write!(
                f,
                "Hello, and welcome to the Field of Wonders!\n\
                 The rules of this game are simple: you get a word,\n\
                 you try to guess it letter by letter.\n\
                 You have {} for mistakes, then you're out!",
                plural(attempts, "chance", "chances"),
            ),
            Self::MaskedWord { masked } => write!(f, "The word is: {masked}"),
            Self::LettersLeft { letters } => {
                write!(f, "The remaining letters are: {letters}")
            }
            Self::LetterPrompt => write!(
                f,
                "Type your letter (or '{EXIT_SENTINEL}' to exit):"
            ),
            Self::InvalidLetter => write!(
                f,
                "You must choose one of the presented letters.\n\
                 To quit, type '{EXIT_SENTINEL}' (without the quotes)."
            ),
            Self::Hit { letter, lives: left } => write!(
                f,
                "Correct! The letter '{letter}' is in the word. \
                 You have {} left.",
                lives(left),
            ),
            Self::Miss { letter, lives: left } => write!(
                f,
                "Wrong! There is no '{letter}' in the word. \
                 You have {} left.",
                lives(left),
            ),
            Self::Won { word, lives: left } => write!(
                f,
                "Congratulations! The word was \"{word}\". \
                 You've won with {} left!\n{}",
                lives(left),
                if left == 1 {
                    "This was a close one!"
                } else {
                    "You're a pro!"
                },
            ),
            Self::Lost { word } => write!(
                f,
                "Sorry, you lost... The word was \"{word}\".\n\
                 Good luck next time!"
            ),
            Self::Replay { prompt } => f.write_str(prompt),
            Self::YesNo => write!(f, "Type [Y]es or [n]o:"),
        }
    }
}
