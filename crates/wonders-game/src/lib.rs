//! The Field of Wonders word-guessing game.
//!
//! Each connection plays its own [`GameSession`]: the player is shown a
//! masked word and the letters still on offer, and guesses one letter at a
//! time until the word is revealed or the attempt budget runs out.
//!
//! # Key types
//!
//! - [`GameSession`]: the per-connection state machine ([`SessionState`])
//! - [`Round`]: one secret word and the guesses made against it
//! - [`Wordlist`]: the shared, read-only word source
//! - [`GameConfig`]: the attempt budget
//! - [`Message`]: every text the server sends

mod config;
mod error;
mod messages;
mod round;
mod server;
mod session;
mod wordlist;

pub use config::{GameConfig, DEFAULT_ATTEMPTS};
pub use error::GameError;
pub use messages::{plural, Message, EXIT_SENTINEL, REPLAY_PROMPTS};
pub use round::{parse_letter, Guess, GuessError, Round, RoundStatus, MASK};
pub use server::{bind_server, run_server, GameSessionFactory};
pub use session::{GameSession, SessionState};
pub use wordlist::Wordlist;
