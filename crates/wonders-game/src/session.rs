//! The game session: a state machine driving rounds over one connection.
//!
//! ```text
//! Greeting → RoundInProgress → RoundResolved → PromptReplay ─┬→ RoundInProgress
//!                  │                                         └→ Terminated
//!                  └──("/")──→ Terminated
//! ```
//!
//! `Terminated` is also reached by any stream error, but that path leaves
//! through the `Err` side of [`SessionHandler::handle`] and never becomes a
//! state.

use std::sync::Arc;

use rand::Rng;
use wonders::io::{request_input, send_text};
use wonders::{LineStream, SessionEnd, SessionHandler, WondersError};

use crate::messages::{Message, EXIT_SENTINEL, REPLAY_PROMPTS};
use crate::round::{parse_letter, Guess, Round, RoundStatus};
use crate::{GameConfig, Wordlist};

/// Replies to the replay prompt that end the session.
const NO_ANSWERS: [&str; 2] = ["n", "no"];

/// The lifecycle state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Explain the rules.
    Greeting,
    /// Pick a word and play until it is won or lost.
    RoundInProgress,
    /// Announce the result of the finished round.
    RoundResolved(Round),
    /// Ask whether to play again.
    PromptReplay,
    /// The player chose to leave.
    Terminated(SessionEnd),
}

/// Serves the word-guessing game on one connection.
pub struct GameSession {
    wordlist: Arc<Wordlist>,
    config: GameConfig,
    rounds_played: u32,
}

impl GameSession {
    /// Creates a session drawing words from `wordlist`.
    pub fn new(wordlist: Arc<Wordlist>, config: GameConfig) -> Self {
        Self {
            wordlist,
            config,
            rounds_played: 0,
        }
    }

    /// Number of rounds started so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Performs one transition.
    pub async fn step(
        &mut self,
        stream: &LineStream,
        state: SessionState,
    ) -> Result<SessionState, WondersError> {
        match state {
            SessionState::Greeting => {
                say(
                    stream,
                    Message::Greeting {
                        attempts: self.config.attempts,
                    },
                )
                .await?;
                Ok(SessionState::RoundInProgress)
            }
            SessionState::RoundInProgress => self.play_round(stream).await,
            SessionState::RoundResolved(round) => {
                let message = match round.status() {
                    RoundStatus::Won => Message::Won {
                        word: round.word(),
                        lives: round.lives(),
                    },
                    _ => Message::Lost { word: round.word() },
                };
                say(stream, message).await?;
                Ok(SessionState::PromptReplay)
            }
            SessionState::PromptReplay => self.prompt_replay(stream).await,
            SessionState::Terminated(end) => Ok(SessionState::Terminated(end)),
        }
    }

    async fn play_round(
        &mut self,
        stream: &LineStream,
    ) -> Result<SessionState, WondersError> {
        let mut round = Round::new(self.wordlist.random_word(), self.config.attempts);
        self.rounds_played += 1;
        tracing::debug!(
            round = self.rounds_played,
            length = round.word().len(),
            "round started"
        );

        while round.status() == RoundStatus::InProgress {
            let masked = round.masked_word();
            say(stream, Message::MaskedWord { masked: &masked }).await?;
            let letters = letters_line(&round);
            say(stream, Message::LettersLeft { letters: &letters }).await?;

            let reply = ask(stream, Message::LetterPrompt).await?;
            if reply == EXIT_SENTINEL {
                return Ok(SessionState::Terminated(SessionEnd::UserExit));
            }

            let outcome = match parse_letter(&reply) {
                Some(letter) => round.guess(letter).map(|guess| (letter, guess)),
                None => {
                    tracing::debug!(%reply, "reply is not a single letter");
                    say(stream, Message::InvalidLetter).await?;
                    continue;
                }
            };

            match outcome {
                Ok((letter, Guess::Hit)) => {
                    tracing::debug!(%letter, "hit");
                    say(
                        stream,
                        Message::Hit {
                            letter,
                            lives: round.lives(),
                        },
                    )
                    .await?;
                }
                Ok((letter, Guess::Miss)) => {
                    tracing::debug!(%letter, lives = round.lives(), "miss");
                    say(
                        stream,
                        Message::Miss {
                            letter,
                            lives: round.lives(),
                        },
                    )
                    .await?;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "guess rejected");
                    say(stream, Message::InvalidLetter).await?;
                }
            }
        }

        tracing::debug!(
            round = self.rounds_played,
            status = ?round.status(),
            "round finished"
        );
        Ok(SessionState::RoundResolved(round))
    }

    async fn prompt_replay(
        &mut self,
        stream: &LineStream,
    ) -> Result<SessionState, WondersError> {
        let prompt = pick_replay_prompt();
        say(stream, Message::Replay { prompt }).await?;

        let reply = ask(stream, Message::YesNo).await?;
        if reply == EXIT_SENTINEL {
            return Ok(SessionState::Terminated(SessionEnd::UserExit));
        }
        if NO_ANSWERS.contains(&reply.as_str()) {
            return Ok(SessionState::Terminated(SessionEnd::Declined));
        }
        Ok(SessionState::RoundInProgress)
    }
}

impl SessionHandler for GameSession {
    async fn handle(
        &mut self,
        stream: &LineStream,
    ) -> Result<SessionEnd, WondersError> {
        let mut state = SessionState::Greeting;
        loop {
            state = match state {
                SessionState::Terminated(end) => return Ok(end),
                other => self.step(stream, other).await?,
            };
        }
    }
}

async fn say(stream: &LineStream, message: Message<'_>) -> Result<(), WondersError> {
    send_text(stream, &message.to_string()).await
}

/// Shows `prompt`, requests input and returns the reply trimmed and
/// lower-cased.
async fn ask(stream: &LineStream, prompt: Message<'_>) -> Result<String, WondersError> {
    say(stream, prompt).await?;
    let reply = request_input(stream).await?;
    Ok(reply.trim().to_lowercase())
}

fn letters_line(round: &Round) -> String {
    round
        .letters_left()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn pick_replay_prompt() -> &'static str {
    REPLAY_PROMPTS[rand::rng().random_range(0..REPLAY_PROMPTS.len())]
}
