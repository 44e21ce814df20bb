//! Error types for the game layer.

use std::path::PathBuf;

use wonders::WondersError;

/// Errors that can occur while setting up or running the game server.
///
/// Nothing in here is raised mid-session: a session only ever fails with a
/// [`WondersError`] from its stream.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The word list has no usable words.
    #[error("word list is empty")]
    EmptyWordlist,

    /// A word contains something other than ASCII letters.
    #[error("invalid word {0:?}: words must consist of the letters a-z")]
    InvalidWord(String),

    /// The word list file could not be read.
    #[error("failed to read word list {}: {source}", path.display())]
    WordlistIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The game configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Binding or running the listener failed.
    #[error(transparent)]
    Server(#[from] WondersError),
}
