//! Error types for the protocol layer.
//!
//! Each crate in the workspace defines its own error enum. A
//! `ProtocolError` always means a frame could not be represented on the
//! wire or a received control frame was unreadable; it never means the
//! connection itself failed.

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A text payload cannot be sent as a single text frame.
    ///
    /// Text frames must not contain line breaks and must not start with
    /// the control sentinel, otherwise the peer would split or
    /// misinterpret them.
    #[error("invalid text frame: {0}")]
    InvalidText(String),

    /// A control command name cannot be encoded.
    #[error("invalid control command: {0:?}")]
    InvalidCommand(String),

    /// A received control frame carried a command name that is not UTF-8.
    #[error("malformed control frame")]
    MalformedCommand(#[source] std::str::Utf8Error),
}
