//! Frame types and their line encoding.

use std::fmt;

use crate::ProtocolError;

/// First byte of every control frame.
pub const CONTROL_SENTINEL: u8 = 0;

/// Removes a trailing `\n` and an optional `\r` before it.
pub fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

// ---------------------------------------------------------------------------
// ControlCommand
// ---------------------------------------------------------------------------

/// An out-of-band instruction carried by a control frame.
///
/// The set of commands is closed and versionless. A name neither side
/// knows still decodes, as [`ControlCommand::Other`], so receivers can log
/// and skip it instead of dropping the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    /// "Answer with exactly one line of local user input."
    Input,

    /// Any command name this build does not understand.
    Other(String),
}

impl ControlCommand {
    /// Returns the wire name of the command.
    pub fn name(&self) -> &str {
        match self {
            Self::Input => "input",
            Self::Other(name) => name,
        }
    }

    fn from_name(name: &str) -> Self {
        match name {
            "input" => Self::Input,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ControlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// One protocol message: a single line on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Display text, shown verbatim by the peer.
    Text(String),

    /// A control command.
    Control(ControlCommand),
}

impl Frame {
    /// Shorthand for a text frame.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Shorthand for the `input` control frame.
    pub fn input() -> Self {
        Self::Control(ControlCommand::Input)
    }

    /// Encodes the frame as one `\n`-terminated line.
    ///
    /// # Errors
    /// Returns [`ProtocolError::InvalidText`] for text containing a line
    /// break or starting with the sentinel, and
    /// [`ProtocolError::InvalidCommand`] for an empty or multi-line
    /// command name.
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        match self {
            Self::Text(text) => {
                if text.contains(['\n', '\r']) {
                    return Err(ProtocolError::InvalidText(
                        "text contains a line break".into(),
                    ));
                }
                if text.as_bytes().first() == Some(&CONTROL_SENTINEL) {
                    return Err(ProtocolError::InvalidText(
                        "text starts with the control sentinel".into(),
                    ));
                }

                let mut line = Vec::with_capacity(text.len() + 1);
                line.extend_from_slice(text.as_bytes());
                line.push(b'\n');
                Ok(line)
            }
            Self::Control(command) => {
                let name = command.name();
                if name.is_empty() || name.contains(['\n', '\r']) {
                    return Err(ProtocolError::InvalidCommand(name.to_string()));
                }

                let mut line = Vec::with_capacity(name.len() + 2);
                line.push(CONTROL_SENTINEL);
                line.extend_from_slice(name.as_bytes());
                line.push(b'\n');
                Ok(line)
            }
        }
    }

    /// Decodes one received line, with or without its line ending.
    ///
    /// Anything not starting with the sentinel is text: invalid UTF-8 in a
    /// text frame is replaced rather than rejected, so a text line can
    /// never be mistaken for a command.
    ///
    /// # Errors
    /// Returns [`ProtocolError::MalformedCommand`] when a control frame's
    /// name is not valid UTF-8.
    pub fn decode(line: &[u8]) -> Result<Self, ProtocolError> {
        let line = strip_line_ending(line);

        match line.split_first() {
            Some((&CONTROL_SENTINEL, name)) => {
                let name = std::str::from_utf8(name)
                    .map_err(ProtocolError::MalformedCommand)?;
                Ok(Self::Control(ControlCommand::from_name(name)))
            }
            _ => Ok(Self::Text(String::from_utf8_lossy(line).into_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending(b"abc\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc"), b"abc");
        assert_eq!(strip_line_ending(b"\n"), b"");
        // Only one line ending is stripped.
        assert_eq!(strip_line_ending(b"abc\n\n"), b"abc\n");
    }

    #[test]
    fn test_encode_text_appends_newline() {
        let line = Frame::text("The word is: *a*").encode().unwrap();
        assert_eq!(line, b"The word is: *a*\n");
    }

    #[test]
    fn test_encode_input_command() {
        assert_eq!(Frame::input().encode().unwrap(), b"\0input\n");
    }

    #[test]
    fn test_text_round_trip() {
        for text in ["", "hello", "Привет, мир", "  spaced  ", "a\tb", "/"] {
            let line = Frame::text(text).encode().unwrap();
            assert_eq!(Frame::decode(&line).unwrap(), Frame::text(text));
        }
    }

    #[test]
    fn test_encode_rejects_embedded_newlines() {
        assert!(matches!(
            Frame::text("two\nlines").encode(),
            Err(ProtocolError::InvalidText(_))
        ));
        assert!(matches!(
            Frame::text("carriage\rreturn").encode(),
            Err(ProtocolError::InvalidText(_))
        ));
    }

    #[test]
    fn test_encode_rejects_text_that_looks_like_control() {
        assert!(matches!(
            Frame::text("\0input").encode(),
            Err(ProtocolError::InvalidText(_))
        ));
    }

    #[test]
    fn test_encode_rejects_bad_command_names() {
        let empty = Frame::Control(ControlCommand::Other(String::new()));
        assert!(matches!(
            empty.encode(),
            Err(ProtocolError::InvalidCommand(_))
        ));

        let multi = Frame::Control(ControlCommand::Other("a\nb".into()));
        assert!(matches!(
            multi.encode(),
            Err(ProtocolError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_decode_control_frames() {
        assert_eq!(Frame::decode(b"\0input\n").unwrap(), Frame::input());
        assert_eq!(Frame::decode(b"\0input\r\n").unwrap(), Frame::input());
        assert_eq!(
            Frame::decode(b"\0beep\n").unwrap(),
            Frame::Control(ControlCommand::Other("beep".into()))
        );
    }

    #[test]
    fn test_decode_bare_sentinel_is_empty_command() {
        assert_eq!(
            Frame::decode(b"\0\n").unwrap(),
            Frame::Control(ControlCommand::Other(String::new()))
        );
    }

    #[test]
    fn test_decode_malformed_command() {
        assert!(matches!(
            Frame::decode(b"\0\xff\xfe\n"),
            Err(ProtocolError::MalformedCommand(_))
        ));
    }

    #[test]
    fn test_non_sentinel_lines_are_always_text() {
        // Exhaust every possible first byte except the sentinel, with both
        // valid and invalid UTF-8 tails.
        for first in 1..=u8::MAX {
            for tail in [&b"input"[..], &b"\xff\x00"[..], &b""[..]] {
                let mut line = vec![first];
                line.extend_from_slice(tail);
                line.push(b'\n');
                assert!(
                    matches!(Frame::decode(&line), Ok(Frame::Text(_))),
                    "first byte {first:#04x} decoded as non-text"
                );
            }
        }
    }

    #[test]
    fn test_decode_empty_line_is_empty_text() {
        assert_eq!(Frame::decode(b"\n").unwrap(), Frame::text(""));
        assert_eq!(Frame::decode(b"").unwrap(), Frame::text(""));
    }

    #[test]
    fn test_command_display_uses_wire_name() {
        assert_eq!(ControlCommand::Input.to_string(), "input");
        assert_eq!(ControlCommand::Other("x".into()).to_string(), "x");
    }
}
