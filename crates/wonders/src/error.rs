//! Unified error type for the session framework.

use wonders_protocol::ProtocolError;
use wonders_transport::TransportError;

/// Top-level error that wraps the lower layers' errors.
///
/// Handlers and the client deal with this single type; `#[from]` lets `?`
/// convert transport and protocol errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WondersError {
    /// A transport-level error (connect, send, recv, end of stream).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (unencodable or malformed frame).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Local terminal I/O failed (client side only).
    #[error("local i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl WondersError {
    /// Returns `true` if the error means the remote peer is gone.
    pub fn is_disconnect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_disconnect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let err: WondersError = TransportError::EndOfStream.into();
        assert!(matches!(err, WondersError::Transport(_)));
        assert!(err.is_disconnect());
        assert_eq!(err.to_string(), "end of stream");
    }

    #[test]
    fn test_from_protocol_error() {
        let err: WondersError =
            ProtocolError::InvalidText("bad".into()).into();
        assert!(matches!(err, WondersError::Protocol(_)));
        assert!(!err.is_disconnect());
    }

    #[test]
    fn test_bind_failure_is_not_a_disconnect() {
        let err: WondersError = TransportError::BindFailed(
            std::io::ErrorKind::AddrInUse.into(),
        )
        .into();
        assert!(!err.is_disconnect());
    }

    #[test]
    fn test_local_io_error() {
        let err: WondersError =
            std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, WondersError::Io(_)));
        assert!(!err.is_disconnect());
    }
}
