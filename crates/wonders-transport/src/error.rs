/// Errors that can occur in the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connecting to a remote peer failed (refused, unreachable, ...).
    #[error("connect failed: {0}")]
    ConnectFailed(#[source] std::io::Error),

    /// Binding the listening socket failed.
    #[error("bind failed: {0}")]
    BindFailed(#[source] std::io::Error),

    /// Accepting an incoming connection failed.
    #[error("accept failed: {0}")]
    AcceptFailed(#[source] std::io::Error),

    /// Sending data failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving data failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// The peer closed the connection before a full line arrived.
    #[error("end of stream")]
    EndOfStream,

    /// The peer sent a line longer than the limit (in bytes) without a
    /// terminator.
    #[error("line exceeds {0} bytes")]
    LineTooLong(usize),

    /// The stream was already closed locally.
    #[error("stream closed")]
    Closed,
}

impl TransportError {
    /// Returns `true` if this error means the connection is gone.
    ///
    /// Bind, accept and connect failures happen before a stream exists,
    /// so they are not disconnects.
    pub fn is_disconnect(&self) -> bool {
        matches!(
            self,
            Self::SendFailed(_)
                | Self::ReceiveFailed(_)
                | Self::EndOfStream
                | Self::LineTooLong(_)
                | Self::Closed
        )
    }

    /// Returns `true` if a connect attempt was actively refused by the peer.
    pub fn is_refused(&self) -> bool {
        matches!(
            self,
            Self::ConnectFailed(e)
                if e.kind() == std::io::ErrorKind::ConnectionRefused
        )
    }
}
