//! Per-connection handler contract and the task that drives it.
//!
//! Each accepted connection gets its own Tokio task running
//! [`drive_session`]. The flow is:
//!   1. Build a fresh handler from the listener's factory
//!   2. Run [`SessionHandler::handle`] until it returns
//!   3. Log how the session ended
//!   4. Close the stream, whatever happened

use std::fmt;
use std::future::Future;

use wonders_transport::LineStream;

use crate::WondersError;

/// How a session ended when nothing went wrong.
///
/// Both variants are the user's choice. Disconnects and transport
/// failures are reported through the `Err` side of
/// [`SessionHandler::handle`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user sent the exit sentinel.
    UserExit,

    /// The user declined to play again.
    Declined,
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserExit => write!(f, "user exit"),
            Self::Declined => write!(f, "declined replay"),
        }
    }
}

/// Per-connection logic plugged into a
/// [`ConnectionListener`](crate::ConnectionListener).
///
/// One handler instance serves exactly one connection. It only shares
/// read-only configuration with other sessions, so handlers need no
/// locking.
///
/// # Example
///
/// ```rust
/// use wonders::prelude::*;
///
/// /// Greets the peer once and ends the session.
/// struct Hello;
///
/// impl SessionHandler for Hello {
///     async fn handle(
///         &mut self,
///         stream: &LineStream,
///     ) -> Result<SessionEnd, WondersError> {
///         send_text(stream, "hello").await?;
///         Ok(SessionEnd::UserExit)
///     }
/// }
/// ```
pub trait SessionHandler: Send + 'static {
    /// Runs the session over `stream` until it ends.
    ///
    /// The listener closes the stream after this returns, on every path.
    fn handle(
        &mut self,
        stream: &LineStream,
    ) -> impl Future<Output = Result<SessionEnd, WondersError>> + Send;
}

/// Builds a fresh handler for every accepted connection.
///
/// Any `Fn() -> H` closure is a factory. Servers that want a named type
/// (to return it from a function, say) implement the trait directly.
pub trait HandlerFactory: Send + 'static {
    /// The handler this factory produces.
    type Handler: SessionHandler;

    /// Creates the handler for one connection.
    fn create(&self) -> Self::Handler;
}

impl<F, H> HandlerFactory for F
where
    F: Fn() -> H + Send + 'static,
    H: SessionHandler,
{
    type Handler = H;

    fn create(&self) -> H {
        self()
    }
}

/// Runs one handler to completion and releases its stream.
///
/// This is the propagation boundary: nothing a session does can reach the
/// accept loop.
pub(crate) async fn drive_session<H: SessionHandler>(
    mut handler: H,
    stream: LineStream,
) {
    tracing::info!("client connected");

    let result = handler.handle(&stream).await;
    let outcome = SessionOutcome::classify(&result);
    match (outcome, &result) {
        (_, Ok(end)) => tracing::info!(reason = %end, "{}", outcome.message()),
        (SessionOutcome::Aborted, Err(e)) => {
            tracing::warn!(error = %e, "{}", outcome.message());
        }
        (_, Err(e)) => tracing::info!(error = %e, "{}", outcome.message()),
    }

    stream.close().await;
}

/// How a finished session is reported in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionOutcome {
    /// The user chose to leave.
    Willing,
    /// The peer went away mid-session.
    Unexpected,
    /// The session failed for any other reason.
    Aborted,
}

impl SessionOutcome {
    pub(crate) fn classify(result: &Result<SessionEnd, WondersError>) -> Self {
        match result {
            Ok(_) => Self::Willing,
            Err(e) if e.is_disconnect() => Self::Unexpected,
            Err(_) => Self::Aborted,
        }
    }

    pub(crate) fn message(self) -> &'static str {
        match self {
            Self::Willing => "client disconnected willingly",
            Self::Unexpected => "client disconnected unexpectedly",
            Self::Aborted => "session aborted",
        }
    }
}
