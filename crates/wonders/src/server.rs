//! `ConnectionListener` builder and accept loop.
//!
//! The listener is generic over the handler it runs: it knows how to
//! accept connections and isolate them from each other, and nothing
//! about what is said over them.

use std::net::SocketAddr;

use tracing::Instrument;
use wonders_transport::LineListener;

use crate::handler::{drive_session, HandlerFactory};
use crate::WondersError;

/// Address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Builder for configuring and binding a [`ConnectionListener`].
///
/// # Example
///
/// ```rust,ignore
/// let listener = ListenerBuilder::new()
///     .bind("0.0.0.0:8080")
///     .build(|| MyHandler::new())
///     .await?;
/// listener.run().await
/// ```
pub struct ListenerBuilder {
    bind_addr: String,
}

impl ListenerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    /// Sets the address to bind the listener to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the socket and returns a listener that will call `factory`
    /// once per accepted connection.
    ///
    /// A bind failure is returned as-is and never retried.
    pub async fn build<F: HandlerFactory>(
        self,
        factory: F,
    ) -> Result<ConnectionListener<F>, WondersError> {
        let listener = LineListener::bind(self.bind_addr.as_str()).await?;
        Ok(ConnectionListener { listener, factory })
    }
}

impl Default for ListenerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Accepts connections and runs one handler per connection.
///
/// Call [`run()`](Self::run) to start accepting.
pub struct ConnectionListener<F> {
    listener: LineListener,
    factory: F,
}

impl<F: HandlerFactory> ConnectionListener<F> {
    /// Creates a new builder.
    pub fn builder() -> ListenerBuilder {
        ListenerBuilder::new()
    }

    /// Returns the local address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Runs the accept loop until the process is terminated.
    ///
    /// Every connection is handed to its own task, so a slow or idle
    /// session never holds up the next accept. Accept errors are logged
    /// and the loop carries on.
    pub async fn run(self) -> Result<(), WondersError> {
        tracing::info!("connection listener running");

        loop {
            match self.listener.accept().await {
                Ok(stream) => {
                    let span = tracing::info_span!(
                        "session",
                        conn = %stream.id(),
                        peer = %stream.peer_addr(),
                    );
                    let handler = self.factory.create();
                    tokio::spawn(
                        drive_session(handler, stream).instrument(span),
                    );
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}
