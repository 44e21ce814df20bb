//! # Wonders
//!
//! A small line-oriented, command-multiplexed TCP session framework.
//!
//! A server implements one [`SessionHandler`] and hands a factory for it
//! to a [`ConnectionListener`]; the framework accepts connections, runs
//! one handler per connection in its own task, and closes the connection
//! when the handler returns. The [`Client`] is the matching peer: it
//! prints text frames and answers `input` requests with local input.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wonders::prelude::*;
//!
//! struct Echo;
//!
//! impl SessionHandler for Echo {
//!     async fn handle(
//!         &mut self,
//!         stream: &LineStream,
//!     ) -> Result<SessionEnd, WondersError> {
//!         loop {
//!             let reply = request_input(stream).await?;
//!             if reply == "/" {
//!                 return Ok(SessionEnd::UserExit);
//!             }
//!             send_text(stream, &reply).await?;
//!         }
//!     }
//! }
//!
//! # async fn serve() -> Result<(), WondersError> {
//! let listener = ListenerBuilder::new()
//!     .bind("127.0.0.1:8080")
//!     .build(|| Echo)
//!     .await?;
//! listener.run().await
//! # }
//! ```

mod client;
mod error;
mod handler;
pub mod io;
mod server;

pub use client::{run_client, Client, ClientEnd};
pub use error::WondersError;
pub use handler::{HandlerFactory, SessionEnd, SessionHandler};
pub use server::{ConnectionListener, ListenerBuilder, DEFAULT_BIND_ADDR};

pub use wonders_protocol::{ControlCommand, Frame, ProtocolError};
pub use wonders_transport::{ConnectionId, LineListener, LineStream, TransportError};

/// Everything a handler implementation usually needs.
pub mod prelude {
    pub use crate::io::{recv_frame, recv_reply, request_input, send_frame, send_text};
    pub use crate::{
        Client, ClientEnd, ConnectionListener, ControlCommand, Frame,
        HandlerFactory, LineStream, ListenerBuilder, SessionEnd, SessionHandler,
        WondersError,
    };
}
