//! The client counterpart: prints text frames and answers input requests.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::ToSocketAddrs;
use tracing::Instrument;
use wonders_protocol::{ControlCommand, Frame};
use wonders_transport::LineStream;

use crate::io::recv_frame;
use crate::WondersError;

/// Why the client loop stopped. Neither case is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientEnd {
    /// The server closed the connection (or it broke).
    ServerClosed,

    /// Local input ran out while the server was waiting for an answer.
    InputClosed,
}

/// A minimal peer that renders server text and relays local input.
///
/// `I` is where answers come from (stdin in the binary) and `O` is where
/// text goes (stdout). Both are generic so tests can script a session.
pub struct Client<I, O> {
    input: I,
    output: O,
}

impl<I, O> Client<I, O>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    /// Creates a client reading answers from `input` and writing text to
    /// `output`.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consumes the client and returns its input and output.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Runs the receive loop until the server goes away or local input
    /// is exhausted.
    ///
    /// Unknown or malformed control frames are logged and skipped.
    /// Only local I/O failures are returned as errors.
    pub async fn run(
        &mut self,
        stream: &LineStream,
    ) -> Result<ClientEnd, WondersError> {
        loop {
            let frame = match recv_frame(stream).await {
                Ok(frame) => frame,
                Err(WondersError::Protocol(e)) => {
                    tracing::warn!(error = %e, "ignoring malformed frame");
                    continue;
                }
                Err(WondersError::Transport(e)) => {
                    tracing::info!(error = %e, "server disconnected");
                    return Ok(ClientEnd::ServerClosed);
                }
                Err(e) => return Err(e),
            };

            match frame {
                Frame::Text(text) => {
                    self.output.write_all(text.as_bytes()).await?;
                    self.output.write_all(b"\n").await?;
                    self.output.flush().await?;
                }
                Frame::Control(ControlCommand::Input) => {
                    let mut answer = String::new();
                    if self.input.read_line(&mut answer).await? == 0 {
                        tracing::info!("local input closed");
                        return Ok(ClientEnd::InputClosed);
                    }

                    let answer = answer.trim_end_matches(['\r', '\n']);
                    let line = format!("{answer}\n");
                    if let Err(e) = stream.send(line.as_bytes()).await {
                        tracing::info!(error = %e, "server disconnected");
                        return Ok(ClientEnd::ServerClosed);
                    }
                }
                Frame::Control(other) => {
                    tracing::warn!(command = %other, "unknown control command");
                }
            }
        }
    }
}

/// Connects to a server and plays over stdin/stdout until the session
/// ends.
pub async fn run_client(
    addr: impl ToSocketAddrs,
) -> Result<ClientEnd, WondersError> {
    let stream = match LineStream::connect(addr).await {
        Ok(stream) => stream,
        Err(e) => {
            if e.is_refused() {
                tracing::error!("server refused connection");
            } else {
                tracing::error!(error = %e, "could not connect");
            }
            return Err(e.into());
        }
    };

    let span = tracing::info_span!(
        "client",
        conn = %stream.id(),
        peer = %stream.peer_addr(),
    );

    async {
        tracing::info!("connected to server");
        let mut client = Client::new(
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        );
        let result = client.run(&stream).await;
        stream.close().await;
        result
    }
    .instrument(span)
    .await
}
