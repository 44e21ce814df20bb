//! TCP line stream and listener built on `tokio::net`.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::sync::Mutex;

use crate::{ConnectionId, TransportError};

/// Longest line accepted by [`LineStream::recv_line`], in bytes, line
/// ending included.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Counter for generating unique connection IDs.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Listens for incoming TCP connections and wraps each in a [`LineStream`].
pub struct LineListener {
    listener: TcpListener,
}

impl LineListener {
    /// Binds a listener to the given address.
    ///
    /// Fails with [`TransportError::BindFailed`] if the address is in use
    /// or not permitted. Callers treat this as fatal.
    pub async fn bind(addr: impl ToSocketAddrs) -> Result<Self, TransportError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(TransportError::BindFailed)?;
        if let Ok(local) = listener.local_addr() {
            tracing::info!(%local, "listening for connections");
        }
        Ok(Self { listener })
    }

    /// Returns the address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Waits for and accepts the next incoming connection.
    pub async fn accept(&self) -> Result<LineStream, TransportError> {
        let (stream, peer) = self
            .listener
            .accept()
            .await
            .map_err(TransportError::AcceptFailed)?;

        let stream = LineStream::new(stream, peer);
        tracing::debug!(id = %stream.id(), %peer, "accepted connection");
        Ok(stream)
    }
}

/// A newline-framed duplex channel over one TCP connection.
///
/// Reads and writes are guarded by separate locks, so one task can wait in
/// [`recv_line`](Self::recv_line) while another sends. Each `send` holds the
/// writer lock for its whole payload, so concurrent sends never interleave.
#[derive(Debug)]
pub struct LineStream {
    id: ConnectionId,
    peer: SocketAddr,
    reader: Mutex<BufReader<OwnedReadHalf>>,
    writer: Mutex<OwnedWriteHalf>,
    closed: AtomicBool,
}

impl LineStream {
    fn new(stream: TcpStream, peer: SocketAddr) -> Self {
        let (read_half, write_half) = stream.into_split();
        Self {
            id: ConnectionId::new(
                NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed),
            ),
            peer,
            reader: Mutex::new(BufReader::new(read_half)),
            writer: Mutex::new(write_half),
            closed: AtomicBool::new(false),
        }
    }

    /// Opens a connection to a remote listener.
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(TransportError::ConnectFailed)?;
        let peer = stream.peer_addr().map_err(TransportError::ConnectFailed)?;

        let stream = Self::new(stream, peer);
        tracing::debug!(id = %stream.id(), %peer, "connected");
        Ok(stream)
    }

    /// Returns the unique identifier for this stream.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Returns the address of the remote peer.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Writes `data` to the peer and flushes it.
    ///
    /// No delimiter is added; callers terminate their own lines.
    pub async fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        if self.is_closed() {
            return Err(TransportError::Closed);
        }

        let mut writer = self.writer.lock().await;
        writer
            .write_all(data)
            .await
            .map_err(TransportError::SendFailed)?;
        writer.flush().await.map_err(TransportError::SendFailed)
    }

    /// Waits for the next complete line from the peer.
    ///
    /// The returned bytes include the trailing `\n` (and `\r` if the peer
    /// sent one). A peer that closes the connection, even halfway through a
    /// line, yields [`TransportError::EndOfStream`].
    pub async fn recv_line(&self) -> Result<Vec<u8>, TransportError> {
        if self.is_closed() {
            return Err(TransportError::Closed);
        }

        let mut line = Vec::new();
        let mut reader = self.reader.lock().await;
        let read = (&mut *reader)
            .take(MAX_LINE_LEN as u64)
            .read_until(b'\n', &mut line)
            .await
            .map_err(TransportError::ReceiveFailed)?;

        if line.last() != Some(&b'\n') && line.len() >= MAX_LINE_LEN {
            tracing::warn!(id = %self.id, limit = MAX_LINE_LEN, "line too long");
            return Err(TransportError::LineTooLong(MAX_LINE_LEN));
        }

        if read == 0 || line.last() != Some(&b'\n') {
            if !line.is_empty() {
                tracing::debug!(
                    id = %self.id,
                    dropped = line.len(),
                    "peer closed mid-line"
                );
            }
            return Err(TransportError::EndOfStream);
        }

        Ok(line)
    }

    /// Shuts down the write side and marks the stream closed.
    ///
    /// Safe to call any number of times, including after the peer has
    /// already gone away.
    pub async fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        if let Err(e) = self.writer.lock().await.shutdown().await {
            tracing::debug!(id = %self.id, error = %e, "shutdown after peer close");
        }
        tracing::debug!(id = %self.id, peer = %self.peer, "stream closed");
    }
}
