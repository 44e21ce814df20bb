//! Frame-level helpers over a [`LineStream`].
//!
//! Handlers talk in frames and replies, never raw bytes; these functions
//! do the encoding and line stripping in one place.

use wonders_protocol::{strip_line_ending, Frame};
use wonders_transport::LineStream;

use crate::WondersError;

/// Encodes and sends a single frame.
pub async fn send_frame(
    stream: &LineStream,
    frame: &Frame,
) -> Result<(), WondersError> {
    let line = frame.encode()?;
    stream.send(&line).await?;
    Ok(())
}

/// Sends a block of text, one text frame per line.
///
/// A trailing newline does not produce an extra empty frame.
pub async fn send_text(
    stream: &LineStream,
    text: &str,
) -> Result<(), WondersError> {
    let mut buf = Vec::with_capacity(text.len() + 1);
    for line in text.lines() {
        buf.extend(Frame::text(line).encode()?);
    }
    stream.send(&buf).await?;
    Ok(())
}

/// Receives and decodes the next frame.
pub async fn recv_frame(stream: &LineStream) -> Result<Frame, WondersError> {
    let line = stream.recv_line().await?;
    Ok(Frame::decode(&line)?)
}

/// Receives one reply line as free-form text, without its line ending.
///
/// Replies are never interpreted as frames.
pub async fn recv_reply(stream: &LineStream) -> Result<String, WondersError> {
    let line = stream.recv_line().await?;
    Ok(String::from_utf8_lossy(strip_line_ending(&line)).into_owned())
}

/// Issues an input request and waits for the peer's answer.
pub async fn request_input(
    stream: &LineStream,
) -> Result<String, WondersError> {
    send_frame(stream, &Frame::input()).await?;
    recv_reply(stream).await
}
