//! Wire protocol for Field of Wonders.
//!
//! This crate defines the "language" that clients and servers speak:
//!
//! - **Frames** ([`Frame`], [`ControlCommand`]): the two kinds of line
//!   that travel on the wire.
//! - **Errors** ([`ProtocolError`]): what can go wrong when turning a
//!   frame into a line or a line into a frame.
//!
//! # Wire format
//!
//! Every frame is one line terminated by `\n`; a `\r` before it is
//! tolerated and stripped. A line whose first byte is NUL is a control
//! frame and the rest of the line names a command. Every other line is
//! display text.
//!
//! ```text
//! "The word is: c**\n"   → Frame::Text("The word is: c**")
//! "\0input\n"            → Frame::Control(ControlCommand::Input)
//! ```
//!
//! The protocol layer sits between transport (raw lines) and the session
//! (game dialogue). It doesn't know about sockets or rules.

mod error;
mod frame;

pub use error::ProtocolError;
pub use frame::{strip_line_ending, ControlCommand, Frame, CONTROL_SENTINEL};
