//! Transport drivers for the gateway's link layer (§6).
//!
//! A [`Transport`] is byte-oriented, reliable, in-order, bidirectional, and
//! carries no message-boundary information — framing is the byte framer's
//! (C1) job, one layer up. Three drivers are provided: a TCP listener/server
//! role, a TCP client role, and a serial-port role.

mod error;
mod serial;
mod tcp;
mod transport;

pub use error::TransportError;
pub use serial::{SerialConfig, SerialTransport};
pub use tcp::{TcpListenerTransport, TcpTransport};
pub use transport::Transport;
