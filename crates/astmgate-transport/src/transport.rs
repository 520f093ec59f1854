//! The byte-oriented transport contract (§6): reliable, in-order,
//! bidirectional, with no message-boundary awareness. The framing layer (C1)
//! is what turns a transport's byte stream into tokens.

use crate::error::TransportError;

/// A single session's exclusive channel to the analyzer.
///
/// Implemented by the TCP server/client drivers and the serial driver.
/// Native `async fn` in traits (RPITIT) is used rather than `async-trait`,
/// consistent with edition 2024.
pub trait Transport {
    /// Read at least one byte into `buf`, returning the number of bytes
    /// read. Returns `Ok(0)` on a clean EOF (peer closed the connection).
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;

    /// Write the entirety of `bytes` to the transport.
    async fn write_all(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Close the transport. Idempotent.
    async fn close(&mut self) -> Result<(), TransportError>;
}
