//! Control tokens emitted by the byte framer (C1).
//!
//! A [`ControlToken`] is the unit the rest of the link layer reasons about:
//! either one of the bare single-byte control codes, or a complete
//! `STX`...`CR LF`-delimited data frame. See [`crate::stream_parser`] for how
//! a raw byte stream is classified into these.

use bytes::Bytes;

/// A classified unit of the ASTM byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlToken {
    /// `ENQ` (0x05) — request to begin a transfer.
    Enq,
    /// `ACK` (0x06) — positive acknowledgement.
    Ack,
    /// `NAK` (0x15) — negative acknowledgement.
    Nak,
    /// `EOT` (0x04) — end of transmission.
    Eot,
    /// A standalone `STX` byte observed outside a data frame. Some
    /// instruments emit `STX`/`ETX` out-of-band around data frames under the
    /// network-ack dialect (§4.2).
    Stx,
    /// A standalone `ETX` byte observed outside a data frame.
    Etx,
    /// A complete frame: `STX`, frame-number digit, payload, `CR`, `ETX`,
    /// two checksum hex digits, `CR`, `LF` — still in raw wire form. Use
    /// [`crate::frame::Frame::parse`] to split and verify it.
    DataFrame(Bytes),
}

impl ControlToken {
    /// `true` if this token is `ACK`.
    #[must_use]
    pub fn is_ack(&self) -> bool {
        matches!(self, ControlToken::Ack)
    }
}
