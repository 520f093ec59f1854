//! ASTM frame envelope: `STX frame# payload CR ETX CC CR LF`.
//!
//! Checksum range follows §9 open question 1: the sum covers every byte
//! strictly after `STX` up to and including `ETX` (the trailing frame
//! terminator `CR LF` and the two checksum digits themselves are excluded).
//! This mirrors the behavior of the system this link layer replaces, kept
//! verbatim for wire compatibility rather than "corrected" to the stricter
//! ASTM E1394 reading that would also exclude `ETX`.

use astmgate_core::constants::{CR, ETX, LF, MAX_FRAME_NUMBER, MIN_FRAME_NUMBER, STX};
use astmgate_core::{Error, Result};
use bytes::{BufMut, Bytes, BytesMut};

/// A decoded frame: its number and the raw record payload it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub number: u8,
    pub payload: Bytes,
}

impl Frame {
    /// Compute the checksum (low 8 bits of the byte sum) over `content`,
    /// where `content` is everything from the frame-number digit through
    /// `ETX` inclusive.
    fn checksum(content: &[u8]) -> u8 {
        content.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
    }

    /// Build the wire bytes for a frame: `STX`, the frame number digit,
    /// `payload`, `CR`, `ETX`, the two hex checksum digits, `CR`, `LF`.
    ///
    /// `number` must be in `1..=7`; callers are expected to already have
    /// wrapped it (see the send state machine's frame counter).
    pub fn build(number: u8, payload: &[u8]) -> Result<Bytes> {
        if !(MIN_FRAME_NUMBER..=MAX_FRAME_NUMBER).contains(&number) {
            return Err(Error::InvalidMessageFormat {
                message: format!("frame number {number} out of range 1..=7"),
            });
        }

        let mut content = BytesMut::with_capacity(payload.len() + 2);
        content.put_u8(b'0' + number);
        content.put_slice(payload);
        content.put_u8(CR);
        content.put_u8(ETX);

        let checksum = Self::checksum(&content);

        let mut out = BytesMut::with_capacity(content.len() + 5);
        out.put_u8(STX);
        out.put_slice(&content);
        out.put_slice(format!("{checksum:02X}").as_bytes());
        out.put_u8(CR);
        out.put_u8(LF);

        Ok(out.freeze())
    }

    /// Parse and checksum-verify a complete frame (as delivered by the byte
    /// framer's `DataFrame` token, including its `STX`...`CR LF` envelope).
    ///
    /// # Errors
    /// Returns `Error::InvalidMessageFormat` if the envelope is malformed,
    /// or `Error::ChecksumMismatch` if the trailing hex pair doesn't match
    /// the recomputed checksum.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 7 || bytes[0] != STX || bytes[bytes.len() - 1] != LF || bytes[bytes.len() - 2] != CR {
            return Err(Error::InvalidMessageFormat {
                message: "frame missing STX/CRLF envelope".to_string(),
            });
        }

        let checksum_hex = &bytes[bytes.len() - 4..bytes.len() - 2];
        let etx_pos = bytes.len() - 5;
        if bytes[etx_pos] != ETX {
            return Err(Error::InvalidMessageFormat {
                message: "frame missing ETX terminator".to_string(),
            });
        }

        let number_digit = bytes[1];
        if !(b'1'..=b'7').contains(&number_digit) {
            return Err(Error::InvalidMessageFormat {
                message: format!("invalid frame number digit {number_digit:#04x}"),
            });
        }
        let number = number_digit - b'0';

        if bytes[etx_pos - 1] != CR {
            return Err(Error::InvalidMessageFormat {
                message: "record payload missing CR terminator before ETX".to_string(),
            });
        }
        let payload = Bytes::copy_from_slice(&bytes[2..etx_pos - 1]);

        let content = &bytes[1..=etx_pos];
        let expected = Self::checksum(content);
        let actual_hex = std::str::from_utf8(checksum_hex).map_err(|_| Error::InvalidMessageFormat {
            message: "checksum bytes are not valid ASCII".to_string(),
        })?;
        let actual = u8::from_str_radix(actual_hex, 16).map_err(|_| Error::InvalidMessageFormat {
            message: format!("checksum '{actual_hex}' is not valid hex"),
        })?;

        if expected != actual {
            return Err(Error::ChecksumMismatch {
                expected: format!("{expected:02X}"),
                actual: actual_hex.to_string(),
            });
        }

        Ok(Frame { number, payload })
    }
}
