//! Receive state machine (C2) — accumulates data frames into a message
//! body and hands the completed body to the caller on `EOT`.
//!
//! Entry into `Receiving` and the `Idle`/`Sending`-busy check are the
//! session controller's job (it owns the shared [`astmgate_core::SessionState`]
//! flag); this module only tracks what happens once a message is underway.

use astmgate_core::constants::{CR, MAX_CONSECUTIVE_CHECKSUM_FAILURES};
use astmgate_core::Error;
use astmgate_protocol::Frame;

/// What the controller should do in response to an inbound token while
/// `Receiving`.
#[derive(Debug, PartialEq, Eq)]
pub enum ReceiveAction {
    /// Write a single `ACK` byte.
    Ack,
    /// Write a single `NAK` byte.
    Nak,
    /// Too many consecutive checksum failures: write `EOT` and return to
    /// `Idle`.
    AbortEot,
}

/// Accumulates one message's worth of frames.
#[derive(Debug, Default)]
pub struct ReceiveMachine {
    body: String,
    consecutive_checksum_failures: u8,
}

impl ReceiveMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A data frame arrived. Verifies its checksum, and on success strips
    /// the envelope and appends the payload (plus its record terminator)
    /// to the message body.
    pub fn on_data_frame(&mut self, raw: &[u8]) -> ReceiveAction {
        match Frame::parse(raw) {
            Ok(frame) => {
                self.consecutive_checksum_failures = 0;
                self.body.push_str(&String::from_utf8_lossy(&frame.payload));
                self.body.push(CR as char);
                ReceiveAction::Ack
            }
            Err(Error::ChecksumMismatch { .. }) => {
                self.consecutive_checksum_failures += 1;
                if self.consecutive_checksum_failures >= MAX_CONSECUTIVE_CHECKSUM_FAILURES {
                    self.reset();
                    ReceiveAction::AbortEot
                } else {
                    ReceiveAction::Nak
                }
            }
            Err(_) => {
                // FrameError: reply NAK, drop buffer, remain in current state.
                ReceiveAction::Nak
            }
        }
    }

    /// A standalone `STX`/`ETX` control byte arrived outside a data frame
    /// (network-ack dialect). Acknowledged individually when `network_ack`
    /// is set; otherwise silently consumed.
    #[must_use]
    pub fn on_standalone_control(network_ack: bool) -> Option<ReceiveAction> {
        network_ack.then_some(ReceiveAction::Ack)
    }

    /// `EOT` arrived: close out the message. Returns the accumulated body
    /// if non-empty, clearing state either way.
    pub fn on_eot(&mut self) -> (ReceiveAction, Option<String>) {
        let body = std::mem::take(&mut self.body);
        self.consecutive_checksum_failures = 0;
        if body.is_empty() {
            (ReceiveAction::Ack, None)
        } else {
            (ReceiveAction::Ack, Some(body))
        }
    }

    fn reset(&mut self) {
        self.body.clear();
        self.consecutive_checksum_failures = 0;
    }
}
