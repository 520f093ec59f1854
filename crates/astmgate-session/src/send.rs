//! Send state machine (C4) — strict, ACK-gated transmission of a pre-built
//! message (a sequence of record strings, one frame per record).
//!
//! Two dialects: under `network_ack`, `STX`/`ETX` are sent as standalone
//! bytes with their own ACK waits; otherwise those waits are skipped since
//! each built frame already embeds its own `STX`/`ETX` envelope. Either way
//! the transfer always ends with a literal `EOT`, win or abort.

use astmgate_core::Result;
use astmgate_core::constants::{ENQ, ETX, EOT, MAX_FRAME_NUMBER, MIN_FRAME_NUMBER, STX};
use astmgate_protocol::{ControlToken, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SendState {
    Idle,
    WaitEnqAck,
    WaitStxAck,
    WaitFrameAck,
    WaitEtxAck,
}

/// What the controller should do next.
#[derive(Debug)]
pub enum SendStep {
    /// Write these bytes, then wait for the next inbound token (subject to
    /// the 15s ACK timeout).
    Write(Vec<u8>),
    /// Write these bytes (a trailing `EOT`); the message completed
    /// successfully. No further waiting.
    Finished(Vec<u8>),
    /// Write these bytes (a trailing `EOT`); a non-`ACK` token or timeout
    /// aborted the transfer. No further waiting.
    Aborted(Vec<u8>),
}

/// Drives one outbound message through its ACK-gated frame sequence.
#[derive(Debug)]
pub struct SendMachine {
    state: SendState,
    network_ack: bool,
    records: Vec<String>,
    next_record: usize,
    frame_number: u8,
}

impl SendMachine {
    #[must_use]
    pub fn new(network_ack: bool) -> Self {
        Self {
            state: SendState::Idle,
            network_ack,
            records: Vec::new(),
            next_record: 0,
            frame_number: MIN_FRAME_NUMBER,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == SendState::Idle
    }

    /// Begin sending `records` (one built frame per record, in order).
    /// Returns the `ENQ` byte to write.
    pub fn start(&mut self, records: Vec<String>) -> Vec<u8> {
        self.records = records;
        self.next_record = 0;
        self.frame_number = MIN_FRAME_NUMBER;
        self.state = SendState::WaitEnqAck;
        vec![ENQ]
    }

    /// Treat the current wait as timed out: identical to a non-`ACK` token.
    pub fn on_timeout(&mut self) -> SendStep {
        self.abort()
    }

    /// Advance on an inbound token. Any token other than `ACK` aborts.
    pub fn on_token(&mut self, token: &ControlToken) -> Result<SendStep> {
        if !token.is_ack() {
            return Ok(self.abort());
        }

        match self.state {
            SendState::Idle => Ok(SendStep::Finished(Vec::new())),
            SendState::WaitEnqAck => {
                if self.network_ack {
                    self.state = SendState::WaitStxAck;
                    Ok(SendStep::Write(vec![STX]))
                } else {
                    self.send_next_frame()
                }
            }
            SendState::WaitStxAck => self.send_next_frame(),
            SendState::WaitFrameAck => {
                if self.next_record < self.records.len() {
                    self.send_next_frame()
                } else if self.network_ack {
                    self.state = SendState::WaitEtxAck;
                    Ok(SendStep::Write(vec![ETX]))
                } else {
                    self.state = SendState::Idle;
                    Ok(SendStep::Finished(vec![EOT]))
                }
            }
            SendState::WaitEtxAck => {
                self.state = SendState::Idle;
                Ok(SendStep::Finished(vec![EOT]))
            }
        }
    }

    fn send_next_frame(&mut self) -> Result<SendStep> {
        let record = self.records[self.next_record].clone();
        let frame = Frame::build(self.frame_number, record.as_bytes())?;
        self.next_record += 1;
        self.frame_number = if self.frame_number >= MAX_FRAME_NUMBER {
            MIN_FRAME_NUMBER
        } else {
            self.frame_number + 1
        };
        self.state = SendState::WaitFrameAck;
        Ok(SendStep::Write(frame.to_vec()))
    }

    fn abort(&mut self) -> SendStep {
        self.state = SendState::Idle;
        self.records.clear();
        self.next_record = 0;
        SendStep::Aborted(vec![EOT])
    }
}
