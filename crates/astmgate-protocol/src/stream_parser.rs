//! Byte framer (C1) — classifies an inbound byte stream into control tokens
//! and data frames.
//!
//! The framer consumes bytes one at a time and produces a queue of
//! [`StreamEvent`]s. It keeps a single internal buffer representing "bytes
//! seen since the last token boundary"; a buffer is only ever non-empty
//! while accumulating a data frame (`STX` through `CR LF`).
//!
//! # Standalone `STX`/`ETX`
//!
//! Some instruments emit bare `STX`/`ETX` control bytes outside a framed
//! data frame under the network-ack dialect (§4.2). The framer tells these
//! apart from the start of a real frame by checking the byte that follows a
//! lone `STX`: a valid frame-number digit (`'1'..='7'`) confirms a frame is
//! opening; anything else means the `STX` was standalone, and that byte is
//! reprocessed as if freshly arrived.
//!
//! Stray `ACK` bytes seen while accumulating a frame's payload are tolerated
//! and silently dropped (§4.1) — they arise from the peer acknowledging our
//! own intermediate sends while our receive buffer is still open.

use astmgate_core::Error;
use astmgate_core::constants::{ACK, CR, ENQ, EOT, ETX, LF, MAX_FRAMER_BUFFER_SIZE, NAK, STX};
use bytes::{BufMut, BytesMut};
use std::collections::VecDeque;

use crate::token::ControlToken;

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;
const INITIAL_EVENT_QUEUE_CAPACITY: usize = 4;

/// Something the framer hands upward: either a classified token, or a
/// framing-level error the session should answer with a `NAK` and a reset.
#[derive(Debug)]
pub enum StreamEvent {
    Token(ControlToken),
    Error(Error),
}

/// Stateful byte framer for the ASTM link layer.
#[derive(Debug)]
pub struct StreamParser {
    buffer: BytesMut,
    events: VecDeque<StreamEvent>,
}

impl StreamParser {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            events: VecDeque::with_capacity(INITIAL_EVENT_QUEUE_CAPACITY),
        }
    }

    /// Feed bytes from the transport into the framer, classifying as many
    /// tokens as the buffered data allows.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.feed_byte(b);
        }
    }

    /// Pop the next classified event, if one is ready.
    pub fn next_event(&mut self) -> Option<StreamEvent> {
        self.events.pop_front()
    }

    /// Number of events ready for extraction.
    pub fn events_available(&self) -> usize {
        self.events.len()
    }

    /// Drain every event currently queued.
    pub fn drain_events(&mut self) -> DrainEvents<'_> {
        DrainEvents { parser: self }
    }

    fn emit(&mut self, token: ControlToken) {
        self.events.push_back(StreamEvent::Token(token));
    }

    fn feed_byte(&mut self, b: u8) {
        if self.buffer.is_empty() {
            match b {
                ENQ => self.emit(ControlToken::Enq),
                ACK => self.emit(ControlToken::Ack),
                NAK => self.emit(ControlToken::Nak),
                EOT => self.emit(ControlToken::Eot),
                ETX => self.emit(ControlToken::Etx),
                STX => self.buffer.put_u8(b),
                _ => {} // noise outside any frame, discarded
            }
            return;
        }

        if self.buffer.len() == 1 {
            // buffer holds a lone STX awaiting confirmation that it opens a
            // frame: the next byte must be a frame-number digit.
            if !(b'1'..=b'7').contains(&b) {
                self.buffer.clear();
                self.emit(ControlToken::Stx);
                self.feed_byte(b);
                return;
            }
        } else if b == ACK {
            return;
        }

        self.buffer.put_u8(b);

        let len = self.buffer.len();
        if len >= 2 && self.buffer[len - 1] == LF && self.buffer[len - 2] == CR {
            self.close_frame();
            return;
        }

        if self.buffer.len() > MAX_FRAMER_BUFFER_SIZE {
            self.events.push_back(StreamEvent::Error(Error::FrameTooLarge {
                size: self.buffer.len(),
                max_size: MAX_FRAMER_BUFFER_SIZE,
            }));
            self.buffer.clear();
        }
    }

    fn close_frame(&mut self) {
        let len = self.buffer.len();
        // STX + frame# + CR + ETX + CC + CR LF = 8 bytes minimum.
        if len < 8 || self.buffer[len - 5] != ETX {
            self.events.push_back(StreamEvent::Error(Error::InvalidMessageFormat {
                message: "data frame missing ETX before its checksum".to_string(),
            }));
            self.buffer.clear();
            return;
        }

        let frame = self.buffer.split_to(len).freeze();
        self.emit(ControlToken::DataFrame(frame));
    }
}

impl Default for StreamParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator that drains queued events from a [`StreamParser`].
pub struct DrainEvents<'a> {
    parser: &'a mut StreamParser,
}

impl<'a> Iterator for DrainEvents<'a> {
    type Item = StreamEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_event()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.parser.events_available();
        (len, Some(len))
    }
}
