//! Tokio codec bridging a raw byte stream to the byte framer (C1).
//!
//! `GatewayCodec` wraps a [`StreamParser`], exposing it through
//! [`Decoder`]/[`Encoder`] so the session layer can sit behind a
//! [`tokio_util::codec::Framed`] instead of driving the parser by hand.
//!
//! Framing-level problems (oversized or malformed frames) surface as
//! `Ok(Some(StreamEvent::Error(_)))` rather than `Err`, since a single bad
//! frame is recoverable — the session controller answers it with a `NAK` and
//! keeps the connection open. `Err` is reserved for transport-level I/O
//! failures.
//!
//! Encoding is a thin pass-through: the session layer already produces
//! complete wire frames via [`crate::frame::Frame::build`], so the codec
//! only needs to append those bytes to the outgoing buffer.

use bytes::{Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::stream_parser::{StreamEvent, StreamParser};
use astmgate_core::{Error, Result};

/// Tokio codec for the ASTM link layer.
#[derive(Debug, Default)]
pub struct GatewayCodec {
    parser: StreamParser,
}

impl GatewayCodec {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: StreamParser::new(),
        }
    }
}

impl Decoder for GatewayCodec {
    type Item = StreamEvent;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if !src.is_empty() {
            self.parser.feed(src);
            src.clear();
        }
        Ok(self.parser.next_event())
    }
}

impl Encoder<Bytes> for GatewayCodec {
    type Error = Error;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<()> {
        dst.extend_from_slice(&item);
        Ok(())
    }
}
