//! Link-layer constants for the ASTM E1394 / LIS2-A2 protocol.
//!
//! # Frame Structure
//!
//! ```text
//! <STX>N<record payload><CR><ETX>CC<CR><LF>
//! ```
//!
//! Where:
//! - `<STX>` - start of frame (0x02)
//! - `N` - frame number digit, '1'..'7', wrapping
//! - `<CR>` - record terminator, inside the frame
//! - `<ETX>` - end of frame (0x03)
//! - `CC` - two hex checksum digits
//! - `<CR><LF>` - frame terminator
//!
//! # Record Grammar
//!
//! A message is the concatenation of record payloads between a matched `ENQ`
//! and `EOT`, records separated by `CR`. Each record starts with a type tag,
//! fields are `|`-delimited, components within a field are `^`-delimited.

// ============================================================================
// Control bytes
// ============================================================================

/// Enquiry — requests to begin a transfer.
pub const ENQ: u8 = 0x05;
/// Acknowledge.
pub const ACK: u8 = 0x06;
/// Negative acknowledge.
pub const NAK: u8 = 0x15;
/// Start of text — opens a frame.
pub const STX: u8 = 0x02;
/// End of text — closes a frame.
pub const ETX: u8 = 0x03;
/// End of transmission — closes a message.
pub const EOT: u8 = 0x04;
/// Carriage return — record and frame terminator component.
pub const CR: u8 = 0x0D;
/// Line feed — frame terminator component.
pub const LF: u8 = 0x0A;

// ============================================================================
// Record grammar delimiters
// ============================================================================

/// Record separator within a message body.
pub const RECORD_DELIMITER: char = '\r';
/// Field separator within a record.
pub const FIELD_DELIMITER: char = '|';
/// Component separator within a field.
pub const COMPONENT_DELIMITER: char = '^';

// ============================================================================
// Frame numbering
// ============================================================================

/// Lowest frame number digit.
pub const MIN_FRAME_NUMBER: u8 = 1;
/// Highest frame number digit before wrapping back to [`MIN_FRAME_NUMBER`].
pub const MAX_FRAME_NUMBER: u8 = 7;

// ============================================================================
// Timeouts
// ============================================================================

/// No-progress timeout while receiving (ms): abort to `Idle` if no byte
/// arrives within this window.
pub const RECEIVE_NO_PROGRESS_TIMEOUT_MS: u64 = 30_000;

/// Per-state ACK timeout while sending (ms): any `WaitXxxAck` state aborts
/// if no response arrives within this window.
pub const SEND_ACK_TIMEOUT_MS: u64 = 15_000;

/// Consecutive checksum failures tolerated before the receive side aborts
/// the session with an `EOT`.
pub const MAX_CONSECUTIVE_CHECKSUM_FAILURES: u8 = 3;

// ============================================================================
// Buffer limits
// ============================================================================

/// Byte framer accumulation buffer cap. A buffer that grows beyond this
/// without closing is truncated and the framer signals `NAK` and resets.
pub const MAX_FRAMER_BUFFER_SIZE: usize = 64 * 1024;

// ============================================================================
// Reading filter (§3 Reading)
// ============================================================================

/// Maximum allowed length of a result record's parameter name. Readings
/// whose `param_name` reaches this length are dropped rather than persisted.
pub const MAX_PARAM_NAME_LENGTH: usize = 15;

/// Sentinel value meaning "no result" — never persisted.
pub const READING_VALUE_SENTINEL: &str = "----";

/// Maximum length tolerated for a single outbound record field, guarding
/// against memory exhaustion from a maliciously oversized field.
pub const MAX_FIELD_LENGTH: usize = 512;

// ============================================================================
// Outbound message literals
// ============================================================================

/// Fixed delimiter-definition segment of the outbound `H` record.
pub const OUTBOUND_HEADER_DELIMITERS: &str = "\\^&";
/// Literal password/field segment carried in the outbound `H` record.
pub const OUTBOUND_HEADER_PASSWORD: &str = "PSWD";
/// Literal receiving-system id carried in the outbound `H` record.
pub const OUTBOUND_HEADER_RECEIVER: &str = "Lis";
/// Literal processing-id + version segment of the outbound `H` record.
pub const OUTBOUND_HEADER_VERSION: &str = "P|E1394-97";
