use thiserror::Error;

/// Errors shared across the gateway's link-layer crates.
///
/// Crate-local concerns (transport I/O, persistence) define their own error
/// enums and convert into this one at the seam where they cross into
/// protocol/session code, following the per-crate error module convention
/// used throughout this workspace.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid message format: {message}")]
    InvalidMessageFormat { message: String },

    #[error("invalid field format: {message}")]
    InvalidFieldFormat { message: String },

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("frame too large: {size} bytes (max {max_size})")]
    FrameTooLarge { size: usize, max_size: usize },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("malformed record: {message}")]
    MalformedRecord { message: String },

    #[error("invalid session transition from {from} to {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("protocol timeout after {duration_ms}ms")]
    ProtocolTimeout { duration_ms: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
