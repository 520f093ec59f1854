//! Transport-layer errors.

use std::net::SocketAddr;
use thiserror::Error;

/// Errors raised by a [`crate::Transport`] implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to bind to {0}")]
    BindFailed(SocketAddr),

    #[error("connection attempt to {addr} timed out after {timeout_ms}ms")]
    ConnectTimeout { addr: SocketAddr, timeout_ms: u64 },

    #[error("transport closed by peer")]
    Closed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serial port error: {0}")]
    Serial(#[from] tokio_serial::Error),
}

impl From<TransportError> for astmgate_core::Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Io(e) => astmgate_core::Error::Io(e),
            other => astmgate_core::Error::InvalidMessageFormat {
                message: other.to_string(),
            },
        }
    }
}
