use thiserror::Error;

/// Session-layer errors (C2/C4/C5), composing the errors raised by the
/// crates it drives. This is the outermost link-layer crate boundary, so
/// unlike `astmgate-transport`/`astmgate-storage` it doesn't need a manual
/// `From<_> for astmgate_core::Error` — nothing sits above it to convert
/// into.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Transport(#[from] astmgate_transport::TransportError),

    #[error(transparent)]
    Storage(#[from] astmgate_storage::StorageError),

    #[error(transparent)]
    Core(#[from] astmgate_core::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;
