use thiserror::Error;

/// Storage-layer errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for astmgate_core::Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(sqlx::Error::Io(e)) => astmgate_core::Error::Io(e),
            other => astmgate_core::Error::MalformedRecord {
                message: other.to_string(),
            },
        }
    }
}
