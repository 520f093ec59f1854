//! SQLite-backed persistence for the gateway (§6).
//!
//! Two tables back the [`Persistence`] trait: `readings` (everything the
//! analyzer has sent) and `orders` (what's pending for a lab number,
//! consulted when a `Q` query arrives). Connection pooling and migrations
//! follow the teacher's `Database`/`DatabaseConfig` pattern.

pub mod connection;
pub mod error;
pub mod persistence;

pub use connection::{Database, DatabaseConfig};
pub use error::{StorageError, StorageResult};
pub use persistence::{Persistence, SqlitePersistence};
