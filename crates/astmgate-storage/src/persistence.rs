//! Persistence contract (§6) and its SQLite-backed implementation.
//!
//! Grounded on the teacher's repository pattern (`SqliteUserRepository`
//! etc.) — a small trait plus a single `sqlx`-backed implementor — with the
//! Henry-specific tables replaced by the two this gateway actually needs:
//! `readings` (what got sent) and `orders` (what's pending for a lab
//! number).

use astmgate_core::{Order, Reading};
use sqlx::Row;
use sqlx::sqlite::SqlitePool;

use crate::error::StorageResult;

/// What the session controller (C5) needs from storage.
pub trait Persistence {
    /// Persist a batch of readings from one completed message.
    ///
    /// Per §9 open question 2, this is best-effort: a row that fails to
    /// insert is logged at `error` and skipped rather than aborting the
    /// whole batch or propagating an error that would make the session
    /// retransmit-request something ASTM has no primitive for.
    async fn insert_readings(&self, readings: Vec<Reading>) -> StorageResult<()>;

    /// Fetch the pending orders for `lab_number`. Order of the returned
    /// vector determines the `O|i|…` sequence numbering in the outbound
    /// message (§6).
    async fn fetch_orders(&self, lab_number: &str) -> StorageResult<Vec<Order>>;
}

#[derive(Debug, Clone)]
pub struct SqlitePersistence {
    pool: SqlitePool,
}

impl SqlitePersistence {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Persistence for SqlitePersistence {
    async fn insert_readings(&self, readings: Vec<Reading>) -> StorageResult<()> {
        for reading in readings {
            let result = sqlx::query(
                "INSERT INTO readings (lab_number, machine_id, qualified_param, value) VALUES (?, ?, ?, ?)",
            )
            .bind(&reading.lab_number)
            .bind(&reading.machine_id)
            .bind(&reading.qualified_param)
            .bind(&reading.value)
            .execute(&self.pool)
            .await;

            if let Err(e) = result {
                tracing::error!(error = %e, lab_number = %reading.lab_number, param = %reading.qualified_param, "failed to persist reading");
            }
        }
        Ok(())
    }

    async fn fetch_orders(&self, lab_number: &str) -> StorageResult<Vec<Order>> {
        let rows = sqlx::query(
            "SELECT assay_code, patient_name, age, gender FROM orders WHERE lab_number = ? ORDER BY id",
        )
        .bind(lab_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Order {
                assay_code: row.get("assay_code"),
                patient_name: row.get("patient_name"),
                age: row.get("age"),
                gender: row.get("gender"),
            })
            .collect())
    }
}
