//! Outbound message builder — assembles the record sequence for the orders
//! response to a `Q` query (§6).
//!
//! Builds `H`, `P`, one `O` per pending order, and a trailing `L` record. The
//! session controller (C4) frames each record in turn and drives the send
//! state machine's ACK discipline; this module only produces the record
//! strings, not the frame envelopes.

use astmgate_core::Order;
use astmgate_core::Result;
use astmgate_core::constants::{
    OUTBOUND_HEADER_DELIMITERS, OUTBOUND_HEADER_PASSWORD, OUTBOUND_HEADER_RECEIVER, OUTBOUND_HEADER_VERSION,
};
use chrono::{DateTime, Local};

use crate::field::RecordField;

/// Builds the record sequence of an outbound orders message.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    machine_name: String,
    orders: Vec<Order>,
}

impl MessageBuilder {
    #[must_use]
    pub fn new(machine_name: impl Into<String>) -> Self {
        MessageBuilder {
            machine_name: machine_name.into(),
            orders: Vec::new(),
        }
    }

    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    #[must_use]
    pub fn orders(mut self, orders: impl IntoIterator<Item = Order>) -> Self {
        self.orders.extend(orders);
        self
    }

    /// Render the full record sequence, without frame envelopes, for
    /// `lab_number` stamped with `timestamp`.
    ///
    /// # Errors
    /// Returns `Error::InvalidFieldFormat` if `lab_number`, the configured
    /// machine name, or any pending order's assay code contains a reserved
    /// record-grammar delimiter (`CR`, `|`, `^`) — interpolating one
    /// unchecked would corrupt the record it's embedded in.
    pub fn build(&self, lab_number: &str, timestamp: DateTime<Local>) -> Result<Vec<String>> {
        let lab_number = RecordField::new(lab_number)?;
        let machine_name = RecordField::new(self.machine_name.clone())?;

        let mut records = Vec::with_capacity(self.orders.len() + 3);
        records.push(self.header_record(&machine_name, timestamp));
        records.push("P|1".to_string());
        for (i, order) in self.orders.iter().enumerate() {
            let assay_code = RecordField::new(order.assay_code.clone())?;
            records.push(format!("O|{}|{}||^^^{}|R", i + 1, lab_number, assay_code));
        }
        records.push("L|1|N".to_string());
        Ok(records)
    }

    fn header_record(&self, machine_name: &RecordField, timestamp: DateTime<Local>) -> String {
        format!(
            "H|{delims}||{pswd}|{name} User|||||{receiver}||{version}{date}",
            delims = OUTBOUND_HEADER_DELIMITERS,
            pswd = OUTBOUND_HEADER_PASSWORD,
            name = machine_name,
            receiver = OUTBOUND_HEADER_RECEIVER,
            version = OUTBOUND_HEADER_VERSION,
            date = timestamp.format("%Y%m%d"),
        )
    }
}
