use crate::constants::{MAX_PARAM_NAME_LENGTH, READING_VALUE_SENTINEL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The session's current transfer direction.
///
/// Owned by the session controller (C5) and consulted by the receive (C2)
/// and send (C4) state machines before any direction-changing action. At
/// most one of `Receiving`/`Sending` holds at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Receiving,
    Sending,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "Idle",
            SessionState::Receiving => "Receiving",
            SessionState::Sending => "Sending",
        };
        write!(f, "{name}")
    }
}

/// A persisted analyzer result.
///
/// `qualified_param` is `machine_id ++ "_" ++ param_name`, matching what the
/// downstream LIS expects as the distinguishing column for multi-analyzer
/// deployments that share one result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub lab_number: String,
    pub machine_id: String,
    pub qualified_param: String,
    pub value: String,
}

impl Reading {
    /// Build a reading from its raw `R`-record components, applying the
    /// filter from §3: rejected if `param_name` reaches [`MAX_PARAM_NAME_LENGTH`],
    /// `value` is empty, or `value` is the [`READING_VALUE_SENTINEL`].
    ///
    /// Returns `None` when the filter rejects the reading; the caller is
    /// expected to simply skip publishing it, not treat this as an error.
    #[must_use]
    pub fn new(lab_number: String, machine_id: &str, param_name: &str, value: String) -> Option<Self> {
        if param_name.len() >= MAX_PARAM_NAME_LENGTH || value.is_empty() || value == READING_VALUE_SENTINEL {
            return None;
        }
        Some(Reading {
            lab_number,
            qualified_param: format!("{machine_id}_{param_name}"),
            machine_id: machine_id.to_string(),
            value,
        })
    }
}

/// A pending order fetched from the persistence collaborator for a queried
/// lab number, rendered into an outbound `O` record by the session
/// controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub assay_code: String,
    pub patient_name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

impl Order {
    #[must_use]
    pub fn new(assay_code: impl Into<String>) -> Self {
        Order {
            assay_code: assay_code.into(),
            patient_name: None,
            age: None,
            gender: None,
        }
    }
}

/// A request from the analyzer for outstanding orders on a lab number,
/// extracted from a `Q` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub lab_number: String,
}
