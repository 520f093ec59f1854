//! Field-safety newtype for constructing outbound ASTM records.

use astmgate_core::Result;
use std::fmt;

use crate::validation::validate_field;

/// A field value guaranteed not to contain the record grammar's reserved
/// delimiters (`CR`, `|`, `^`), safe to interpolate into an outbound record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField(String);

impl RecordField {
    /// # Errors
    /// Returns `Error::InvalidFieldFormat` if `value` contains a reserved
    /// record-grammar delimiter.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_field(&value)?;
        Ok(RecordField(value))
    }

    /// Build a field without checking for delimiters. Only use this for
    /// literal values already known to be safe (fixed header segments).
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        RecordField(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
