//! Field validation for outbound ASTM record construction.
//!
//! The record grammar reserves three delimiters (`CR` as the record
//! separator, `|` as the field separator, `^` as the component separator).
//! A field destined for an outbound record must not contain any of them, or
//! it would corrupt the record it's embedded in.

use astmgate_core::constants::{COMPONENT_DELIMITER, FIELD_DELIMITER, MAX_FIELD_LENGTH, RECORD_DELIMITER};
use astmgate_core::{Error, Result};

/// Reject a field if it contains a reserved record-grammar delimiter.
///
/// # Errors
/// Returns `Error::InvalidFieldFormat` if the field contains `CR`, `|`, or `^`.
pub fn validate_field(field: &str) -> Result<()> {
    if field.contains(RECORD_DELIMITER) || field.contains(FIELD_DELIMITER) || field.contains(COMPONENT_DELIMITER) {
        return Err(Error::InvalidFieldFormat {
            message: format!("field '{field}' contains a reserved record delimiter (CR, |, or ^)"),
        });
    }
    Ok(())
}

/// Reject any of the first `count` fields that exceed [`MAX_FIELD_LENGTH`].
///
/// # Errors
/// Returns `Error::InvalidFieldFormat` on the first oversized field found.
pub fn validate_field_lengths(fields: &[String], count: usize) -> Result<()> {
    for (i, field) in fields.iter().take(count).enumerate() {
        if field.len() > MAX_FIELD_LENGTH {
            return Err(Error::InvalidFieldFormat {
                message: format!(
                    "field {i} exceeds maximum length {MAX_FIELD_LENGTH} (got {} bytes)",
                    field.len()
                ),
            });
        }
    }
    Ok(())
}
