//! Record parser (C3) — splits a complete message body into typed records,
//! extracting readings and query targets.
//!
//! The input is the message body already stripped of its frame envelopes:
//! record payloads concatenated in arrival order. Records are separated by
//! `CR`; within a record, fields are `|`-separated and components within a
//! field are `^`-separated.

use astmgate_core::constants::{COMPONENT_DELIMITER, ETX, FIELD_DELIMITER, RECORD_DELIMITER};
use astmgate_core::{QueryRequest, Reading};

/// One parsed outcome from a record in the message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecord {
    Header,
    Patient,
    /// An `O` record was seen; its lab number now applies to subsequent `R`
    /// records in this message.
    Order,
    Reading(Reading),
    Query(QueryRequest),
    Terminator,
}

/// Parse a complete message body into its records.
///
/// `machine_id` qualifies every [`Reading`] produced (see
/// [`astmgate_core::Reading::new`]). Parsing stops at the first `L`
/// (terminator) record; anything past it is ignored.
#[must_use]
pub fn parse_message(machine_id: &str, body: &str) -> Vec<ParsedRecord> {
    let mut records = Vec::new();
    let mut current_lab_number = String::new();

    for raw in body.split(RECORD_DELIMITER) {
        if raw.is_empty() {
            continue;
        }
        let record = strip_defensive_frame_residue(raw);
        if record.is_empty() {
            continue;
        }

        let tag = record.as_bytes()[0];
        let fields: Vec<&str> = record.split(FIELD_DELIMITER).collect();

        match tag {
            b'H' => records.push(ParsedRecord::Header),
            b'P' => records.push(ParsedRecord::Patient),
            b'O' => {
                current_lab_number = fields
                    .get(2)
                    .and_then(|f| f.split(COMPONENT_DELIMITER).next())
                    .unwrap_or("")
                    .to_string();
                records.push(ParsedRecord::Order);
            }
            b'R' => {
                if let Some(reading) = parse_result_record(machine_id, &current_lab_number, &fields) {
                    records.push(ParsedRecord::Reading(reading));
                }
            }
            b'Q' => {
                if let Some(query) = parse_query_record(&fields) {
                    records.push(ParsedRecord::Query(query));
                }
            }
            b'L' => {
                records.push(ParsedRecord::Terminator);
                break;
            }
            _ => {}
        }
    }

    records
}

/// A record whose first character is a digit is the leading frame-number
/// byte that defensively survived frame stripping; drop it, then drop a
/// trailing `ETX` + two-hex-digit checksum window if one also survived,
/// before dispatch.
fn strip_defensive_frame_residue(record: &str) -> &str {
    if record.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        strip_trailing_checksum_window(&record[1..])
    } else {
        record
    }
}

fn strip_trailing_checksum_window(record: &str) -> &str {
    let bytes = record.as_bytes();
    if bytes.len() >= 3 {
        let window = &bytes[bytes.len() - 3..];
        if window[0] == ETX && window[1].is_ascii_hexdigit() && window[2].is_ascii_hexdigit() {
            return &record[..record.len() - 3];
        }
    }
    record
}

fn parse_result_record(machine_id: &str, lab_number: &str, fields: &[&str]) -> Option<Reading> {
    let components: Vec<&str> = fields.get(2)?.split(COMPONENT_DELIMITER).collect();
    let param_name = if components.len() >= 4 {
        components[3]
    } else {
        components.first().copied().unwrap_or("")
    };

    let value = fields.get(3)?.split(COMPONENT_DELIMITER).next().unwrap_or("");

    Reading::new(lab_number.to_string(), machine_id, param_name, value.to_string())
}

fn parse_query_record(fields: &[&str]) -> Option<QueryRequest> {
    let components: Vec<&str> = fields.get(2)?.split(COMPONENT_DELIMITER).collect();
    let lab_number = if components.len() >= 2 {
        components[1]
    } else {
        components.first().copied().unwrap_or("")
    };
    Some(QueryRequest {
        lab_number: lab_number.to_string(),
    })
}
