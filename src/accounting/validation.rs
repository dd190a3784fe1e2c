//! Save validation for submitted attendance records.
//!
//! Every record passes through [`validate_record`] before it reaches the
//! store. Validation failures are fully recoverable: the operator corrects
//! the input and retries.

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee};

use super::eligibility::resolved_kid_name;

/// Validates a submitted record and returns a normalized copy.
///
/// Checks, in order:
///
/// 1. At least one person is present: any of the five flags, or an other
///    with a non-empty name.
/// 2. Every flagged kid has a non-empty resolved name (record override or
///    roster fallback).
/// 3. No other entry has a relation without a name.
///
/// Other entries with both fields empty are silently dropped from the
/// normalized copy rather than rejected.
pub fn validate_record(
    employee: &Employee,
    record: &AttendanceRecord,
) -> EngineResult<AttendanceRecord> {
    let flag_count = [
        record.employee,
        record.spouse,
        record.kid1,
        record.kid2,
        record.kid3,
    ]
    .iter()
    .filter(|&&flag| flag)
    .count();
    let named_others = record.others.iter().filter(|other| other.is_named()).count();
    if flag_count + named_others == 0 {
        return Err(EngineError::NoMemberPresent);
    }

    for slot in 0..3 {
        if record.kid_flag(slot) && resolved_kid_name(employee, record, slot).is_none() {
            return Err(EngineError::MissingKidName {
                slot: slot as u8 + 1,
            });
        }
    }

    for (index, other) in record.others.iter().enumerate() {
        // blank entries are tolerated and dropped below; a relation with
        // no name is an operator mistake
        if !other.is_named() && !other.is_blank() {
            return Err(EngineError::OtherMissingName { index });
        }
    }

    let mut normalized = record.clone();
    normalized.others.retain(|other| other.is_named());
    Ok(normalized)
}
