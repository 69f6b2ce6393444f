//! ULID record identifiers: minting, validation, prefix matching

use crate::error::AppError;
use crate::types::FoodRecord;

/// Generate a new ULID record ID
pub fn new_record_id() -> String {
    ulid::Ulid::new().to_string()
}

/// Validate that a string is a valid ULID
pub fn validate_record_id(id: &str) -> Result<(), AppError> {
    if id.len() != 26 {
        return Err(AppError::InvalidRecordId(id.to_string()));
    }

    ulid::Ulid::from_string(id).map_err(|_| AppError::InvalidRecordId(id.to_string()))?;

    Ok(())
}

/// Resolve a record ID prefix against the in-memory sequence.
///
/// Returns an error if 0 or more than 1 record matches the prefix.
pub fn resolve_record_prefix<'a>(
    records: &'a [FoodRecord],
    prefix: &str,
) -> Result<&'a FoodRecord, AppError> {
    // A full-length prefix must be a well-formed ULID
    if prefix.len() == 26 {
        validate_record_id(prefix)?;
    }

    let needle = prefix.to_uppercase();

    let mut matches = records
        .iter()
        .filter(|record| record.id.to_uppercase().starts_with(&needle));

    match (matches.next(), matches.next()) {
        (Some(record), None) => Ok(record),
        (Some(_), Some(_)) => Err(AppError::AmbiguousRecordPrefix(prefix.to_string())),
        _ => Err(AppError::RecordNotFound(prefix.to_string())),
    }
}
