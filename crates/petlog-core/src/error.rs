#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Food name must not be empty")]
    EmptyName,

    #[error("Invalid record ID '{0}': expected ULID format (26 chars Crockford Base32)")]
    InvalidRecordId(String),

    #[error("No record matching prefix '{0}'")]
    RecordNotFound(String),

    #[error("Ambiguous record prefix '{0}': matches multiple records")]
    AmbiguousRecordPrefix(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_name() {
        let err = AppError::EmptyName;
        assert_eq!(err.to_string(), "Food name must not be empty");
    }

    #[test]
    fn test_display_invalid_record_id() {
        let err = AppError::InvalidRecordId("bad-id".into());
        assert_eq!(
            err.to_string(),
            "Invalid record ID 'bad-id': expected ULID format (26 chars Crockford Base32)"
        );
    }

    #[test]
    fn test_display_record_not_found() {
        let err = AppError::RecordNotFound("01ARZ".into());
        assert_eq!(err.to_string(), "No record matching prefix '01ARZ'");
    }

    #[test]
    fn test_display_ambiguous_record_prefix() {
        let err = AppError::AmbiguousRecordPrefix("01".into());
        assert_eq!(
            err.to_string(),
            "Ambiguous record prefix '01': matches multiple records"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppError>();
    }
}
