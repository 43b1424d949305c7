//! Error types for the x837-writer crate.

/// Errors raised by the segment writer or the 837P document assembler.
///
/// The writer is a last-line defense: most of these
/// should already have been caught by the pre-submission validator, but the
/// writer refuses to emit structurally impossible output rather than
/// silently producing a malformed interchange.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// A supplied element contains a reserved delimiter character.
    #[error("element contains reserved separator '{separator}': {value:?}")]
    ReservedSeparator { separator: char, value: String },

    /// The claim is missing a field the data model marks mandatory.
    #[error("missing required field '{field}' on {entity}")]
    MissingField { entity: String, field: String },

    /// A mileage line was encountered without the writer being able to
    /// resolve its preceding transport line (should have been rejected by
    /// the validator's mileage-adjacency check).
    #[error("mileage adjacency violation at service index {index}")]
    MileageAdjacency { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_error_display_reserved_separator() {
        let err = WriterError::ReservedSeparator {
            separator: '*',
            value: "foo*bar".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "element contains reserved separator '*': \"foo*bar\""
        );
    }

    #[test]
    fn test_writer_error_display_missing_field() {
        let err = WriterError::MissingField {
            entity: "ClaimRecord".to_string(),
            field: "clm_number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing required field 'clm_number' on ClaimRecord"
        );
    }

    #[test]
    fn test_writer_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WriterError>();
    }
}
