//! Error types for the x837-validate crate.

/// Errors that can occur while re-parsing emitted EDI for the Compliance
/// Checker or Payer Rule Validator.
///
/// Validation and rule issues themselves are never thrown — they are
/// collected into a [`crate::ValidationReport`]. This type only covers
/// the case where the emitted bytes are too malformed to tokenize at
/// all, which should not happen for output produced by `x837-writer`
/// but is handled rather than panicking.
#[derive(Debug, thiserror::Error)]
pub enum ComplianceError {
    #[error(transparent)]
    Parse(#[from] x837_parser::ParseError),
}
