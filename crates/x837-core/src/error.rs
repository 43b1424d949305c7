//! Error types for the x837-core crate.

/// Programmer-error paths for `build`/`build_batch`.
///
/// Claim-level and batch-level defects are never thrown — they surface
/// as `ERROR` issues in the returned reports. This type only covers the
/// rarer case of the writer or compliance re-parse hitting a state the
/// upstream validators should have already prevented.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Writer(#[from] x837_writer::WriterError),

    #[error(transparent)]
    Compliance(#[from] x837_validate::ComplianceError),
}
