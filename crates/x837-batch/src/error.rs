//! Error types for the x837-batch crate.

/// Errors raised while aggregating one grouped set of trips into a claim.
///
/// These never propagate out of the crate's public functions: they are
/// collected into the batch's [`x837_validate::ValidationReport`] as
/// `BATCH_030` issues, and the offending group is excluded from emission.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BatchError {
    /// Trips sharing a grouping key disagree on a field that must agree
    /// across the whole group.
    #[error("trips grouped under one claim disagree on '{field}'")]
    Disagreement { field: String },
}
