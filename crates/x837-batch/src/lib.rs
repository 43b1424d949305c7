//! Batch Processor: groups an ordered sequence of trip records into
//! claims ready for the rest of the pipeline, plus a report of what was
//! excluded and why.
//!
//! [`group_and_build`] fans the per-group aggregation step out across
//! `rayon`'s thread pool; [`group_and_build_sequential`] does the same
//! work on the calling thread. Both are kept, and a property test
//! asserts they agree, because the parallel path is only safe as long
//! as the aggregation step has no cross-group dependency — the sequential
//! twin is the reference that catches a regression in that assumption.

pub mod aggregate;
pub mod dedup;
pub mod error;
pub mod grouping;

pub use error::BatchError;
pub use grouping::{group_trips, GroupKey};

use rayon::prelude::*;

use x837_model::{ClaimRecord, TripRecord};
use x837_validate::{Severity, ValidationCategory, ValidationIssue, ValidationLevel, ValidationReport};

/// The claims built from one batch of trips, plus a report noting any
/// group or claim excluded from `claims` and why.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub claims: Vec<ClaimRecord>,
    pub report: ValidationReport,
}

/// Groups and aggregates `trips` into claims, running the per-group
/// aggregation in parallel.
pub fn group_and_build(trips: &[TripRecord]) -> BatchResult {
    build(trips, true)
}

/// Groups and aggregates `trips` into claims, running the per-group
/// aggregation on the calling thread. Behaviorally equivalent to
/// [`group_and_build`]; kept to verify the parallel path agrees with it.
pub fn group_and_build_sequential(trips: &[TripRecord]) -> BatchResult {
    build(trips, false)
}

fn build(trips: &[TripRecord], parallel: bool) -> BatchResult {
    let groups = grouping::group_trips(trips);
    let mut report = ValidationReport::new("batch", ValidationLevel::Full);

    let attempts: Vec<Result<ClaimRecord, BatchError>> = if parallel {
        groups
            .into_par_iter()
            .enumerate()
            .map(|(index, (_key, group_trips))| aggregate::aggregate_group(index + 1, &group_trips))
            .collect()
    } else {
        groups
            .into_iter()
            .enumerate()
            .map(|(index, (_key, group_trips))| aggregate::aggregate_group(index + 1, &group_trips))
            .collect()
    };

    let mut claims = Vec::with_capacity(attempts.len());
    for attempt in attempts {
        match attempt {
            Ok(claim) => claims.push(claim),
            Err(err) => report.add_issue(ValidationIssue::new(
                Severity::Error,
                ValidationCategory::Business,
                "BATCH_030",
                err.to_string(),
            )),
        }
    }

    let duplicates = dedup::duplicate_indices(&claims);
    for &index in &duplicates {
        report.add_issue(
            ValidationIssue::new(
                Severity::Error,
                ValidationCategory::Business,
                "BATCH_010",
                format!("duplicate (clm_number, frequency_code, original_claim_number) triple for {}", claims[index].claim.clm_number),
            )
            .with_field_path("claim.clm_number"),
        );
    }

    let excluded: std::collections::HashSet<usize> = duplicates.into_iter().collect();
    let claims = claims
        .into_iter()
        .enumerate()
        .filter_map(|(index, claim)| if excluded.contains(&index) { None } else { Some(claim) })
        .collect();

    BatchResult { claims, report }
}
