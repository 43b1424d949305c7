//! Combines the trips in one grouping-key bucket into a single
//! [`ClaimRecord`], applying the submission-channel, total-charge, and
//! must-agree aggregation rules.

use rust_decimal::Decimal;

use x837_model::{ClaimInfo, ClaimRecord, TripRecord};

use crate::error::BatchError;

/// Builds the `seq`-th claim (1-based, used in the synthesized claim
/// number) from one group's trips. `seq` is the group's position in the
/// batch's first-seen key order, not a global counter shared across
/// calls.
pub fn aggregate_group(seq: usize, trips: &[TripRecord]) -> Result<ClaimRecord, BatchError> {
    let first = trips.first().expect("grouping never produces an empty bucket");

    let member_group = agree_on("member_group", trips, |t| t.member_group.clone())?;
    let payment_status = agree_on("payment_status", trips, |t| t.payment_status.clone())?;
    let rendering_network_indicator = agree_on("rendering_network_indicator", trips, |t| t.rendering_network_indicator.clone())?;

    let submission_channel = if trips.iter().any(|t| t.submission_channel == "ELECTRONIC") {
        "ELECTRONIC"
    } else {
        "PAPER"
    }
    .to_string();

    let total_charge: Decimal = trips.iter().map(|t| t.service.charge).sum();
    let clm_number = format!("KZN-{}-{:03}", first.dos.format("%Y%m%d"), seq);

    let claim = ClaimInfo {
        clm_number,
        total_charge,
        from: first.dos,
        frequency_code: first.frequency_code.clone(),
        original_claim_number: first.original_claim_number.clone(),
        payment_status,
        submission_channel: Some(submission_channel),
        rendering_network_indicator,
        member_group,
        ambulance: first.ambulance.clone(),
        ..Default::default()
    };

    Ok(ClaimRecord {
        submitter: first.submitter.clone(),
        receiver: first.receiver.clone(),
        billing_provider: first.billing_provider.clone(),
        subscriber: first.subscriber.clone(),
        rendering_provider: first.rendering_provider.clone(),
        supervising_provider: first.supervising_provider.clone(),
        referring_provider: first.referring_provider.clone(),
        claim,
        services: trips.iter().map(|t| t.service.clone()).collect(),
        other_payers: Vec::new(),
        source_trips: trips.to_vec(),
    })
}

fn agree_on<T: Clone + PartialEq>(
    field: &str,
    trips: &[TripRecord],
    get: impl Fn(&TripRecord) -> T,
) -> Result<T, BatchError> {
    let first = get(&trips[0]);
    if trips.iter().all(|t| get(t) == first) {
        Ok(first)
    } else {
        Err(BatchError::Disagreement { field: field.to_string() })
    }
}
