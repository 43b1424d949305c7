use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ambulance::AmbulanceInfo;
use crate::other_payer::OtherPayer;
use crate::party::{Provider, Receiver, ReferringProvider, Submitter, SupervisingProvider};
use crate::service::ServiceRecord;
use crate::subscriber::{MemberGroup, Subscriber};
use crate::trip::TripRecord;

/// Claim-level billing detail (`CLM` and its companion segments).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimInfo {
    pub clm_number: String,
    pub total_charge: Decimal,
    pub from: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_code: Option<String>,
    /// Legacy field: `replacement` or `void`. The enricher translates
    /// this into `frequency_code` when the latter is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_claim_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendering_network_indicator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_group: Option<MemberGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambulance: Option<AmbulanceInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_receipt: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_adjudication: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_payment: Option<NaiveDate>,
}

/// The root value consumed by the Enricher, Validator, and Writer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub submitter: Submitter,
    pub receiver: Receiver,
    pub billing_provider: Provider,
    pub subscriber: Subscriber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendering_provider: Option<Provider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervising_provider: Option<SupervisingProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referring_provider: Option<ReferringProvider>,
    pub claim: ClaimInfo,
    pub services: Vec<ServiceRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_payers: Vec<OtherPayer>,
    /// Populated only by the Batch Processor; empty for single-claim
    /// submissions. Lets a caller trace a claim back to its contributing
    /// trips without the core needing a persistence layer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_trips: Vec<TripRecord>,
}
