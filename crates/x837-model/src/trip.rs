use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ambulance::AmbulanceInfo;
use crate::party::{Provider, Receiver, ReferringProvider, Submitter, SupervisingProvider};
use crate::service::ServiceRecord;
use crate::subscriber::{MemberGroup, Subscriber};

/// A flattened representation of a single service event, as produced by
/// an upstream trip-level system. The Batch Processor groups trips into
/// [`crate::claim::ClaimRecord`] values by `(billing_provider.npi,
/// rendering_provider.npi, dos, subscriber.member_id)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
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
    pub dos: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_claim_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    pub submission_channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rendering_network_indicator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_group: Option<MemberGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambulance: Option<AmbulanceInfo>,
    pub service: ServiceRecord,
}
