use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::address::Address;

/// A person's given/family name, used for the subscriber.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

/// The covered member (Loop 2010BA, `NM1*IL`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub member_id: String,
    pub name: PersonName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    /// `F`, `M`, or `U`.
    pub sex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Plan/group identification required on every claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberGroup {
    pub group_id: String,
    pub sub_group_id: String,
    pub class_id: String,
    pub plan_id: String,
    pub product_id: String,
}

impl MemberGroup {
    /// Returns `true` if every one of the five required fields is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.group_id.is_empty()
            && !self.sub_group_id.is_empty()
            && !self.class_id.is_empty()
            && !self.plan_id.is_empty()
            && !self.product_id.is_empty()
    }
}
