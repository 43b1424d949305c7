use serde::{Deserialize, Serialize};

use crate::address::Address;

/// The party responsible for the submission (Loop 1000A, `NM1*41`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submitter {
    pub name: String,
    pub id: String,
}

/// The destination payer (Loop 1000B, `NM1*40`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    pub payer_name: String,
    pub payer_id: String,
}

/// A billing or rendering provider (Loop 2010AA / 2310B).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub npi: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    pub taxonomy: String,
    pub address: Address,
}

/// The supervising provider (Loop 2310D), required for certain
/// special-transport HCPCS codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupervisingProvider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
}

/// The referring provider (Loop 2310A).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferringProvider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npi: Option<String>,
    /// `DN` (referring) or `P3` (primary care provider).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
