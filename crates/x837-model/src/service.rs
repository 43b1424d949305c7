use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::address::LocationObject;

/// A single monetary adjustment within an adjudicated service line (`CAS`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineCas {
    pub group_code: String,
    pub reason_code: String,
    pub amount: Decimal,
}

/// Line-level adjudication dates (`DTP*573`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineDates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

/// Per-line adjudication detail (Loop 2430 `SVD`/`CAS`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjudication {
    pub payer_id: String,
    pub paid_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_units: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_cas: Vec<LineCas>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_dates: Option<LineDates>,
}

/// One NEMT service line (Loop 2400).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub hcpcs: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
    pub charge: Decimal,
    pub units: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dos: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<LocationObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<LocationObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjudication: Option<Adjudication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
}
