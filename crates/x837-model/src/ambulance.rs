use serde::{Deserialize, Serialize};

use crate::address::LocationObject;

/// Ambulance transport detail carried at claim level (`CR1` segment and,
/// in legacy emission mode, loops 2310E/F).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmbulanceInfo {
    /// `LB` or `KG`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_weight: Option<rust_decimal::Decimal>,
    /// `A`..`E`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_code: Option<String>,
    /// `A`..`E` or `DH`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_reason: Option<String>,
    /// Raw trip number; zero-padded to 9 digits on emit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_number: Option<String>,
    /// `Y` or `N`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_needs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<LocationObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<LocationObject>,
}

/// Pads a raw trip number to 9 digits for CR1/K3 emission.
///
/// Non-numeric input is passed through unpadded — the validator is
/// responsible for rejecting it before the writer ever sees it.
pub fn pad_trip_number(raw: &str) -> String {
    if raw.chars().all(|c| c.is_ascii_digit()) && raw.len() < 9 {
        format!("{raw:0>9}")
    } else {
        raw.to_string()
    }
}
