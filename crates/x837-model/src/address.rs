use serde::{Deserialize, Serialize};

/// A postal location used for provider, subscriber, and pickup/dropoff
/// addresses (N3/N4 segments and the CR109/CR110 location descriptors).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// A pickup or dropoff location used by ambulance trip records.
///
/// `location_code` is the two-letter designator used by the CR109/CR110
/// pickup/dropoff descriptor (e.g. the origin letter of an ambulance
/// modifier); `arrival_time`/`departure_time` are raw `HHMM` strings,
/// validated but not parsed into a time type — X12 time idioms like a
/// trailing `2400` don't round-trip cleanly through a typed clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationObject {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub location_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
}
