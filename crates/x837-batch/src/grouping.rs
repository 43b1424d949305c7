//! Groups trip records by `(billing_provider.npi, rendering_provider.npi,
//! dos, subscriber.member_id)`, preserving the order in which each key
//! first appeared so the batch's claim order tracks input arrival order.

use std::collections::HashMap;

use chrono::NaiveDate;
use x837_model::TripRecord;

/// The tuple trips are grouped by. `rendering_npi` is empty when a trip
/// carries no rendering provider, which still participates in the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub billing_npi: String,
    pub rendering_npi: String,
    pub dos: NaiveDate,
    pub member_id: String,
}

impl GroupKey {
    fn from_trip(trip: &TripRecord) -> Self {
        Self {
            billing_npi: trip.billing_provider.npi.clone(),
            rendering_npi: trip.rendering_provider.as_ref().map(|p| p.npi.clone()).unwrap_or_default(),
            dos: trip.dos,
            member_id: trip.subscriber.member_id.clone(),
        }
    }
}

/// Groups `trips` by [`GroupKey`]. Groups are returned in first-seen key
/// order; trips within a group keep their input order.
pub fn group_trips(trips: &[TripRecord]) -> Vec<(GroupKey, Vec<TripRecord>)> {
    let mut order: Vec<GroupKey> = Vec::new();
    let mut groups: HashMap<GroupKey, Vec<TripRecord>> = HashMap::new();

    for trip in trips {
        let key = GroupKey::from_trip(trip);
        groups.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            Vec::new()
        }).push(trip.clone());
    }

    order.into_iter().map(|key| {
        let trips = groups.remove(&key).expect("key was just inserted into order");
        (key, trips)
    }).collect()
}
