//! Typed NEMT claim/service/location record types.
//!
//! These are the values the Enricher, Validator, Writer, and Batch
//! Processor pass between them. Every optional field in the data model
//! is `Option<T>` and every record ignores unknown input fields by
//! omitting `#[serde(deny_unknown_fields)]`.

pub mod address;
pub mod ambulance;
pub mod claim;
pub mod other_payer;
pub mod party;
pub mod service;
pub mod subscriber;
pub mod trip;

pub use address::{Address, LocationObject};
pub use ambulance::AmbulanceInfo;
pub use claim::{ClaimInfo, ClaimRecord};
pub use other_payer::OtherPayer;
pub use party::{Provider, Receiver, ReferringProvider, Submitter, SupervisingProvider};
pub use service::{Adjudication, LineCas, LineDates, ServiceRecord};
pub use subscriber::{MemberGroup, PersonName, Subscriber};
pub use trip::TripRecord;
