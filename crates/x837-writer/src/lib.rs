//! X12 005010X222A1 837P segment and interchange writer.
//!
//! Takes enriched, validated [`x837_model::ClaimRecord`] values and
//! serializes them into wire-format X12 bytes: a fixed-width `ISA`
//! interchange header, one `GS` functional group, one `ST`/`SE`
//! transaction set per claim, and within each the `BHT`/1000A/1000B/
//! 2000A/2000B header loops followed by the Loop 2300/2400 claim body.
//!
//! X12 carries no release character the way EDIFACT does: a data
//! element can never legally contain a delimiter byte, so this writer
//! rejects such values outright (see [`error::WriterError::ReservedSeparator`])
//! rather than escaping them.

pub mod error;
pub mod writer;

pub use error::WriterError;
pub use writer::{write_claim_loop, write_interchange, write_transaction_header, UsageIndicator, WriterConfig, X12DocumentWriter, X12SegmentWriter};
