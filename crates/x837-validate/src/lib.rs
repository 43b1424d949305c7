//! Pre-submission, compliance, and payer-rule validation for 837P claims.
//!
//! This crate provides three independent validation passes:
//!
//! 1. **Pre-submission** ([`presubmit`]): validates a [`x837_model::ClaimRecord`]
//!    before it is ever written to X12, catching missing fields, bad
//!    formats, unknown registry codes, and claim-level business rules.
//!
//! 2. **Compliance** ([`compliance`]): re-parses emitted X12 bytes with
//!    [`x837_parser`] and checks envelope balance, required segments, and
//!    segment ordering against the 005010X222A1 837P implementation guide.
//!
//! 3. **Payer rules** ([`payer`]): applies a data-driven [`payer::PayerRuleSet`]
//!    for checks that vary by payer rather than by the base guide.
//!
//! All three share the [`ValidationReport`]/[`ValidationIssue`] types in
//! [`validator`].

pub mod compliance;
pub mod error;
pub mod payer;
pub mod presubmit;
pub mod validator;

pub use error::ComplianceError;
pub use validator::{Severity, ValidationCategory, ValidationIssue, ValidationLevel, ValidationReport};
