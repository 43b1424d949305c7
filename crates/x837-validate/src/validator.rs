//! Shared validation issue/report types used by the Pre-Submission
//! Validator, Compliance Checker, and Payer Rule Validator.

mod issue;
mod level;
mod report;

pub use issue::{Severity, ValidationCategory, ValidationIssue};
pub use level::ValidationLevel;
pub use report::ValidationReport;
