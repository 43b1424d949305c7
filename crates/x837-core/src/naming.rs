//! Output file-naming helper.
//!
//! The writer and compliance/payer checkers only ever see bytes; the
//! canonical output file name is metadata a caller derives once it knows
//! which state and batch sequence number it emitted.

use chrono::NaiveDate;

use x837_writer::UsageIndicator;

/// Builds the canonical output file name for one interchange:
/// `INB_<StateCode>PROFKZN_MMDDYYYY_<seq>.dat` in production, prefixed
/// with `TEST_` when `usage_indicator` is [`UsageIndicator::Test`].
pub fn file_name(state_code: &str, date: NaiveDate, seq: u32, usage_indicator: UsageIndicator) -> String {
    let mmddyyyy = date.format("%m%d%Y");
    let prefix = match usage_indicator {
        UsageIndicator::Test => "TEST_INB",
        UsageIndicator::Production => "INB",
    };
    format!("{prefix}_{state_code}PROFKZN_{mmddyyyy}_{seq}.dat")
}
