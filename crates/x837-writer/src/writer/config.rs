//! Writer-level configuration: envelope identification, delimiters, and
//! the CR109/CR110-vs-legacy pickup/dropoff emission switch.

use x837_types::X12Delimiters;

/// `T` (test) or `P` (production) interchange usage indicator (ISA15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageIndicator {
    Test,
    Production,
}

impl UsageIndicator {
    pub fn as_char(self) -> char {
        match self {
            Self::Test => 'T',
            Self::Production => 'P',
        }
    }
}

impl Default for UsageIndicator {
    fn default() -> Self {
        Self::Test
    }
}

/// Recognized envelope-identification and emission-mode configuration.
///
/// Field names mirror the configuration keys a caller supplies to the
/// coordinator: `interchange_sender_qual`/`interchange_sender_id` (ISA05/06),
/// `interchange_receiver_qual`/`interchange_receiver_id` (ISA07/08),
/// `gs_sender_code`/`gs_receiver_code` (GS02/03), `usage_indicator`, and
/// `use_cr1_locations`.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    pub interchange_sender_qual: String,
    pub interchange_sender_id: String,
    pub interchange_receiver_qual: String,
    pub interchange_receiver_id: String,
    pub gs_sender_code: String,
    pub gs_receiver_code: String,
    pub usage_indicator: UsageIndicator,
    /// When `true` (the default), `CR1` carries pickup/dropoff location
    /// descriptors in elements 9/10 and loops 2310E/F and 2420G/H are
    /// suppressed. When `false`, those loops are emitted instead and
    /// `CR1` carries only elements 1-8, with the legacy `NTE` trip
    /// descriptors alongside.
    pub use_cr1_locations: bool,
    pub delimiters: X12Delimiters,
    /// Diagnostic pretty-printing: a newline after every segment
    /// terminator. Carries no meaning to a payer.
    pub pretty: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            interchange_sender_qual: "ZZ".to_string(),
            interchange_sender_id: "SENDERID".to_string(),
            interchange_receiver_qual: "ZZ".to_string(),
            interchange_receiver_id: "RECEIVERID".to_string(),
            gs_sender_code: "SENDERID".to_string(),
            gs_receiver_code: "RECEIVERID".to_string(),
            usage_indicator: UsageIndicator::Test,
            use_cr1_locations: true,
            delimiters: X12Delimiters::default(),
            pretty: false,
        }
    }
}
