//! Pipeline configuration: envelope identification, emission mode, and
//! the payer-preset/payer-rule-set pair `build`/`build_batch` consult.

use chrono::NaiveDate;

use x837_validate::payer::PayerRuleSet;
use x837_writer::{UsageIndicator, WriterConfig};

/// Configuration consumed by [`crate::build`] and [`crate::build_batch`].
///
/// `Default` matches the documented defaults: `*`/`~` delimiters,
/// CR109/CR110 emission mode on (`use_cr1_locations: true`), and usage
/// indicator `T` (test).
#[derive(Debug, Clone)]
pub struct Config {
    pub interchange_sender_qual: String,
    pub interchange_sender_id: String,
    pub interchange_receiver_qual: String,
    pub interchange_receiver_id: String,
    pub gs_sender_code: String,
    pub gs_receiver_code: String,
    pub usage_indicator: UsageIndicator,
    /// A known symbolic key (`x837_codes::payer::lookup`); when set,
    /// overrides `receiver.payer_id`/`payer_name` on every claim built.
    pub payer_preset: Option<String>,
    pub use_cr1_locations: bool,
    /// Overrides the default `*` element separator, for debugging.
    pub element_separator: Option<u8>,
    /// Overrides the default `~` segment terminator, for debugging.
    pub segment_terminator: Option<u8>,
    /// Diagnostic pretty-printing: a newline after every segment.
    pub pretty: bool,
    /// Backs the `ISA`/`GS` timestamps and every claim's `BHT` date.
    pub creation_date: NaiveDate,
    pub payer_rules: PayerRuleSet,
}

impl Default for Config {
    fn default() -> Self {
        let writer_defaults = WriterConfig::default();
        Self {
            interchange_sender_qual: writer_defaults.interchange_sender_qual,
            interchange_sender_id: writer_defaults.interchange_sender_id,
            interchange_receiver_qual: writer_defaults.interchange_receiver_qual,
            interchange_receiver_id: writer_defaults.interchange_receiver_id,
            gs_sender_code: writer_defaults.gs_sender_code,
            gs_receiver_code: writer_defaults.gs_receiver_code,
            usage_indicator: writer_defaults.usage_indicator,
            payer_preset: None,
            use_cr1_locations: writer_defaults.use_cr1_locations,
            element_separator: None,
            segment_terminator: None,
            pretty: writer_defaults.pretty,
            creation_date: chrono::Utc::now().date_naive(),
            payer_rules: PayerRuleSet::default(),
        }
    }
}

impl Config {
    /// Builds the [`WriterConfig`] the writer layer expects, applying any
    /// delimiter overrides.
    pub fn writer_config(&self) -> WriterConfig {
        let mut delimiters = x837_types::X12Delimiters::default();
        if let Some(element) = self.element_separator {
            delimiters.element = element;
        }
        if let Some(segment) = self.segment_terminator {
            delimiters.segment = segment;
        }

        WriterConfig {
            interchange_sender_qual: self.interchange_sender_qual.clone(),
            interchange_sender_id: self.interchange_sender_id.clone(),
            interchange_receiver_qual: self.interchange_receiver_qual.clone(),
            interchange_receiver_id: self.interchange_receiver_id.clone(),
            gs_sender_code: self.gs_sender_code.clone(),
            gs_receiver_code: self.gs_receiver_code.clone(),
            usage_indicator: self.usage_indicator,
            use_cr1_locations: self.use_cr1_locations,
            delimiters,
            pretty: self.pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_usage_indicator_is_test() {
        assert_eq!(Config::default().usage_indicator, UsageIndicator::Test);
    }

    #[test]
    fn test_default_use_cr1_locations_is_true() {
        assert!(Config::default().use_cr1_locations);
    }

    #[test]
    fn test_default_delimiters_are_star_and_tilde() {
        let config = Config::default();
        let writer_config = config.writer_config();
        assert_eq!(writer_config.delimiters.element, b'*');
        assert_eq!(writer_config.delimiters.segment, b'~');
    }

    #[test]
    fn test_delimiter_override_applies() {
        let mut config = Config::default();
        config.element_separator = Some(b'|');
        let writer_config = config.writer_config();
        assert_eq!(writer_config.delimiters.element, b'|');
        assert_eq!(writer_config.delimiters.segment, b'~');
    }
}
