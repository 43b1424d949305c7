//! Payer Rule Validator.
//!
//! Payer-specific content checks that sit alongside (but are distinct
//! from) the base-guide [`crate::compliance`] checks: K3 grammar, the
//! mandatory member-group `NTE`, supervising-provider presence, CAS
//! presence on denied claims, and cross-claim duplicate detection. All
//! of it is driven by a [`PayerRuleSet`] value rather than hardcoded
//! `match` arms, since these constraints vary by payer.

use std::collections::HashSet;

use x837_parser::{ParseError, X12Handler, X12StreamParser};
use x837_types::{Control, RawSegment};

use crate::error::ComplianceError;
use crate::validator::{Severity, ValidationCategory, ValidationIssue, ValidationLevel, ValidationReport};

/// One K3 grammar constraint: a literal prefix, optionally followed by
/// an enumerated closed set of allowed suffixes.
///
/// `SNWK-{I|O}` becomes `K3Pattern { prefix: "SNWK-", allowed_values:
/// Some(&["I", "O"]) }`; a free-form field like `SUB-…` becomes
/// `K3Pattern { prefix: "SUB-", allowed_values: None }` (presence and
/// prefix are checked, the payload is not further constrained).
#[derive(Debug, Clone)]
pub struct K3Pattern {
    pub prefix: String,
    pub allowed_values: Option<Vec<String>>,
    pub required: bool,
}

impl K3Pattern {
    pub fn enumerated(prefix: impl Into<String>, values: &[&str], required: bool) -> Self {
        Self {
            prefix: prefix.into(),
            allowed_values: Some(values.iter().map(|s| s.to_string()).collect()),
            required,
        }
    }

    pub fn free_form(prefix: impl Into<String>, required: bool) -> Self {
        Self {
            prefix: prefix.into(),
            allowed_values: None,
            required,
        }
    }

    fn matches(&self, value: &str) -> bool {
        match value.strip_prefix(self.prefix.as_str()) {
            Some(suffix) => match &self.allowed_values {
                Some(allowed) => allowed.iter().any(|v| v == suffix),
                None => true,
            },
            None => false,
        }
    }
}

/// Data-driven payer content rules.
#[derive(Debug, Clone)]
pub struct PayerRuleSet {
    pub payer_name: String,
    pub k3_patterns: Vec<K3Pattern>,
    pub special_transport_hcpcs: Vec<String>,
    pub require_cas_for_denied: bool,
    pub require_member_group_nte: bool,
}

impl Default for PayerRuleSet {
    /// The base K3 grammar: `PYMS`/`SNWK`/`TRPN` are
    /// closed enumerations, the rest are presence-only free-form fields.
    fn default() -> Self {
        Self {
            payer_name: "DEFAULT".to_string(),
            k3_patterns: vec![
                K3Pattern::enumerated("PYMS-", &["P", "D"], true),
                K3Pattern::free_form("SUB-", false),
                K3Pattern::free_form("IPAD-", false),
                K3Pattern::free_form("USER-", false),
                K3Pattern::enumerated("SNWK-", &["I", "O"], true),
                K3Pattern::free_form("TRPN-ASPUFEELECTRONIC", false),
                K3Pattern::free_form("TRPN-ASPUFEPAPER", false),
                K3Pattern::free_form("DREC-", false),
                K3Pattern::free_form("DADJ-", false),
                K3Pattern::free_form("PAIDDT-", false),
                K3Pattern::free_form("AL1-", false),
                K3Pattern::free_form("AL2-", false),
                K3Pattern::free_form("CY-", false),
                K3Pattern::free_form("ST-", false),
                K3Pattern::free_form("ZIP-", false),
            ],
            special_transport_hcpcs: vec![
                "A0090", "A0100", "A0110", "A0120", "A0140", "A0160", "A0170", "A0180", "A0190",
                "A0200", "A0210", "T2001",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            require_cas_for_denied: true,
            require_member_group_nte: true,
        }
    }
}

impl PayerRuleSet {
    /// Builds the default rule set labeled with a resolved payer preset's
    /// display name (e.g. from `x837_codes::payer::lookup("UHC_CS")`).
    pub fn for_payer(payer_name: impl Into<String>) -> Self {
        Self {
            payer_name: payer_name.into(),
            ..Self::default()
        }
    }
}

/// Runs the Payer Rule Validator over raw emitted X12 bytes.
pub fn check(input: &[u8], rules: &PayerRuleSet) -> Result<ValidationReport, ComplianceError> {
    let mut checker = PayerChecker::new(rules);
    X12StreamParser::parse(input, &mut checker)?;
    checker.finish();
    Ok(checker.report)
}

struct PayerChecker<'a> {
    rules: &'a PayerRuleSet,
    report: ValidationReport,

    seen_member_group_nte: bool,
    current_hcpcs_needs_supervisor: bool,
    seen_supervisor_in_claim: bool,
    claim_is_denied: bool,
    seen_cas_in_claim: bool,
    clm01: String,
    clm05_3: String,
    original_claim_number: String,
    seen_claim_keys: HashSet<(String, String, String)>,
    in_claim: bool,
}

impl<'a> PayerChecker<'a> {
    fn new(rules: &'a PayerRuleSet) -> Self {
        Self {
            rules,
            report: ValidationReport::new("interchange", ValidationLevel::Full),
            seen_member_group_nte: false,
            current_hcpcs_needs_supervisor: false,
            seen_supervisor_in_claim: false,
            claim_is_denied: false,
            seen_cas_in_claim: false,
            clm01: String::new(),
            clm05_3: String::new(),
            original_claim_number: String::new(),
            seen_claim_keys: HashSet::new(),
            in_claim: false,
        }
    }

    fn error(&mut self, code: &str, message: impl Into<String>, pos: x837_types::SegmentPosition) {
        self.report.add_issue(
            ValidationIssue::new(Severity::Error, ValidationCategory::Business, code, message)
                .with_position(pos),
        );
    }

    fn finalize_claim(&mut self, pos: x837_types::SegmentPosition) {
        if !self.in_claim {
            return;
        }
        if self.rules.require_member_group_nte && !self.seen_member_group_nte {
            self.error("PAYER_NTE_GRP", "claim is missing the mandatory NTE*ADD*GRP- member group note", pos);
        }
        if self.current_hcpcs_needs_supervisor && !self.seen_supervisor_in_claim {
            self.error(
                "PAYER_SUPERVISOR",
                "claim has a special-transport HCPCS but no supervising provider (2310D) loop",
                pos,
            );
        }
        if self.rules.require_cas_for_denied && self.claim_is_denied && !self.seen_cas_in_claim {
            self.error("PAYER_CAS_DENIED", "denied claim has no CAS adjustment segment", pos);
        }

        let key = (self.clm01.clone(), self.clm05_3.clone(), self.original_claim_number.clone());
        if !key.2.is_empty() && !self.seen_claim_keys.insert(key) {
            self.error(
                "PAYER_NEMIS_DUP",
                "duplicate claim within interchange: (CLM01, CLM05-3, REF*F8) already seen",
                pos,
            );
        }
    }

    fn start_claim(&mut self, clm: &RawSegment) {
        self.in_claim = true;
        self.seen_member_group_nte = false;
        self.current_hcpcs_needs_supervisor = false;
        self.seen_supervisor_in_claim = false;
        self.claim_is_denied = false;
        self.seen_cas_in_claim = false;
        self.clm01 = clm.get_element(0).to_string();
        self.clm05_3 = clm.get_component(4, 2).to_string();
        self.original_claim_number = String::new();
    }

    fn finish(&mut self) {
        let pos = x837_types::SegmentPosition::new(0, 0, 0);
        self.finalize_claim(pos);
    }
}

impl<'a> X12Handler for PayerChecker<'a> {
    fn on_segment(&mut self, segment: &RawSegment) -> Control {
        match segment.id.to_ascii_uppercase().as_str() {
            "CLM" => {
                if self.in_claim {
                    self.finalize_claim(segment.position);
                }
                self.start_claim(segment);
            }
            "REF" => {
                if segment.get_element(0) == "F8" {
                    self.original_claim_number = segment.get_element(1).to_string();
                }
            }
            "NTE" => {
                if segment.get_element(0) == "ADD" && segment.get_element(1).starts_with("GRP-") {
                    self.seen_member_group_nte = true;
                }
            }
            "NM1" => {
                if segment.get_element(0) == "DQ" {
                    self.seen_supervisor_in_claim = true;
                }
            }
            "SV1" => {
                let hcpcs = segment.get_component(0, 1);
                if self.rules.special_transport_hcpcs.iter().any(|c| c == hcpcs) {
                    self.current_hcpcs_needs_supervisor = true;
                }
            }
            "CAS" => {
                self.seen_cas_in_claim = true;
            }
            "K3" => {
                let value = segment.get_element(0);
                for sub in value.split(';') {
                    if sub.is_empty() {
                        continue;
                    }
                    let matched = self.rules.k3_patterns.iter().any(|p| p.matches(sub));
                    if !matched && self.rules.k3_patterns.iter().any(|p| sub.starts_with(p.prefix.as_str())) {
                        self.error(
                            "PAYER_K3_FORMAT",
                            format!("K3 value '{sub}' does not match the required grammar"),
                            segment.position,
                        );
                    }
                }
                for pattern in &self.rules.k3_patterns {
                    if pattern.required
                        && matches!(pattern.prefix.as_str(), "PYMS-" | "SNWK-")
                        && value.split(';').any(|sub| sub.starts_with(pattern.prefix.as_str()))
                    {
                        if pattern.prefix == "PYMS-"
                            && value.split(';').any(|sub| sub == "PYMS-D")
                        {
                            self.claim_is_denied = true;
                        }
                    }
                }
            }
            _ => {}
        }

        Control::Continue
    }

    fn on_error(&mut self, error: ParseError) -> Control {
        self.report.add_issue(ValidationIssue::new(
            Severity::Error,
            ValidationCategory::Business,
            "PAYER_PARSE",
            error.to_string(),
        ));
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_isa() -> String {
        let mut isa = vec![b' '; x837_types::ISA_LENGTH];
        isa[0..3].copy_from_slice(b"ISA");
        isa[3] = b'*';
        isa[82] = b'^';
        isa[104] = b':';
        isa[105] = b'~';
        String::from_utf8(isa).unwrap()
    }

    fn wrap(body: &str) -> String {
        format!(
            "{isa}GS*HC*S*R*20260101*1200*1*X*005010X222A1~ST*837*0001~{body}SE*2*0001~GE*1*1~IEA*1*000000001~",
            isa = sample_isa(),
        )
    }

    #[test]
    fn test_valid_claim_passes() {
        let input = wrap(
            "CLM*CLM001*60.00***41:B:1*Y*A*Y*Y~\
K3*PYMS-P;SNWK-I~\
NTE*ADD*GRP-G1;SGR-SG1;CLS-C1;PLN-P1;PRD-PR1~\
SV1*HC:A0130*60.00*UN*1***Y~\
",
        );
        let report = check(input.as_bytes(), &PayerRuleSet::default()).unwrap();
        assert!(report.is_valid(), "{:?}", report.errors().collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_member_group_nte() {
        let input = wrap(
            "CLM*CLM001*60.00***41:B:1*Y*A*Y*Y~\
K3*PYMS-P;SNWK-I~\
SV1*HC:A0130*60.00*UN*1***Y~\
",
        );
        let report = check(input.as_bytes(), &PayerRuleSet::default()).unwrap();
        assert!(report.errors().any(|i| i.code == "PAYER_NTE_GRP"));
    }

    #[test]
    fn test_special_transport_requires_supervisor() {
        let input = wrap(
            "CLM*CLM001*60.00***41:B:1*Y*A*Y*Y~\
K3*PYMS-P;SNWK-I~\
NTE*ADD*GRP-G1;SGR-SG1;CLS-C1;PLN-P1;PRD-PR1~\
SV1*HC:A0090*60.00*UN*1***Y~\
",
        );
        let report = check(input.as_bytes(), &PayerRuleSet::default()).unwrap();
        assert!(report.errors().any(|i| i.code == "PAYER_SUPERVISOR"));
    }

    #[test]
    fn test_supervisor_present_clears_error() {
        let input = wrap(
            "CLM*CLM001*60.00***41:B:1*Y*A*Y*Y~\
K3*PYMS-P;SNWK-I~\
NTE*ADD*GRP-G1;SGR-SG1;CLS-C1;PLN-P1;PRD-PR1~\
SV1*HC:A0090*60.00*UN*1***Y~\
NM1*DQ*1*JONES*SAM~\
",
        );
        let report = check(input.as_bytes(), &PayerRuleSet::default()).unwrap();
        assert!(!report.errors().any(|i| i.code == "PAYER_SUPERVISOR"));
    }

    #[test]
    fn test_denied_claim_requires_cas() {
        let input = wrap(
            "CLM*CLM001*60.00***41:B:1*Y*A*Y*Y~\
K3*PYMS-D;SNWK-I~\
NTE*ADD*GRP-G1;SGR-SG1;CLS-C1;PLN-P1;PRD-PR1~\
SV1*HC:A0130*60.00*UN*1***Y~\
",
        );
        let report = check(input.as_bytes(), &PayerRuleSet::default()).unwrap();
        assert!(report.errors().any(|i| i.code == "PAYER_CAS_DENIED"));
    }

    #[test]
    fn test_bad_k3_grammar() {
        let input = wrap(
            "CLM*CLM001*60.00***41:B:1*Y*A*Y*Y~\
K3*PYMS-MAYBE;SNWK-I~\
NTE*ADD*GRP-G1;SGR-SG1;CLS-C1;PLN-P1;PRD-PR1~\
SV1*HC:A0130*60.00*UN*1***Y~\
",
        );
        let report = check(input.as_bytes(), &PayerRuleSet::default()).unwrap();
        assert!(report.errors().any(|i| i.code == "PAYER_K3_FORMAT"));
    }

    #[test]
    fn test_duplicate_claim_detected() {
        let input = wrap(
            "CLM*CLM001*60.00***41:B:6*Y*A*Y*Y~\
REF*F8*ORIG001~\
K3*PYMS-P;SNWK-I~\
NTE*ADD*GRP-G1;SGR-SG1;CLS-C1;PLN-P1;PRD-PR1~\
SV1*HC:A0130*60.00*UN*1***Y~\
CLM*CLM001*60.00***41:B:6*Y*A*Y*Y~\
REF*F8*ORIG001~\
K3*PYMS-P;SNWK-I~\
NTE*ADD*GRP-G1;SGR-SG1;CLS-C1;PLN-P1;PRD-PR1~\
SV1*HC:A0130*60.00*UN*1***Y~\
",
        );
        let report = check(input.as_bytes(), &PayerRuleSet::default()).unwrap();
        assert!(report.errors().any(|i| i.code == "PAYER_NEMIS_DUP"));
    }
}
