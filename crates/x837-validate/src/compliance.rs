//! X12 Compliance Checker.
//!
//! Re-parses emitted 837P bytes with [`x837_parser`] and checks envelope
//! balance, required segment presence, and segment ordering against the
//! 005010X222A1 implementation guide. Unlike the Pre-Submission Validator,
//! this module never touches a [`x837_model::ClaimRecord`] — it only sees
//! the bytes a caller is about to transmit (or received from elsewhere).

use x837_parser::{ParseError, X12Handler, X12StreamParser};
use x837_types::{Control, RawSegment};

use crate::error::ComplianceError;
use crate::validator::{Severity, ValidationCategory, ValidationIssue, ValidationLevel, ValidationReport};

/// Claim-header segment ranks, used to flag out-of-order segments within
/// loop 2300 before the first service line begins.
const HEADER_ORDER: &[(&str, i32)] = &[
    ("CLM", 10),
    ("DTP", 20),
    ("CR1", 30),
    ("CR2", 35),
    ("REF", 40),
    ("K3", 50),
    ("NTE", 60),
    ("CRC", 65),
    ("HI", 68),
    ("NM1", 70),
    ("AMT", 80),
];

/// Service-line segment ranks, used within loop 2400 once the first `LX`
/// or `SV1` is seen after a `CLM`.
const LINE_ORDER: &[(&str, i32)] = &[
    ("LX", 100),
    ("SV1", 110),
    ("DTP", 120),
    ("K3", 130),
    ("NM1", 140),
    ("REF", 150),
    ("AMT", 160),
    ("CAS", 170),
    ("MOA", 180),
    ("SVD", 190),
];

fn rank_of(table: &[(&str, i32)], id: &str) -> Option<i32> {
    table.iter().find(|(seg, _)| *seg == id).map(|(_, r)| *r)
}

/// Runs the Compliance Checker over raw emitted X12 bytes.
pub fn check(input: &[u8]) -> Result<ValidationReport, ComplianceError> {
    let mut checker = ComplianceChecker::new();
    X12StreamParser::parse(input, &mut checker)?;
    checker.finish();
    Ok(checker.report)
}

struct ComplianceChecker {
    report: ValidationReport,

    isa_control: Option<String>,
    gs_control: Option<String>,
    st_control: Option<String>,
    st_segment_count: u32,

    seen_bht: bool,
    seen_2010aa: u32,
    seen_2010ba: u32,
    clm_count: u32,
    current_clm_has_sv1: bool,
    cr1_count_in_claim: u32,

    in_line_context: bool,
    header_rank: i32,
    line_rank: i32,

    claim_header_pickup_dropoff: bool,
    line_pickup_dropoff: bool,
}

impl ComplianceChecker {
    fn new() -> Self {
        Self {
            report: ValidationReport::new("interchange", ValidationLevel::Full),
            isa_control: None,
            gs_control: None,
            st_control: None,
            st_segment_count: 0,
            seen_bht: false,
            seen_2010aa: 0,
            seen_2010ba: 0,
            clm_count: 0,
            current_clm_has_sv1: false,
            cr1_count_in_claim: 0,
            in_line_context: false,
            header_rank: 0,
            line_rank: 0,
            claim_header_pickup_dropoff: false,
            line_pickup_dropoff: false,
        }
    }

    fn error(&mut self, code: &str, message: impl Into<String>, pos: x837_types::SegmentPosition) {
        self.report.add_issue(
            ValidationIssue::new(Severity::Error, ValidationCategory::Structure, code, message)
                .with_position(pos),
        );
    }

    fn warn(&mut self, code: &str, message: impl Into<String>, pos: x837_types::SegmentPosition) {
        self.report.add_issue(
            ValidationIssue::new(Severity::Warning, ValidationCategory::Structure, code, message)
                .with_position(pos),
        );
    }

    fn reset_claim_state(&mut self) {
        self.current_clm_has_sv1 = false;
        self.cr1_count_in_claim = 0;
        self.in_line_context = false;
        self.header_rank = 0;
        self.line_rank = 0;
    }

    fn finish(&mut self) {
        if self.clm_count > 0 && !self.current_clm_has_sv1 {
            self.report.add_issue(ValidationIssue::new(
                Severity::Error,
                ValidationCategory::Structure,
                "COMP_NOSV1",
                "final claim has no SV1 service line",
            ));
        }
        if self.claim_header_pickup_dropoff && self.line_pickup_dropoff {
            self.report.add_issue(ValidationIssue::new(
                Severity::Warning,
                ValidationCategory::Structure,
                "COMP_PICKUP_AMBIG",
                "both claim-level and line-level pickup/dropoff loops are present",
            ));
        }
    }
}

impl X12Handler for ComplianceChecker {
    fn on_interchange_start(&mut self, isa: &RawSegment) -> Control {
        self.isa_control = Some(isa.get_element(12).to_string());
        Control::Continue
    }

    fn on_interchange_end(&mut self, iea: &RawSegment) {
        let expected = self.isa_control.clone().unwrap_or_default();
        let actual = iea.get_element(1);
        if expected != actual {
            self.error(
                "COMP_ENV_ISA",
                format!("ISA control number '{expected}' does not match IEA control number '{actual}'"),
                iea.position,
            );
        }
    }

    fn on_group_start(&mut self, gs: &RawSegment) -> Control {
        self.gs_control = Some(gs.get_element(5).to_string());
        Control::Continue
    }

    fn on_group_end(&mut self, ge: &RawSegment) {
        let expected = self.gs_control.clone().unwrap_or_default();
        let actual = ge.get_element(1);
        if expected != actual {
            self.error(
                "COMP_ENV_GS",
                format!("GS control number '{expected}' does not match GE control number '{actual}'"),
                ge.position,
            );
        }
    }

    fn on_transaction_start(&mut self, st: &RawSegment) -> Control {
        self.st_control = Some(st.get_element(1).to_string());
        self.st_segment_count = 1;
        self.seen_bht = false;
        self.seen_2010aa = 0;
        self.seen_2010ba = 0;
        self.clm_count = 0;
        self.reset_claim_state();
        self.claim_header_pickup_dropoff = false;
        self.line_pickup_dropoff = false;
        Control::Continue
    }

    fn on_transaction_end(&mut self, se: &RawSegment) {
        self.st_segment_count += 1;

        let expected_control = self.st_control.clone().unwrap_or_default();
        let actual_control = se.get_element(1);
        if expected_control != actual_control {
            self.error(
                "COMP_ENV_ST",
                format!("ST control number '{expected_control}' does not match SE control number '{actual_control}'"),
                se.position,
            );
        }

        let declared_count: u32 = se.get_element(0).parse().unwrap_or(0);
        if declared_count != self.st_segment_count {
            self.error(
                "COMP_SE_COUNT",
                format!(
                    "SE01 declares {declared_count} segments but the transaction set contains {}",
                    self.st_segment_count
                ),
                se.position,
            );
        }

        if !self.seen_bht {
            self.error("COMP_REQ_BHT", "transaction set is missing a BHT segment", se.position);
        }
        if self.seen_2010aa != 1 {
            self.error(
                "COMP_REQ_2010AA",
                format!("expected exactly one billing provider (2010AA) loop, found {}", self.seen_2010aa),
                se.position,
            );
        }
        if self.seen_2010ba != 1 {
            self.error(
                "COMP_REQ_2010BA",
                format!("expected exactly one subscriber (2010BA) loop, found {}", self.seen_2010ba),
                se.position,
            );
        }
        if self.clm_count == 0 {
            self.error("COMP_REQ_CLM", "transaction set has no CLM segments", se.position);
        }
    }

    fn on_segment(&mut self, segment: &RawSegment) -> Control {
        self.st_segment_count += if segment.is("ST") || segment.is("SE") { 0 } else { 1 };

        match segment.id.to_ascii_uppercase().as_str() {
            "BHT" => self.seen_bht = true,
            "NM1" => {
                let qualifier = segment.get_element(0);
                match qualifier {
                    "85" => self.seen_2010aa += 1,
                    "IL" => self.seen_2010ba += 1,
                    "PW" => {
                        if self.in_line_context {
                            self.line_pickup_dropoff = true;
                        } else {
                            self.claim_header_pickup_dropoff = true;
                        }
                    }
                    "45" => {
                        if self.in_line_context {
                            self.line_pickup_dropoff = true;
                        } else {
                            self.claim_header_pickup_dropoff = true;
                        }
                    }
                    _ => {}
                }
            }
            "CLM" => {
                if self.clm_count > 0 && !self.current_clm_has_sv1 {
                    self.error(
                        "COMP_CLM_NOSV1",
                        "a prior claim has no SV1 service line",
                        segment.position,
                    );
                }
                self.clm_count += 1;
                self.reset_claim_state();
            }
            "CR1" => {
                self.cr1_count_in_claim += 1;
                if self.cr1_count_in_claim > 1 {
                    self.error(
                        "COMP_CR1_DUP",
                        "more than one CR1 segment present for this claim",
                        segment.position,
                    );
                }
            }
            "LX" | "SV1" => {
                self.in_line_context = true;
                if segment.is("SV1") {
                    self.current_clm_has_sv1 = true;
                    let maybe_misplaced = segment.get_element(9);
                    let declared = segment.get_element(10);
                    if declared.is_empty() && matches!(maybe_misplaced, "Y" | "N") {
                        self.warn(
                            "COMP_SV1_EMERGENCY_POS",
                            "emergency indicator appears to be in SV1 element 10 instead of element 11",
                            segment.position,
                        );
                    }
                }
            }
            _ => {}
        }

        let table = if self.in_line_context { LINE_ORDER } else { HEADER_ORDER };
        let rank_slot = if self.in_line_context {
            &mut self.line_rank
        } else {
            &mut self.header_rank
        };

        if let Some(rank) = rank_of(table, segment.id) {
            if rank < *rank_slot {
                self.warn(
                    "COMP_SEGORDER",
                    format!("segment {} appears out of the expected 2300/2400 sequence", segment.id),
                    segment.position,
                );
            } else {
                *rank_slot = rank;
            }
        }

        Control::Continue
    }

    fn on_error(&mut self, error: ParseError) -> Control {
        self.report.add_issue(ValidationIssue::new(
            Severity::Error,
            ValidationCategory::Structure,
            "COMP_PARSE",
            error.to_string(),
        ));
        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_isa(control: &str) -> String {
        let mut isa = vec![b' '; x837_types::ISA_LENGTH];
        isa[0..3].copy_from_slice(b"ISA");
        isa[3] = b'*';
        isa[82] = b'^';
        isa[104] = b':';
        let control_bytes = control.as_bytes();
        isa[89..89 + control_bytes.len()].copy_from_slice(control_bytes);
        isa[105] = b'~';
        String::from_utf8(isa).unwrap()
    }

    fn wrap(body: &str) -> String {
        format!(
            "{isa}GS*HC*SENDER*RECEIVER*20260101*1200*1*X*005010X222A1~{body}SE*{count}*0001~GE*1*1~IEA*1*000000001~",
            isa = sample_isa("000000001"),
            body = body,
            count = body.matches('~').count() + 1,
        )
    }

    fn valid_transaction() -> String {
        wrap(
            "ST*837*0001~\
BHT*0019*00*BATCH001*20260101*1200*CH~\
NM1*41*2*ACME NEMT*****46*1234567890~\
NM1*85*2*ACME NEMT*****XX*1234567890~\
NM1*IL*1*DOE*JANE****MI*MEMBER001~\
CLM*CLM001*60.00***41:B:1*Y*A*Y*Y~\
DTP*472*D8*20260115~\
LX*1~\
SV1*HC:A0130*60.00*UN*1***Y~\
",
        )
    }

    #[test]
    fn test_valid_transaction_has_no_errors() {
        let report = check(valid_transaction().as_bytes()).unwrap();
        assert!(report.is_valid(), "{:?}", report.errors().collect::<Vec<_>>());
    }

    #[test]
    fn test_mismatched_se_control_number() {
        let input = valid_transaction().replace("SE*9*0001~", "SE*9*9999~");
        let report = check(input.as_bytes()).unwrap();
        assert!(report.errors().any(|i| i.code == "COMP_ENV_ST"));
    }

    #[test]
    fn test_missing_bht_is_error() {
        let input = valid_transaction().replace("BHT*0019*00*BATCH001*20260101*1200*CH~", "");
        let report = check(input.as_bytes()).unwrap();
        assert!(report.errors().any(|i| i.code == "COMP_REQ_BHT"));
    }

    #[test]
    fn test_missing_sv1_is_error() {
        let input = valid_transaction().replace("SV1*HC:A0130*60.00*UN*1***Y~", "");
        let report = check(input.as_bytes()).unwrap();
        assert!(report
            .errors()
            .any(|i| i.code == "COMP_NOSV1" || i.code == "COMP_CLM_NOSV1"));
    }

    #[test]
    fn test_duplicate_cr1_flagged() {
        let input = valid_transaction().replace(
            "DTP*472*D8*20260115~",
            "DTP*472*D8*20260115~CR1*LB*20***A*A~CR1*LB*20***A*A~",
        );
        let report = check(input.as_bytes()).unwrap();
        assert!(report.errors().any(|i| i.code == "COMP_CR1_DUP"));
    }
}
