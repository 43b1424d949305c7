//! Pre-Submission Validator.
//!
//! Consumes an enriched [`ClaimRecord`] and produces a [`ValidationReport`].
//! Each mandatory or advisory check is its own private function returning
//! `Vec<ValidationIssue>`; [`validate`] composes them into one report.

use rust_decimal::Decimal;
use x837_codes::{hcpcs, modifiers, CodeKind};
use x837_model::ClaimRecord;

use crate::validator::{Severity, ValidationCategory, ValidationIssue, ValidationLevel, ValidationReport};

const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY", "DC",
];

const SPECIAL_TRANSPORT_HCPCS: &[&str] = &[
    "A0090", "A0110", "A0120", "A0140", "A0160", "A0170", "A0180", "A0190", "A0200", "A0210",
    "A0100", "T2001",
];

/// Runs the full Pre-Submission Validator over `claim` and returns its report.
pub fn validate(claim: &ClaimRecord) -> ValidationReport {
    let mut report = ValidationReport::new(claim.claim.clm_number.clone(), ValidationLevel::Full);

    report.add_issues(check_required_fields(claim));
    report.add_issues(check_formats(claim));
    report.add_issues(check_code_values(claim));
    report.add_issues(check_business_rules(claim));
    report.add_issues(check_charge_sum(claim));
    report.add_issues(check_mileage_adjacency(claim));
    report.add_issues(check_unknown_codes(claim));
    report.add_issues(check_supervising_provider(claim));
    report.add_issues(check_pickup_dropoff_ambiguity(claim));

    report
}

fn error(code: &str, message: impl Into<String>) -> ValidationIssue {
    ValidationIssue::new(Severity::Error, ValidationCategory::Business, code, message)
}

fn warn(code: &str, message: impl Into<String>) -> ValidationIssue {
    ValidationIssue::new(Severity::Warning, ValidationCategory::Business, code, message)
}

fn check_required_fields(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    macro_rules! require {
        ($cond:expr, $code:expr, $field:expr) => {
            if !$cond {
                issues.push(
                    ValidationIssue::new(
                        Severity::Error,
                        ValidationCategory::Structure,
                        $code,
                        format!("required field {} is missing", $field),
                    )
                    .with_field_path($field),
                );
            }
        };
    }

    require!(!claim.billing_provider.npi.is_empty(), "STR_REQ", "billing_provider.npi");
    require!(!claim.billing_provider.name.is_empty(), "STR_REQ", "billing_provider.name");
    require!(!claim.billing_provider.taxonomy.is_empty(), "STR_REQ", "billing_provider.taxonomy");
    require!(!claim.billing_provider.address.line1.is_empty(), "STR_REQ", "billing_provider.address.line1");
    require!(!claim.billing_provider.address.city.is_empty(), "STR_REQ", "billing_provider.address.city");
    require!(!claim.billing_provider.address.state.is_empty(), "STR_REQ", "billing_provider.address.state");
    require!(!claim.billing_provider.address.zip.is_empty(), "STR_REQ", "billing_provider.address.zip");

    require!(!claim.subscriber.member_id.is_empty(), "STR_REQ", "subscriber.member_id");
    require!(!claim.subscriber.name.first.is_empty(), "STR_REQ", "subscriber.name.first");
    require!(!claim.subscriber.name.last.is_empty(), "STR_REQ", "subscriber.name.last");
    require!(!claim.subscriber.sex.is_empty(), "STR_REQ", "subscriber.sex");

    require!(!claim.claim.clm_number.is_empty(), "STR_REQ", "claim.clm_number");

    require!(!claim.services.is_empty(), "STR_REQ", "services");

    issues
}

fn check_formats(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let fmt = |code: &str, field: &str, message: String| {
        ValidationIssue::new(Severity::Error, ValidationCategory::Format, code, message)
            .with_field_path(field)
    };

    if !claim.billing_provider.npi.is_empty()
        && !(claim.billing_provider.npi.len() == 10
            && claim.billing_provider.npi.chars().all(|c| c.is_ascii_digit()))
    {
        issues.push(fmt(
            "FMT_NPI",
            "billing_provider.npi",
            format!("NPI must be 10 digits, got '{}'", claim.billing_provider.npi),
        ));
    }

    if let Some(tax_id) = &claim.billing_provider.tax_id {
        if !(tax_id.len() == 9 && tax_id.chars().all(|c| c.is_ascii_digit())) {
            issues.push(fmt(
                "FMT_TAXID",
                "billing_provider.tax_id",
                format!("tax ID must be 9 digits, got '{tax_id}'"),
            ));
        }
    }

    if !claim.billing_provider.address.zip.is_empty() && !is_valid_zip(&claim.billing_provider.address.zip) {
        issues.push(fmt(
            "FMT_ZIP",
            "billing_provider.address.zip",
            format!("zip must match \\d{{5}}(-\\d{{4}})?, got '{}'", claim.billing_provider.address.zip),
        ));
    }

    if !claim.billing_provider.address.state.is_empty()
        && !US_STATES.contains(&claim.billing_provider.address.state.as_str())
    {
        issues.push(fmt(
            "FMT_STATE",
            "billing_provider.address.state",
            format!("'{}' is not a recognized US postal code", claim.billing_provider.address.state),
        ));
    }

    if claim.claim.clm_number.len() > 30 {
        issues.push(fmt(
            "FMT_CLMNUM",
            "claim.clm_number",
            format!("claim number exceeds 30 characters ({})", claim.claim.clm_number.len()),
        ));
    }

    issues
}

fn is_valid_zip(zip: &str) -> bool {
    let digits_only = |s: &str| s.len() == 5 && s.chars().all(|c| c.is_ascii_digit());
    if let Some((base, ext)) = zip.split_once('-') {
        digits_only(base) && ext.len() == 4 && ext.chars().all(|c| c.is_ascii_digit())
    } else {
        digits_only(zip)
    }
}

fn check_code_values(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let code_check = |kind: CodeKind, value: &str, code: &str, field: &str| -> Option<ValidationIssue> {
        if x837_codes::lookup(kind, value).is_none() {
            Some(
                ValidationIssue::new(
                    Severity::Error,
                    ValidationCategory::Code,
                    code,
                    format!("'{value}' is not a recognized {field} value"),
                )
                .with_field_path(field)
                .with_actual(value.to_string()),
            )
        } else {
            None
        }
    };

    if let Some(pos) = &claim.claim.pos {
        issues.extend(code_check(CodeKind::PlaceOfService, pos, "COD_POS", "claim.pos"));
    }
    if let Some(freq) = &claim.claim.frequency_code {
        issues.extend(code_check(CodeKind::FrequencyCode, freq, "COD_FREQ", "claim.frequency_code"));
    }
    if let Some(amb) = &claim.claim.ambulance {
        if let Some(tc) = &amb.transport_code {
            issues.extend(code_check(CodeKind::TransportCode, tc, "COD_TCODE", "claim.ambulance.transport_code"));
        }
        if let Some(tr) = &amb.transport_reason {
            issues.extend(code_check(CodeKind::TransportReason, tr, "COD_TREASON", "claim.ambulance.transport_reason"));
        }
    }
    if let Some(ni) = &claim.claim.rendering_network_indicator {
        if !matches!(ni.as_str(), "I" | "O") {
            issues.push(
                ValidationIssue::new(
                    Severity::Error,
                    ValidationCategory::Code,
                    "COD_NETIND",
                    format!("'{ni}' is not a recognized network indicator (expected I or O)"),
                )
                .with_field_path("claim.rendering_network_indicator"),
            );
        }
    }
    if let Some(ps) = &claim.claim.payment_status {
        if !matches!(ps.as_str(), "P" | "D") {
            issues.push(
                ValidationIssue::new(
                    Severity::Error,
                    ValidationCategory::Code,
                    "COD_PAYSTAT",
                    format!("'{ps}' is not a recognized payment status (expected P or D)"),
                )
                .with_field_path("claim.payment_status"),
            );
        }
    }
    if let Some(sc) = &claim.claim.submission_channel {
        if !matches!(sc.as_str(), "ELECTRONIC" | "PAPER") {
            issues.push(
                ValidationIssue::new(
                    Severity::Error,
                    ValidationCategory::Code,
                    "COD_CHANNEL",
                    format!("'{sc}' is not a recognized submission channel"),
                )
                .with_field_path("claim.submission_channel"),
            );
        }
    }

    issues
}

fn check_business_rules(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (i, service) in claim.services.iter().enumerate() {
        if service.modifiers.len() > 4 {
            issues.push(
                error("BIZ_MODCOUNT", format!("service {i} has {} modifiers, max 4", service.modifiers.len()))
                    .with_field_path(format!("services[{i}].modifiers")),
            );
        }
        for m in &service.modifiers {
            if m.len() != 2 {
                issues.push(
                    error("BIZ_MODLEN", format!("modifier '{m}' must be exactly 2 characters"))
                        .with_field_path(format!("services[{i}].modifiers")),
                );
            }
        }
    }

    match &claim.claim.member_group {
        Some(mg) if mg.is_complete() => {}
        _ => {
            issues.push(error("BIZ_MEMBERGROUP", "member_group must have all five fields populated")
                .with_field_path("claim.member_group"));
        }
    }

    if let Some(freq) = &claim.claim.frequency_code {
        if matches!(freq.as_str(), "6" | "7" | "8")
            && claim
                .claim
                .original_claim_number
                .as_deref()
                .map(str::is_empty)
                .unwrap_or(true)
        {
            issues.push(
                error(
                    "BIZ_ORIGCLM",
                    format!("frequency code {freq} requires a non-empty original_claim_number"),
                )
                .with_field_path("claim.original_claim_number"),
            );
        }
    }

    issues
}

fn check_charge_sum(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let is_void = claim.claim.frequency_code.as_deref() == Some("8");
    let service_sum: Decimal = claim.services.iter().map(|s| s.charge).sum();
    let tolerance = Decimal::new(1, 2);

    if is_void {
        return issues;
    }

    if claim.claim.total_charge <= Decimal::ZERO {
        issues.push(
            error("BIZ_CHARGEPOS", "total_charge must be greater than zero for non-void claims")
                .with_field_path("claim.total_charge"),
        );
    }

    if (claim.claim.total_charge - service_sum).abs() > tolerance {
        issues.push(
            error(
                "BIZ_CHARGESUM",
                format!(
                    "total_charge {} does not match sum of service charges {service_sum}",
                    claim.claim.total_charge
                ),
            )
            .with_field_path("claim.total_charge")
            .with_actual(claim.claim.total_charge.to_string())
            .with_expected(service_sum.to_string()),
        );
    }

    issues
}

fn check_mileage_adjacency(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (i, service) in claim.services.iter().enumerate() {
        if hcpcs::is_mileage(&service.hcpcs) {
            if i == 0 {
                issues.push(
                    error("BATCH_021", "mileage line cannot be the first service line")
                        .with_field_path(format!("services[{i}].hcpcs")),
                );
                continue;
            }
            let prev = &claim.services[i - 1];
            if hcpcs::is_mileage(&prev.hcpcs) {
                issues.push(
                    error("BATCH_021", "consecutive mileage lines are not permitted")
                        .with_field_path(format!("services[{i}].hcpcs")),
                );
            }
        }
    }

    issues
}

fn check_unknown_codes(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (i, service) in claim.services.iter().enumerate() {
        if hcpcs::lookup(&service.hcpcs).is_none() {
            issues.push(
                warn("COD_HCPCS_UNK", format!("HCPCS '{}' not found in the code registry", service.hcpcs))
                    .with_field_path(format!("services[{i}].hcpcs")),
            );
        }
        for m in &service.modifiers {
            if modifiers::lookup(m).is_none() {
                issues.push(
                    warn("COD_MOD_UNK", format!("modifier '{m}' not found in the code registry"))
                        .with_field_path(format!("services[{i}].modifiers")),
                );
            }
        }
    }

    issues
}

fn check_supervising_provider(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let needs_supervisor = claim
        .services
        .iter()
        .any(|s| SPECIAL_TRANSPORT_HCPCS.contains(&s.hcpcs.as_str()));

    if needs_supervisor && claim.supervising_provider.is_none() {
        issues.push(warn(
            "BIZ_SUPERVISOR",
            "supervising provider missing for a special-transport HCPCS",
        ));
    }

    issues
}

fn check_pickup_dropoff_ambiguity(claim: &ClaimRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let claim_level = claim
        .claim
        .ambulance
        .as_ref()
        .is_some_and(|a| a.pickup.is_some() || a.dropoff.is_some());

    let service_level = claim
        .services
        .iter()
        .any(|s| s.pickup.is_some() || s.dropoff.is_some());

    if claim_level && service_level {
        issues.push(warn(
            "BIZ_PICKUP_AMBIG",
            "claim-level and service-level pickup/dropoff are both present",
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use x837_model::{Address, ClaimInfo, MemberGroup, PersonName, Provider, ServiceRecord, Subscriber};

    fn valid_claim() -> ClaimRecord {
        ClaimRecord {
            billing_provider: Provider {
                npi: "1234567890".to_string(),
                name: "Acme NEMT".to_string(),
                tax_id: Some("123456789".to_string()),
                taxonomy: "3416A0800X".to_string(),
                address: Address {
                    line1: "1 Main St".to_string(),
                    line2: None,
                    city: "Akron".to_string(),
                    state: "OH".to_string(),
                    zip: "44301".to_string(),
                },
            },
            subscriber: Subscriber {
                member_id: "MEMBER001".to_string(),
                name: PersonName {
                    first: "Jane".to_string(),
                    last: "Doe".to_string(),
                },
                dob: None,
                sex: "F".to_string(),
                address: None,
            },
            claim: ClaimInfo {
                clm_number: "CLM001".to_string(),
                total_charge: Decimal::new(6000, 2),
                from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                pos: Some("41".to_string()),
                frequency_code: Some("1".to_string()),
                member_group: Some(MemberGroup {
                    group_id: "G1".to_string(),
                    sub_group_id: "SG1".to_string(),
                    class_id: "C1".to_string(),
                    plan_id: "P1".to_string(),
                    product_id: "PR1".to_string(),
                }),
                ..Default::default()
            },
            services: vec![ServiceRecord {
                hcpcs: "A0130".to_string(),
                charge: Decimal::new(6000, 2),
                units: Decimal::ONE,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_claim_has_no_errors() {
        let report = validate(&valid_claim());
        assert!(report.is_valid(), "{:?}", report.errors().collect::<Vec<_>>());
    }

    #[test]
    fn test_missing_required_field() {
        let mut c = valid_claim();
        c.billing_provider.npi = String::new();
        let report = validate(&c);
        assert!(!report.is_valid());
        assert!(report.errors().any(|i| i.code == "STR_REQ"));
    }

    #[test]
    fn test_bad_npi_format() {
        let mut c = valid_claim();
        c.billing_provider.npi = "123".to_string();
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "FMT_NPI"));
    }

    #[test]
    fn test_bad_zip_format() {
        let mut c = valid_claim();
        c.billing_provider.address.zip = "abc".to_string();
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "FMT_ZIP"));
    }

    #[test]
    fn test_zip_plus_four_accepted() {
        let mut c = valid_claim();
        c.billing_provider.address.zip = "44301-1234".to_string();
        let report = validate(&c);
        assert!(!report.errors().any(|i| i.code == "FMT_ZIP"));
    }

    #[test]
    fn test_unrecognized_state() {
        let mut c = valid_claim();
        c.billing_provider.address.state = "ZZ".to_string();
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "FMT_STATE"));
    }

    #[test]
    fn test_unknown_pos_code() {
        let mut c = valid_claim();
        c.claim.pos = Some("99999".to_string());
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "COD_POS"));
    }

    #[test]
    fn test_too_many_modifiers() {
        let mut c = valid_claim();
        c.services[0].modifiers = vec!["RH".into(), "HR".into(), "GA".into(), "GY".into(), "QM".into()];
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "BIZ_MODCOUNT"));
    }

    #[test]
    fn test_incomplete_member_group() {
        let mut c = valid_claim();
        c.claim.member_group = None;
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "BIZ_MEMBERGROUP"));
    }

    #[test]
    fn test_frequency_6_requires_original_claim_number() {
        let mut c = valid_claim();
        c.claim.frequency_code = Some("6".to_string());
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "BIZ_ORIGCLM"));

        c.claim.original_claim_number = Some("ORIG001".to_string());
        let report = validate(&c);
        assert!(!report.errors().any(|i| i.code == "BIZ_ORIGCLM"));
    }

    #[test]
    fn test_void_allows_zero_charge() {
        let mut c = valid_claim();
        c.claim.frequency_code = Some("8".to_string());
        c.claim.total_charge = Decimal::ZERO;
        c.services[0].charge = Decimal::ZERO;
        let report = validate(&c);
        assert!(!report.errors().any(|i| i.code == "BIZ_CHARGESUM" || i.code == "BIZ_CHARGEPOS"));
    }

    #[test]
    fn test_charge_sum_mismatch() {
        let mut c = valid_claim();
        c.claim.total_charge = Decimal::new(9999, 2);
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "BIZ_CHARGESUM"));
    }

    #[test]
    fn test_charge_sum_within_tolerance() {
        let mut c = valid_claim();
        c.claim.total_charge = Decimal::new(6001, 2);
        let report = validate(&c);
        assert!(!report.errors().any(|i| i.code == "BIZ_CHARGESUM"));
    }

    #[test]
    fn test_mileage_first_line_is_error() {
        let mut c = valid_claim();
        c.services[0].hcpcs = "A0425".to_string();
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "BATCH_021"));
    }

    #[test]
    fn test_mileage_after_transport_is_ok() {
        let mut c = valid_claim();
        c.services.push(ServiceRecord {
            hcpcs: "A0425".to_string(),
            charge: Decimal::ZERO,
            units: Decimal::new(10, 0),
            ..Default::default()
        });
        let report = validate(&c);
        assert!(!report.errors().any(|i| i.code == "BATCH_021"));
    }

    #[test]
    fn test_consecutive_mileage_lines_rejected() {
        let mut c = valid_claim();
        c.services.push(ServiceRecord {
            hcpcs: "A0425".to_string(),
            charge: Decimal::ZERO,
            units: Decimal::new(10, 0),
            ..Default::default()
        });
        c.services.push(ServiceRecord {
            hcpcs: "A0435".to_string(),
            charge: Decimal::ZERO,
            units: Decimal::new(5, 0),
            ..Default::default()
        });
        let report = validate(&c);
        assert!(report.errors().any(|i| i.code == "BATCH_021"));
    }

    #[test]
    fn test_unknown_hcpcs_is_warning_not_error() {
        let mut c = valid_claim();
        c.services[0].hcpcs = "Z9999".to_string();
        let report = validate(&c);
        assert!(report.is_valid());
        assert!(report.warnings().any(|i| i.code == "COD_HCPCS_UNK"));
    }

    #[test]
    fn test_special_transport_needs_supervisor() {
        let mut c = valid_claim();
        c.services[0].hcpcs = "A0090".to_string();
        let report = validate(&c);
        assert!(report.warnings().any(|i| i.code == "BIZ_SUPERVISOR"));
    }

    #[test]
    fn test_pickup_dropoff_ambiguity_warning() {
        use x837_model::{AmbulanceInfo, LocationObject};
        let mut c = valid_claim();
        c.claim.ambulance = Some(AmbulanceInfo {
            pickup: Some(LocationObject::default()),
            ..Default::default()
        });
        c.services[0].pickup = Some(LocationObject::default());
        let report = validate(&c);
        assert!(report.warnings().any(|i| i.code == "BIZ_PICKUP_AMBIG"));
    }
}
