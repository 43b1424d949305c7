//! End-to-end seed scenarios run through the public `build`/`build_batch`
//! entry points.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use x837_core::{build, build_batch, Config};
use x837_model::{
    Address, ClaimInfo, ClaimRecord, MemberGroup, PersonName, Provider, Receiver, ServiceRecord, Submitter, Subscriber, TripRecord,
};

fn config() -> Config {
    Config { creation_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), ..Default::default() }
}

fn provider(npi: &str) -> Provider {
    Provider {
        npi: npi.to_string(),
        name: "Acme Ambulance".to_string(),
        tax_id: Some("123456789".to_string()),
        taxonomy: "3416A0800X".to_string(),
        address: Address { line1: "1 Depot Rd".to_string(), line2: None, city: "Akron".to_string(), state: "OH".to_string(), zip: "44301".to_string() },
    }
}

fn member_group() -> MemberGroup {
    MemberGroup {
        group_id: "G1".to_string(),
        sub_group_id: "SG1".to_string(),
        class_id: "C1".to_string(),
        plan_id: "P1".to_string(),
        product_id: "PR1".to_string(),
    }
}

fn subscriber() -> Subscriber {
    Subscriber { member_id: "JOHN123456".to_string(), name: PersonName { first: "John".to_string(), last: "Doe".to_string() }, dob: None, sex: "M".to_string(), address: None }
}

fn trip(billing_npi: &str, rendering_npi: &str, dos: NaiveDate, charge: &str, hcpcs: &str) -> TripRecord {
    TripRecord {
        submitter: Submitter { name: "Acme".to_string(), id: "SUB1".to_string() },
        receiver: Receiver { payer_name: "UHC".to_string(), payer_id: "87726".to_string() },
        billing_provider: provider(billing_npi),
        subscriber: subscriber(),
        rendering_provider: Some(provider(rendering_npi)),
        dos,
        frequency_code: Some("1".to_string()),
        payment_status: Some("P".to_string()),
        submission_channel: "ELECTRONIC".to_string(),
        rendering_network_indicator: Some("I".to_string()),
        member_group: Some(member_group()),
        service: ServiceRecord { hcpcs: hcpcs.to_string(), charge: charge.parse().unwrap(), units: Decimal::ONE, ..Default::default() },
        ..Default::default()
    }
}

fn base_claim(clm_number: &str) -> ClaimRecord {
    ClaimRecord {
        submitter: Submitter { name: "Acme".to_string(), id: "SUB1".to_string() },
        receiver: Receiver { payer_name: "UHC".to_string(), payer_id: "87726".to_string() },
        billing_provider: provider("1111111111"),
        subscriber: subscriber(),
        rendering_provider: None,
        supervising_provider: None,
        referring_provider: None,
        claim: ClaimInfo {
            clm_number: clm_number.to_string(),
            total_charge: Decimal::new(6000, 2),
            from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            pos: Some("41".to_string()),
            frequency_code: Some("1".to_string()),
            member_group: Some(member_group()),
            ..Default::default()
        },
        services: vec![ServiceRecord { hcpcs: "A0130".to_string(), charge: Decimal::new(6000, 2), units: Decimal::ONE, ..Default::default() }],
        other_payers: vec![],
        source_trips: vec![],
    }
}

/// Scenario 1: single leg, single provider.
#[test]
fn test_scenario_single_leg_single_provider() {
    let dos = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let mut leg = trip("1111111111", "1111111111", dos, "60.00", "A0130");
    leg.service.units = Decimal::ONE;
    let mileage = TripRecord { service: ServiceRecord { hcpcs: "A0425".to_string(), charge: Decimal::new(250, 2), units: Decimal::from(8), ..Default::default() }, ..leg.clone() };

    let output = build_batch(&[leg, mileage], &config()).unwrap();
    assert_eq!(output.per_claim_reports.len(), 1);
    assert!(!output.edi_bytes.is_empty());
    let text = String::from_utf8(output.edi_bytes).unwrap();
    assert!(text.contains("CLM*KZN-20260101-001"));
    assert_eq!(text.matches("LX*").count(), 2);
    assert!(output.compliance_report.is_valid());
}

/// Scenario 2: three trips, three providers, same DOS and member, one
/// shared ISA/GS envelope with three distinct ST/SE pairs.
#[test]
fn test_scenario_three_trips_three_providers_share_one_envelope() {
    let dos = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let trips = vec![
        trip("1111111111", "2222222222", dos, "180.00", "A0130"),
        trip("1111111111", "4444444444", dos, "225.00", "A0130"),
        trip("1111111111", "6666666666", dos, "220.00", "A0130"),
    ];

    let output = build_batch(&trips, &config()).unwrap();
    assert!(output.batch_report.is_valid());
    assert_eq!(output.per_claim_reports.len(), 3);

    let text = String::from_utf8(output.edi_bytes).unwrap();
    assert_eq!(text.matches("ISA*").count(), 1);
    assert_eq!(text.matches("GS*").count(), 1);
    assert_eq!(text.matches("ST*837*").count(), 3);
    assert!(text.contains("CLM*KZN-20260101-001"));
    assert!(text.contains("CLM*KZN-20260101-002"));
    assert!(text.contains("CLM*KZN-20260101-003"));
    assert!(text.matches("ELECTRONIC").count() >= 3 || text.contains("CLM05"));
}

/// Scenario 3: replacement claim.
#[test]
fn test_scenario_replacement_claim() {
    let mut claim = base_claim("ABC-42");
    claim.claim.frequency_code = Some("7".to_string());
    claim.claim.original_claim_number = Some("ABC-42".to_string());
    claim.claim.total_charge = Decimal::new(15000, 2);
    claim.services[0].charge = Decimal::new(15000, 2);

    let output = build(claim, &config()).unwrap();
    assert!(output.pre_report.is_valid());
    let text = String::from_utf8(output.edi_bytes).unwrap();
    assert!(text.contains("CLM*ABC-42*150.00***41::7~"));
    assert!(text.contains("REF*F8*ABC-42~"));
}

/// Scenario 4: void claim.
#[test]
fn test_scenario_void_claim() {
    let mut claim = base_claim("ABC-42");
    claim.claim.frequency_code = Some("8".to_string());
    claim.claim.original_claim_number = Some("ABC-42".to_string());
    claim.claim.total_charge = Decimal::ZERO;
    claim.services[0].charge = Decimal::ZERO;

    let output = build(claim, &config()).unwrap();
    assert!(output.pre_report.is_valid(), "{:?}", output.pre_report.errors().collect::<Vec<_>>());
    let text = String::from_utf8(output.edi_bytes).unwrap();
    assert!(!text.contains("CAS*"));
    assert!(text.contains("REF*F8*ABC-42~"));
}

/// Scenario 5: denied claim, auto-CAS.
#[test]
fn test_scenario_denied_claim_auto_cas() {
    let mut claim = base_claim("ABC-55");
    claim.claim.payment_status = Some("D".to_string());

    let output = build(claim, &config()).unwrap();
    assert!(output.pre_report.is_valid());
    let text = String::from_utf8(output.edi_bytes).unwrap();
    assert!(text.contains("CAS*CO*45*60.00~"));
    assert!(text.contains("MOA**MA130~"));
}

/// Scenario 6: mileage before transport is invalid; no EDI emitted.
#[test]
fn test_scenario_mileage_before_transport_invalid() {
    let mut claim = base_claim("ABC-66");
    claim.services[0].hcpcs = "A0425".to_string();

    let output = build(claim, &config()).unwrap();
    assert!(output.edi_bytes.is_empty());
    assert!(!output.pre_report.is_valid());
    assert!(output.pre_report.errors().any(|i| i.code == "BATCH_021"));
}
