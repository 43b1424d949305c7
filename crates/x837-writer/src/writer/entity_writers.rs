//! Writes one claim's Loop 2300/2400 segments in the fixed order the
//! 837P implementation guide requires.
//!
//! Each function here writes one piece of the claim loop into an open
//! `X12DocumentWriter` transaction, in the order [`write_claim_loop`]
//! calls them. Field sourcing decisions the underlying data model
//! leaves open are recorded in `DESIGN.md`: most notably, `REF*D9`
//! (tracking number) and `REF*EA` (patient account number) are never
//! emitted because the data model carries no corresponding field, and
//! the `K3` segment's `IPAD-`/`USER-` sub-values are likewise always
//! absent.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use x837_model::{Adjudication, AmbulanceInfo, ClaimRecord, LocationObject, OtherPayer, ServiceRecord};

use super::config::WriterConfig;
use super::document_writer::X12DocumentWriter;
use crate::error::WriterError;

fn fmt_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Writes the full Loop 2300 sequence for one claim, including its
/// nested Loop 2400 service lines.
pub fn write_claim_loop(
    doc: &mut X12DocumentWriter,
    claim: &ClaimRecord,
    config: &WriterConfig,
) -> Result<(), WriterError> {
    require(!claim.claim.clm_number.is_empty(), "ClaimRecord", "clm_number")?;
    require(!claim.billing_provider.npi.is_empty(), "Provider", "npi")?;
    require(!claim.subscriber.member_id.is_empty(), "Subscriber", "member_id")?;
    require(!claim.services.is_empty(), "ClaimRecord", "services")?;
    check_mileage_adjacency(&claim.services)?;

    write_clm(doc, claim)?;
    write_service_date(doc, claim.claim.from, claim.claim.to)?;
    if let Some(ambulance) = &claim.claim.ambulance {
        write_cr1(doc, ambulance, config.use_cr1_locations)?;
    }
    if let Some(original) = &claim.claim.original_claim_number {
        if matches!(claim.claim.frequency_code.as_deref(), Some("6") | Some("7") | Some("8")) {
            doc.write_segment("REF", &["F8", original.as_str()])?;
        }
    }
    write_claim_k3_segments(doc, claim)?;
    write_member_group_nte(doc, claim)?;
    if !config.use_cr1_locations {
        write_legacy_trip_nte(doc, claim)?;
    }
    write_denial_adjustments(doc, claim)?;
    write_claim_level_cob_amounts(doc, &claim.other_payers)?;
    write_claim_dates(doc, claim)?;

    if let Some(rp) = &claim.referring_provider {
        let role = rp.role.as_deref().unwrap_or("DN");
        doc.write_segment_with_composites(
            "NM1",
            &[&[role], &["1"], &[rp.name.as_str()], &[], &[], &[], &["XX"], &[rp.npi.as_deref().unwrap_or("")]],
        )?;
    }
    if let Some(rendering) = &claim.rendering_provider {
        write_rendering_provider_loop(doc, rendering)?;
    }
    if let Some(supervisor) = &claim.supervising_provider {
        write_supervising_provider_loop(doc, supervisor, claim.claim.ambulance.as_ref())?;
    }
    if !config.use_cr1_locations {
        if let Some(ambulance) = &claim.claim.ambulance {
            if let Some(pickup) = &ambulance.pickup {
                write_location_loop(doc, "PW", pickup)?;
            }
            if let Some(dropoff) = &ambulance.dropoff {
                write_location_loop(doc, "45", dropoff)?;
            }
        }
    }
    for other_payer in &claim.other_payers {
        write_other_payer_loop(doc, other_payer)?;
    }

    for (index, service) in claim.services.iter().enumerate() {
        write_service_loop(doc, index + 1, service, config)?;
    }

    Ok(())
}

fn require(condition: bool, entity: &str, field: &str) -> Result<(), WriterError> {
    if condition {
        Ok(())
    } else {
        Err(WriterError::MissingField {
            entity: entity.to_string(),
            field: field.to_string(),
        })
    }
}

fn check_mileage_adjacency(services: &[ServiceRecord]) -> Result<(), WriterError> {
    let mut prev_was_mileage = true;
    for (index, service) in services.iter().enumerate() {
        let is_mileage = x837_codes::hcpcs::is_mileage(&service.hcpcs);
        if is_mileage && prev_was_mileage {
            return Err(WriterError::MileageAdjacency { index });
        }
        prev_was_mileage = is_mileage;
    }
    Ok(())
}

fn write_clm(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    let total_charge = fmt_money(claim.claim.total_charge);
    let pos = claim.claim.pos.as_deref().unwrap_or("");
    let frequency = claim.claim.frequency_code.as_deref().unwrap_or("");
    doc.write_segment_with_composites(
        "CLM",
        &[
            &[claim.claim.clm_number.as_str()],
            &[total_charge.as_str()],
            &[],
            &[],
            &[pos, "", frequency],
        ],
    )
}

fn write_service_date(doc: &mut X12DocumentWriter, from: NaiveDate, to: Option<NaiveDate>) -> Result<(), WriterError> {
    match to {
        Some(to) if to != from => {
            let range = format!("{}-{}", fmt_date(from), fmt_date(to));
            doc.write_segment("DTP", &["472", "RD8", &range])
        }
        _ => doc.write_segment("DTP", &["472", "D8", &fmt_date(from)]),
    }
}

fn write_cr1(doc: &mut X12DocumentWriter, ambulance: &AmbulanceInfo, use_cr1_locations: bool) -> Result<(), WriterError> {
    let weight = ambulance
        .patient_weight
        .map(|w| w.to_string())
        .unwrap_or_default();
    let w = doc.segment_writer();
    w.begin_segment("CR1");
    w.add_element(&weight)?;
    w.add_element(ambulance.weight_unit.as_deref().unwrap_or(""))?;
    w.add_element(ambulance.transport_code.as_deref().unwrap_or(""))?;
    w.add_empty_element();
    w.add_empty_element();
    w.add_element(ambulance.transport_reason.as_deref().unwrap_or(""))?;
    w.add_empty_element();
    w.add_empty_element();
    if use_cr1_locations {
        if let Some(pickup) = &ambulance.pickup {
            write_cr1_location(w, pickup)?;
        } else {
            w.add_empty_element();
        }
        if let Some(dropoff) = &ambulance.dropoff {
            write_cr1_location(w, dropoff)?;
        } else {
            w.add_empty_element();
        }
    }
    w.end_segment();
    Ok(())
}

fn write_cr1_location(w: &mut super::segment_writer::X12SegmentWriter, loc: &LocationObject) -> Result<(), WriterError> {
    w.begin_composite();
    w.add_component(&loc.location_code)?;
    w.add_component(&loc.line1)?;
    w.add_component(&loc.city)?;
    w.add_component(&loc.state)?;
    w.add_component(&loc.zip)?;
    w.end_composite();
    Ok(())
}

fn write_claim_k3_segments(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    if let Some(status) = &claim.claim.payment_status {
        doc.write_segment("K3", &[&format!("PYMS-{status}")])?;
    }
    doc.write_segment("K3", &[&format!("SUB-{}", claim.submitter.id)])?;
    if let Some(ni) = &claim.claim.rendering_network_indicator {
        doc.write_segment("K3", &[&format!("SNWK-{ni}")])?;
    }
    if let Some(channel) = &claim.claim.submission_channel {
        doc.write_segment("K3", &[&format!("TRPN-ASPUFE{channel}")])?;
    }

    let mut date_parts = Vec::new();
    if let Some(d) = claim.claim.date_of_receipt {
        date_parts.push(format!("DREC-{}", fmt_date(d)));
    }
    if let Some(d) = claim.claim.date_of_adjudication {
        date_parts.push(format!("DADJ-{}", fmt_date(d)));
    }
    if let Some(d) = claim.claim.date_of_payment {
        date_parts.push(format!("PAIDDT-{}", fmt_date(d)));
    }
    if !date_parts.is_empty() {
        doc.write_segment("K3", &[&date_parts.join(";")])?;
    }

    if let Some(rendering) = &claim.rendering_provider {
        let addr = &rendering.address;
        let al = format!("AL1-{};AL2-{}", addr.line1, addr.line2.as_deref().unwrap_or(""));
        doc.write_segment("K3", &[&al])?;
        let block = format!("CY-{};ST-{};ZIP-{}", addr.city, addr.state, addr.zip);
        doc.write_segment("K3", &[&block])?;
    }
    Ok(())
}

fn write_member_group_nte(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    let mg = claim.claim.member_group.clone().unwrap_or_default();
    let value = format!(
        "GRP-{};SGR-{};CLS-{};PLN-{};PRD-{}",
        mg.group_id, mg.sub_group_id, mg.class_id, mg.plan_id, mg.product_id
    );
    doc.write_segment("NTE", &["ADD", &value])
}

fn write_legacy_trip_nte(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    let Some(ambulance) = &claim.claim.ambulance else {
        return Ok(());
    };
    let trip = ambulance
        .trip_number
        .as_deref()
        .map(x837_model::ambulance::pad_trip_number)
        .unwrap_or_default();
    let special_need = ambulance.special_needs.as_deref().unwrap_or("N");
    let value = format!("TRIPNUM-{trip};SPECNEED-{special_need}");
    doc.write_segment("NTE", &["ADD", &value])
}

fn write_denial_adjustments(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    if claim.claim.payment_status.as_deref() != Some("D") {
        return Ok(());
    }
    let has_explicit_adjustments = claim
        .services
        .iter()
        .any(|s| s.adjudication.as_ref().is_some_and(|a| !a.line_cas.is_empty()));
    if !has_explicit_adjustments {
        let amount = fmt_money(claim.claim.total_charge);
        doc.write_segment("CAS", &["CO", "45", &amount])?;
    }
    doc.write_segment("MOA", &["", "MA130"])
}

fn sum_other_payer_field(payers: &[OtherPayer], get: impl Fn(&OtherPayer) -> Option<Decimal>) -> Option<Decimal> {
    let total: Decimal = payers.iter().filter_map(|p| get(p)).sum();
    if payers.iter().any(|p| get(p).is_some()) {
        Some(total)
    } else {
        None
    }
}

fn write_claim_level_cob_amounts(doc: &mut X12DocumentWriter, payers: &[OtherPayer]) -> Result<(), WriterError> {
    if payers.is_empty() {
        return Ok(());
    }
    if let Some(amt) = sum_other_payer_field(payers, |p| p.prior_payer_paid) {
        doc.write_segment("AMT", &["EAF", &fmt_money(amt)])?;
    }
    if let Some(amt) = sum_other_payer_field(payers, |p| p.patient_responsibility) {
        doc.write_segment("AMT", &["B6", &fmt_money(amt)])?;
    }
    if let Some(amt) = sum_other_payer_field(payers, |p| p.allowed_amount) {
        doc.write_segment("AMT", &["AU", &fmt_money(amt)])?;
    }
    if let Some(amt) = sum_other_payer_field(payers, |p| p.coverage_amount) {
        doc.write_segment("AMT", &["F2", &fmt_money(amt)])?;
    }
    Ok(())
}

fn write_claim_dates(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    if let Some(d) = claim.claim.date_of_receipt {
        doc.write_segment("DTP", &["050", "D8", &fmt_date(d)])?;
    }
    if let Some(d) = claim.claim.date_of_adjudication {
        doc.write_segment("DTP", &["036", "D8", &fmt_date(d)])?;
    }
    if let Some(d) = claim.claim.date_of_payment {
        doc.write_segment("DTP", &["573", "D8", &fmt_date(d)])?;
    }
    Ok(())
}

fn write_rendering_provider_loop(doc: &mut X12DocumentWriter, rendering: &x837_model::Provider) -> Result<(), WriterError> {
    doc.write_segment_with_composites(
        "NM1",
        &[&["82"], &["2"], &[rendering.name.as_str()], &[], &[], &[], &["XX"], &[rendering.npi.as_str()]],
    )?;
    doc.write_segment("PRV", &["PE", "PXC", &rendering.taxonomy])?;
    match &rendering.tax_id {
        Some(tax_id) => doc.write_segment("REF", &["0B", tax_id.as_str()])?,
        None => doc.write_segment("REF", &["G2", rendering.npi.as_str()])?,
    }
    Ok(())
}

fn write_supervising_provider_loop(
    doc: &mut X12DocumentWriter,
    supervisor: &x837_model::SupervisingProvider,
    ambulance: Option<&AmbulanceInfo>,
) -> Result<(), WriterError> {
    doc.write_segment_with_composites(
        "NM1",
        &[
            &["DQ"],
            &["1"],
            &[supervisor.name.as_str()],
            &[],
            &[],
            &[],
            &["XX"],
            &[supervisor.npi.as_deref().unwrap_or("")],
        ],
    )?;
    if let Some(trip) = ambulance.and_then(|a| a.trip_number.as_deref()) {
        let padded = x837_model::ambulance::pad_trip_number(trip);
        doc.write_segment("REF", &["LU", padded.as_str()])?;
    }
    Ok(())
}

fn write_location_loop(doc: &mut X12DocumentWriter, qualifier: &str, loc: &LocationObject) -> Result<(), WriterError> {
    doc.write_segment("NM1", &[qualifier, "2"])?;
    doc.write_segment("N3", &[&loc.line1])?;
    doc.write_segment("N4", &[&loc.city, &loc.state, &loc.zip])?;
    Ok(())
}

fn write_other_payer_loop(doc: &mut X12DocumentWriter, payer: &OtherPayer) -> Result<(), WriterError> {
    doc.write_segment_with_composites(
        "NM1",
        &[
            &["PR"],
            &["2"],
            &[payer.payer_name.as_deref().unwrap_or("")],
            &[],
            &[],
            &[],
            &["PI"],
            &[payer.payer_id.as_str()],
        ],
    )?;
    if let Some(amt) = payer.prior_payer_paid {
        doc.write_segment("AMT", &["EAF", &fmt_money(amt)])?;
    }
    if let Some(amt) = payer.patient_responsibility {
        doc.write_segment("AMT", &["B6", &fmt_money(amt)])?;
    }
    if let Some(amt) = payer.allowed_amount {
        doc.write_segment("AMT", &["AU", &fmt_money(amt)])?;
    }
    if let Some(amt) = payer.coverage_amount {
        doc.write_segment("AMT", &["F2", &fmt_money(amt)])?;
    }
    Ok(())
}

fn write_service_loop(
    doc: &mut X12DocumentWriter,
    line_number: usize,
    service: &ServiceRecord,
    config: &WriterConfig,
) -> Result<(), WriterError> {
    doc.write_segment("LX", &[&line_number.to_string()])?;

    let mut procedure = vec![service.hcpcs.as_str()];
    procedure.extend(service.modifiers.iter().map(|m| m.as_str()));
    let mut composite = vec!["HC"];
    composite.extend(procedure);
    let charge = fmt_money(service.charge);
    let units = service.units.to_string();
    let pos = service.pos.as_deref().unwrap_or("");
    let emergency = if service.emergency.unwrap_or(false) { "Y" } else { "" };
    doc.write_segment_with_composites(
        "SV1",
        &[
            &composite,
            &[charge.as_str()],
            &["UN"],
            &[units.as_str()],
            &[],
            &[],
            &[pos],
            &[],
            &[],
            &[],
            &[emergency],
        ],
    )?;

    if let Some(dos) = service.dos {
        doc.write_segment("DTP", &["472", "D8", &fmt_date(dos)])?;
    }

    let status = service
        .payment_status
        .as_deref()
        .map(String::from)
        .unwrap_or_default();
    if !status.is_empty() {
        doc.write_segment("K3", &[&format!("PYMS-{status}")])?;
    }

    if !config.use_cr1_locations {
        write_service_trip_nte(doc, service)?;
    }

    if !config.use_cr1_locations {
        if let Some(pickup) = &service.pickup {
            write_location_loop(doc, "PW", pickup)?;
        }
        if let Some(dropoff) = &service.dropoff {
            write_location_loop(doc, "45", dropoff)?;
        }
    }

    if let Some(adjudication) = &service.adjudication {
        write_line_adjudication(doc, adjudication)?;
    }

    Ok(())
}

fn write_service_trip_nte(doc: &mut X12DocumentWriter, service: &ServiceRecord) -> Result<(), WriterError> {
    if service.trip_number.is_none() && service.pickup.is_none() && service.dropoff.is_none() {
        return Ok(());
    }
    let trip = service
        .trip_number
        .as_deref()
        .map(x837_model::ambulance::pad_trip_number)
        .unwrap_or_default();
    let arrival = service.pickup.as_ref().and_then(|p| p.arrival_time.as_deref()).unwrap_or("");
    let departure = service.dropoff.as_ref().and_then(|d| d.departure_time.as_deref()).unwrap_or("");
    let value = format!("TRIPNUM-{trip};ARR-{arrival};DEP-{departure}");
    doc.write_segment("NTE", &["ADD", &value])
}

fn write_line_adjudication(doc: &mut X12DocumentWriter, adjudication: &Adjudication) -> Result<(), WriterError> {
    let paid_units = adjudication
        .paid_units
        .map(|u| u.to_string())
        .unwrap_or_default();
    doc.write_segment_with_composites(
        "SVD",
        &[
            &[adjudication.payer_id.as_str()],
            &[&fmt_money(adjudication.paid_amount)],
            &["HC"],
            &[paid_units.as_str()],
        ],
    )?;
    for cas in &adjudication.line_cas {
        doc.write_segment("CAS", &[&cas.group_code, &cas.reason_code, &fmt_money(cas.amount)])?;
    }
    if let Some(dates) = &adjudication.line_dates {
        if let Some(payment_date) = dates.payment_date {
            doc.write_segment("DTP", &["573", "D8", &fmt_date(payment_date)])?;
        }
    }
    Ok(())
}
