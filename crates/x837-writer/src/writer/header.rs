//! Writes the transaction-set header that precedes every claim's Loop
//! 2300: `BHT`, Loop 1000A/1000B (submitter/receiver), and the Loop
//! 2000A/2000B hierarchical levels (billing provider, subscriber) with
//! their nested 2010 name loops.
//!
//! One claim maps to one `ST`/`SE` transaction set here: the billing
//! provider and subscriber hierarchy is rebuilt per claim rather than
//! shared across claims in the same functional group, since the data
//! model carries no concept of a billing-provider batch boundary of its
//! own (the Batch Processor's grouping key decides which claims end up
//! in the same functional group before the writer ever sees them).

use chrono::NaiveDate;

use x837_model::ClaimRecord;

use super::document_writer::X12DocumentWriter;
use crate::error::WriterError;

/// Writes `BHT` plus loops 1000A/1000B/2000A/2010AA/2000B/2010BA/2010BB
/// for one claim's transaction set. Call after `begin_transaction` and
/// before [`super::entity_writers::write_claim_loop`].
pub fn write_transaction_header(
    doc: &mut X12DocumentWriter,
    claim: &ClaimRecord,
    st_control: u32,
    creation_date: NaiveDate,
) -> Result<(), WriterError> {
    write_bht(doc, st_control, creation_date)?;
    write_submitter_loop(doc, claim)?;
    write_receiver_loop(doc, claim)?;
    write_billing_provider_loop(doc, claim)?;
    write_subscriber_loop(doc, claim)?;
    Ok(())
}

fn write_bht(doc: &mut X12DocumentWriter, st_control: u32, creation_date: NaiveDate) -> Result<(), WriterError> {
    let ref_id = format!("{st_control:04}");
    let date = creation_date.format("%Y%m%d").to_string();
    let time = creation_date.format("%H%M").to_string();
    doc.write_segment_with_composites("BHT", &[&["0019"], &["00"], &[ref_id.as_str()], &[date.as_str()], &[time.as_str()], &["CH"]])
}

fn write_submitter_loop(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    doc.write_segment_with_composites(
        "NM1",
        &[&["41"], &["2"], &[claim.submitter.name.as_str()], &[], &[], &[], &["46"], &[claim.submitter.id.as_str()]],
    )?;
    doc.write_segment("PER", &["IC", claim.submitter.name.as_str()])
}

fn write_receiver_loop(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    doc.write_segment_with_composites(
        "NM1",
        &[&["40"], &["2"], &[claim.receiver.payer_name.as_str()], &[], &[], &[], &["46"], &[claim.receiver.payer_id.as_str()]],
    )
}

fn write_billing_provider_loop(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    doc.write_segment("HL", &["1", "", "20", "1"])?;
    doc.write_segment("PRV", &["BI", "PXC", claim.billing_provider.taxonomy.as_str()])?;
    doc.write_segment_with_composites(
        "NM1",
        &[
            &["85"],
            &["2"],
            &[claim.billing_provider.name.as_str()],
            &[],
            &[],
            &[],
            &["XX"],
            &[claim.billing_provider.npi.as_str()],
        ],
    )?;
    let addr = &claim.billing_provider.address;
    doc.write_segment("N3", &[addr.line1.as_str()])?;
    doc.write_segment("N4", &[addr.city.as_str(), addr.state.as_str(), addr.zip.as_str()])?;
    if let Some(tax_id) = &claim.billing_provider.tax_id {
        doc.write_segment("REF", &["EI", tax_id.as_str()])?;
    }
    Ok(())
}

fn write_subscriber_loop(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    doc.write_segment("HL", &["2", "1", "22", "0"])?;
    let sex = claim.subscriber.sex.as_str();
    doc.write_segment("SBR", &["P", "18", "", "", "", "", "", "", "CI"])?;
    doc.write_segment_with_composites(
        "NM1",
        &[
            &["IL"],
            &["1"],
            &[claim.subscriber.name.last.as_str()],
            &[claim.subscriber.name.first.as_str()],
            &[],
            &[],
            &[],
            &["MI"],
            &[claim.subscriber.member_id.as_str()],
        ],
    )?;
    if let Some(addr) = &claim.subscriber.address {
        doc.write_segment("N3", &[addr.line1.as_str()])?;
        doc.write_segment("N4", &[addr.city.as_str(), addr.state.as_str(), addr.zip.as_str()])?;
    }
    if let Some(dob) = claim.subscriber.dob {
        doc.write_segment("DMG", &["D8", &dob.format("%Y%m%d").to_string(), sex])?;
    } else {
        doc.write_segment("DMG", &["D8", "", sex])?;
    }
    write_payer_name_loop(doc, claim)
}

fn write_payer_name_loop(doc: &mut X12DocumentWriter, claim: &ClaimRecord) -> Result<(), WriterError> {
    doc.write_segment_with_composites(
        "NM1",
        &[
            &["PR"],
            &["2"],
            &[claim.receiver.payer_name.as_str()],
            &[],
            &[],
            &[],
            &["PI"],
            &[claim.receiver.payer_id.as_str()],
        ],
    )
}
