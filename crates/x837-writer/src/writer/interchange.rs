//! Top-level assembly: wraps one or more claims into a single
//! interchange, one functional group, and one transaction set per claim.

use chrono::NaiveDate;

use x837_model::ClaimRecord;
use x837_types::ControlNumbers;

use super::config::WriterConfig;
use super::document_writer::X12DocumentWriter;
use super::entity_writers::write_claim_loop;
use super::header::write_transaction_header;
use crate::error::WriterError;

/// Writes every claim in `claims` into one interchange: a single
/// `ISA`/`GS` pair wrapping one `ST`/`SE` transaction set per claim.
///
/// `creation_date` backs both the `ISA`/`GS` timestamps and each claim's
/// `BHT` creation date/time. `control_numbers` is mutated in place so a
/// caller can thread the same counter across multiple interchanges.
pub fn write_interchange(
    claims: &[ClaimRecord],
    config: &WriterConfig,
    control_numbers: &mut ControlNumbers,
    creation_date: NaiveDate,
) -> Result<Vec<u8>, WriterError> {
    let mut doc = X12DocumentWriter::new(config.delimiters, config.pretty);
    let yymmdd = creation_date.format("%y%m%d").to_string();
    let ccyymmdd = creation_date.format("%Y%m%d").to_string();
    let hhmm = creation_date.format("%H%M").to_string();

    doc.begin_interchange(
        control_numbers,
        &config.interchange_sender_qual,
        &config.interchange_sender_id,
        &config.interchange_receiver_qual,
        &config.interchange_receiver_id,
        &yymmdd,
        &hhmm,
        config.usage_indicator.as_char(),
    );
    doc.begin_group(control_numbers, &config.gs_sender_code, &config.gs_receiver_code, &ccyymmdd, &hhmm)?;

    for claim in claims {
        let st_control = doc.begin_transaction(control_numbers)?;
        write_transaction_header(&mut doc, claim, st_control, creation_date)?;
        write_claim_loop(&mut doc, claim, config)?;
        doc.end_transaction()?;
    }

    doc.end_group()?;
    doc.end_interchange()?;
    Ok(doc.into_bytes())
}
