//! Public entry points for the NEMT 837P claim pipeline.
//!
//! [`build`] runs one claim through enrichment, pre-submission
//! validation, EDI writing, compliance checking, and payer-rule
//! checking. [`build_batch`] groups trip records into claims first (via
//! [`x837_batch`]) and runs each surviving claim through the same
//! pipeline, wrapping every claim's transaction set into one interchange.
//!
//! Both functions own a fresh [`ControlNumbers`] for the duration of one
//! call: per spec, that counter has a single owner for the lifetime of
//! one interchange emission, and nothing outside this crate may read or
//! mutate it mid-build.

pub mod config;
pub mod error;
pub mod naming;

pub use config::Config;
pub use error::CoreError;

use x837_model::{ClaimRecord, TripRecord};
use x837_types::ControlNumbers;
use x837_validate::{ValidationLevel, ValidationReport};

/// The reports and bytes produced by [`build`] for one claim.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub edi_bytes: Vec<u8>,
    pub pre_report: ValidationReport,
    pub compliance_report: ValidationReport,
    pub payer_report: ValidationReport,
}

/// The bytes and reports produced by [`build_batch`] for a batch of
/// trips: one `batch_report` from grouping/aggregation/dedup, one
/// pre-submission report per surviving claim, and, if at least one claim
/// was emitted, the compliance/payer reports for the whole interchange.
#[derive(Debug, Clone)]
pub struct BatchBuildOutput {
    pub edi_bytes: Vec<u8>,
    pub batch_report: ValidationReport,
    pub per_claim_reports: Vec<ValidationReport>,
    pub compliance_report: ValidationReport,
    pub payer_report: ValidationReport,
}

/// Runs one claim through the full pipeline.
///
/// If pre-submission validation reports an ERROR, `edi_bytes` is empty
/// and the compliance/payer reports are returned empty (and therefore
/// valid), since there was nothing to check.
pub fn build(claim: ClaimRecord, config: &Config) -> Result<BuildOutput, CoreError> {
    let claim = x837_enrich::enrich(apply_payer_preset(claim, config));
    let pre_report = x837_validate::presubmit::validate(&claim);

    if !pre_report.is_valid() {
        let subject = claim.claim.clm_number.clone();
        return Ok(BuildOutput {
            edi_bytes: Vec::new(),
            pre_report,
            compliance_report: ValidationReport::new(subject.clone(), ValidationLevel::Full),
            payer_report: ValidationReport::new(subject, ValidationLevel::Full),
        });
    }

    let mut control_numbers = ControlNumbers::default();
    let edi_bytes = x837_writer::write_interchange(
        std::slice::from_ref(&claim),
        &config.writer_config(),
        &mut control_numbers,
        config.creation_date,
    )?;

    let compliance_report = x837_validate::compliance::check(&edi_bytes)?;
    let payer_report = x837_validate::payer::check(&edi_bytes, &config.payer_rules)?;

    Ok(BuildOutput { edi_bytes, pre_report, compliance_report, payer_report })
}

/// Groups `trips` into claims and runs the batch through the full
/// pipeline, one `ISA`/`GS` envelope wrapping every surviving claim's
/// own `ST`/`SE` transaction set.
///
/// If every claim fails grouping, aggregation, duplicate detection, or
/// pre-submission validation, `edi_bytes` is empty and the
/// compliance/payer reports are returned empty.
pub fn build_batch(trips: &[TripRecord], config: &Config) -> Result<BatchBuildOutput, CoreError> {
    let grouped = x837_batch::group_and_build(trips);
    let mut batch_report = grouped.report;

    let mut valid_claims = Vec::new();
    let mut per_claim_reports = Vec::with_capacity(grouped.claims.len());

    for claim in grouped.claims {
        let claim = x837_enrich::enrich(apply_payer_preset(claim, config));
        let pre_report = x837_validate::presubmit::validate(&claim);
        if pre_report.is_valid() {
            valid_claims.push(claim);
        } else {
            batch_report.add_issues(pre_report.errors().cloned());
        }
        per_claim_reports.push(pre_report);
    }

    if valid_claims.is_empty() {
        return Ok(BatchBuildOutput {
            edi_bytes: Vec::new(),
            batch_report,
            per_claim_reports,
            compliance_report: ValidationReport::new("batch", ValidationLevel::Full),
            payer_report: ValidationReport::new("batch", ValidationLevel::Full),
        });
    }

    let mut control_numbers = ControlNumbers::default();
    let edi_bytes = x837_writer::write_interchange(&valid_claims, &config.writer_config(), &mut control_numbers, config.creation_date)?;

    let compliance_report = x837_validate::compliance::check(&edi_bytes)?;
    let payer_report = x837_validate::payer::check(&edi_bytes, &config.payer_rules)?;

    Ok(BatchBuildOutput { edi_bytes, batch_report, per_claim_reports, compliance_report, payer_report })
}

fn apply_payer_preset(mut claim: ClaimRecord, config: &Config) -> ClaimRecord {
    if let Some(key) = &config.payer_preset {
        if let Some(preset) = x837_codes::payer::lookup(key) {
            claim.receiver.payer_id = preset.payer_id.to_string();
            claim.receiver.payer_name = preset.payer_name.to_string();
        }
    }
    claim
}
