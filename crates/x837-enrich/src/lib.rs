//! Claim Enricher.
//!
//! A pure transformation: `enrich(claim) -> claim`. Rules run in the
//! fixed order from the data model's cascading-default contract and
//! never invent values for `member_group`, `payment_status`, or
//! `submission_channel` — absence of those stays an input defect for
//! the validator to report.

use rust_decimal::Decimal;
use x837_model::ClaimRecord;

/// Enriches a claim record, filling cascading defaults and derived fields.
///
/// Idempotent: `enrich(enrich(c)) == enrich(c)` for any `c`.
pub fn enrich(mut claim: ClaimRecord) -> ClaimRecord {
    default_claim_to(&mut claim);
    default_claim_pos(&mut claim);
    default_frequency_code(&mut claim);
    cascade_to_services(&mut claim);
    fallback_rendering_provider(&mut claim);
    claim
}

/// Rule 1: if `claim.to` is absent, set it to `claim.from`.
fn default_claim_to(claim: &mut ClaimRecord) {
    if claim.claim.to.is_none() {
        claim.claim.to = Some(claim.claim.from);
    }
}

/// Rule 2: if `claim.pos` is absent, default to ground ambulance (41).
fn default_claim_pos(claim: &mut ClaimRecord) {
    if claim.claim.pos.is_none() {
        claim.claim.pos = Some("41".to_string());
    }
}

/// Rule 3: if `claim.frequency_code` is absent, default to 1 (original),
/// unless the legacy `adjustment_type` field maps it to 7 or 8. The
/// explicit `frequency_code` always wins over the legacy field.
fn default_frequency_code(claim: &mut ClaimRecord) {
    if claim.claim.frequency_code.is_some() {
        return;
    }
    claim.claim.frequency_code = Some(match claim.claim.adjustment_type.as_deref() {
        Some("replacement") => "7".to_string(),
        Some("void") => "8".to_string(),
        _ => "1".to_string(),
    });
}

/// Rule 4: cascade claim-level defaults down to every service line.
fn cascade_to_services(claim: &mut ClaimRecord) {
    let claim_from = claim.claim.from;
    let claim_pos = claim.claim.pos.clone();
    let claim_payment_status = claim.claim.payment_status.clone();
    let ambulance_trip_number = claim
        .claim
        .ambulance
        .as_ref()
        .and_then(|a| a.trip_number.clone());
    let ambulance_pickup = claim.claim.ambulance.as_ref().and_then(|a| a.pickup.clone());
    let ambulance_dropoff = claim.claim.ambulance.as_ref().and_then(|a| a.dropoff.clone());

    for service in &mut claim.services {
        if service.dos.is_none() {
            service.dos = Some(claim_from);
        }
        if service.pos.is_none() {
            service.pos = claim_pos.clone();
        }
        if service.units == Decimal::ZERO {
            service.units = Decimal::ONE;
        }
        if service.emergency.is_none() {
            service.emergency = Some(false);
        }
        if service.trip_number.is_none() {
            service.trip_number = ambulance_trip_number.clone();
        }
        if service.pickup.is_none() {
            service.pickup = ambulance_pickup.clone();
        }
        if service.dropoff.is_none() {
            service.dropoff = ambulance_dropoff.clone();
        }
        if service.payment_status.is_none() {
            service.payment_status = claim_payment_status.clone();
        }
    }
}

/// Rule 5: if the rendering provider is missing both NPI and name,
/// populate it by copying the billing provider so every claim carries
/// an identified renderer.
fn fallback_rendering_provider(claim: &mut ClaimRecord) {
    let needs_fallback = match &claim.rendering_provider {
        None => true,
        Some(rp) => rp.npi.is_empty() && rp.name.is_empty(),
    };
    if needs_fallback {
        claim.rendering_provider = Some(claim.billing_provider.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use x837_model::{ClaimInfo, Provider, ServiceRecord};

    fn base_claim() -> ClaimRecord {
        ClaimRecord {
            claim: ClaimInfo {
                clm_number: "C1".to_string(),
                total_charge: Decimal::new(6000, 2),
                from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                ..Default::default()
            },
            services: vec![ServiceRecord {
                hcpcs: "A0130".to_string(),
                charge: Decimal::new(6000, 2),
                ..Default::default()
            }],
            billing_provider: Provider {
                npi: "1111111111".to_string(),
                name: "Acme Ambulance".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_claim_to() {
        let claim = enrich(base_claim());
        assert_eq!(claim.claim.to, Some(claim.claim.from));
    }

    #[test]
    fn test_default_claim_to_preserves_explicit_value() {
        let mut c = base_claim();
        let to = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        c.claim.to = Some(to);
        let claim = enrich(c);
        assert_eq!(claim.claim.to, Some(to));
    }

    #[test]
    fn test_default_pos() {
        let claim = enrich(base_claim());
        assert_eq!(claim.claim.pos, Some("41".to_string()));
    }

    #[test]
    fn test_default_frequency_code_plain_default() {
        let claim = enrich(base_claim());
        assert_eq!(claim.claim.frequency_code, Some("1".to_string()));
    }

    #[test]
    fn test_legacy_adjustment_type_replacement() {
        let mut c = base_claim();
        c.claim.adjustment_type = Some("replacement".to_string());
        let claim = enrich(c);
        assert_eq!(claim.claim.frequency_code, Some("7".to_string()));
    }

    #[test]
    fn test_legacy_adjustment_type_void() {
        let mut c = base_claim();
        c.claim.adjustment_type = Some("void".to_string());
        let claim = enrich(c);
        assert_eq!(claim.claim.frequency_code, Some("8".to_string()));
    }

    #[test]
    fn test_explicit_frequency_code_wins_over_legacy() {
        let mut c = base_claim();
        c.claim.adjustment_type = Some("void".to_string());
        c.claim.frequency_code = Some("6".to_string());
        let claim = enrich(c);
        assert_eq!(claim.claim.frequency_code, Some("6".to_string()));
    }

    #[test]
    fn test_service_cascades() {
        let claim = enrich(base_claim());
        let svc = &claim.services[0];
        assert_eq!(svc.dos, Some(claim.claim.from));
        assert_eq!(svc.pos, claim.claim.pos);
        assert_eq!(svc.units, Decimal::ONE);
        assert_eq!(svc.emergency, Some(false));
    }

    #[test]
    fn test_service_keeps_explicit_values() {
        let mut c = base_claim();
        c.services[0].units = Decimal::new(85, 1);
        c.services[0].emergency = Some(true);
        let claim = enrich(c);
        assert_eq!(claim.services[0].units, Decimal::new(85, 1));
        assert_eq!(claim.services[0].emergency, Some(true));
    }

    #[test]
    fn test_rendering_provider_fallback() {
        let claim = enrich(base_claim());
        let rp = claim.rendering_provider.expect("fallback populated");
        assert_eq!(rp.npi, "1111111111");
        assert_eq!(rp.name, "Acme Ambulance");
    }

    #[test]
    fn test_rendering_provider_not_overwritten_when_present() {
        let mut c = base_claim();
        c.rendering_provider = Some(Provider {
            npi: "2222222222".to_string(),
            name: "Other Renderer".to_string(),
            ..Default::default()
        });
        let claim = enrich(c);
        assert_eq!(claim.rendering_provider.unwrap().npi, "2222222222");
    }

    #[test]
    fn test_enrichment_never_invents_member_group() {
        let claim = enrich(base_claim());
        assert!(claim.claim.member_group.is_none());
    }

    #[test]
    fn test_enrichment_never_invents_payment_status() {
        let claim = enrich(base_claim());
        assert!(claim.claim.payment_status.is_none());
    }

    #[test]
    fn test_idempotence_fixed_case() {
        let once = enrich(base_claim());
        let twice = enrich(once.clone());
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn prop_enrichment_is_idempotent(
            day in 1u32..28,
            charge_cents in 100i64..100_000,
            npi in "[0-9]{10}",
        ) {
            let mut c = base_claim();
            c.claim.from = NaiveDate::from_ymd_opt(2026, 1, day).unwrap();
            c.claim.total_charge = Decimal::new(charge_cents, 2);
            c.services[0].charge = Decimal::new(charge_cents, 2);
            c.billing_provider.npi = npi;

            let once = enrich(c);
            let twice = enrich(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
