use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coordination-of-benefits entry for a prior payer (loops 2320/2330).
///
/// The four optional amounts map onto the COB `AMT` segments the EDI
/// writer emits when `other_payers` is non-empty: `prior_payer_paid` →
/// `AMT*EAF`, `patient_responsibility` → `AMT*B6`, `allowed_amount` →
/// `AMT*AU`, `coverage_amount` → `AMT*F2`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherPayer {
    pub payer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prior_payer_paid: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_responsibility: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<Decimal>,
}
