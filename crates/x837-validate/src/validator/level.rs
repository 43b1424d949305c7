//! Validation level configuration.

use serde::{Deserialize, Serialize};

/// Level of validation strictness.
///
/// Controls which checks are performed during pre-submission validation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationLevel {
    /// Validate only field presence and format (NPI, dates, zip, etc.).
    #[serde(alias = "structure")]
    Structure,

    /// Validate structure plus Code Registry value checks.
    #[serde(alias = "codes")]
    Codes,

    /// Full validation: structure, codes, and business rules (charge
    /// sum, mileage adjacency, member group completeness). The most
    /// thorough level and the default for submission.
    #[default]
    #[serde(alias = "full")]
    Full,
}

impl std::fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationLevel::Structure => write!(f, "Structure"),
            ValidationLevel::Codes => write!(f, "Codes"),
            ValidationLevel::Full => write!(f, "Full"),
        }
    }
}
