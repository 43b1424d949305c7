//! Closed code tables for NEMT 837P claims.
//!
//! Every table here is static data compiled into the binary. No function
//! in this crate mutates anything; `lookup` returning `None` means "not
//! in the registry", which callers (the validator) turn into a WARNING
//! rather than a hard rejection — the registry never decides whether an
//! unknown code is fatal.

pub mod frequency;
pub mod hcpcs;
pub mod modifiers;
pub mod payer;
pub mod pos;
pub mod transport;

pub use payer::PayerPreset;

/// The closed enumeration a code belongs to, for the unified [`lookup`] entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    PlaceOfService,
    TransportCode,
    TransportReason,
    Hcpcs,
    Modifier,
    FrequencyCode,
}

/// Looks up `code` within `kind`, returning its description or `None`.
///
/// This is a thin dispatcher over the per-table `lookup` functions in
/// this crate; callers that already know which table they want may call
/// those directly instead.
pub fn lookup(kind: CodeKind, code: &str) -> Option<&'static str> {
    match kind {
        CodeKind::PlaceOfService => pos::lookup(code),
        CodeKind::TransportCode => transport::lookup_code(code),
        CodeKind::TransportReason => transport::lookup_reason(code),
        CodeKind::Hcpcs => hcpcs::lookup(code),
        CodeKind::Modifier => modifiers::lookup(code),
        CodeKind::FrequencyCode => frequency::lookup(code),
    }
}
