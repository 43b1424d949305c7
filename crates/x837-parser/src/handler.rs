use x837_types::{Control, RawSegment, X12Delimiters};

use crate::ParseError;

/// Trait for handling X12 parsing events.
///
/// All methods have default no-op implementations, so implementors
/// only need to override the callbacks they care about.
///
/// # Event Order
///
/// X12 nests three levels deep (EDIFACT nests only two — interchange
/// and message): interchange (ISA/IEA), functional group (GS/GE), and
/// transaction set (ST/SE).
///
/// 1. `on_delimiters()` — always called first
/// 2. `on_interchange_start()` — when ISA is encountered
/// 3. `on_group_start()` — when GS is encountered
/// 4. `on_transaction_start()` — when ST is encountered
/// 5. `on_segment()` — for EVERY segment (including ISA, GS, ST, SE, GE, IEA)
/// 6. `on_transaction_end()` — when SE is encountered
/// 7. `on_group_end()` — when GE is encountered
/// 8. `on_interchange_end()` — when IEA is encountered
pub trait X12Handler {
    /// Called when delimiters are determined (from ISA or defaults).
    fn on_delimiters(&mut self, _delimiters: &X12Delimiters, _explicit_isa: bool) {}

    /// Called when an interchange begins (ISA segment).
    fn on_interchange_start(&mut self, _isa: &RawSegment) -> Control {
        Control::Continue
    }

    /// Called when a functional group begins (GS segment).
    fn on_group_start(&mut self, _gs: &RawSegment) -> Control {
        Control::Continue
    }

    /// Called when a transaction set begins (ST segment).
    fn on_transaction_start(&mut self, _st: &RawSegment) -> Control {
        Control::Continue
    }

    /// Called for every segment in the interchange.
    ///
    /// This is called for ALL segments, including envelope segments
    /// (ISA, GS, ST, SE, GE, IEA). The specific `on_*` methods are
    /// called BEFORE `on_segment()` for envelope segments.
    fn on_segment(&mut self, _segment: &RawSegment) -> Control {
        Control::Continue
    }

    /// Called when a transaction set ends (SE segment).
    fn on_transaction_end(&mut self, _se: &RawSegment) {}

    /// Called when a functional group ends (GE segment).
    fn on_group_end(&mut self, _ge: &RawSegment) {}

    /// Called when an interchange ends (IEA segment).
    fn on_interchange_end(&mut self, _iea: &RawSegment) {}

    /// Called when a parsing error occurs.
    ///
    /// Return `Control::Continue` to attempt recovery, or
    /// `Control::Stop` to abort parsing.
    fn on_error(&mut self, _error: ParseError) -> Control {
        Control::Stop
    }
}
