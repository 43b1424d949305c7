use x837_types::{RawSegment, SegmentPosition, X12Delimiters};

use crate::X12Tokenizer;

/// Builds `RawSegment` instances from raw segment strings.
///
/// Takes the tokenized segment string (e.g., "NM1*85*2*ACME AMBULANCE")
/// and splits it into the segment ID, elements, and components.
pub struct SegmentBuilder {
    tokenizer: X12Tokenizer,
}

impl SegmentBuilder {
    /// Creates a new segment builder with the given delimiters.
    pub fn new(delimiters: X12Delimiters) -> Self {
        Self {
            tokenizer: X12Tokenizer::new(delimiters),
        }
    }

    /// Parses a raw segment string into a `RawSegment`.
    ///
    /// The input is a single segment WITHOUT its terminator character.
    /// Example: `"NM1*85*2*ACME AMBULANCE"`
    ///
    /// Returns `None` if the segment string is empty.
    pub fn build<'a>(
        &self,
        segment_str: &'a str,
        position: SegmentPosition,
    ) -> Option<RawSegment<'a>> {
        if segment_str.is_empty() {
            return None;
        }

        let mut elements_iter = self.tokenizer.tokenize_elements(segment_str);

        let id = elements_iter.next()?;
        if id.is_empty() {
            return None;
        }

        let mut elements = Vec::new();
        for element_str in elements_iter {
            let components: Vec<&'a str> =
                self.tokenizer.tokenize_components(element_str).collect();
            elements.push(components);
        }

        Some(RawSegment::new(id, elements, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: u32, offset: usize) -> SegmentPosition {
        SegmentPosition::new(n, offset, 1)
    }

    #[test]
    fn test_build_simple_segment() {
        let builder = SegmentBuilder::new(X12Delimiters::default());
        let seg = builder.build("ST*837*0001", pos(1, 0)).unwrap();

        assert_eq!(seg.id, "ST");
        assert_eq!(seg.element_count(), 2);
        assert_eq!(seg.get_element(0), "837");
        assert_eq!(seg.get_element(1), "0001");
    }

    #[test]
    fn test_build_nm1_segment() {
        let builder = SegmentBuilder::new(X12Delimiters::default());
        let seg = builder
            .build("NM1*85*2*ACME AMBULANCE*****XX*1234567890", pos(5, 100))
            .unwrap();

        assert_eq!(seg.id, "NM1");
        assert_eq!(seg.get_element(0), "85");
        assert_eq!(seg.get_element(1), "2");
        assert_eq!(seg.get_element(2), "ACME AMBULANCE");
        assert_eq!(seg.get_element(7), "XX");
        assert_eq!(seg.get_element(8), "1234567890");
    }

    #[test]
    fn test_build_dtp_with_composite_date() {
        let builder = SegmentBuilder::new(X12Delimiters::default());
        let seg = builder.build("DTP*472*D8:20260101", pos(3, 50)).unwrap();

        assert_eq!(seg.id, "DTP");
        assert_eq!(seg.get_component(0, 0), "472");
        assert_eq!(seg.get_component(1, 0), "D8");
        assert_eq!(seg.get_component(1, 1), "20260101");
    }

    #[test]
    fn test_build_segment_no_elements() {
        let builder = SegmentBuilder::new(X12Delimiters::default());
        let seg = builder.build("SE", pos(1, 0)).unwrap();

        assert_eq!(seg.id, "SE");
        assert_eq!(seg.element_count(), 0);
    }

    #[test]
    fn test_build_empty_input() {
        let builder = SegmentBuilder::new(X12Delimiters::default());
        assert!(builder.build("", pos(1, 0)).is_none());
    }

    #[test]
    fn test_build_preserves_position() {
        let builder = SegmentBuilder::new(X12Delimiters::default());
        let seg = builder.build("CLM*CLM001*60.00", pos(2, 42)).unwrap();

        assert_eq!(seg.position.segment_number, 2);
        assert_eq!(seg.position.byte_offset, 42);
        assert_eq!(seg.position.message_number, 1);
    }

    #[test]
    fn test_build_ref_segment() {
        let builder = SegmentBuilder::new(X12Delimiters::default());
        let seg = builder.build("REF*D9*TRIP001", pos(10, 300)).unwrap();

        assert_eq!(seg.id, "REF");
        assert_eq!(seg.get_component(0, 0), "D9");
        assert_eq!(seg.get_component(1, 0), "TRIP001");
    }
}
