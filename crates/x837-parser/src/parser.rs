#[cfg(test)]
use x837_types::Control;
use x837_types::{RawSegment, SegmentPosition, X12Delimiters};

use crate::error::ParseError;
use crate::handler::X12Handler;
use crate::segment_builder::SegmentBuilder as SegBuilder;
use crate::tokenizer::X12Tokenizer;

/// Streaming X12 parser.
///
/// Parses a byte slice by tokenizing it into segments and routing them
/// to an `X12Handler`. Envelope segments (ISA, GS, ST, SE, GE, IEA) are
/// dispatched to specific handler methods in addition to `on_segment()`.
pub struct X12StreamParser;

impl X12StreamParser {
    /// Parse an X12 interchange from a byte slice.
    ///
    /// This is the main synchronous entry point. It:
    /// 1. Detects the ISA header and determines delimiters
    /// 2. Tokenizes input into segments
    /// 3. Routes each segment to the handler
    /// 4. Stops if the handler returns `Control::Stop`
    pub fn parse(input: &[u8], handler: &mut dyn X12Handler) -> Result<(), ParseError> {
        let (has_isa, delimiters) = X12Delimiters::detect(input);
        handler.on_delimiters(&delimiters, has_isa);

        let tokenizer = X12Tokenizer::new(delimiters);
        let seg_builder = SegBuilder::new(delimiters);

        let mut segment_number: u32 = 0;
        let mut transaction_number: u32 = 0;
        let mut byte_offset = 0;

        for segment_str in tokenizer.tokenize_segments(input) {
            segment_number += 1;

            let id_upper = segment_str
                .split(delimiters.element as char)
                .next()
                .unwrap_or("")
                .to_ascii_uppercase();

            if id_upper == "ST" {
                transaction_number += 1;
            }

            let effective_message_number = if id_upper == "ISA"
                || id_upper == "IEA"
                || id_upper == "GS"
                || id_upper == "GE"
            {
                0
            } else {
                transaction_number
            };

            let position =
                SegmentPosition::new(segment_number, byte_offset, effective_message_number);

            let Some(raw_segment) = seg_builder.build(segment_str, position) else {
                byte_offset += segment_str.len() + 1;
                continue;
            };

            match id_upper.as_str() {
                "ISA" => {
                    if handler.on_interchange_start(&raw_segment).should_stop() {
                        return Ok(());
                    }
                }
                "GS" => {
                    if handler.on_group_start(&raw_segment).should_stop() {
                        return Ok(());
                    }
                }
                "ST" => {
                    if handler.on_transaction_start(&raw_segment).should_stop() {
                        return Ok(());
                    }
                }
                "SE" => {
                    handler.on_transaction_end(&raw_segment);
                }
                "GE" => {
                    handler.on_group_end(&raw_segment);
                }
                "IEA" => {
                    handler.on_interchange_end(&raw_segment);
                }
                _ => {}
            }

            if handler.on_segment(&raw_segment).should_stop() {
                return Ok(());
            }

            byte_offset += segment_str.len() + 1;
        }

        Ok(())
    }
}
