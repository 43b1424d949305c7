//! Builds individual X12 segment strings from field data.
//!
//! Unlike EDIFACT, X12 carries no release (escape) character: a data
//! element may never legally contain one of the four delimiter bytes, so
//! rather than escaping them this writer rejects them with
//! [`WriterError::ReservedSeparator`]. Callers that already hold
//! pre-validated, pre-joined composite strings (e.g. a `SV1` procedure
//! composite built elsewhere) can bypass the check with the `_raw`
//! variants.

use x837_types::X12Delimiters;

use crate::error::WriterError;

/// Incrementally assembles one X12 segment, tracking how many segments
/// have been emitted since construction for `SE02` bookkeeping.
pub struct X12SegmentWriter {
    delimiters: X12Delimiters,
    pretty: bool,
    buffer: String,
    segment_id: Option<String>,
    elements: Vec<String>,
    current_composite: Vec<String>,
    in_composite: bool,
    segment_count: u32,
}

impl X12SegmentWriter {
    pub fn new(delimiters: X12Delimiters, pretty: bool) -> Self {
        Self {
            delimiters,
            pretty,
            buffer: String::new(),
            segment_id: None,
            elements: Vec::new(),
            current_composite: Vec::new(),
            in_composite: false,
            segment_count: 0,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(X12Delimiters::default(), false)
    }

    /// Number of segments fully closed via [`Self::end_segment`] so far.
    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    pub fn output(&self) -> &str {
        &self.buffer
    }

    pub fn into_output(self) -> String {
        self.buffer
    }

    /// Starts a new segment with the given tag (e.g. `"CLM"`).
    pub fn begin_segment(&mut self, tag: &str) {
        self.segment_id = Some(tag.to_string());
        self.elements.clear();
        self.current_composite.clear();
        self.in_composite = false;
    }

    fn check_reserved(&self, value: &str) -> Result<(), WriterError> {
        let d = self.delimiters;
        for &sep in &[d.element, d.segment, d.component, d.repetition] {
            if value.as_bytes().contains(&sep) {
                return Err(WriterError::ReservedSeparator {
                    separator: sep as char,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Adds a simple data element, rejecting reserved delimiter bytes.
    pub fn add_element(&mut self, value: &str) -> Result<(), WriterError> {
        self.check_reserved(value)?;
        self.add_raw_element(value);
        Ok(())
    }

    /// Adds a simple data element without delimiter validation. Used for
    /// pre-assembled composites (e.g. an `SV1` procedure string) that the
    /// caller already built with [`Self`] and is re-threading unchanged.
    pub fn add_raw_element(&mut self, value: &str) {
        self.elements.push(value.to_string());
    }

    pub fn add_empty_element(&mut self) {
        self.elements.push(String::new());
    }

    pub fn begin_composite(&mut self) {
        self.current_composite.clear();
        self.in_composite = true;
    }

    pub fn add_component(&mut self, value: &str) -> Result<(), WriterError> {
        self.check_reserved(value)?;
        self.current_composite.push(value.to_string());
        Ok(())
    }

    pub fn add_empty_component(&mut self) {
        self.current_composite.push(String::new());
    }

    /// Closes the open composite, stripping trailing empty components,
    /// and appends it as one element.
    pub fn end_composite(&mut self) {
        while matches!(self.current_composite.last(), Some(c) if c.is_empty()) {
            self.current_composite.pop();
        }
        let joined = self
            .current_composite
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(&(self.delimiters.component as char).to_string());
        self.elements.push(joined);
        self.in_composite = false;
        self.current_composite.clear();
    }

    /// Closes the current segment: strips trailing empty elements, joins
    /// with the element separator, and appends the terminator.
    pub fn end_segment(&mut self) -> String {
        let tag = self.segment_id.take().unwrap_or_default();
        while matches!(self.elements.last(), Some(e) if e.is_empty()) {
            self.elements.pop();
        }
        let mut out = tag;
        for el in &self.elements {
            out.push(self.delimiters.element as char);
            out.push_str(el);
        }
        out.push(self.delimiters.segment as char);
        if self.pretty {
            out.push('\n');
        }
        self.buffer.push_str(&out);
        self.segment_count += 1;
        self.elements.clear();
        out
    }

    /// Appends an already-terminated raw segment string verbatim (used
    /// for the fixed-width `ISA` header, which has no element/component
    /// structure of its own).
    pub fn write_raw(&mut self, raw: &str) {
        self.buffer.push_str(raw);
        if self.pretty && !raw.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.segment_count += 1;
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.segment_id = None;
        self.elements.clear();
        self.current_composite.clear();
        self.in_composite = false;
        self.segment_count = 0;
    }
}
