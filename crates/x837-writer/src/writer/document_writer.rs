//! High-level writer managing the full three-level X12 interchange
//! structure: `ISA`/`IEA` (interchange), `GS`/`GE` (functional group),
//! `ST`/`SE` (transaction set).
//!
//! Tracks segment counts for `SE02`, transaction-set-pair counts for
//! `GE01`, and group-pair counts for `IEA01`, per the envelope-balance
//! invariants every interchange this writer produces must satisfy.

use x837_types::{ControlNumbers, X12Delimiters};

use super::segment_writer::X12SegmentWriter;
use crate::error::WriterError;

fn pad_left(value: &str, width: usize) -> String {
    if value.len() >= width {
        value[..width].to_string()
    } else {
        format!("{value:<width$}")
    }
}

fn zero_pad(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}

pub struct X12DocumentWriter {
    writer: X12SegmentWriter,
    delimiters: X12Delimiters,
    isa_control: u32,
    gs_control: u32,
    st_control: u32,
    st_start_count: u32,
    st_count_in_group: u32,
    gs_count_in_interchange: u32,
}

impl X12DocumentWriter {
    pub fn new(delimiters: X12Delimiters, pretty: bool) -> Self {
        Self {
            writer: X12SegmentWriter::new(delimiters, pretty),
            delimiters,
            isa_control: 0,
            gs_control: 0,
            st_control: 0,
            st_start_count: 0,
            st_count_in_group: 0,
            gs_count_in_interchange: 0,
        }
    }

    pub fn with_delimiters(delimiters: X12Delimiters, pretty: bool) -> Self {
        Self::new(delimiters, pretty)
    }

    /// Direct access to the underlying segment writer, for loop writers
    /// that need composite-element assembly this type's convenience
    /// methods don't cover.
    pub fn segment_writer(&mut self) -> &mut X12SegmentWriter {
        &mut self.writer
    }

    pub fn st_control_number(&self) -> u32 {
        self.st_control
    }

    /// Writes the fixed-width 106-byte `ISA` interchange header and
    /// assigns the interchange control number from `control_numbers`.
    #[allow(clippy::too_many_arguments)]
    pub fn begin_interchange(
        &mut self,
        control_numbers: &mut ControlNumbers,
        sender_qualifier: &str,
        sender_id: &str,
        receiver_qualifier: &str,
        receiver_id: &str,
        date_yymmdd: &str,
        time_hhmm: &str,
        usage_indicator: char,
    ) {
        self.isa_control = control_numbers.next_isa();
        let d = self.delimiters;
        let e = d.element as char;
        let fields = [
            "00".to_string(),
            pad_left("", 10),
            "00".to_string(),
            pad_left("", 10),
            pad_left(sender_qualifier, 2),
            pad_left(sender_id, 15),
            pad_left(receiver_qualifier, 2),
            pad_left(receiver_id, 15),
            pad_left(date_yymmdd, 6),
            pad_left(time_hhmm, 4),
            (d.repetition as char).to_string(),
            "00501".to_string(),
            zero_pad(self.isa_control, 9),
            "0".to_string(),
            usage_indicator.to_string(),
            (d.component as char).to_string(),
        ];
        let mut raw = format!("ISA{e}");
        raw.push_str(&fields.join(&e.to_string()));
        raw.push(d.segment as char);
        self.writer.write_raw(&raw);
        self.gs_count_in_interchange = 0;
    }

    /// Writes the `GS` functional group header, assigning the group
    /// control number from `control_numbers`.
    pub fn begin_group(
        &mut self,
        control_numbers: &mut ControlNumbers,
        sender_code: &str,
        receiver_code: &str,
        date_ccyymmdd: &str,
        time_hhmm: &str,
    ) -> Result<(), WriterError> {
        self.gs_control = control_numbers.next_gs();
        self.writer.begin_segment("GS");
        self.writer.add_element("HC")?;
        self.writer.add_element(sender_code)?;
        self.writer.add_element(receiver_code)?;
        self.writer.add_element(date_ccyymmdd)?;
        self.writer.add_element(time_hhmm)?;
        self.writer.add_raw_element(&self.gs_control.to_string());
        self.writer.add_element("X")?;
        self.writer.add_element("005010X222A1")?;
        self.writer.end_segment();
        self.st_count_in_group = 0;
        Ok(())
    }

    /// Writes the `ST` transaction set header and returns the assigned
    /// control number (also threaded into `BHT02`).
    pub fn begin_transaction(&mut self, control_numbers: &mut ControlNumbers) -> Result<u32, WriterError> {
        self.st_control = control_numbers.next_st();
        self.writer.begin_segment("ST");
        self.writer.add_element("837")?;
        self.writer.add_raw_element(&zero_pad(self.st_control, 4));
        self.writer.add_element("005010X222A1")?;
        self.writer.end_segment();
        self.st_start_count = self.writer.segment_count() - 1;
        Ok(self.st_control)
    }

    /// Writes a segment with simple (non-composite) elements.
    pub fn write_segment(&mut self, id: &str, elements: &[&str]) -> Result<(), WriterError> {
        self.writer.begin_segment(id);
        for el in elements {
            self.writer.add_element(el)?;
        }
        self.writer.end_segment();
        Ok(())
    }

    /// Writes a segment whose elements are each a composite of
    /// sub-elements (e.g. `CLM05` = `POS:FACILITY:FREQUENCY`). An empty
    /// inner slice writes an empty element.
    pub fn write_segment_with_composites(
        &mut self,
        id: &str,
        composites: &[&[&str]],
    ) -> Result<(), WriterError> {
        self.writer.begin_segment(id);
        for composite in composites {
            if composite.is_empty() {
                self.writer.add_empty_element();
                continue;
            }
            self.writer.begin_composite();
            for component in *composite {
                self.writer.add_component(component)?;
            }
            self.writer.end_composite();
        }
        self.writer.end_segment();
        Ok(())
    }

    /// Closes the current transaction set, writing `SE` with a segment
    /// count covering `ST` through `SE` inclusive.
    pub fn end_transaction(&mut self) -> Result<(), WriterError> {
        let content_count = self.writer.segment_count() - self.st_start_count;
        let se_count = content_count + 1;
        self.writer.begin_segment("SE");
        self.writer.add_raw_element(&se_count.to_string());
        self.writer.add_raw_element(&zero_pad(self.st_control, 4));
        self.writer.end_segment();
        self.st_count_in_group += 1;
        Ok(())
    }

    /// Closes the current functional group, writing `GE` with the
    /// number of `ST`/`SE` pairs it contained.
    pub fn end_group(&mut self) -> Result<(), WriterError> {
        self.writer.begin_segment("GE");
        self.writer.add_raw_element(&self.st_count_in_group.to_string());
        self.writer.add_raw_element(&self.gs_control.to_string());
        self.writer.end_segment();
        self.gs_count_in_interchange += 1;
        Ok(())
    }

    /// Closes the interchange, writing `IEA` with the number of
    /// `GS`/`GE` pairs it contained.
    pub fn end_interchange(&mut self) -> Result<(), WriterError> {
        self.writer.begin_segment("IEA");
        self.writer.add_raw_element(&self.gs_count_in_interchange.to_string());
        self.writer.add_raw_element(&zero_pad(self.isa_control, 9));
        self.writer.end_segment();
        Ok(())
    }

    pub fn output(&self) -> &str {
        self.writer.output()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_output().into_bytes()
    }
}
