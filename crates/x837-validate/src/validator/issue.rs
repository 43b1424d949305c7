//! Validation issue types.

use serde::{Deserialize, Serialize};

/// Severity level of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Informational message, not a problem.
    Info,
    /// Warning that may indicate a problem but does not fail validation.
    Warning,
    /// Error that causes validation to fail.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Category of validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationCategory {
    /// Structural issues: missing segments, wrong order, envelope imbalance.
    Structure,
    /// Format issues: invalid data format (dates, NPI, zip, etc.).
    Format,
    /// Code issues: value not found in the Code Registry.
    Code,
    /// Business-rule issues: claim-level invariants (charge sum, mileage
    /// adjacency, member group completeness, etc.).
    Business,
}

impl std::fmt::Display for ValidationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationCategory::Structure => write!(f, "Structure"),
            ValidationCategory::Format => write!(f, "Format"),
            ValidationCategory::Code => write!(f, "Code"),
            ValidationCategory::Business => write!(f, "Business"),
        }
    }
}

/// Serializable segment position for validation reports.
///
/// Mirrors `x837_types::SegmentPosition` but with serde support, since
/// that crate is intentionally zero-dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentPosition {
    /// 1-based segment number within the interchange.
    pub segment_number: u32,
    /// Byte offset from the start of the input.
    pub byte_offset: usize,
    /// 1-based transaction set number within the interchange.
    pub message_number: u32,
}

impl From<x837_types::SegmentPosition> for SegmentPosition {
    fn from(pos: x837_types::SegmentPosition) -> Self {
        Self {
            segment_number: pos.segment_number,
            byte_offset: pos.byte_offset,
            message_number: pos.message_number,
        }
    }
}

/// A single validation issue found in a claim, an emitted interchange,
/// or a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity level of this issue.
    pub severity: Severity,

    /// Category of this issue.
    pub category: ValidationCategory,

    /// Machine-readable error code (e.g., "BATCH_021", "FMT_NPI").
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Position in the emitted interchange where the issue was found
    /// (set only for compliance-checker issues re-parsing writer output).
    pub segment_position: Option<SegmentPosition>,

    /// Field path within the claim record (e.g., "services[2].hcpcs").
    pub field_path: Option<String>,

    /// The actual value found (if applicable).
    pub actual_value: Option<String>,

    /// The expected value (if applicable).
    pub expected_value: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue with the required fields.
    pub fn new(
        severity: Severity,
        category: ValidationCategory,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            code: code.into(),
            message: message.into(),
            segment_position: None,
            field_path: None,
            actual_value: None,
            expected_value: None,
        }
    }

    /// Builder: set the segment position.
    pub fn with_position(mut self, position: impl Into<SegmentPosition>) -> Self {
        self.segment_position = Some(position.into());
        self
    }

    /// Builder: set the field path.
    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    /// Builder: set the actual value.
    pub fn with_actual(mut self, value: impl Into<String>) -> Self {
        self.actual_value = Some(value.into());
        self
    }

    /// Builder: set the expected value.
    pub fn with_expected(mut self, value: impl Into<String>) -> Self {
        self.expected_value = Some(value.into());
        self
    }

    /// Returns true if this is an error-level issue.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns true if this is a warning-level issue.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)?;
        if let Some(ref path) = self.field_path {
            write!(f, " at {path}")?;
        }
        if let Some(ref pos) = self.segment_position {
            write!(
                f,
                " (segment #{}, byte {})",
                pos.segment_number, pos.byte_offset
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_issue_builder() {
        let issue = ValidationIssue::new(
            Severity::Error,
            ValidationCategory::Business,
            "BATCH_021",
            "mileage line not preceded by transport line",
        )
        .with_field_path("services[0].hcpcs")
        .with_position(SegmentPosition {
            segment_number: 5,
            byte_offset: 234,
            message_number: 1,
        });

        assert!(issue.is_error());
        assert!(!issue.is_warning());
        assert_eq!(issue.code, "BATCH_021");
        assert_eq!(issue.field_path.as_deref(), Some("services[0].hcpcs"));
        assert_eq!(issue.segment_position.unwrap().segment_number, 5);
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::new(
            Severity::Error,
            ValidationCategory::Structure,
            "STR001",
            "required segment missing",
        )
        .with_field_path("BHT");

        let display = format!("{issue}");
        assert!(display.contains("[ERROR]"));
        assert!(display.contains("STR001"));
        assert!(display.contains("required segment missing"));
        assert!(display.contains("at BHT"));
    }

    #[test]
    fn test_issue_serialization() {
        let issue = ValidationIssue::new(
            Severity::Warning,
            ValidationCategory::Code,
            "COD002",
            "HCPCS not found in registry",
        );

        let json = serde_json::to_string_pretty(&issue).unwrap();
        let deserialized: ValidationIssue = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.code, "COD002");
        assert_eq!(deserialized.severity, Severity::Warning);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ValidationCategory::Structure), "Structure");
        assert_eq!(format!("{}", ValidationCategory::Business), "Business");
    }

    #[test]
    fn test_position_from_x837_types() {
        let raw_pos = x837_types::SegmentPosition::new(3, 100, 1);
        let pos: SegmentPosition = raw_pos.into();
        assert_eq!(pos.segment_number, 3);
        assert_eq!(pos.byte_offset, 100);
        assert_eq!(pos.message_number, 1);
    }
}
