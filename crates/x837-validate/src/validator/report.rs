//! Validation report aggregating all issues from one validation pass.

use serde::{Deserialize, Serialize};

use super::issue::{Severity, ValidationCategory, ValidationIssue};
use super::level::ValidationLevel;

/// Report produced by the Pre-Submission Validator, Compliance Checker,
/// or Payer Rule Validator.
///
/// `subject` identifies what was validated (a claim number, `"batch"`,
/// or `"interchange"`) so a caller aggregating many reports can tell
/// them apart without re-deriving it from context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub subject: String,

    /// The validation level that was used.
    pub level: ValidationLevel,

    /// All validation issues found.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create a new empty validation report.
    pub fn new(subject: impl Into<String>, level: ValidationLevel) -> Self {
        Self {
            subject: subject.into(),
            level,
            issues: Vec::new(),
        }
    }

    /// Add a validation issue.
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Add multiple validation issues.
    pub fn add_issues(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.issues.extend(issues);
    }

    /// Returns `true` if there are no error-level issues.
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Returns the number of error-level issues.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warning-level issues.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns all error-level issues.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Returns all warning-level issues.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// Returns all info-level issues.
    pub fn infos(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Info)
    }

    /// Returns issues filtered by category.
    pub fn by_category(
        &self,
        category: ValidationCategory,
    ) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.category == category)
    }

    /// Returns the total number of issues.
    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    /// Renders the report as a tabular text form
    /// "serializable ... as a tabular text form".
    pub fn to_table(&self) -> String {
        let mut out = format!(
            "Report for {} [{}] — {} issue(s), valid={}\n",
            self.subject,
            self.level,
            self.total_issues(),
            self.is_valid()
        );
        for issue in &self.issues {
            out.push_str(&format!("  {issue}\n"));
        }
        out
    }
}
