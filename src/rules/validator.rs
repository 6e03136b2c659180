// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types and report printing.

use crate::cli::args::OutputFormat;
use crate::config::RulesConfig;
use crate::message::ParsedMessage;

/// A single validation issue.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Issue code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
    /// Line number where the issue was found (1-based; body lines are
    /// numbered within the body).
    pub line: Option<usize>,
}

/// Result of validating a commit message.
///
/// Errors and warnings each keep rule evaluation order, so identical input
/// always produces an identical result.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Validation errors; any entry here fails the gate.
    pub errors: Vec<ValidationIssue>,
    /// Advisory warnings; never affect the outcome.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new, empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}

/// Printable report for a validation run.
///
/// The text format is the gate contract consumed by hooks and CI scripts;
/// every line it prints is stable.
#[derive(Debug)]
pub struct Report<'a> {
    title_length: usize,
    body_lines: usize,
    title_max: usize,
    body_line_max: usize,
    result: &'a ValidationResult,
}

impl<'a> Report<'a> {
    /// Build a report for a validated message.
    pub fn new(
        message: &ParsedMessage,
        rules: &RulesConfig,
        result: &'a ValidationResult,
    ) -> Self {
        Self {
            title_length: message.title_len(),
            body_lines: message.body_line_count(),
            title_max: rules.title_max,
            body_line_max: rules.body_line_max,
            result,
        }
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        println!("title_length={} (max={})", self.title_length, self.title_max);
        println!(
            "body_lines={} (line_max={})",
            self.body_lines, self.body_line_max
        );

        if !self.result.warnings.is_empty() {
            println!("warnings:");
            for warning in &self.result.warnings {
                println!("- {}", warning.message);
            }
        }

        if self.result.is_valid() {
            println!("result=PASS");
        } else {
            println!("result=FAIL");
            println!("errors:");
            for error in &self.result.errors {
                println!("- {}", error.message);
            }
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let issue_json = |issue: &ValidationIssue| {
            serde_json::json!({
                "code": issue.code,
                "message": issue.message,
                "suggestion": issue.suggestion,
                "line": issue.line,
            })
        };

        let json = serde_json::json!({
            "valid": self.result.is_valid(),
            "title_length": self.title_length,
            "title_max": self.title_max,
            "body_lines": self.body_lines,
            "body_line_max": self.body_line_max,
            "errors": self.result.errors.iter().map(issue_json).collect::<Vec<_>>(),
            "warnings": self.result.warnings.iter().map(issue_json).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(is_error: bool) -> ValidationIssue {
        ValidationIssue {
            code: "test".to_string(),
            message: "Test message".to_string(),
            suggestion: None,
            is_error,
            line: Some(1),
        }
    }

    #[test]
    fn test_validation_result_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn test_validation_result_with_errors() {
        let mut result = ValidationResult::new();
        result.errors.push(issue(true));

        assert!(!result.is_valid());
        assert_eq!(result.issue_count(), 1);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut result = ValidationResult::new();
        result.warnings.push(issue(false));

        assert!(result.is_valid());
        assert_eq!(result.issue_count(), 1);
    }

    #[test]
    fn test_summary() {
        let mut result = ValidationResult::new();
        assert!(result.summary().contains("Valid"));

        result.warnings.push(issue(false));
        assert!(result.summary().contains("1 warning"));

        result.errors.push(issue(true));
        assert!(result.summary().contains("Invalid"));
    }
}
