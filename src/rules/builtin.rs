// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::config::RulesConfig;
use crate::message::ParsedMessage;
use lazy_static::lazy_static;
use regex::Regex;

use super::validator::ValidationIssue;

lazy_static! {
    /// Body lines matching this are exempt from the length limit.
    static ref URL_LINE: Regex = Regex::new(r"^https?://").unwrap();
}

/// Apply all built-in rules to a parsed message.
///
/// Rules run in a fixed order and never short-circuit; the returned issues
/// keep that order. Per body line, the length check runs before the
/// trailing-whitespace check.
pub fn apply_builtin_rules(message: &ParsedMessage, rules: &RulesConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    // Title rules
    if let Some(issue) = check_title_not_empty(message) {
        issues.push(issue);
    }
    if let Some(issue) = check_title_single_line(message) {
        issues.push(issue);
    }
    if let Some(issue) = check_title_length(message, rules) {
        issues.push(issue);
    }
    if let Some(issue) = check_title_trailing_period(message) {
        issues.push(issue);
    }

    // Body rules
    if let Some(issue) = check_body_separator(message) {
        issues.push(issue);
    }
    issues.extend(check_body_lines(message, rules));

    issues
}

/// Check that the title is not blank.
fn check_title_not_empty(message: &ParsedMessage) -> Option<ValidationIssue> {
    if message.title.trim().is_empty() {
        Some(ValidationIssue {
            code: "title-empty".to_string(),
            message: "Title is empty.".to_string(),
            suggestion: Some("Write a short summary as the first line".to_string()),
            is_error: true,
            line: Some(1),
        })
    } else {
        None
    }
}

/// Check that the title has no embedded newline.
///
/// A title derived from parsing is always one physical line; this guards
/// titles supplied directly.
fn check_title_single_line(message: &ParsedMessage) -> Option<ValidationIssue> {
    if message.title.contains('\n') {
        Some(ValidationIssue {
            code: "title-single-line".to_string(),
            message: "Title must be a single line.".to_string(),
            suggestion: Some("Move everything after the first line into the body".to_string()),
            is_error: true,
            line: Some(1),
        })
    } else {
        None
    }
}

/// Check maximum title length.
fn check_title_length(message: &ParsedMessage, rules: &RulesConfig) -> Option<ValidationIssue> {
    let max = rules.title_max;
    let len = message.title_len();

    if len > max {
        Some(ValidationIssue {
            code: "title-max-length".to_string(),
            message: format!("Title is {} chars (max {}).", len, max),
            suggestion: Some(format!("Shorten the title to {} characters or less", max)),
            is_error: true,
            line: Some(1),
        })
    } else {
        None
    }
}

/// Check if the title ends with a period.
fn check_title_trailing_period(message: &ParsedMessage) -> Option<ValidationIssue> {
    if message.title.ends_with('.') {
        Some(ValidationIssue {
            code: "title-trailing-period".to_string(),
            message: "Title ends with a period; prefer no trailing punctuation.".to_string(),
            suggestion: Some("Remove the trailing period".to_string()),
            is_error: false, // Warning, not error
            line: Some(1),
        })
    } else {
        None
    }
}

/// Check that a non-empty body is separated from the title by a blank line.
///
/// Skipped when the body has zero lines, even if no separator was present.
fn check_body_separator(message: &ParsedMessage) -> Option<ValidationIssue> {
    if message.body.lines().next().is_some() && !message.has_separator {
        Some(ValidationIssue {
            code: "body-separator".to_string(),
            message: "Body must be separated from title by one blank line.".to_string(),
            suggestion: Some("Insert a blank line after the title".to_string()),
            is_error: true,
            line: Some(2),
        })
    } else {
        None
    }
}

/// Per-line body checks: length limit and trailing whitespace.
fn check_body_lines(message: &ParsedMessage, rules: &RulesConfig) -> Vec<ValidationIssue> {
    let max = rules.body_line_max;
    let mut issues = Vec::new();

    for (idx, line) in message.body.lines().enumerate() {
        let idx = idx + 1;
        let len = line.chars().count();

        if len > max && !URL_LINE.is_match(line) {
            issues.push(ValidationIssue {
                code: "body-max-length".to_string(),
                message: format!("Body line {} is {} chars (max {}).", idx, len, max),
                suggestion: Some(format!("Wrap the line at {} characters", max)),
                is_error: true,
                line: Some(idx),
            });
        }

        if line != line.trim_end() {
            issues.push(ValidationIssue {
                code: "body-trailing-whitespace".to_string(),
                message: format!("Body line {} has trailing whitespace.", idx),
                suggestion: Some("Strip whitespace at the end of the line".to_string()),
                is_error: false, // Warning
                line: Some(idx),
            });
        }
    }

    issues
}
