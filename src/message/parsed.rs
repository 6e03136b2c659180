// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and title/body splitting.

use crate::error::Result;
use std::path::Path;

/// A commit message split into title and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    /// First line of the message.
    pub title: String,
    /// Message content following the title.
    pub body: String,
    /// Whether a blank line separated title and body.
    pub has_separator: bool,
}

impl ParsedMessage {
    /// Build a message from title and body supplied separately.
    ///
    /// Separator validation applies only when parsing a full message file;
    /// a caller supplying discrete values has already split title and body,
    /// so the separator is treated as present.
    pub fn from_parts(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            has_separator: true,
        }
    }

    /// Split raw message text into title and body.
    ///
    /// The first line is always the title. If the second line is blank it
    /// is the separator and the body starts on the third line; otherwise
    /// the body starts on the second line. Always succeeds, including on
    /// empty input.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();

        let Some((title, rest)) = lines.split_first() else {
            return Self {
                title: String::new(),
                body: String::new(),
                has_separator: false,
            };
        };

        if rest.is_empty() {
            return Self {
                title: (*title).to_string(),
                body: String::new(),
                has_separator: false,
            };
        }

        let has_separator = rest[0].is_empty();
        let body = if has_separator {
            rest[1..].join("\n")
        } else {
            rest.join("\n")
        };

        Self {
            title: (*title).to_string(),
            body,
            has_separator,
        }
    }

    /// Read and parse a full commit message file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Title length in characters.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    /// Number of lines in the body.
    pub fn body_line_count(&self) -> usize {
        self.body.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let msg = ParsedMessage::parse("");
        assert_eq!(msg.title, "");
        assert_eq!(msg.body, "");
        assert!(!msg.has_separator);
    }

    #[test]
    fn test_parse_single_line() {
        let msg = ParsedMessage::parse("Fix bug");
        assert_eq!(msg.title, "Fix bug");
        assert_eq!(msg.body, "");
        assert!(!msg.has_separator);
    }

    #[test]
    fn test_parse_with_separator() {
        let msg = ParsedMessage::parse("Fix bug\n\nDetails here.");
        assert_eq!(msg.title, "Fix bug");
        assert_eq!(msg.body, "Details here.");
        assert!(msg.has_separator);
    }

    #[test]
    fn test_parse_without_separator() {
        let msg = ParsedMessage::parse("Fix bug\nDetails here.");
        assert_eq!(msg.title, "Fix bug");
        assert_eq!(msg.body, "Details here.");
        assert!(!msg.has_separator);
    }

    #[test]
    fn test_parse_multi_line_body() {
        let msg = ParsedMessage::parse("Fix bug\n\nFirst line.\nSecond line.");
        assert_eq!(msg.body, "First line.\nSecond line.");
        assert_eq!(msg.body_line_count(), 2);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "Fix bug\n\nDetails here.";
        assert_eq!(ParsedMessage::parse(text), ParsedMessage::parse(text));
    }

    #[test]
    fn test_from_parts_forces_separator() {
        let msg = ParsedMessage::from_parts("Fix bug", "Details here.");
        assert!(msg.has_separator);
        assert_eq!(msg.title, "Fix bug");
        assert_eq!(msg.body, "Details here.");
    }

    #[test]
    fn test_title_len_counts_chars() {
        let msg = ParsedMessage::from_parts("héllo", "");
        assert_eq!(msg.title_len(), 5);
    }

    #[test]
    fn test_body_line_count_empty() {
        let msg = ParsedMessage::from_parts("Fix bug", "");
        assert_eq!(msg.body_line_count(), 0);
    }
}
