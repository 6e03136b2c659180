// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message validation.

use crate::config::CmlintConfig;
use crate::message::ParsedMessage;

use super::builtin::apply_builtin_rules;
use super::validator::ValidationResult;

/// Rule engine for validating commit messages.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: CmlintConfig,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: CmlintConfig) -> Self {
        Self { config }
    }

    /// Get the engine's configuration.
    pub fn config(&self) -> &CmlintConfig {
        &self.config
    }

    /// Validate a parsed message.
    pub fn validate(&self, message: &ParsedMessage) -> ValidationResult {
        let mut result = ValidationResult::new();

        for issue in apply_builtin_rules(message, &self.config.rules) {
            if issue.is_error {
                result.errors.push(issue);
            } else {
                result.warnings.push(issue);
            }
        }

        result
    }

    /// Parse raw message text and validate it.
    pub fn validate_text(&self, text: &str) -> ValidationResult {
        let parsed = ParsedMessage::parse(text);
        self.validate(&parsed)
    }
}
