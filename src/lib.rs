// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmlint - Commit Message Format Gate
//!
//! A pre-commit gate validating the structural formatting of commit
//! messages: title/body layout, line-length limits, and trailing
//! punctuation/whitespace.
//!
//! # Features
//!
//! - **Title/Body Parsing**: Split a raw message into title, body, and
//!   separator state
//! - **Rule Engine**: Fixed structural rule set with errors and warnings
//!   collected in evaluation order
//! - **Direct and File Modes**: Validate discrete title/body values or a
//!   full message file
//! - **Machine Output**: Stable text report plus optional JSON
//!
//! # Example
//!
//! ```
//! use cmlint::config::CmlintConfig;
//! use cmlint::message::ParsedMessage;
//! use cmlint::rules::RuleEngine;
//!
//! let message = ParsedMessage::parse("Fix bug\n\nDetails here.");
//! assert!(message.has_separator);
//!
//! let engine = RuleEngine::new(CmlintConfig::default());
//! let result = engine.validate(&message);
//! assert!(result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod rules;

// Re-exports for convenience
pub use config::CmlintConfig;
pub use error::{CmlintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
