// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit message validation.
//!
//! This module provides the fixed structural rule set, the engine that
//! applies it, and the result/report types.

mod builtin;
mod engine;
mod validator;

pub use builtin::apply_builtin_rules;
pub use engine::RuleEngine;
pub use validator::{Report, ValidationIssue, ValidationResult};
