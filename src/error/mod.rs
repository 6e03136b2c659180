// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cmlint application.
//!
//! Usage errors and fatal failures are typed here; rule violations are
//! never errors at this level - they are collected in a
//! [`ValidationResult`](crate::rules::ValidationResult).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmlint operations.
#[derive(Error, Debug)]
pub enum CmlintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Invocation errors
    #[error(transparent)]
    Usage(#[from] UsageError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CmlintError {
    /// Process exit code for this error.
    ///
    /// Usage errors exit 2; everything else is a fatal failure and exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CmlintError::Usage(_) => 2,
            _ => 1,
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Malformed invocations, reported before any validation runs.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Provide --title when --message-file is not used.")]
    MissingInput,
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, CmlintError>;
