// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// cmlint - Commit Message Format Gate
///
/// Validates commit message title/body layout against common limits.
#[derive(Parser, Debug)]
#[command(name = "cmlint")]
#[command(author = "Eshan Roy")]
#[command(version = Box::leak(crate::version::version_string().into_boxed_str()) as &'static str)]
#[command(about = "Commit message format gate", long_about = None)]
pub struct Cli {
    /// Commit title (single line)
    #[arg(long)]
    pub title: Option<String>,

    /// Commit body text
    #[arg(long, default_value = "")]
    pub body: String,

    /// Path to a full commit message file (title on first line)
    #[arg(long, value_name = "PATH")]
    pub message_file: Option<PathBuf>,

    /// Maximum title length (default: 72)
    #[arg(long, value_name = "N")]
    pub title_max: Option<usize>,

    /// Maximum body line length (default: 72)
    #[arg(long, value_name = "N")]
    pub body_line_max: Option<usize>,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// Check whether an input mode was selected.
    pub fn has_input(&self) -> bool {
        self.title.is_some() || self.message_file.is_some()
    }
}
