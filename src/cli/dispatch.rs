// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Invocation mode selection and execution.

use crate::config::CmlintConfig;
use crate::error::{Result, UsageError};
use crate::message::ParsedMessage;
use crate::rules::{Report, RuleEngine};

use super::args::Cli;

/// Run the gate with the given arguments, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    // Select the input mode; file mode wins when both are supplied
    let message = if let Some(path) = &cli.message_file {
        tracing::debug!("Reading commit message from {:?}", path);
        ParsedMessage::from_file(path)?
    } else if let Some(title) = &cli.title {
        ParsedMessage::from_parts(title.clone(), cli.body.clone())
    } else {
        return Err(UsageError::MissingInput.into());
    };

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        CmlintConfig::load_from(config_path)?
    } else {
        CmlintConfig::load()?
    };

    // Flags override configured limits
    if let Some(max) = cli.title_max {
        config.rules.title_max = max;
    }
    if let Some(max) = cli.body_line_max {
        config.rules.body_line_max = max;
    }

    let engine = RuleEngine::new(config);
    let result = engine.validate(&message);
    tracing::debug!("Validation finished: {}", result.summary());

    Report::new(&message, &engine.config().rules, &result).print(cli.format);

    Ok(if result.is_valid() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_run_passing_title() {
        let code = run(parse(&["cmlint", "--title", "Add feature"])).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_run_empty_title_fails() {
        let code = run(parse(&["cmlint", "--title", ""])).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_run_without_input_is_usage_error() {
        let err = run(parse(&["cmlint"])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_run_file_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Fix bug\n\nDetails here.").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let code = run(parse(&["cmlint", "--message-file", &path])).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_run_file_mode_missing_file_is_fatal() {
        let err = run(parse(&[
            "cmlint",
            "--message-file",
            "/nonexistent/COMMIT_EDITMSG",
        ]))
        .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_file_mode_wins_over_direct_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Fix bug").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        // The over-long --title is ignored because the file is parsed instead.
        let title = "a".repeat(100);
        let code = run(parse(&[
            "cmlint",
            "--message-file",
            &path,
            "--title",
            &title,
        ]))
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_flag_overrides_limit() {
        let code = run(parse(&[
            "cmlint",
            "--title",
            "Add feature",
            "--title-max",
            "5",
        ]))
        .unwrap();
        assert_eq!(code, 1);
    }
}
