// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CmlintError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CmlintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cmlint.toml", ".cmlint.toml", ".config/cmlint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("cmlint").join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CmlintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CmlintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CmlintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CmlintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CmlintConfig> {
    toml::from_str(content).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.rules.title_max, 72);
        assert_eq!(config.rules.body_line_max, 72);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
title_max = 50
body_line_max = 100
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.title_max, 50);
        assert_eq!(config.rules.body_line_max, 100);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("[rules]\ntitle_max = 50\n").unwrap();
        assert_eq!(config.rules.title_max, 50);
        assert_eq!(config.rules.body_line_max, 72);
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(parse_config("[rules]\ntitle_max = \"long\"\n").is_err());
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let result = load_config_from(Path::new("/nonexistent/cmlint.toml"));
        assert!(matches!(
            result,
            Err(CmlintError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_file_from() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("cmlint.toml")).unwrap();
        writeln!(file, "[rules]").unwrap();

        let found = find_config_file_from(dir.path()).unwrap();
        assert!(found.ends_with("cmlint.toml"));
    }
}
