// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the configuration structures that can be loaded from cmlint.toml.

use serde::{Deserialize, Serialize};

/// The main configuration structure for cmlint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CmlintConfig {
    /// Rule configuration.
    pub rules: RulesConfig,
}

impl CmlintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum length of the title line.
    pub title_max: usize,

    /// Maximum length of a body line.
    pub body_line_max: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            title_max: 72,
            body_line_max: 72,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CmlintConfig::default();
        assert_eq!(config.rules.title_max, 72);
        assert_eq!(config.rules.body_line_max, 72);
    }

    #[test]
    fn test_config_serialization() {
        let config = CmlintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("title_max"));
        assert!(toml_str.contains("body_line_max"));
    }
}
