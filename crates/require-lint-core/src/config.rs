//! Configuration types for require-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::Severity;

/// Top-level configuration for require-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold at which the embedding host should fail
    /// (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Returns the severity threshold the host should fail at.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_enables_everything() {
        let config = Config::default();
        assert!(config.is_rule_enabled("sort-requires"));
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn parse_config() {
        let toml = r#"
fail_on = "warning"

[rules.sort-requires]
enabled = true
severity = "warning"
"#;

        let config = Config::parse(toml).expect("config should parse");
        assert_eq!(config.fail_on(), Severity::Warning);
        assert!(config.is_rule_enabled("sort-requires"));
        assert_eq!(
            config.rule_severity("sort-requires"),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn disabled_rule() {
        let toml = r#"
[rules.sort-requires]
enabled = false
"#;
        let config = Config::parse(toml).expect("config should parse");
        assert!(!config.is_rule_enabled("sort-requires"));
        assert!(config.is_rule_enabled("some-other-rule"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("fail_on = [").expect_err("should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[rules.sort-requires]\nseverity = \"info\"").expect("write");

        let config = Config::from_file(file.path()).expect("config should load");
        assert_eq!(config.rule_severity("sort-requires"), Some(Severity::Info));
    }

    #[test]
    fn from_file_missing_is_an_io_error() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/require-lint.toml"))
            .expect_err("should fail");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
