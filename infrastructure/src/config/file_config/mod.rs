//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod sets;

pub use output::{FileOutputConfig, FileOutputFormat};
pub use sets::FileChoiceSetConfig;

use choiceset_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Choice set declarations, keyed by set name
    pub sets: BTreeMap<String, FileChoiceSetConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Duplicate and reserved names are not reported here; they are
    /// domain errors raised when the set is built.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (name, set) in &self.sets {
            if set.pairs.is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptySet { set: name.clone() },
                    format!("sets.{}: no pairs declared", name),
                ));
            }
            issues.extend(set.parse_pairs(name).1);
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choiceset_domain::{OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "json"
color = false

[sets.status]
pairs = [["new", "new"], ["complete", "code complete"]]

[sets.priority]
pairs = [["low", "Low"], ["high", "High"]]
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.sets.len(), 2);
        assert_eq!(
            config.sets["status"],
            FileChoiceSetConfig::from_pairs([("new", "new"), ("complete", "code complete")])
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[sets.status]
pairs = [["new", "New"]]
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert_eq!(config.sets["status"].pairs.len(), 1);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.sets.is_empty());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_issues() {
        let toml_str = r#"
[sets.empty]
pairs = []

[sets.status]
pairs = [["new", ""], ["broken"]]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptySet {
                set: "empty".to_string()
            }
        );
        assert_eq!(issues[1].severity, Severity::Warning);
        assert_eq!(issues[2].severity, Severity::Error);
    }
}
