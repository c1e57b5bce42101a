//! Choice set declarations from TOML (`[sets.<name>]` sections)

use choiceset_application::{ChoiceSetDefinition, ChoiceSourceError};
use choiceset_domain::{Choice, ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw declaration of one choice set
///
/// ```toml
/// [sets.status]
/// pairs = [["new", "new"], ["complete", "code complete"]]
/// ```
///
/// Pairs are kept as plain string arrays so a malformed entry can be
/// reported against its set and index instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChoiceSetConfig {
    pub pairs: Vec<Vec<String>>,
}

impl FileChoiceSetConfig {
    pub fn from_pairs<I, N, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(name, label)| vec![name.into(), label.into()])
                .collect(),
        }
    }

    /// Parse the raw arrays into choices, returning any issues found.
    ///
    /// Malformed entries are dropped (error); empty labels are kept (warning).
    pub fn parse_pairs(&self, set: &str) -> (Vec<Choice>, Vec<ConfigIssue>) {
        let mut choices = Vec::with_capacity(self.pairs.len());
        let mut issues = Vec::new();

        for (index, pair) in self.pairs.iter().enumerate() {
            let [name, label] = pair.as_slice() else {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::MalformedPair {
                        set: set.to_string(),
                        index,
                    },
                    format!(
                        "sets.{}: pair {} has {} elements, expected [name, label]",
                        set,
                        index,
                        pair.len()
                    ),
                ));
                continue;
            };

            if label.trim().is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyLabel {
                        set: set.to_string(),
                        name: name.clone(),
                    },
                    format!("sets.{}: choice '{}' has an empty label", set, name),
                ));
            }
            choices.push(Choice::new(name.as_str(), label.as_str()));
        }

        (choices, issues)
    }

    /// Convert into a definition for the application layer.
    pub fn to_definition(&self, set: &str) -> Result<ChoiceSetDefinition, ChoiceSourceError> {
        let (choices, issues) = self.parse_pairs(set);
        if let Some(issue) = issues.into_iter().find(ConfigIssue::is_error) {
            return Err(ChoiceSourceError::Malformed {
                set: set.to_string(),
                reason: issue.message,
            });
        }
        Ok(ChoiceSetDefinition::new(set, choices))
    }
}
