//! Configuration issues found while validating declared choice sets.
//!
//! Issues never abort loading. Hard failures (duplicate or reserved names)
//! surface as [`ChoiceSetError`](crate::ChoiceSetError) when the set is built.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The declaration cannot produce a usable set.
    Error,
    /// The set builds but is probably not what was intended.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A set declares no pairs.
    EmptySet { set: String },
    /// A pair has an empty or whitespace-only label.
    EmptyLabel { set: String, name: String },
    /// A pair is not a `[name, label]` array.
    MalformedPair { set: String, index: usize },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
