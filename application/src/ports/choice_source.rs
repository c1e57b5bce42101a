//! Choice source port.
//!
//! A source hands out raw set definitions; turning them into frozen
//! [`ChoiceSet`](choiceset_domain::ChoiceSet)s is the use case's job so
//! every source gets the same validation.

use choiceset_domain::Choice;
use thiserror::Error;

/// A named, not yet validated list of pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSetDefinition {
    /// Set name (e.g. `status`)
    pub name: String,
    /// Pairs in declaration order
    pub pairs: Vec<Choice>,
}

impl ChoiceSetDefinition {
    pub fn new<I, C>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        Self {
            name: name.into(),
            pairs: pairs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Errors a source can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceSourceError {
    #[error("Choice source unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed choice set '{set}': {reason}")]
    Malformed { set: String, reason: String },
}

impl ChoiceSourceError {
    /// The set this error is about, if it concerns a single set
    pub fn set(&self) -> Option<&str> {
        match self {
            ChoiceSourceError::Unavailable(_) => None,
            ChoiceSourceError::Malformed { set, .. } => Some(set),
        }
    }
}

/// One entry read from a source. A malformed set does not hide the others.
pub type SourcedDefinition = Result<ChoiceSetDefinition, ChoiceSourceError>;

/// Port for anything that can provide choice-set definitions.
pub trait ChoiceSourcePort: Send + Sync {
    /// All definitions, in the order the source declares them.
    ///
    /// The outer error means nothing could be read; inner errors are
    /// per-set and are reported alongside the sets that did parse.
    fn definitions(&self) -> Result<Vec<SourcedDefinition>, ChoiceSourceError>;
}

/// In-memory source, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticChoiceSource {
    definitions: Vec<SourcedDefinition>,
}

impl StaticChoiceSource {
    pub fn new(definitions: Vec<ChoiceSetDefinition>) -> Self {
        Self {
            definitions: definitions.into_iter().map(Ok).collect(),
        }
    }

    /// Add a set the source could not parse
    pub fn with_malformed(mut self, name: impl Into<String>, reason: impl Into<String>) -> Self {
        self.definitions.push(Err(ChoiceSourceError::Malformed {
            set: name.into(),
            reason: reason.into(),
        }));
        self
    }

    pub fn with_set<I, C>(mut self, name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        self.definitions.push(Ok(ChoiceSetDefinition::new(name, pairs)));
        self
    }
}

impl ChoiceSourcePort for StaticChoiceSource {
    fn definitions(&self) -> Result<Vec<SourcedDefinition>, ChoiceSourceError> {
        Ok(self.definitions.clone())
    }
}
