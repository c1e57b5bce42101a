//! Load choice sets use case
//!
//! Pulls definitions from a [`ChoiceSourcePort`] and freezes each one into a
//! [`ChoiceSet`]. Two entry points:
//!
//! - [`LoadChoicesUseCase::execute`] builds a [`ChoiceCatalog`] and stops at
//!   the first invalid set.
//! - [`LoadChoicesUseCase::check`] validates every set and reports all
//!   failures.

use crate::catalog::ChoiceCatalog;
use crate::ports::choice_source::{ChoiceSetDefinition, ChoiceSourceError, ChoiceSourcePort};
use choiceset_domain::{ChoiceSet, ChoiceSetError};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading choice sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadChoicesError {
    /// The source could not provide definitions.
    #[error("Source error: {0}")]
    Source(#[from] ChoiceSourceError),

    /// A definition failed domain validation.
    #[error("Invalid choice set '{set}': {source}")]
    InvalidSet {
        set: String,
        #[source]
        source: ChoiceSetError,
    },

    /// Two definitions share a set name.
    #[error("Choice set '{0}' is defined more than once")]
    DuplicateSet(String),

    /// Lookup of a set the catalog does not have.
    #[error("Unknown choice set '{0}'")]
    UnknownSet(String),
}

/// One set that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFailure {
    pub set: String,
    pub error: LoadChoicesError,
}

/// Result of [`LoadChoicesUseCase::check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Sets that built successfully, in source order
    pub valid: Vec<String>,
    /// Sets that did not, in source order
    pub failures: Vec<SetFailure>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.valid.len() + self.failures.len()
    }
}

/// Use case for turning source definitions into frozen choice sets.
pub struct LoadChoicesUseCase {
    source: Arc<dyn ChoiceSourcePort>,
}

impl LoadChoicesUseCase {
    pub fn new(source: Arc<dyn ChoiceSourcePort>) -> Self {
        Self { source }
    }

    /// Build the catalog, failing on the first invalid definition.
    pub fn execute(&self) -> Result<ChoiceCatalog, LoadChoicesError> {
        let definitions = self.source.definitions()?;
        let mut catalog = ChoiceCatalog::new();

        for definition in definitions {
            let definition = definition?;
            let name = definition.name.clone();
            let set = Self::build(definition)?;
            if catalog.insert(name.clone(), set).is_some() {
                return Err(LoadChoicesError::DuplicateSet(name));
            }
        }

        info!(sets = catalog.len(), "Loaded choice sets");
        Ok(catalog)
    }

    /// Validate every definition and collect all failures.
    ///
    /// Sets the source could not parse are reported like any other failure;
    /// only a source-wide error aborts the check.
    pub fn check(&self) -> Result<CheckReport, LoadChoicesError> {
        let definitions = self.source.definitions()?;
        let mut report = CheckReport::default();
        let mut seen = HashSet::new();

        for definition in definitions {
            let definition = match definition {
                Ok(definition) => definition,
                Err(error) => {
                    warn!(error = %error, "Unreadable choice set");
                    report.failures.push(SetFailure {
                        set: error.set().unwrap_or_default().to_string(),
                        error: error.into(),
                    });
                    continue;
                }
            };

            let name = definition.name.clone();
            if !seen.insert(name.clone()) {
                report.failures.push(SetFailure {
                    error: LoadChoicesError::DuplicateSet(name.clone()),
                    set: name,
                });
                continue;
            }

            match Self::build(definition) {
                Ok(_) => report.valid.push(name),
                Err(error) => report.failures.push(SetFailure { set: name, error }),
            }
        }

        info!(
            valid = report.valid.len(),
            failed = report.failures.len(),
            "Checked choice sets"
        );
        Ok(report)
    }

    /// Build a single set by name.
    ///
    /// Other sets are not validated, so an unrelated broken set does not
    /// block the lookup.
    pub fn load_set(&self, name: &str) -> Result<ChoiceSet, LoadChoicesError> {
        let mut candidates = self.source.definitions()?.into_iter().filter(|definition| {
            match definition {
                Ok(definition) => definition.name == name,
                Err(error) => error.set() == Some(name),
            }
        });

        let definition = candidates
            .next()
            .ok_or_else(|| LoadChoicesError::UnknownSet(name.to_string()))??;
        if candidates.next().is_some() {
            return Err(LoadChoicesError::DuplicateSet(name.to_string()));
        }

        Self::build(definition)
    }

    fn build(definition: ChoiceSetDefinition) -> Result<ChoiceSet, LoadChoicesError> {
        let ChoiceSetDefinition { name, pairs } = definition;
        match ChoiceSet::new(pairs) {
            Ok(set) => {
                debug!(set = %name, choices = set.len(), "Built choice set");
                Ok(set)
            }
            Err(source) => {
                warn!(set = %name, error = %source, "Rejected choice set");
                Err(LoadChoicesError::InvalidSet { set: name, source })
            }
        }
    }
}
