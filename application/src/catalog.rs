//! Named registry of loaded choice sets.

use choiceset_domain::ChoiceSet;
use serde::Serialize;
use std::collections::BTreeMap;

/// Frozen choice sets keyed by set name, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChoiceCatalog {
    sets: BTreeMap<String, ChoiceSet>,
}

impl ChoiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous set under `name`, if any.
    pub(crate) fn insert(&mut self, name: impl Into<String>, set: ChoiceSet) -> Option<ChoiceSet> {
        self.sets.insert(name.into(), set)
    }

    pub fn get(&self, name: &str) -> Option<&ChoiceSet> {
        self.sets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Set names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChoiceSet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
