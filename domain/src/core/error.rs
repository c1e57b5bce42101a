//! Domain error types

use thiserror::Error;

/// Errors raised by [`ChoiceSet`](crate::ChoiceSet) construction and by
/// attempts to mutate a constructed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceSetError {
    /// A name is already reachable on the set: either a reserved accessor
    /// (`pairs`, `names`, ...) or a name declared earlier in the input.
    #[error("Cannot use reserved name '{name}'")]
    ReservedName { name: String },

    /// Any set/delete against a constructed set.
    #[error("'{type_name}' object does not permit assigning attribute '{attribute}'")]
    ImmutableAssignment {
        type_name: &'static str,
        attribute: String,
    },
}

impl ChoiceSetError {
    pub fn reserved_name(name: impl Into<String>) -> Self {
        Self::ReservedName { name: name.into() }
    }

    pub fn immutable_assignment(type_name: &'static str, attribute: impl Into<String>) -> Self {
        Self::ImmutableAssignment {
            type_name,
            attribute: attribute.into(),
        }
    }

    /// The identifier the error is about.
    pub fn name(&self) -> &str {
        match self {
            ChoiceSetError::ReservedName { name } => name,
            ChoiceSetError::ImmutableAssignment { attribute, .. } => attribute,
        }
    }

    /// Check if this error was raised during construction
    pub fn is_reserved_name(&self) -> bool {
        matches!(self, ChoiceSetError::ReservedName { .. })
    }
}
