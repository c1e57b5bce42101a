//! Name-based attribute access for callers that only know names at runtime
//! (templates, config-driven code, scripting bridges).

use super::pair::Choice;
use crate::core::error::ChoiceSetError;

/// A value resolved from an attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute<'a> {
    /// `pairs` / `choices`
    Pairs(&'a [Choice]),
    /// `names` / `constants`
    Names(&'a [String]),
    /// A declared name; the constant equals its own identifier.
    Constant(&'a str),
}

impl<'a> Attribute<'a> {
    /// The constant value, if this attribute is one
    pub fn as_constant(&self) -> Option<&'a str> {
        match *self {
            Attribute::Constant(value) => Some(value),
            _ => None,
        }
    }
}

/// Dynamic get/set/delete by attribute name.
///
/// Frozen types implement the mutators by returning
/// [`ChoiceSetError::ImmutableAssignment`] unconditionally.
pub trait AttributeSurface {
    /// Resolve an attribute by name.
    fn attr(&self, name: &str) -> Option<Attribute<'_>>;

    /// Assign `value` to the attribute `name`.
    fn set_attr(&mut self, name: &str, value: &str) -> Result<(), ChoiceSetError>;

    /// Remove the attribute `name`.
    fn delete_attr(&mut self, name: &str) -> Result<(), ChoiceSetError>;

    fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}
