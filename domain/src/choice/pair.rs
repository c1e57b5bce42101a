//! Choice pair value object

use serde::{Deserialize, Serialize};

/// A single `(name, label)` entry of a choice list (Value Object)
///
/// `name` is the programmatic value that ends up stored in a model field;
/// `label` is the human-readable display text. On the wire a choice is the
/// two-element array `["name", "label"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Choice {
    name: String,
    label: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }

    /// The stored value
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display text
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow as a `(name, label)` tuple
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.name, &self.label)
    }
}

impl<N, L> From<(N, L)> for Choice
where
    N: Into<String>,
    L: Into<String>,
{
    fn from((name, label): (N, L)) -> Self {
        Choice::new(name, label)
    }
}

impl From<Choice> for (String, String) {
    fn from(choice: Choice) -> Self {
        (choice.name, choice.label)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        let choice: Choice = ("complete", "code complete").into();
        assert_eq!(choice.name(), "complete");
        assert_eq!(choice.label(), "code complete");
        assert_eq!(choice.as_tuple(), ("complete", "code complete"));
    }

    #[test]
    fn test_display() {
        let choice = Choice::new("new", "New");
        assert_eq!(format!("{}", choice), "new (New)");
    }

    #[test]
    fn test_serialize_as_array() {
        let json = serde_json::to_string(&Choice::new("new", "New")).unwrap();
        assert_eq!(json, r#"["new","New"]"#);
    }

    #[test]
    fn test_deserialize_from_array() {
        let choice: Choice = serde_json::from_str(r#"["complete", "code complete"]"#).unwrap();
        assert_eq!(choice, Choice::new("complete", "code complete"));
    }

    #[test]
    fn test_deserialize_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Choice>(r#"["only-name"]"#).is_err());
        assert!(serde_json::from_str::<Choice>(r#"["a", "b", "c"]"#).is_err());
    }
}
