//! The frozen choice set.
//!
//! # Examples
//!
//! ```
//! use choiceset_domain::ChoiceSet;
//!
//! let status = ChoiceSet::new([("new", "new"), ("complete", "code complete")]).unwrap();
//! assert_eq!(status.get("new"), Some("new"));
//! assert_eq!(status.names(), ["new", "complete"]);
//! assert_eq!(status.iter().collect::<Vec<_>>(), ["new", "complete"]);
//! ```

use super::attribute::{Attribute, AttributeSurface};
use super::pair::Choice;
use super::reserved::is_reserved;
use crate::core::error::ChoiceSetError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::iter::FusedIterator;

/// An immutable enumeration built from `(name, label)` pairs.
///
/// Each declared name is a self-valued constant: `set.get("new") == Some("new")`.
/// The pairs are kept in input order for use as a field's choice list, and
/// [`names`](Self::names) holds the bare values in the same order.
///
/// There is no `&mut self` method on this type apart from the
/// [`AttributeSurface`] mutators, which always fail. Sharing a set across
/// threads needs no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Choice>", into = "Vec<Choice>")]
pub struct ChoiceSet {
    pairs: Vec<Choice>,
    names: Vec<String>,
    /// name -> position in `pairs`
    index: HashMap<String, usize>,
}

impl ChoiceSet {
    const TYPE_NAME: &'static str = "ChoiceSet";

    /// Build a set from `(name, label)` pairs.
    ///
    /// Names are scanned in input order; the first one that is reserved
    /// (see [`RESERVED_NAMES`](super::RESERVED_NAMES)) or already declared
    /// fails the whole construction with [`ChoiceSetError::ReservedName`].
    pub fn new<I, C>(pairs: I) -> Result<Self, ChoiceSetError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        let pairs: Vec<Choice> = pairs.into_iter().map(Into::into).collect();

        let mut index = HashMap::with_capacity(pairs.len());
        for (position, choice) in pairs.iter().enumerate() {
            let name = choice.name();
            if is_reserved(name) || index.contains_key(name) {
                return Err(ChoiceSetError::reserved_name(name));
            }
            index.insert(name.to_string(), position);
        }

        let names = pairs.iter().map(|c| c.name().to_string()).collect();

        Ok(Self {
            pairs,
            names,
            index,
        })
    }

    /// The `(name, label)` pairs, in input order
    pub fn pairs(&self) -> &[Choice] {
        &self.pairs
    }

    /// The bare names, in input order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Alias of [`pairs`](Self::pairs)
    pub fn choices(&self) -> &[Choice] {
        self.pairs()
    }

    /// Alias of [`names`](Self::names)
    pub fn constants(&self) -> &[String] {
        self.names()
    }

    /// Look up a declared constant. The value is the name itself.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.names[i].as_str())
    }

    /// Display label for a declared name
    pub fn label(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.pairs[i].label())
    }

    /// Whether `value` is one of the declared names (i.e. a valid stored value)
    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the names, in input order. Restartable: each call
    /// starts from the first name.
    pub fn iter(&self) -> Names<'_> {
        Names {
            inner: self.names.iter(),
        }
    }
}

impl AttributeSurface for ChoiceSet {
    fn attr(&self, name: &str) -> Option<Attribute<'_>> {
        match name {
            "pairs" | "choices" => Some(Attribute::Pairs(&self.pairs)),
            "names" | "constants" => Some(Attribute::Names(&self.names)),
            _ => self.get(name).map(Attribute::Constant),
        }
    }

    fn set_attr(&mut self, name: &str, _value: &str) -> Result<(), ChoiceSetError> {
        Err(ChoiceSetError::immutable_assignment(Self::TYPE_NAME, name))
    }

    fn delete_attr(&mut self, name: &str) -> Result<(), ChoiceSetError> {
        Err(ChoiceSetError::immutable_assignment(Self::TYPE_NAME, name))
    }
}

impl TryFrom<Vec<Choice>> for ChoiceSet {
    type Error = ChoiceSetError;

    fn try_from(pairs: Vec<Choice>) -> Result<Self, Self::Error> {
        ChoiceSet::new(pairs)
    }
}

impl From<ChoiceSet> for Vec<Choice> {
    fn from(set: ChoiceSet) -> Self {
        set.pairs
    }
}

impl<'a> IntoIterator for &'a ChoiceSet {
    type Item = &'a str;
    type IntoIter = Names<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the names of a [`ChoiceSet`].
#[derive(Debug, Clone)]
pub struct Names<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Names<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Names<'_> {}

impl FusedIterator for Names<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::reserved::RESERVED_NAMES;

    // ==================== Helper ====================

    fn status() -> ChoiceSet {
        ChoiceSet::new([("new", "new"), ("complete", "code complete")]).unwrap()
    }

    // ==================== Construction ====================

    #[test]
    fn test_pairs_preserve_input_order() {
        let cs = status();
        assert_eq!(
            cs.pairs(),
            [Choice::new("new", "new"), Choice::new("complete", "code complete")]
        );
    }

    #[test]
    fn test_names_follow_pairs() {
        let cs = status();
        assert_eq!(cs.names(), ["new", "complete"]);
    }

    #[test]
    fn test_constants_equal_their_names() {
        let cs = status();
        assert_eq!(cs.get("new"), Some("new"));
        assert_eq!(cs.get("complete"), Some("complete"));
        assert_eq!(cs.get("finished"), None);
    }

    #[test]
    fn test_aliases() {
        let cs = status();
        assert_eq!(cs.choices(), cs.pairs());
        assert_eq!(cs.constants(), cs.names());
    }

    #[test]
    fn test_label_lookup() {
        let cs = status();
        assert_eq!(cs.label("complete"), Some("code complete"));
        assert_eq!(cs.label("missing"), None);
    }

    #[test]
    fn test_contains() {
        let cs = status();
        assert!(cs.contains("new"));
        assert!(!cs.contains("code complete"));
        assert!(!cs.contains("pairs"));
    }

    #[test]
    fn test_empty_input() {
        let cs = ChoiceSet::new(Vec::<Choice>::new()).unwrap();
        assert!(cs.is_empty());
        assert_eq!(cs.len(), 0);
        assert!(cs.pairs().is_empty());
        assert!(cs.names().is_empty());
        assert_eq!(cs.iter().next(), None);
        assert_eq!(cs, ChoiceSet::default());
    }

    #[test]
    fn test_many_pairs_keep_order() {
        let input: Vec<(String, String)> = (0..50)
            .map(|i| (format!("state_{}", i), format!("State {}", i)))
            .collect();
        let cs = ChoiceSet::new(input.clone()).unwrap();
        let expected: Vec<&str> = input.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(cs.iter().collect::<Vec<_>>(), expected);
        for (name, label) in &input {
            assert_eq!(cs.get(name), Some(name.as_str()));
            assert_eq!(cs.label(name), Some(label.as_str()));
        }
    }

    // ==================== Rejected names ====================

    #[test]
    fn test_duplicate_name_rejected() {
        let err = ChoiceSet::new([("new", "New"), ("new", "Also New")]).unwrap_err();
        assert_eq!(err, ChoiceSetError::reserved_name("new"));
    }

    #[test]
    fn test_reserved_pairs_rejected() {
        let err = ChoiceSet::new([("pairs", "Pairs")]).unwrap_err();
        assert_eq!(err, ChoiceSetError::reserved_name("pairs"));
    }

    #[test]
    fn test_reserved_names_rejected() {
        let err = ChoiceSet::new([("names", "Names")]).unwrap_err();
        assert_eq!(err, ChoiceSetError::reserved_name("names"));
    }

    #[test]
    fn test_first_collision_in_input_order_reported() {
        let err = ChoiceSet::new([
            ("open", "Open"),
            ("choices", "Choices"),
            ("open", "Open again"),
        ])
        .unwrap_err();
        assert_eq!(err.name(), "choices");
    }

    #[test]
    fn test_every_reserved_name_is_reachable_on_empty_set() {
        let cs = ChoiceSet::default();
        for name in RESERVED_NAMES {
            assert!(cs.has_attr(name), "{} should resolve", name);
            assert!(ChoiceSet::new([(name, "x")]).unwrap_err().is_reserved_name());
        }
    }

    // ==================== Iteration ====================

    #[test]
    fn test_iteration_matches_names() {
        let cs = status();
        let iterated: Vec<&str> = cs.iter().collect();
        assert_eq!(iterated, cs.names());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let cs = status();
        assert_eq!(cs.iter().count(), 2);
        let mut names = Vec::new();
        for name in &cs {
            names.push(name);
        }
        assert_eq!(names, ["new", "complete"]);
    }

    #[test]
    fn test_iterator_is_exact_and_reversible() {
        let cs = status();
        let mut it = cs.iter();
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back(), Some("complete"));
        assert_eq!(it.next(), Some("new"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    // ==================== Attribute surface ====================

    #[test]
    fn test_attr_resolution() {
        let cs = status();
        assert_eq!(cs.attr("new"), Some(Attribute::Constant("new")));
        assert_eq!(cs.attr("pairs"), Some(Attribute::Pairs(cs.pairs())));
        assert_eq!(cs.attr("choices"), Some(Attribute::Pairs(cs.pairs())));
        assert_eq!(cs.attr("names"), Some(Attribute::Names(cs.names())));
        assert_eq!(cs.attr("constants"), Some(Attribute::Names(cs.names())));
        assert_eq!(cs.attr("finished"), None);
    }

    #[test]
    fn test_assigning_declared_constant_fails() {
        let mut cs = status();
        let err = cs.set_attr("new", "finished").unwrap_err();
        assert_eq!(
            err,
            ChoiceSetError::immutable_assignment("ChoiceSet", "new")
        );
        assert_eq!(cs.get("new"), Some("new"));
        assert_eq!(cs, status());
    }

    #[test]
    fn test_assigning_new_attribute_fails() {
        let mut cs = status();
        let err = cs.set_attr("brand_new_attr", "1").unwrap_err();
        assert!(matches!(
            err,
            ChoiceSetError::ImmutableAssignment { type_name: "ChoiceSet", ref attribute }
                if attribute == "brand_new_attr"
        ));
        assert!(!cs.has_attr("brand_new_attr"));
    }

    #[test]
    fn test_assigning_builtin_accessors_fails() {
        let mut cs = status();
        assert!(cs.set_attr("pairs", "x").is_err());
        assert!(cs.set_attr("names", "x").is_err());
        assert_eq!(cs.names(), ["new", "complete"]);
    }

    #[test]
    fn test_delete_fails() {
        let mut cs = status();
        assert_eq!(
            cs.delete_attr("complete").unwrap_err(),
            ChoiceSetError::immutable_assignment("ChoiceSet", "complete")
        );
        assert!(cs.delete_attr("names").is_err());
        assert!(cs.contains("complete"));
    }

    // ==================== Serde ====================

    #[test]
    fn test_serialize_as_pair_list() {
        let json = serde_json::to_string(&status()).unwrap();
        assert_eq!(json, r#"[["new","new"],["complete","code complete"]]"#);
    }

    #[test]
    fn test_deserialize_validates() {
        let cs: ChoiceSet = serde_json::from_str(r#"[["new","new"],["complete","code complete"]]"#)
            .unwrap();
        assert_eq!(cs, status());

        let err = serde_json::from_str::<ChoiceSet>(r#"[["new","New"],["new","Again"]]"#)
            .unwrap_err();
        assert!(err.to_string().contains("Cannot use reserved name 'new'"));
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChoiceSet>();
    }
}
