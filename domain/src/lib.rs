//! Domain layer for choiceset
//!
//! This crate contains the core value objects and their invariants.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## ChoiceSet
//!
//! An immutable enumeration built from `(name, label)` pairs, meant to back
//! a model field's choice list:
//!
//! - **pairs**: the `(name, label)` list, in declaration order
//! - **names**: the bare stored values, in the same order
//! - **constants**: every name resolves to itself (`status.get("new") == Some("new")`)
//!
//! A set is frozen once built. Duplicate names and names that shadow the
//! set's own accessors are rejected at construction.

pub mod choice;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use choice::{
    Attribute, AttributeSurface, Choice, ChoiceSet, Names, RESERVED_NAMES, is_reserved,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use self::core::error::ChoiceSetError;
