//! Application layer for choiceset
//!
//! This crate contains use cases, port definitions, and the choice catalog.
//! It depends only on the domain layer.

pub mod catalog;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use catalog::ChoiceCatalog;
pub use ports::choice_source::{
    ChoiceSetDefinition, ChoiceSourceError, ChoiceSourcePort, SourcedDefinition,
    StaticChoiceSource,
};
pub use use_cases::load_choices::{CheckReport, LoadChoicesError, LoadChoicesUseCase, SetFailure};
