//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ChoiceSetError`] — construction and mutation errors

pub mod error;
