//! Choice sets: immutable enumerations of `(name, label)` pairs.
//!
//! - [`pair::Choice`] — one `(name, label)` entry
//! - [`set::ChoiceSet`] — the frozen set, with self-valued constants
//! - [`attribute::AttributeSurface`] — name-based access for dynamic callers
//! - [`reserved`] — accessor names a choice may not use

pub mod attribute;
pub mod pair;
pub mod reserved;
pub mod set;

pub use attribute::{Attribute, AttributeSurface};
pub use pair::Choice;
pub use reserved::{RESERVED_NAMES, is_reserved};
pub use set::{ChoiceSet, Names};
