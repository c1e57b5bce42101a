//! Application use cases

pub mod load_choices;
