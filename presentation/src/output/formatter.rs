//! Output formatter trait

use choiceset_application::{CheckReport, ChoiceCatalog};
use choiceset_domain::ChoiceSet;

/// Trait for rendering choice sets and check results
///
/// Non-empty output ends with a newline, so callers `print!` it as is.
pub trait OutputFormatter {
    /// Format one set's pairs
    fn format_set(&self, name: &str, set: &ChoiceSet) -> String;

    /// Format every set in the catalog
    fn format_catalog(&self, catalog: &ChoiceCatalog) -> String;

    /// Format a set's names in iteration order
    fn format_names(&self, set: &ChoiceSet) -> String;

    /// Format the result of validating all sets
    fn format_report(&self, report: &CheckReport) -> String;
}
