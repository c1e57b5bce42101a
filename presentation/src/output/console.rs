//! Console output formatter for choice sets

use crate::output::formatter::OutputFormatter;
use choiceset_application::{CheckReport, ChoiceCatalog};
use choiceset_domain::ChoiceSet;
use colored::Colorize;

/// Formats choice sets as aligned console tables
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one set as a name/label table
    pub fn format_set(name: &str, set: &ChoiceSet) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            name.cyan().bold(),
            format!("({} choices)", set.len()).dimmed()
        ));

        if set.is_empty() {
            output.push_str(&format!("  {}\n", "(empty)".dimmed()));
            return output;
        }

        let width = set.iter().map(str::len).max().unwrap_or(0);
        for choice in set.pairs() {
            output.push_str(&format!(
                "  {}  {}\n",
                format!("{:<width$}", choice.name()).yellow(),
                choice.label()
            ));
        }

        output
    }

    /// Format every set, separated by blank lines
    pub fn format_catalog(catalog: &ChoiceCatalog) -> String {
        if catalog.is_empty() {
            return format!("{}\n", "No choice sets configured".dimmed());
        }

        catalog
            .iter()
            .map(|(name, set)| Self::format_set(name, set))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One name per line
    pub fn format_names(set: &ChoiceSet) -> String {
        set.iter().map(|name| format!("{}\n", name)).collect()
    }

    /// Format a check report with one line per set
    pub fn format_report(report: &CheckReport) -> String {
        let mut output = String::new();

        for name in &report.valid {
            output.push_str(&format!("{} {}\n", "  ok  ".green().bold(), name));
        }
        for failure in &report.failures {
            output.push_str(&format!(
                "{} {}: {}\n",
                " FAIL ".red().bold(),
                failure.set,
                failure.error
            ));
        }

        let summary = format!(
            "{} checked, {} valid, {} failed",
            report.total(),
            report.valid.len(),
            report.failures.len()
        );
        if report.is_ok() {
            output.push_str(&format!("\n{}\n", summary.green()));
        } else {
            output.push_str(&format!("\n{}\n", summary.red()));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_set(&self, name: &str, set: &ChoiceSet) -> String {
        Self::format_set(name, set)
    }

    fn format_catalog(&self, catalog: &ChoiceCatalog) -> String {
        Self::format_catalog(catalog)
    }

    fn format_names(&self, set: &ChoiceSet) -> String {
        Self::format_names(set)
    }

    fn format_report(&self, report: &CheckReport) -> String {
        Self::format_report(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choiceset_application::{LoadChoicesUseCase, StaticChoiceSource};
    use std::sync::Arc;

    fn status() -> ChoiceSet {
        ChoiceSet::new([("new", "new"), ("complete", "code complete")]).unwrap()
    }

    #[test]
    fn test_format_set_lists_pairs_in_order() {
        let output = ConsoleFormatter::format_set("status", &status());
        assert!(output.contains("status"));
        assert!(output.contains("2 choices"));
        let new_at = output.find("new").unwrap();
        let complete_at = output.find("code complete").unwrap();
        assert!(new_at < complete_at);
    }

    #[test]
    fn test_format_empty_set() {
        let output = ConsoleFormatter::format_set("empty", &ChoiceSet::default());
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_format_names_one_per_line() {
        assert_eq!(ConsoleFormatter::format_names(&status()), "new\ncomplete\n");
    }

    #[test]
    fn test_format_report() {
        let source = StaticChoiceSource::default()
            .with_set("status", [("new", "new")])
            .with_set("broken", [("pairs", "Pairs")]);
        let report = LoadChoicesUseCase::new(Arc::new(source)).check().unwrap();

        let output = ConsoleFormatter::format_report(&report);
        assert!(output.contains("status"));
        assert!(output.contains("broken"));
        assert!(output.contains("Cannot use reserved name 'pairs'"));
        assert!(output.contains("2 checked, 1 valid, 1 failed"));
    }

    #[test]
    fn test_format_empty_catalog() {
        let output = ConsoleFormatter::format_catalog(&ChoiceCatalog::new());
        assert!(output.contains("No choice sets configured"));
    }
}
