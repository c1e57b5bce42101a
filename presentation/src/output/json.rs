//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use choiceset_application::{CheckReport, ChoiceCatalog};
use choiceset_domain::ChoiceSet;
use serde::Serialize;
use serde_json::json;

/// Formats results as pretty-printed JSON, one document per call,
/// newline-terminated like the console output.
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
        let mut output = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
        output.push('\n');
        output
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_set(&self, name: &str, set: &ChoiceSet) -> String {
        Self::pretty(&json!({
            "set": name,
            "choices": set,
            "names": set.names(),
        }))
    }

    fn format_catalog(&self, catalog: &ChoiceCatalog) -> String {
        Self::pretty(catalog)
    }

    fn format_names(&self, set: &ChoiceSet) -> String {
        Self::pretty(&json!(set.names()))
    }

    fn format_report(&self, report: &CheckReport) -> String {
        let failures: Vec<_> = report
            .failures
            .iter()
            .map(|f| json!({ "set": f.set, "error": f.error.to_string() }))
            .collect();

        Self::pretty(&json!({
            "ok": report.is_ok(),
            "valid": report.valid,
            "failures": failures,
        }))
    }
}
