//! JSON output formatter for machine processing
//!
//! Emits one array entry per package, in input order: the full update
//! summary, or `{package, version, error}` for a failed check.

use crate::domain::UpdateSummary;
use crate::orchestrator::BatchResult;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of one package
#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntry<'a> {
    Summary(&'a UpdateSummary),
    Failure {
        package: &'a str,
        version: &'a str,
        error: String,
    },
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, result: &BatchResult, writer: &mut dyn Write) -> std::io::Result<()> {
        let entries: Vec<JsonEntry<'_>> = result
            .reports
            .iter()
            .map(|report| match &report.outcome {
                Ok(summary) => JsonEntry::Summary(summary),
                Err(e) => JsonEntry::Failure {
                    package: &report.requirement.package,
                    version: &report.requirement.version,
                    error: e.to_string(),
                },
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }

    fn format_summary(
        &self,
        summary: &UpdateSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }

    /// Failures are part of the JSON array
    fn format_failures(&self, _result: &BatchResult, _writer: &mut dyn Write) -> std::io::Result<()> {
        Ok(())
    }
}
