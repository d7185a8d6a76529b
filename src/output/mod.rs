//! Output formatting for update reports
//!
//! This module provides:
//! - Text output in the classic console layout
//! - JSON output for machine processing

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::domain::UpdateSummary;
use crate::orchestrator::BatchResult;
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine processing
    Json,
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Whether pre-releases are listed
    pub show_pre_releases: bool,
    /// Whether to use colors (when supported)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_pre_releases: false,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, show_pre_releases: bool, no_color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Self {
            format,
            show_pre_releases,
            color: !no_color,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the report for every package
    fn format(&self, result: &BatchResult, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Format and write the report for one package
    fn format_summary(&self, summary: &UpdateSummary, writer: &mut dyn Write)
        -> std::io::Result<()>;

    /// Write one line per failed package
    fn format_failures(&self, result: &BatchResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in &result.reports {
            if let Err(e) = &report.outcome {
                writeln!(
                    writer,
                    "{} ({}) - Error: {}",
                    report.requirement.package, report.requirement.version, e
                )?;
            }
        }
        Ok(())
    }
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Text => Box::new(TextFormatter::with_color(
            config.show_pre_releases,
            config.color,
        )),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
