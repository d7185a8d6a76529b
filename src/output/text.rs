//! Text output formatter for human-readable display
//!
//! Layout per package with something to show:
//!
//! ```text
//! requests (2.0.0) - License: Apache 2.0
//!   Major releases:
//!   -- 3.0.0 on 2015-09-29 23:34:21 - License: Apache 2.0
//! ___
//! ```

use crate::domain::{ReleaseCategory, ReleaseRecord, UpdateSummary};
use crate::orchestrator::BatchResult;
use crate::output::OutputFormatter;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether pre-releases are listed
    show_pre_releases: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(show_pre_releases: bool) -> Self {
        Self {
            show_pre_releases,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(show_pre_releases: bool, color: bool) -> Self {
        Self {
            show_pre_releases,
            color,
        }
    }

    /// Whether a category is listed for this summary
    fn is_listed(&self, category: ReleaseCategory, summary: &UpdateSummary) -> bool {
        match category {
            ReleaseCategory::PreRelease => self.show_pre_releases && summary.pre_releases > 0,
            _ => summary.newer_releases > 0,
        }
    }

    fn format_heading(&self, category: ReleaseCategory) -> String {
        let heading = category.heading();
        if !self.color {
            return heading.to_string();
        }
        match category {
            ReleaseCategory::Major => heading.red().bold().to_string(),
            ReleaseCategory::Minor => heading.yellow().to_string(),
            ReleaseCategory::Patch => heading.green().to_string(),
            ReleaseCategory::PreRelease => heading.cyan().to_string(),
            ReleaseCategory::NonSemantic => heading.dimmed().to_string(),
        }
    }

    fn format_category(
        &self,
        category: ReleaseCategory,
        releases: &[ReleaseRecord],
        license: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if releases.is_empty() {
            return Ok(());
        }

        writeln!(writer, "  {}:", self.format_heading(category))?;
        for release in releases {
            writeln!(
                writer,
                "  -- {} on {} - License: {}",
                release.version,
                format_upload_time(release.upload_time),
                license
            )?;
        }
        Ok(())
    }
}

/// Format an upload time the way the report shows it
fn format_upload_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "unknown".to_string(),
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, result: &BatchResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for summary in result.summaries() {
            self.format_summary(summary, writer)?;
        }
        Ok(())
    }

    fn format_summary(
        &self,
        summary: &UpdateSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if !summary.has_updates(self.show_pre_releases) {
            return Ok(());
        }

        let license = summary.current_release_license.as_str();
        let name = if self.color {
            summary.package.bold().to_string()
        } else {
            summary.package.clone()
        };
        writeln!(writer, "{} ({}) - License: {}", name, summary.version, license)?;

        for category in ReleaseCategory::ALL {
            if self.is_listed(category, summary) {
                self.format_category(category, summary.releases.get(category), license, writer)?;
            }
        }

        writeln!(writer, "___")?;
        Ok(())
    }

    fn format_failures(&self, result: &BatchResult, writer: &mut dyn Write) -> std::io::Result<()> {
        for report in &result.reports {
            let Err(e) = &report.outcome else {
                continue;
            };
            let label = if self.color {
                "Error".red().bold().to_string()
            } else {
                "Error".to_string()
            };
            writeln!(
                writer,
                "{} ({}) - {}: {}",
                report.requirement.package, report.requirement.version, label, e
            )?;
        }
        Ok(())
    }
}
