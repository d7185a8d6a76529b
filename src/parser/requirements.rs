//! pip requirements line parser
//!
//! Handles lines of the form:
//! - Pin: `package==1.2.3`
//! - Pin with extras: `package[security,socks]==1.2.3`
//! - Trailing comments: `package==1.2.3  # why it is pinned`
//!
//! Everything else (blank lines, comments, `-r other.txt`, `>=` ranges,
//! editable installs) is skipped.

use crate::domain::Requirement;
use regex::Regex;
use std::sync::LazyLock;

static REQUIREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<package>[^\s\[\]]+)(?P<extras>\[\S+\])?==(?P<version>\S+)").unwrap()
});

/// Parser for pinned requirement lines
#[derive(Debug, Default, Clone, Copy)]
pub struct RequirementsParser;

impl RequirementsParser {
    /// Parse all pinned requirements, preserving line order
    pub fn parse<I, S>(&self, lines: I) -> Vec<Requirement>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| parse_requirement_line(line.as_ref()))
            .collect()
    }
}

/// Parse a single line, returning `None` if it is not a `==` pin
pub fn parse_requirement_line(line: &str) -> Option<Requirement> {
    let without_comment = line.split('#').next().unwrap_or_default().trim();

    let caps = REQUIREMENT_RE.captures(without_comment)?;
    let package = caps.name("package")?.as_str();
    let version = caps.name("version")?.as_str();

    Some(Requirement::new(package, version))
}
