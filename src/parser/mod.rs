//! Requirement parsers
//!
//! This module turns manifest lines (requirements files, `pip freeze`
//! output) into pinned package/version pairs.

mod requirements;

pub use requirements::{parse_requirement_line, RequirementsParser};

use crate::domain::Requirement;

/// Parse `name==version` lines, skipping anything that is not a pin
pub fn parse_requirements<I, S>(lines: I) -> Vec<Requirement>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RequirementsParser.parse(lines)
}
