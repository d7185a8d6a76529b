//! Pinned requirement parsed from a manifest line

use serde::{Deserialize, Serialize};
use std::fmt;

/// A package pinned to an exact version (`name==version`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Package name, as written in the manifest
    pub package: String,
    /// Pinned version string, as written in the manifest
    pub version: String,
}

impl Requirement {
    /// Creates a new requirement
    pub fn new(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.package, self.version)
    }
}
