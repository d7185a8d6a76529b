//! Published releases and their update categories

use super::version::is_prerelease;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One published version of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// The version string as published
    pub version: String,
    /// Upload time of the release's first file, if the registry has files
    pub upload_time: Option<DateTime<Utc>>,
    /// Whether the raw version string denotes a pre-release
    pub is_prerelease: bool,
}

impl ReleaseRecord {
    /// Create a record, detecting pre-releases from the raw version string
    pub fn new(version: impl Into<String>, upload_time: Option<DateTime<Utc>>) -> Self {
        let version = version.into();
        let is_prerelease = is_prerelease(&version);
        Self {
            version,
            upload_time,
            is_prerelease,
        }
    }
}

/// The bucket a release lands in relative to the pinned version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseCategory {
    Major,
    Minor,
    Patch,
    PreRelease,
    NonSemantic,
}

impl ReleaseCategory {
    /// All categories in report order
    pub const ALL: [ReleaseCategory; 5] = [
        ReleaseCategory::Major,
        ReleaseCategory::Minor,
        ReleaseCategory::Patch,
        ReleaseCategory::NonSemantic,
        ReleaseCategory::PreRelease,
    ];

    /// Heading used by the text report
    pub fn heading(&self) -> &'static str {
        match self {
            ReleaseCategory::Major => "Major releases",
            ReleaseCategory::Minor => "Minor releases",
            ReleaseCategory::Patch => "Patch releases",
            ReleaseCategory::PreRelease => "Pre releases",
            ReleaseCategory::NonSemantic => "Unknown releases",
        }
    }
}

impl fmt::Display for ReleaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseCategory::Major => "major",
            ReleaseCategory::Minor => "minor",
            ReleaseCategory::Patch => "patch",
            ReleaseCategory::PreRelease => "pre-release",
            ReleaseCategory::NonSemantic => "non-semantic",
        };
        write!(f, "{}", name)
    }
}

/// Releases of a package grouped by category
///
/// Every bucket except `non_semantic_versions` is ordered by descending
/// version; non-semantic releases keep registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedReleases {
    pub major_updates: Vec<ReleaseRecord>,
    pub minor_updates: Vec<ReleaseRecord>,
    pub patch_updates: Vec<ReleaseRecord>,
    pub pre_release_updates: Vec<ReleaseRecord>,
    pub non_semantic_versions: Vec<ReleaseRecord>,
}

impl CategorizedReleases {
    /// Releases in the given category
    pub fn get(&self, category: ReleaseCategory) -> &[ReleaseRecord] {
        match category {
            ReleaseCategory::Major => &self.major_updates,
            ReleaseCategory::Minor => &self.minor_updates,
            ReleaseCategory::Patch => &self.patch_updates,
            ReleaseCategory::PreRelease => &self.pre_release_updates,
            ReleaseCategory::NonSemantic => &self.non_semantic_versions,
        }
    }

    pub(crate) fn bucket_mut(&mut self, category: ReleaseCategory) -> &mut Vec<ReleaseRecord> {
        match category {
            ReleaseCategory::Major => &mut self.major_updates,
            ReleaseCategory::Minor => &mut self.minor_updates,
            ReleaseCategory::Patch => &mut self.patch_updates,
            ReleaseCategory::PreRelease => &mut self.pre_release_updates,
            ReleaseCategory::NonSemantic => &mut self.non_semantic_versions,
        }
    }

    /// Number of major, minor and patch releases
    pub fn newer_release_count(&self) -> usize {
        self.major_updates.len() + self.minor_updates.len() + self.patch_updates.len()
    }

    /// Number of pre-releases
    pub fn pre_release_count(&self) -> usize {
        self.pre_release_updates.len()
    }

    /// Total number of categorized releases
    pub fn len(&self) -> usize {
        ReleaseCategory::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// Returns true if no release was categorized
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: &str) -> ReleaseRecord {
        ReleaseRecord::new(version, None)
    }

    #[test]
    fn test_release_record_detects_prerelease() {
        assert!(record("2.0.0rc1").is_prerelease);
        assert!(record("alpha-1.5.5").is_prerelease);
        assert!(!record("2.0.0").is_prerelease);
    }

    #[test]
    fn test_category_headings() {
        assert_eq!(ReleaseCategory::Major.heading(), "Major releases");
        assert_eq!(ReleaseCategory::NonSemantic.heading(), "Unknown releases");
        assert_eq!(ReleaseCategory::PreRelease.heading(), "Pre releases");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ReleaseCategory::PreRelease.to_string(), "pre-release");
        assert_eq!(ReleaseCategory::NonSemantic.to_string(), "non-semantic");
    }

    #[test]
    fn test_counts() {
        let mut releases = CategorizedReleases::default();
        assert!(releases.is_empty());

        releases.bucket_mut(ReleaseCategory::Major).push(record("2.0.0"));
        releases.bucket_mut(ReleaseCategory::Patch).push(record("1.0.1"));
        releases
            .bucket_mut(ReleaseCategory::PreRelease)
            .push(record("3.0.0a1"));
        releases
            .bucket_mut(ReleaseCategory::NonSemantic)
            .push(record("dev"));

        assert_eq!(releases.newer_release_count(), 2);
        assert_eq!(releases.pre_release_count(), 1);
        assert_eq!(releases.len(), 4);
    }

    #[test]
    fn test_serde_category_names() {
        let json = serde_json::to_string(&ReleaseCategory::NonSemantic).unwrap();
        assert_eq!(json, r#""non_semantic""#);
    }
}
