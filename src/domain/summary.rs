//! Per-package update report record

use super::CategorizedReleases;
use serde::{Deserialize, Serialize};

/// Update information for one pinned package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSummary {
    /// Package name as given by the requirement
    pub package: String,
    /// Pinned version as given by the requirement
    pub version: String,
    /// Registry's version string for the pinned release, empty if unknown
    pub current_release: String,
    pub current_release_license: String,
    /// Latest version per the registry, empty if the package is unknown
    pub latest_release: String,
    pub latest_release_license: String,
    /// Count of major, minor and patch releases
    pub newer_releases: usize,
    /// Count of pre-releases
    pub pre_releases: usize,
    #[serde(flatten)]
    pub releases: CategorizedReleases,
}

impl UpdateSummary {
    /// Summary for a package the registry does not know
    pub fn empty(package: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Returns true if the report shows anything for this package
    pub fn has_updates(&self, show_pre_releases: bool) -> bool {
        self.newer_releases > 0 || (show_pre_releases && self.pre_releases > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReleaseRecord;

    #[test]
    fn test_empty_summary() {
        let summary = UpdateSummary::empty("unknown-pkg", "1.0.0");
        assert_eq!(summary.package, "unknown-pkg");
        assert_eq!(summary.version, "1.0.0");
        assert_eq!(summary.current_release, "");
        assert_eq!(summary.latest_release_license, "");
        assert_eq!(summary.newer_releases, 0);
        assert!(summary.releases.is_empty());
        assert!(!summary.has_updates(true));
    }

    #[test]
    fn test_has_updates_respects_pre_release_flag() {
        let mut summary = UpdateSummary::empty("pkg", "1.0.0");
        summary.pre_releases = 1;
        assert!(!summary.has_updates(false));
        assert!(summary.has_updates(true));

        summary.newer_releases = 2;
        assert!(summary.has_updates(false));
    }

    #[test]
    fn test_serde_flattens_buckets() {
        let mut summary = UpdateSummary::empty("pkg", "1.0.0");
        summary
            .releases
            .major_updates
            .push(ReleaseRecord::new("2.0.0", None));
        summary.newer_releases = 1;

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["newer_releases"], 1);
        assert_eq!(value["major_updates"][0]["version"], "2.0.0");
        assert!(value["major_updates"][0]["upload_time"].is_null());
        assert!(value.get("releases").is_none());
    }
}
