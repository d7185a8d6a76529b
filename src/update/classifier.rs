//! Release classification against a pinned reference version

use crate::domain::{CategorizedReleases, ReleaseCategory, ReleaseRecord, Version};
use tracing::trace;

/// Returns true if `release` is at least the next major version of `reference`
pub fn is_major_update(release: &Version, reference: &Version) -> bool {
    *release >= reference.next_major()
}

/// Returns true if `release` is a newer minor version within the same major line
pub fn is_minor_update(release: &Version, reference: &Version) -> bool {
    *release >= reference.next_minor() && *release < reference.next_major()
}

/// Returns true if `release` is a newer patch version within the same minor line
pub fn is_patch_update(release: &Version, reference: &Version) -> bool {
    *release >= reference.next_patch() && *release < reference.next_minor()
}

/// Partitions a package's releases into update categories
#[derive(Debug, Clone)]
pub struct ReleaseClassifier {
    reference: Version,
}

impl ReleaseClassifier {
    /// Create a classifier for the given reference version
    pub fn new(reference: Version) -> Self {
        Self { reference }
    }

    /// The version releases are compared against
    pub fn reference(&self) -> &Version {
        &self.reference
    }

    /// Update category of a stable release, or `None` if it is not newer
    pub fn update_category(&self, release: &Version) -> Option<ReleaseCategory> {
        if is_major_update(release, &self.reference) {
            Some(ReleaseCategory::Major)
        } else if is_minor_update(release, &self.reference) {
            Some(ReleaseCategory::Minor)
        } else if is_patch_update(release, &self.reference) {
            Some(ReleaseCategory::Patch)
        } else {
            None
        }
    }

    /// Categorize every release
    ///
    /// Releases that cannot be coerced keep encounter order in the
    /// non-semantic bucket. Pre-releases go to the pre-release bucket even
    /// when their numbers would qualify as an update. Releases that are not
    /// newer than the reference are dropped. All other buckets are sorted by
    /// descending version.
    pub fn classify<I>(&self, records: I) -> CategorizedReleases
    where
        I: IntoIterator<Item = ReleaseRecord>,
    {
        let mut releases = CategorizedReleases::default();
        let mut ranked: Vec<(ReleaseCategory, Version, ReleaseRecord)> = Vec::new();

        for record in records {
            let version = match Version::coerce(&record.version) {
                Ok(version) => version,
                Err(e) => {
                    trace!(release = %record.version, error = %e, "non-semantic release");
                    releases.non_semantic_versions.push(record);
                    continue;
                }
            };

            let category = if record.is_prerelease {
                Some(ReleaseCategory::PreRelease)
            } else {
                self.update_category(&version)
            };

            match category {
                Some(category) => ranked.push((category, version, record)),
                None => trace!(release = %record.version, "not newer than {}", self.reference),
            }
        }

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        for (category, _, record) in ranked {
            releases.bucket_mut(category).push(record);
        }

        releases
    }
}
