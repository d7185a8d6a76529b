//! Assembles one report record per package

use super::ReleaseClassifier;
use crate::domain::{PackageDocument, UpdateSummary, Version};
use crate::error::VersionFormatError;

/// Build the update summary for a pinned package
///
/// `package_doc` is the registry's current document for the package and
/// `version_doc` the document of the pinned version; either is `None` when
/// the registry does not know it. The pinned version must coerce, since it is
/// the reference every release is compared against.
pub fn build_summary(
    package: &str,
    version: &str,
    package_doc: Option<&PackageDocument>,
    version_doc: Option<&PackageDocument>,
) -> Result<UpdateSummary, VersionFormatError> {
    let reference = Version::coerce(version)?;
    let mut summary = UpdateSummary::empty(package, version);

    if let Some(doc) = version_doc {
        summary.current_release = doc.version().to_string();
        summary.current_release_license = doc.license().to_string();
    }

    let Some(doc) = package_doc else {
        return Ok(summary);
    };

    summary.latest_release = doc.version().to_string();
    summary.latest_release_license = doc.license().to_string();

    let releases = ReleaseClassifier::new(reference).classify(doc.release_records());
    summary.newer_releases = releases.newer_release_count();
    summary.pre_releases = releases.pre_release_count();
    summary.releases = releases;

    Ok(summary)
}
