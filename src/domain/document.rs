//! Registry metadata documents
//!
//! Mirrors the subset of the PyPI JSON API consumed by the update checker:
//! `info.version`, `info.license` and the `releases` map of version string
//! to uploaded files. Release order follows the registry's document order.

use super::ReleaseRecord;
use chrono::{DateTime, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Format of PyPI's `upload_time` field
const UPLOAD_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Metadata document for a package or for one of its versions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDocument {
    /// Package summary block
    pub info: PackageInfo,
    /// Files uploaded for each published version
    #[serde(default)]
    pub releases: IndexMap<String, Vec<ReleaseFile>>,
}

/// The `info` block of a metadata document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub name: String,
    /// Latest version for package documents, the requested one otherwise
    pub version: String,
    #[serde(default)]
    pub license: Option<String>,
}

/// One uploaded distribution file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReleaseFile {
    #[serde(default)]
    pub upload_time: Option<String>,
    #[serde(default)]
    pub upload_time_iso_8601: Option<String>,
}

impl PackageDocument {
    /// Version reported in the info block
    pub fn version(&self) -> &str {
        &self.info.version
    }

    /// License reported in the info block, empty when the registry has none
    pub fn license(&self) -> &str {
        self.info.license.as_deref().unwrap_or_default()
    }

    /// One record per published version, in document order
    ///
    /// The upload time is taken from the first file of each release.
    pub fn release_records(&self) -> impl Iterator<Item = ReleaseRecord> + '_ {
        self.releases.iter().map(|(version, files)| {
            let upload_time = files.first().and_then(ReleaseFile::uploaded_at);
            ReleaseRecord::new(version.as_str(), upload_time)
        })
    }
}

impl ReleaseFile {
    /// Create a file entry with the given `upload_time` value
    pub fn uploaded(upload_time: impl Into<String>) -> Self {
        Self {
            upload_time: Some(upload_time.into()),
            upload_time_iso_8601: None,
        }
    }

    /// Parsed upload time, interpreted as UTC
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        let naive = self.upload_time.as_deref().and_then(|raw| {
            NaiveDateTime::parse_from_str(raw, UPLOAD_TIME_FORMAT)
                .or_else(|_| raw.parse::<NaiveDateTime>())
                .ok()
        });

        naive.map(|n| n.and_utc()).or_else(|| {
            self.upload_time_iso_8601
                .as_deref()
                .and_then(|raw| raw.parse::<DateTime<Utc>>().ok())
        })
    }
}
