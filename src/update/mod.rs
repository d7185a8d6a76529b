//! Update classification for pinned packages
//!
//! This module provides:
//! - Major/minor/patch update predicates
//! - Release classifier producing the categorized buckets
//! - Summary builder combining classification with registry metadata
//! - UpdateChecker answering `classify(name, version)` through a registry client

mod builder;
mod classifier;

pub use builder::build_summary;
pub use classifier::{is_major_update, is_minor_update, is_patch_update, ReleaseClassifier};

use crate::domain::{UpdateSummary, Version};
use crate::error::UpdateError;
use crate::registry::RegistryClient;
use std::sync::Arc;
use tracing::debug;

/// Answers update queries for single packages
#[derive(Clone)]
pub struct UpdateChecker {
    registry: Arc<dyn RegistryClient>,
}

impl UpdateChecker {
    /// Create a checker backed by the given registry client
    pub fn new(registry: Arc<dyn RegistryClient>) -> Self {
        Self { registry }
    }

    /// Classify the releases of `name` relative to the pinned `version`
    ///
    /// An unusable pinned version fails before the registry is contacted.
    /// Registry failures are returned as-is; nothing is retried here.
    pub async fn classify(&self, name: &str, version: &str) -> Result<UpdateSummary, UpdateError> {
        Version::coerce(version)?;

        let (package_doc, version_doc) = tokio::try_join!(
            self.registry.fetch_package(name),
            self.registry.fetch_release(name, version),
        )?;

        let summary = build_summary(name, version, package_doc.as_ref(), version_doc.as_ref())?;
        debug!(
            package = name,
            version,
            newer = summary.newer_releases,
            pre = summary.pre_releases,
            non_semantic = summary.releases.non_semantic_versions.len(),
            "classified"
        );

        Ok(summary)
    }
}
