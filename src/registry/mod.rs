//! Registry clients for fetching package metadata
//!
//! This module provides:
//! - HTTP client shared foundation with optional retry
//! - PyPI JSON API client

mod client;
mod pypi;

pub use client::HttpClient;
pub use pypi::{PyPIClient, PYPI_INDEX_URL};

use crate::domain::PackageDocument;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Source of package metadata documents
///
/// Unknown packages and versions are reported as `Ok(None)`; only failures
/// to talk to the registry are errors.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the current metadata document of a package
    async fn fetch_package(&self, name: &str) -> Result<Option<PackageDocument>, RegistryError>;

    /// Fetch the metadata document of one published version
    async fn fetch_release(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Option<PackageDocument>, RegistryError>;
}
