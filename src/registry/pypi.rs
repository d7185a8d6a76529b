//! PyPI JSON API client
//!
//! Fetches package metadata documents from PyPI.
//! API endpoints:
//! - https://pypi.org/pypi/{package}/json
//! - https://pypi.org/pypi/{package}/{version}/json

use crate::domain::PackageDocument;
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryClient};
use async_trait::async_trait;
use tracing::debug;

/// PyPI API base URL
pub const PYPI_INDEX_URL: &str = "https://pypi.org/pypi";

/// PyPI client
pub struct PyPIClient {
    client: HttpClient,
    base_url: String,
}

impl PyPIClient {
    /// Create a new PyPI client against the public index
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PYPI_INDEX_URL)
    }

    /// Create a client against a custom JSON API base URL
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Build the URL for a package, or for one of its versions
    fn build_url(&self, package: &str, version: Option<&str>) -> String {
        match version {
            Some(version) => format!("{}/{}/{}/json", self.base_url, package, version),
            None => format!("{}/{}/json", self.base_url, package),
        }
    }
}

#[async_trait]
impl RegistryClient for PyPIClient {
    fn registry_name(&self) -> &'static str {
        "PyPI"
    }

    async fn fetch_package(&self, name: &str) -> Result<Option<PackageDocument>, RegistryError> {
        let url = self.build_url(name, None);
        let document: Option<PackageDocument> = self.client.get_json(&url, name).await?;

        match &document {
            Some(doc) => debug!(
                package = name,
                latest = doc.version(),
                releases = doc.releases.len(),
                "fetched package document"
            ),
            None => debug!(package = name, "package not found on {}", self.registry_name()),
        }

        Ok(document)
    }

    async fn fetch_release(
        &self,
        name: &str,
        version: &str,
    ) -> Result<Option<PackageDocument>, RegistryError> {
        let url = self.build_url(name, Some(version));
        let document = self.client.get_json(&url, name).await?;

        if document.is_none() {
            debug!(package = name, version, "release not found");
        }

        Ok(document)
    }
}
