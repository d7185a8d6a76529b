//! Batch runner for update checks
//!
//! This module provides:
//! - Workflow coordination: list → parse → classify
//! - Concurrent registry queries bounded by a semaphore
//! - Per-package failure isolation with input-order results

use crate::domain::{Requirement, UpdateSummary};
use crate::error::{AppError, UpdateError};
use crate::lister::PackageLister;
use crate::parser::RequirementsParser;
use crate::progress::Progress;
use crate::registry::{HttpClient, PyPIClient, RegistryClient, PYPI_INDEX_URL};
use crate::update::UpdateChecker;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Default concurrency limit for registry requests
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Configuration for the orchestrator
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Base URL of the JSON API
    pub index_url: String,
    /// Maximum number of packages checked at once
    pub concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retries for transport failures
    pub retries: u32,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            index_url: PYPI_INDEX_URL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            timeout: Duration::from_secs(30),
            retries: 0,
        }
    }
}

/// Outcome of checking one requirement
#[derive(Debug)]
pub struct PackageReport {
    pub requirement: Requirement,
    pub outcome: Result<UpdateSummary, UpdateError>,
}

impl PackageReport {
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Result of running the orchestrator
#[derive(Debug, Default)]
pub struct BatchResult {
    /// One report per requirement, in input order
    pub reports: Vec<PackageReport>,
}

impl BatchResult {
    /// Number of packages whose check failed
    pub fn failure_count(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Successful summaries, in input order
    pub fn summaries(&self) -> impl Iterator<Item = &UpdateSummary> {
        self.reports.iter().filter_map(|r| r.outcome.as_ref().ok())
    }
}

/// Orchestrator for checking a batch of requirements
pub struct Orchestrator {
    checker: UpdateChecker,
    semaphore: Arc<Semaphore>,
}

impl Orchestrator {
    /// Create an orchestrator over the given registry client
    pub fn new(registry: Arc<dyn RegistryClient>) -> Self {
        Self::with_concurrency(registry, DEFAULT_CONCURRENCY)
    }

    /// Create an orchestrator with a custom concurrency limit
    pub fn with_concurrency(registry: Arc<dyn RegistryClient>, concurrency: usize) -> Self {
        Self {
            checker: UpdateChecker::new(registry),
            semaphore: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    /// Create an orchestrator talking to a PyPI-compatible index
    pub fn from_config(config: &OrchestratorConfig) -> Result<Self, AppError> {
        let client = HttpClient::with_timeout(config.timeout)?.with_max_retries(config.retries);
        let registry = PyPIClient::with_base_url(client, config.index_url.as_str());
        Ok(Self::with_concurrency(Arc::new(registry), config.concurrency))
    }

    /// List, parse and check every pinned requirement
    pub async fn run(
        &self,
        lister: &dyn PackageLister,
        progress: &mut Progress,
    ) -> Result<BatchResult, AppError> {
        progress.spinner("Listing packages...");
        let lines = lister.list_requirements().await;
        progress.finish_and_clear();

        let requirements = RequirementsParser.parse(lines?);
        info!(count = requirements.len(), "pinned requirements found");

        progress.start(requirements.len() as u64, "Checking packages");
        let result = self.check(requirements, progress).await;
        progress.finish_and_clear();

        Ok(result)
    }

    /// Check the given requirements concurrently
    ///
    /// A failed package does not stop the others; reports keep input order.
    pub async fn check(&self, requirements: Vec<Requirement>, progress: &Progress) -> BatchResult {
        let tasks = requirements.into_iter().map(move |requirement| async move {
            let _permit = self.semaphore.acquire().await.ok();
            progress.set_message(&requirement.package);

            let outcome = self
                .checker
                .classify(&requirement.package, &requirement.version)
                .await;

            match &outcome {
                Ok(_) => debug!(requirement = %requirement, "checked"),
                Err(e) => warn!(requirement = %requirement, error = %e, "package check failed"),
            }

            progress.inc();
            PackageReport {
                requirement,
                outcome,
            }
        });

        BatchResult {
            reports: join_all(tasks).await,
        }
    }
}
