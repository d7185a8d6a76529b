//! Sources of requirement lines
//!
//! This module provides:
//! - `pip freeze` output of a Python interpreter
//! - Contents of a requirements file
//! - Fixed in-memory lines

use crate::error::ListerError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Default interpreter used to list installed packages
pub const DEFAULT_PYTHON: &str = "python3";

/// Trait for producing raw requirement lines
#[async_trait]
pub trait PackageLister: Send + Sync {
    /// Return the lines to feed into the requirement parser
    async fn list_requirements(&self) -> Result<Vec<String>, ListerError>;
}

/// Lists the packages installed for a Python interpreter via `pip freeze`
#[derive(Debug, Clone)]
pub struct PipFreezeLister {
    python: String,
}

impl PipFreezeLister {
    /// Create a lister for the given interpreter
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// The command line that gets executed
    pub fn command_line(&self) -> String {
        format!("{} -m pip freeze", self.python)
    }

    /// Run a command and capture output
    async fn run_command(&self) -> std::io::Result<Output> {
        Command::new(&self.python)
            .args(["-m", "pip", "freeze"])
            .kill_on_drop(true)
            .output()
            .await
    }
}

impl Default for PipFreezeLister {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

#[async_trait]
impl PackageLister for PipFreezeLister {
    async fn list_requirements(&self) -> Result<Vec<String>, ListerError> {
        let command = self.command_line();
        debug!(command, "listing installed packages");

        let output = self.run_command().await.map_err(|source| ListerError::Command {
            command: command.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(ListerError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(split_freeze_output(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Split `pip freeze` output into one entry per requirement
///
/// `pip freeze` never emits spaces inside a pinned requirement, so any
/// whitespace separates entries.
fn split_freeze_output(stdout: &str) -> Vec<String> {
    stdout.split_whitespace().map(str::to_string).collect()
}

/// Reads requirement lines from a file
#[derive(Debug, Clone)]
pub struct RequirementsFileLister {
    path: PathBuf,
}

impl RequirementsFileLister {
    /// Create a lister for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PackageLister for RequirementsFileLister {
    async fn list_requirements(&self) -> Result<Vec<String>, ListerError> {
        debug!(path = %self.path.display(), "reading requirements file");
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ListerError::read_file(&self.path, source))?;
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// Fixed list of requirement lines
#[derive(Debug, Clone, Default)]
pub struct StaticLister {
    lines: Vec<String>,
}

impl StaticLister {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl PackageLister for StaticLister {
    async fn list_requirements(&self) -> Result<Vec<String>, ListerError> {
        Ok(self.lines.clone())
    }
}
