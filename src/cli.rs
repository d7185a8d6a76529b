//! CLI argument parsing module for updatable

use crate::error::ConfigError;
use crate::lister::{PackageLister, PipFreezeLister, RequirementsFileLister, DEFAULT_PYTHON};
use crate::orchestrator::{OrchestratorConfig, DEFAULT_CONCURRENCY};
use crate::registry::PYPI_INDEX_URL;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Parse a yes/no style boolean (yes, true, t, y, 1 / no, false, f, n, 0)
fn parse_bool(s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            value: s.to_string(),
        }),
    }
}

/// Parse a concurrency limit of at least one
fn parse_concurrency(s: &str) -> Result<usize, ConfigError> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ConfigError::InvalidConcurrency {
            value: s.to_string(),
        }),
    }
}

/// Find updates for pinned Python packages
#[derive(Parser, Debug, Clone)]
#[command(
    name = "updatable",
    version,
    about = "Finds newer releases of pinned Python packages on PyPI"
)]
pub struct CliArgs {
    /// Requirements file (default: packages installed for --python)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Show pre-releases (yes/no, true/false, 1/0; bare flag means yes)
    #[arg(
        short = 'p',
        long = "pre-releases",
        visible_alias = "pre-release",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    pub pre_releases: bool,

    /// Python interpreter whose installed packages are checked
    #[arg(long, env = "UPDATABLE_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Base URL of the PyPI JSON API
    #[arg(long, env = "UPDATABLE_INDEX_URL", default_value = PYPI_INDEX_URL)]
    pub index_url: String,

    /// Maximum number of packages checked at once
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Timeout for each registry request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Retries for registry requests that fail to connect
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Build the lister selected by the arguments
    pub fn lister(&self) -> Box<dyn PackageLister> {
        match &self.file {
            Some(path) => Box::new(RequirementsFileLister::new(path)),
            None => Box::new(PipFreezeLister::new(self.python.as_str())),
        }
    }

    /// Orchestrator configuration from the arguments
    pub fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig {
            index_url: self.index_url.clone(),
            concurrency: self.concurrency,
            timeout: Duration::from_secs(self.timeout),
            retries: self.retries,
        }
    }

    /// Whether the progress display is shown
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}
