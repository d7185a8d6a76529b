//! updatable - find newer releases of pinned Python packages
//!
//! This library classifies every release a package registry knows about
//! relative to a pinned version:
//! - Major, minor and patch updates, newest first
//! - Pre-releases, kept apart from ordinary updates
//! - Releases whose version string is not semantic at all
//!
//! The registry (PyPI JSON API) and the source of pinned requirements
//! (`pip freeze`, requirements files) sit behind traits so the
//! classification core can be driven without network or subprocesses.

pub mod cli;
pub mod domain;
pub mod error;
pub mod lister;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod progress;
pub mod registry;
pub mod update;
