//! Core domain models for updatable
//!
//! This module contains the fundamental types used throughout the application:
//! - Semantic version model with permissive coercion
//! - Requirement parsed from a manifest line
//! - Registry metadata documents
//! - Release records and their update categories
//! - Per-package update summary

mod document;
mod release;
mod requirement;
mod summary;
mod version;

pub use document::{PackageDocument, PackageInfo, ReleaseFile};
pub use release::{CategorizedReleases, ReleaseCategory, ReleaseRecord};
pub use requirement::Requirement;
pub use summary::UpdateSummary;
pub use version::{is_prerelease, Version};
