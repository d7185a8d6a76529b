//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionFormatError: A version string cannot be coerced to a semantic version
//! - RegistryError: Issues with package registry communication
//! - ListerError: Issues collecting the requirement lines to check
//! - UpdateError: Failure of a single package query
//! - ConfigError: Issues with CLI configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Package lister related errors
    #[error(transparent)]
    Lister(#[from] ListerError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A version string that cannot be coerced to a semantic version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid version '{version}': cannot be coerced to a semantic version")]
pub struct VersionFormatError {
    /// The offending version string
    pub version: String,
}

impl VersionFormatError {
    /// Creates a new VersionFormatError
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Errors related to package registry communication
///
/// An unknown package or version is not an error; clients report it as `None`.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry could not be reached
    #[error("registry unavailable while fetching '{package}': {message}")]
    Unavailable { package: String, message: String },

    /// Timeout
    #[error("timeout while fetching '{package}'")]
    Timeout { package: String },

    /// Invalid response from registry
    #[error("invalid response for '{package}': {message}")]
    InvalidResponse { package: String, message: String },

    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

/// Errors raised while collecting requirement lines
#[derive(Error, Debug)]
pub enum ListerError {
    /// Failed to read a requirements file
    #[error("failed to read requirements file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to spawn the listing command
    #[error("failed to run '{command}': {source}")]
    Command {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The listing command exited unsuccessfully
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Failure of a single package update query
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The pinned version of the package is not a usable reference
    #[error(transparent)]
    Version(#[from] VersionFormatError),

    /// The registry lookup failed
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid boolean value
    #[error("invalid boolean value '{value}': expected one of yes, true, t, y, 1, no, false, f, n, 0")]
    InvalidBool { value: String },

    /// Invalid concurrency value
    #[error("invalid concurrency '{value}': must be at least 1")]
    InvalidConcurrency { value: String },
}

impl RegistryError {
    /// Creates a new Unavailable error
    pub fn unavailable(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::Unavailable {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            message: message.into(),
        }
    }
}

impl ListerError {
    /// Creates a new ReadFile error
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ListerError::ReadFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format_error() {
        let err = VersionFormatError::new("test1.5.5");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid version"));
        assert!(msg.contains("test1.5.5"));
    }

    #[test]
    fn test_registry_error_unavailable() {
        let err = RegistryError::unavailable("requests", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("registry unavailable"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("django");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("django"));
    }

    #[test]
    fn test_registry_error_invalid_response() {
        let err = RegistryError::invalid_response("flask", "failed to parse JSON");
        let msg = format!("{}", err);
        assert!(msg.contains("invalid response"));
        assert!(msg.contains("failed to parse JSON"));
    }

    #[test]
    fn test_lister_error_read_file() {
        let err = ListerError::read_file(
            "/path/to/requirements.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("failed to read requirements file"));
        assert!(msg.contains("requirements.txt"));
    }

    #[test]
    fn test_lister_error_command_failed() {
        let err = ListerError::CommandFailed {
            command: "python3 -m pip freeze".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "No module named pip".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("pip freeze"));
        assert!(msg.contains("No module named pip"));
    }

    #[test]
    fn test_update_error_from_version_error() {
        let err: UpdateError = VersionFormatError::new("abc").into();
        assert!(matches!(err, UpdateError::Version(_)));
        assert!(format!("{}", err).contains("abc"));
    }

    #[test]
    fn test_update_error_from_registry_error() {
        let err: UpdateError = RegistryError::timeout("pkg").into();
        assert!(matches!(err, UpdateError::Registry(_)));
    }

    #[test]
    fn test_config_error_invalid_bool() {
        let err = ConfigError::InvalidBool {
            value: "falsy".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("invalid boolean value"));
        assert!(msg.contains("falsy"));
    }

    #[test]
    fn test_app_error_from_lister_error() {
        let lister_err = ListerError::read_file(
            "/missing",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let app_err: AppError = lister_err.into();
        assert!(format!("{}", app_err).contains("/missing"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::InvalidConcurrency {
            value: "0".to_string(),
        };
        let app_err: AppError = config_err.into();
        assert!(format!("{}", app_err).contains("invalid concurrency"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = RegistryError::timeout("x");
        let debug = format!("{:?}", err);
        assert!(debug.contains("Timeout"));
    }
}
