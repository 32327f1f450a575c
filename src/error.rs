//! Error types for version resolution and delegation.

use std::path::PathBuf;
use thiserror::Error;

/// Typed error variants for version resolution failures.
///
/// Resolution is fail-open: these errors never escape the resolver. They
/// exist so the individual sources can report *why* they failed (logged at
/// debug level) before the resolver degrades to an unknown version.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error types
/// in future versions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    /// The version probe timed out.
    Timeout,

    /// Permission denied running the protoc executable.
    PermissionDenied,

    /// The source produced output, but no version could be parsed from it.
    VersionParseFailed,

    /// I/O error running the probe (e.g., failed to execute protoc).
    IoError,

    /// The source had no data to offer (e.g., no executable found,
    /// no distribution version string set).
    Unavailable,
}

impl ResolveError {
    /// Human-readable description of the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use protoc_shim::ResolveError;
    ///
    /// let error = ResolveError::Timeout;
    /// assert_eq!(error.description(), "Version probe timed out");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Timeout => "Version probe timed out",
            Self::PermissionDenied => "Permission denied",
            Self::VersionParseFailed => "Failed to parse version",
            Self::IoError => "I/O error running the probe",
            Self::Unavailable => "Source has no version data",
        }
    }
}

/// Errors that can occur while delegating to the real protoc.
///
/// Unlike [`ResolveError`], these are fatal: without a protoc executable
/// there is nothing to delegate to. Each variant includes a `fix` with an
/// actionable suggestion for resolving the issue.
///
/// # Example
///
/// ```rust
/// use protoc_shim::ShimError;
///
/// fn handle_error(error: ShimError) {
///     eprintln!("protoc-shim: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShimError {
    /// No protoc executable could be located.
    #[error("could not locate a protoc executable")]
    ProtocNotFound {
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The protoc executable was found but could not be run.
    #[error("failed to run protoc at {path}: {source}")]
    ExecFailed {
        /// Path to the executable that failed to run.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl ShimError {
    /// Get an actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::ProtocNotFound { fix } => fix,
            Self::ExecFailed { fix, .. } => fix,
        }
    }
}
