//! Resolution options configuration.
//!
//! This module provides the [`ResolveOptions`] struct for configuring
//! version resolution, including the probe timeout and the inputs that
//! would otherwise come from the process environment.

use std::path::PathBuf;
use std::time::Duration;

/// Name of the environment variable overriding the protoc location.
pub const PROTOC_ENV: &str = "PROTOC";

/// Name of the environment variable carrying the wrapping distribution's
/// own version string (e.g. `5.28.3`).
pub const BUNDLED_VERSION_ENV: &str = "PROTOC_SHIM_BUNDLED_VERSION";

/// Configuration options for version resolution.
///
/// Environment access happens exactly once, in [`ResolveOptions::from_env`]
/// at the entry point; the resolver itself only ever reads this struct, so
/// the core stays a pure function of its inputs.
///
/// # Default Behavior
///
/// The default timeout is 5 seconds, which is suitable for most systems.
/// Both override fields default to `None`, meaning the probe locates
/// protoc on its own and the metadata source has nothing to parse.
///
/// # Example
///
/// ```rust
/// use protoc_shim::ResolveOptions;
/// use std::time::Duration;
///
/// // Use default options (5 second timeout, no overrides)
/// let opts = ResolveOptions::default();
///
/// // Use custom timeout
/// let opts = ResolveOptions {
///     timeout: Duration::from_secs(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Timeout for the `protoc --version` probe.
    ///
    /// If the probe takes longer than this, that source fails and the
    /// resolver moves on to the next one.
    ///
    /// Default: 5 seconds
    pub timeout: Duration,

    /// Explicit path to the protoc executable.
    ///
    /// When set, the probe runs this executable instead of searching
    /// PATH. Populated from the `PROTOC` environment variable by
    /// [`ResolveOptions::from_env`].
    pub protoc_path: Option<PathBuf>,

    /// Raw version string of the wrapping distribution, if known.
    ///
    /// Populated from `PROTOC_SHIM_BUNDLED_VERSION` by
    /// [`ResolveOptions::from_env`]. Distribution version strings lead
    /// the bundled protoc version by one component (e.g. `5.28.3` ships
    /// protoc 28.3); see [`crate::resolve_from`] for the parse rules.
    pub bundled_version: Option<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            protoc_path: None,
            bundled_version: None,
        }
    }
}

impl ResolveOptions {
    /// Build options from the process environment.
    ///
    /// Reads `PROTOC` (executable override) and
    /// `PROTOC_SHIM_BUNDLED_VERSION` (distribution version string); unset
    /// or empty variables leave the corresponding field `None`.
    pub fn from_env() -> Self {
        Self {
            protoc_path: std::env::var_os(PROTOC_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            bundled_version: std::env::var(BUNDLED_VERSION_ENV)
                .ok()
                .filter(|v| !v.is_empty()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let opts = ResolveOptions::default();
        assert_eq!(opts.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_overrides_unset() {
        let opts = ResolveOptions::default();
        assert!(opts.protoc_path.is_none());
        assert!(opts.bundled_version.is_none());
    }

    #[test]
    fn test_custom_timeout() {
        let opts = ResolveOptions {
            timeout: Duration::from_millis(500),
            ..Default::default()
        };
        assert_eq!(opts.timeout, Duration::from_millis(500));
        assert!(opts.protoc_path.is_none());
    }

    #[test]
    fn test_clone() {
        let opts = ResolveOptions {
            timeout: Duration::from_secs(10),
            protoc_path: Some(PathBuf::from("/usr/bin/protoc")),
            bundled_version: Some("5.28.3".to_string()),
        };
        let cloned = opts.clone();
        assert_eq!(opts.timeout, cloned.timeout);
        assert_eq!(opts.protoc_path, cloned.protoc_path);
        assert_eq!(opts.bundled_version, cloned.bundled_version);
    }
}
