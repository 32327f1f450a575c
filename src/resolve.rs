//! Version resolution functions.

use crate::resolution::{find_protoc, parse_bundled_version, parse_probe_output, run_version_command};
use crate::{ResolveError, ResolveOptions, VersionSource};
use semver::Version;
use tracing::debug;

/// Resolve the effective protoc version.
///
/// This function walks the [`VersionSource`] fallback chain in order and
/// returns the first version a source yields. Resolution is fail-open:
/// every failure mode of every source (missing executable, subprocess
/// error, timeout, malformed version string) is absorbed, and total
/// failure is reported as `None`, never as an error.
///
/// `None` disables flag filtering downstream, so a resolution problem can
/// never block a compiler invocation.
///
/// # Example
///
/// ```rust,no_run
/// use protoc_shim::{resolve_version, ResolveOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match resolve_version(&ResolveOptions::default()).await {
///         Some(version) => println!("protoc {}", version),
///         None => println!("protoc version unknown"),
///     }
/// }
/// ```
pub async fn resolve_version(opts: &ResolveOptions) -> Option<Version> {
    for source in VersionSource::all() {
        match resolve_from(source, opts).await {
            Ok(version) => {
                debug!(source = source.display_name(), %version, "resolved protoc version");
                return Some(version);
            }
            Err(e) => {
                debug!(
                    source = source.display_name(),
                    error = e.description(),
                    "version source failed"
                );
            }
        }
    }

    debug!("all version sources failed, treating version as unknown");
    None
}

/// Resolve the protoc version from a single source.
///
/// Useful when the caller wants to interrogate one strategy rather than
/// the whole fallback chain.
///
/// # Returns
///
/// `Ok(Version)` if the source produced a version, `Err(ResolveError)`
/// describing why it could not.
pub async fn resolve_from(
    source: VersionSource,
    opts: &ResolveOptions,
) -> Result<Version, ResolveError> {
    match source {
        VersionSource::Probe => probe_version(opts).await,
        VersionSource::BundledMetadata => bundled_metadata_version(opts),
    }
}

/// Run the real protoc with `--version` and parse its output.
async fn probe_version(opts: &ResolveOptions) -> Result<Version, ResolveError> {
    let path = match &opts.protoc_path {
        Some(p) => p.clone(),
        None => find_protoc().ok_or(ResolveError::Unavailable)?,
    };

    let output = run_version_command(&path, opts.timeout).await?;
    parse_probe_output(&output)
}

/// Parse the wrapping distribution's version string, if one was provided.
fn bundled_metadata_version(opts: &ResolveOptions) -> Result<Version, ResolveError> {
    let raw = opts
        .bundled_version
        .as_deref()
        .ok_or(ResolveError::Unavailable)?;
    parse_bundled_version(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn opts_with_bundled(raw: &str) -> ResolveOptions {
        ResolveOptions {
            bundled_version: Some(raw.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_resolve_from_bundled_metadata() {
        let opts = opts_with_bundled("5.28.3");
        let version = resolve_from(VersionSource::BundledMetadata, &opts)
            .await
            .unwrap();
        assert_eq!(version, Version::new(28, 3, 0));
    }

    #[tokio::test]
    async fn test_resolve_from_bundled_metadata_unset() {
        let opts = ResolveOptions::default();
        let result = resolve_from(VersionSource::BundledMetadata, &opts).await;
        assert!(matches!(result, Err(ResolveError::Unavailable)));
    }

    #[tokio::test]
    async fn test_resolve_from_bundled_metadata_malformed() {
        let opts = opts_with_bundled("not a version");
        let result = resolve_from(VersionSource::BundledMetadata, &opts).await;
        assert!(matches!(result, Err(ResolveError::VersionParseFailed)));
    }

    #[tokio::test]
    async fn test_resolve_from_probe_bad_path() {
        let opts = ResolveOptions {
            protoc_path: Some(PathBuf::from("/nonexistent/protoc")),
            timeout: Duration::from_secs(1),
            ..Default::default()
        };
        let result = resolve_from(VersionSource::Probe, &opts).await;
        assert!(matches!(result, Err(ResolveError::IoError)));
    }

    #[tokio::test]
    async fn test_resolve_version_falls_back_to_metadata() {
        // Probe fails on the bad path, chain falls through to metadata
        let opts = ResolveOptions {
            protoc_path: Some(PathBuf::from("/nonexistent/protoc")),
            bundled_version: Some("6.30.1".to_string()),
            timeout: Duration::from_secs(1),
        };
        let version = resolve_version(&opts).await;
        assert_eq!(version, Some(Version::new(30, 1, 0)));
    }

    #[tokio::test]
    async fn test_resolve_version_total_failure_is_none() {
        let opts = ResolveOptions {
            protoc_path: Some(PathBuf::from("/nonexistent/protoc")),
            bundled_version: Some("garbage".to_string()),
            timeout: Duration::from_secs(1),
        };
        assert_eq!(resolve_version(&opts).await, None);
    }
}
