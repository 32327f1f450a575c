//! # protoc-shim
//!
//! Compatibility shim for protoc that strips flags unsupported by older
//! compiler versions.
//!
//! Build systems such as rules_proto 7.x pass `--option_dependencies` and
//! `--option_dependencies_violation_msg` unconditionally, but those flags
//! only exist in protoc 32.0 and newer. This crate resolves the effective
//! protoc version, removes the flags the resolved version does not
//! understand, and delegates to the real compiler with stdio and exit code
//! passed through unchanged.
//!
//! ## Features
//!
//! - `VersionSource` enum naming the resolution strategies
//! - `resolve_version()` async function walking the fallback chain
//! - `filter_unsupported_flags()` pure function gating removal on version
//! - a `protoc-shim` binary wiring the two together around the real protoc
//!
//! ## Example
//!
//! ```rust,no_run
//! use protoc_shim::{filter_unsupported_flags, resolve_version, ResolveOptions};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!
//!     let version = resolve_version(&ResolveOptions::from_env()).await;
//!     let filtered = filter_unsupported_flags(&args, version.as_ref());
//!
//!     // hand `filtered` to the real protoc
//!     println!("{:?}", filtered);
//! }
//! ```

mod error;
mod filter;
mod options;
mod resolution;
mod resolve;
mod source_kind;

pub use error::{ResolveError, ShimError};
pub use filter::{filter_unsupported_flags, OPTION_DEPENDENCIES_MIN_MAJOR};
pub use options::{ResolveOptions, BUNDLED_VERSION_ENV, PROTOC_ENV};
pub use resolve::{resolve_from, resolve_version};
pub use source_kind::VersionSource;

pub(crate) use resolution::find_protoc;

use std::process::Stdio;
use tokio::process::Command;

/// Delegate to the real protoc with the given (already filtered) argument
/// list.
///
/// The child inherits stdin, stdout, and stderr, so diagnostics reach the
/// user exactly as protoc produced them. The shim adds no exit codes of
/// its own: the returned value is the child's exit code, with 1 standing
/// in when the child was killed by a signal and has none.
///
/// # Arguments
///
/// * `opts` - Used for the `protoc_path` override; PATH is searched
///   otherwise
/// * `args` - Arguments to pass to protoc, excluding the program name
///
/// # Returns
///
/// `Ok(exit_code)` once the child has exited, or a [`ShimError`] if no
/// protoc executable could be located or launched.
pub async fn delegate_to_protoc(opts: &ResolveOptions, args: &[String]) -> Result<i32, ShimError> {
    let path = match &opts.protoc_path {
        Some(p) => p.clone(),
        None => find_protoc().ok_or_else(|| ShimError::ProtocNotFound {
            fix: format!(
                "Install protoc or point the {} environment variable at the executable",
                PROTOC_ENV
            ),
        })?,
    };

    let status = Command::new(&path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| {
            let fix = if e.kind() == std::io::ErrorKind::PermissionDenied {
                "Check that the protoc executable has execute permissions".to_string()
            } else {
                "Check that the protoc executable is valid for this platform".to_string()
            };
            ShimError::ExecFailed {
                path: path.clone(),
                source: e,
                fix,
            }
        })?;

    Ok(status.code().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_delegate_exec_failed_on_bad_path() {
        let opts = ResolveOptions {
            protoc_path: Some(PathBuf::from("/nonexistent/path/to/protoc")),
            ..Default::default()
        };
        let result = delegate_to_protoc(&opts, &[]).await;
        assert!(matches!(result, Err(ShimError::ExecFailed { .. })));
    }

    #[tokio::test]
    async fn test_delegate_passes_through_exit_code() {
        // `false` exits 1 without reading its arguments
        let path = PathBuf::from("/bin/false");
        if path.exists() {
            let opts = ResolveOptions {
                protoc_path: Some(path),
                ..Default::default()
            };
            let code = delegate_to_protoc(&opts, &[]).await.unwrap();
            assert_eq!(code, 1);
        }
    }

    #[tokio::test]
    async fn test_delegate_success_exit_code() {
        let path = PathBuf::from("/bin/true");
        if path.exists() {
            let opts = ResolveOptions {
                protoc_path: Some(path),
                ..Default::default()
            };
            let code = delegate_to_protoc(&opts, &[]).await.unwrap();
            assert_eq!(code, 0);
        }
    }
}
