//! Async `protoc --version` probe with timeout.

use crate::ResolveError;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run an executable with `--version` and capture its output.
///
/// The execution is wrapped in a timeout to avoid hanging the whole
/// compiler invocation on an unresponsive or stuck binary.
///
/// # Arguments
///
/// * `path` - Path to the protoc executable
/// * `limit` - Maximum time to wait for the command to complete
///
/// # Returns
///
/// `Ok(String)` with the version output (stdout preferred, stderr
/// fallback), or a `ResolveError` on failure:
/// - `Timeout` if the command exceeds `limit`
/// - `PermissionDenied` if the executable cannot be run due to permissions
/// - `IoError` for other I/O failures or non-zero exit codes
/// - `VersionParseFailed` if output is not valid UTF-8
pub(crate) async fn run_version_command(
    path: &Path,
    limit: Duration,
) -> Result<String, ResolveError> {
    let output = timeout(limit, Command::new(path).arg("--version").output())
        .await
        .map_err(|_| ResolveError::Timeout)?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                ResolveError::PermissionDenied
            } else {
                ResolveError::IoError
            }
        })?;

    if !output.status.success() {
        return Err(ResolveError::IoError);
    }

    // Try stdout first, fall back to stderr (older protoc builds wrote the
    // version banner to stderr)
    let out = if !output.stdout.is_empty() {
        output.stdout
    } else {
        output.stderr
    };

    String::from_utf8(out).map_err(|_| ResolveError::VersionParseFailed)
}
