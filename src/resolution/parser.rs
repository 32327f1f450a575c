//! Version extraction from probe output and distribution metadata.

use crate::ResolveError;
use regex::Regex;
use semver::Version;

/// Parse the protoc version from `protoc --version` output.
///
/// protoc reports its version as `libprotoc <major>.<minor>`, optionally
/// followed by more text:
///
/// - `libprotoc 28.3` -> 28.3.0
/// - `libprotoc 32.0\n` -> 32.0.0
///
/// Only major and minor are reported by the tool; patch is always 0.
///
/// # Returns
///
/// `Ok(Version)` if the output contains a `libprotoc` version,
/// `Err(ResolveError::VersionParseFailed)` otherwise.
pub(crate) fn parse_probe_output(output: &str) -> Result<Version, ResolveError> {
    let re = Regex::new(r"libprotoc\s+(\d+)\.(\d+)").expect("Invalid regex pattern");

    let caps = re
        .captures(output)
        .ok_or(ResolveError::VersionParseFailed)?;
    let major = caps[1]
        .parse::<u64>()
        .map_err(|_| ResolveError::VersionParseFailed)?;
    let minor = caps[2]
        .parse::<u64>()
        .map_err(|_| ResolveError::VersionParseFailed)?;

    Ok(Version::new(major, minor, 0))
}

/// Parse a wrapping distribution's version string into the protoc version
/// it ships.
///
/// Distribution version strings come in two formats:
///
/// - Three components (`5.28.3`): the distribution's own major version
///   leads the bundled protoc version by one level, so the leading
///   component is discarded and the rest is the protoc version
///   (`5.28.3` -> 28.3.0).
/// - Two components (`28.3`): already the protoc version, used as-is
///   (`28.3` -> 28.3.0).
///
/// The discard rule is unconditional for three-component strings. A
/// hypothetical `32.0.0` therefore collapses to 0.0.0; upstream is
/// expected to switch to the two-component format before that matters.
///
/// # Returns
///
/// `Ok(Version)` for a well-formed two- or three-component string,
/// `Err(ResolveError::VersionParseFailed)` for anything else.
pub(crate) fn parse_bundled_version(raw: &str) -> Result<Version, ResolveError> {
    let components: Vec<u64> = raw
        .trim()
        .split('.')
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| ResolveError::VersionParseFailed)?;

    match components.as_slice() {
        [_, major, minor] => Ok(Version::new(*major, *minor, 0)),
        [major, minor] => Ok(Version::new(*major, *minor, 0)),
        _ => Err(ResolveError::VersionParseFailed),
    }
}
