//! PATH-based protoc lookup with fallback locations.

use std::path::PathBuf;

/// The executable name to search for in PATH.
const PROTOC_NAME: &str = "protoc";

/// System fallback paths to check if protoc is not found in PATH.
const FALLBACK_PATHS: &[&str] = &["/usr/local/bin", "/usr/bin"];

/// Find the protoc executable.
///
/// This function first tries to find protoc using the system PATH via the
/// `which` crate. If not found, it checks common fallback locations
/// including system directories and user home directories.
///
/// The `PROTOC` environment override is handled by the caller (it lands in
/// [`ResolveOptions::protoc_path`]); this function only performs the
/// search.
///
/// [`ResolveOptions::protoc_path`]: crate::ResolveOptions::protoc_path
///
/// # Returns
///
/// `Some(PathBuf)` if protoc is found, `None` otherwise.
pub(crate) fn find_protoc() -> Option<PathBuf> {
    // Primary: PATH lookup via which crate
    // This handles symlinks, relative paths, and platform differences
    if let Ok(path) = which::which(PROTOC_NAME) {
        return Some(path);
    }

    // Fallback: common system locations not always in PATH
    for dir in FALLBACK_PATHS {
        let path = PathBuf::from(dir).join(PROTOC_NAME);
        if path.exists() {
            return Some(path);
        }
    }

    // Home directory locations (common for user-installed tools)
    if let Ok(home) = std::env::var("HOME") {
        let home_paths = [
            format!("{}/.local/bin/{}", home, PROTOC_NAME),
            format!("{}/bin/{}", home, PROTOC_NAME),
        ];
        for p in home_paths {
            let path = PathBuf::from(&p);
            if path.exists() {
                return Some(path);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_protoc_returns_existing_path() {
        // protoc may or may not be installed; if found, the path must exist
        if let Some(path) = find_protoc() {
            assert!(path.exists());
        }
    }
}
