//! Version source enum identifying the supported resolution strategies.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A source the effective protoc version can be resolved from.
///
/// Each variant corresponds to one concrete resolution strategy. The
/// declaration order is the fallback order: [`resolve_version`] walks the
/// variants top to bottom and takes the first one that yields a version.
///
/// [`resolve_version`]: crate::resolve_version
///
/// # Extensibility
///
/// This enum is marked `#[non_exhaustive]` to allow adding new sources
/// in future versions. When matching on `VersionSource`, always include
/// a wildcard pattern to handle future variants.
///
/// # Example
///
/// ```rust
/// use protoc_shim::VersionSource;
///
/// // Iterate over the fallback chain in order
/// for source in VersionSource::all() {
///     println!("{}", source.display_name());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum VersionSource {
    /// Run the real protoc with `--version` and parse its output.
    Probe,
    /// Parse the version string shipped by the wrapping distribution.
    BundledMetadata,
}

impl VersionSource {
    /// Human-readable display name for the source.
    ///
    /// # Example
    ///
    /// ```rust
    /// use protoc_shim::VersionSource;
    ///
    /// assert_eq!(VersionSource::Probe.display_name(), "protoc --version probe");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Probe => "protoc --version probe",
            Self::BundledMetadata => "bundled distribution metadata",
        }
    }

    /// Iterator over all sources, in fallback order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use protoc_shim::VersionSource;
    ///
    /// let sources: Vec<_> = VersionSource::all().collect();
    /// assert_eq!(sources.first(), Some(&VersionSource::Probe));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(VersionSource::Probe.display_name(), "protoc --version probe");
        assert_eq!(
            VersionSource::BundledMetadata.display_name(),
            "bundled distribution metadata"
        );
    }

    #[test]
    fn test_all_is_fallback_order() {
        let all: Vec<_> = VersionSource::all().collect();
        assert_eq!(
            all,
            vec![VersionSource::Probe, VersionSource::BundledMetadata]
        );
    }

    #[test]
    fn test_derives() {
        // Test Copy/Eq
        let source = VersionSource::Probe;
        let copied = source;
        assert_eq!(source, copied);

        // Test Hash (via HashSet)
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(VersionSource::Probe);
        set.insert(VersionSource::BundledMetadata);
        assert_eq!(set.len(), 2);

        // Test Serialize/Deserialize
        let json = serde_json::to_string(&VersionSource::Probe).unwrap();
        let deserialized: VersionSource = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, VersionSource::Probe);
    }
}
