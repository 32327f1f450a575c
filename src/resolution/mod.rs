//! Resolution implementation submodule.
//!
//! This module contains the internal implementation details for resolving
//! the effective protoc version. It provides:
//!
//! - `find_protoc`: PATH-based executable lookup with fallbacks
//! - `run_version_command`: Async `--version` probe with timeout
//! - `parse_probe_output` / `parse_bundled_version`: version extraction

mod parser;
mod path_finder;
mod probe;

pub(crate) use parser::{parse_bundled_version, parse_probe_output};
pub(crate) use path_finder::find_protoc;
pub(crate) use probe::run_version_command;
