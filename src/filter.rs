//! Version-gated argument filtering.
//!
//! protoc 32.0 introduced `--option_dependencies` and
//! `--option_dependencies_violation_msg`, and newer build systems pass
//! them unconditionally. Older compilers reject unrecognized flags, so
//! when the resolved version is below 32 these flags (and their values)
//! are stripped before delegation.

use semver::Version;

/// First protoc major version that understands the filtered flags.
pub const OPTION_DEPENDENCIES_MIN_MAJOR: u64 = 32;

/// A flag subject to removal on old compilers.
struct FlagRule {
    /// Exact flag name, without any `=value` suffix.
    name: &'static str,
    /// Whether the separated form (`--flag value`) consumes the next token.
    takes_value: bool,
}

/// Flags introduced in protoc 32.0.
const FILTERED_FLAGS: &[FlagRule] = &[
    FlagRule {
        name: "--option_dependencies",
        takes_value: true,
    },
    FlagRule {
        name: "--option_dependencies_violation_msg",
        takes_value: true,
    },
];

/// Filter out flags not supported by the resolved protoc version.
///
/// This is a total, pure function with no error paths:
///
/// - If `version` is `None` (unknown) or its major is at least 32, the
///   arguments are returned unchanged. Filtering fails open so a version
///   detection problem can never break a working invocation.
/// - Otherwise each filtered flag is removed in both its forms: the
///   separated form (`--flag value`, two tokens) drops the flag and the
///   following value token; the combined form (`--flag=value`, one token)
///   drops just that token. All other tokens keep their relative order.
///
/// A filtered flag appearing as the final token (separated form with no
/// value) is dropped with nothing left to skip.
///
/// # Example
///
/// ```rust
/// use protoc_shim::filter_unsupported_flags;
/// use semver::Version;
///
/// let args = vec![
///     "--proto_path=.".to_string(),
///     "--option_dependencies".to_string(),
///     "file.proto".to_string(),
///     "--python_out=out".to_string(),
/// ];
/// let old = Version::new(28, 3, 0);
/// assert_eq!(
///     filter_unsupported_flags(&args, Some(&old)),
///     vec!["--proto_path=.".to_string(), "--python_out=out".to_string()],
/// );
///
/// // Unknown version disables filtering
/// assert_eq!(filter_unsupported_flags(&args, None), args);
/// ```
pub fn filter_unsupported_flags(args: &[String], version: Option<&Version>) -> Vec<String> {
    match version {
        None => return args.to_vec(),
        Some(v) if v.major >= OPTION_DEPENDENCIES_MIN_MAJOR => return args.to_vec(),
        Some(_) => {}
    }

    let mut filtered = Vec::with_capacity(args.len());
    let mut skip_next = false;

    'args: for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }

        for rule in FILTERED_FLAGS {
            if arg == rule.name {
                skip_next = rule.takes_value;
                continue 'args;
            }
            // Combined form: value is embedded, nothing follows to skip
            if arg
                .strip_prefix(rule.name)
                .is_some_and(|rest| rest.starts_with('='))
            {
                continue 'args;
            }
        }

        filtered.push(arg.clone());
    }

    filtered
}
