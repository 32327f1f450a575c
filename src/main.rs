//! protoc-shim binary entry point.
//!
//! Resolves the effective protoc version, strips the flags the resolved
//! version does not understand, and delegates to the real protoc with the
//! filtered arguments. The child's stdio and exit code pass through
//! unchanged.

use protoc_shim::{delegate_to_protoc, filter_unsupported_flags, resolve_version, ResolveOptions};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logging is opt-in via RUST_LOG; by default the shim is silent so its
    // output is indistinguishable from a direct protoc invocation
    tracing_subscriber::fmt::init();

    let opts = ResolveOptions::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let version = resolve_version(&opts).await;
    let filtered = filter_unsupported_flags(&args, version.as_ref());
    if filtered.len() != args.len() {
        debug!(
            removed = args.len() - filtered.len(),
            "stripped option_dependencies flags for pre-32 protoc"
        );
    }

    match delegate_to_protoc(&opts, &filtered).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("protoc-shim: {}", e);
            eprintln!("protoc-shim: {}", e.fix_suggestion());
            std::process::exit(1);
        }
    }
}
