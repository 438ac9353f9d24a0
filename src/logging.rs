//! Diagnostic logging for the runner itself.
//!
//! User-facing hook output (banners, warnings) is written directly; tracing
//! only carries debug detail and goes to stderr so it never mixes with what
//! the hook command prints.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set to any non-empty value to turn on debug logging.
pub const DEBUG_VAR: &str = "HUSKY_DEBUG";

/// Whether debug logging was requested through the environment.
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_VAR).is_some_and(|v| !v.is_empty())
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the level picked from `verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("githook_runner={level}")));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
