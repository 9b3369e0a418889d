//! Tracing initialization and error formatting
//!
//! All crates log through `tracing` macros; hosts call [`init`] once at
//! startup. [`format_error`] flattens an error's cause chain into a single
//! line suitable for the problem page's output surface.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The `RUST_LOG` environment variable overrides `default_level` when set.
/// Returns quietly if a subscriber is already installed so embedding hosts
/// that bring their own subscriber keep it.
pub fn init(default_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Initialize tracing for tests: debug level, no-fail on repeat calls.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Format an error together with its cause chain.
///
/// Chains deeper than `MAX_DEPTH` are truncated to guard against cyclic
/// sources.
pub fn format_error(error: &dyn std::error::Error) -> String {
    const MAX_DEPTH: usize = 10;

    let mut out = error.to_string();
    let mut source = error.source();
    let mut depth = 0;

    while let Some(cause) = source {
        if depth >= MAX_DEPTH {
            break;
        }
        out.push_str(" Caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
        depth += 1;
    }

    out
}
