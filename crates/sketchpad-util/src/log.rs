//! Logging setup using tracing.
//!
//! The sketchpad crates emit through the `tracing` macros and stay silent
//! until the embedding application installs a subscriber, typically by
//! calling [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Error returned when a global subscriber is already installed.
pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global tracing subscriber.
///
/// `default_filter` is used when `RUST_LOG` is unset; it accepts the usual
/// env-filter directives, e.g. `"info"` or `"sketchpad_core=debug"`.
pub fn init(default_filter: &str) -> Result<(), InitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}
