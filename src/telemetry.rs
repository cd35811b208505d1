//! Tracing initialization for host applications.
//!
//! The library itself only emits `tracing` events; hosts decide where
//! they go. These helpers install a global subscriber wired to the
//! configured filter, typically from
//! [`SessionConfig::log_level`](crate::config::SessionConfig):
//!
//! ```no_run
//! use orgboard_session::{config::SessionConfig, telemetry};
//!
//! let config = SessionConfig::load().expect("Failed to load configuration");
//! telemetry::init(&config.log_level);
//! ```
//!
//! `RUST_LOG` overrides the configured directives when set. Calling an
//! init function more than once is harmless; later calls are ignored.

use tracing_subscriber::EnvFilter;

/// Installs a human-readable subscriber for terminals and development.
pub fn init(default_directives: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_directives))
        .try_init();
}

/// Installs a JSON subscriber for log-collecting environments.
pub fn init_json(default_directives: &str) {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter(default_directives))
        .try_init();
}

fn filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
