//! Tracing subscriber setup for plugin test harnesses.
//!
//! The host owns the real log sink. Plugins running outside of the host
//! (unit tests, local tools) can install a plain fmt subscriber here.

use tracing_subscriber::EnvFilter;

/// Default filter directive when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "piweb_import_sdk=info";

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `filter`. Returns `false` when a global
/// subscriber was already installed.
pub fn init_tracing(filter: Option<&str>) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or(DEFAULT_FILTER)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
