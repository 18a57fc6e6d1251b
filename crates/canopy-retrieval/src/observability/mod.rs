//! Tracing setup. Logging is best-effort: nothing here can fail a query.

pub mod spans;

use canopy_core::config::ObservabilityConfig;
use canopy_core::constants::{DEFAULT_LOG_LEVEL, LOG_FILTER_ENV};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber. `RUST_LOG` overrides `log_level`; an
/// unparsable level falls back to the default.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.is_ok()
}
