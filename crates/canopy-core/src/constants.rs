/// Default log level when neither config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";
