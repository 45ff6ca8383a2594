use std::env;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Result, ShellfrontError, config::LogLevel};

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "SHELLFRONT_LOG_FORMAT";

/// Initialize tracing for the application
///
/// Uses the RUST_LOG environment variable if set, otherwise the configured
/// level. Output is compact text, or JSON when SHELLFRONT_LOG_FORMAT is
/// "json". Logs go to stderr so command output on stdout stays clean.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init(level: LogLevel) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let format = env::var(LOG_FORMAT_VAR).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format.as_str() {
        "json" => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        _ => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ShellfrontError::Logging(e.to_string()))
}
