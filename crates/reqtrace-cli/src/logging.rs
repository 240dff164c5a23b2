//! Structured logging to stderr.
//!
//! Standard output carries listings and JSON, so every log line goes to
//! stderr.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the global subscriber from `config`.
///
/// Log level precedence, highest first: `--log-level`, `REQTRACE_LOG_LEVEL`,
/// then the default (`warn`).
///
/// A subscriber that is already installed is kept; later calls are no-ops.
pub fn init_logging(config: &CliConfig) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();

    // The first subscriber wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn init_logging_is_idempotent() {
        let config = CliConfig::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_uses_config_log_level() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Debug));
        assert_eq!(filter_from_config(&config).to_string(), "debug");
    }
}
