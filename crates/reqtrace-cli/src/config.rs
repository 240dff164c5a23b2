//! Configuration read from the environment and the command line.
//!
//! The only setting is the log level. `REQTRACE_LOG_LEVEL` provides the
//! default and `--log-level` overrides it.

use std::str::FromStr;

use crate::error::CliError;

/// Environment variable holding the default log level.
pub const LOG_LEVEL_VAR: &str = "REQTRACE_LOG_LEVEL";

/// Log level matching the `tracing` levels.
///
/// Defaults to `Warn` so that listings are not interleaved with progress
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every parsed element.
    Trace,
    /// Per-file and per-container progress.
    Debug,
    /// Batch summaries.
    Info,
    /// Files that failed to parse.
    #[default]
    Warn,
    /// Fatal errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for the stderr subscriber.
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidConfig`] if `REQTRACE_LOG_LEVEL` holds an
    /// unknown level.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidConfig`] if the log level is unknown.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => LogLevel::default(),
        };
        Ok(Self { log_level })
    }

    /// Apply command-line overrides, which take precedence over the
    /// environment.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}
