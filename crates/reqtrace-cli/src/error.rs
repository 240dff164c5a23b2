//! Error types for the command-line front end.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised before any feature file is parsed.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A path given on the command line does not exist.
    #[error("no such file or directory: {}", .0.display())]
    MissingPath(PathBuf),

    /// A directory could not be walked.
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: walkdir::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_error_displays_message() {
        let error = CliError::InvalidConfig("unknown log level".to_string());
        assert_eq!(error.to_string(), "invalid configuration: unknown log level");
    }

    #[test]
    fn missing_path_error_names_the_path() {
        let error = CliError::MissingPath(PathBuf::from("features/none"));
        assert_eq!(
            error.to_string(),
            "no such file or directory: features/none"
        );
    }
}
