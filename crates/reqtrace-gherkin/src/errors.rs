//! Error types raised while parsing and loading feature files.
//!
//! Every grammar violation aborts the parse: there is no partial document.
//! Each variant names the offending construct and its 1-based source line.

use std::path::PathBuf;

use thiserror::Error;

use crate::line::LineKind;

/// Grammar violation found by the structural parser.
///
/// # Examples
/// ```
/// use reqtrace_gherkin::{GherkinError, parse_str};
///
/// let err = parse_str("# only a comment").unwrap_err();
/// assert_eq!(err, GherkinError::MissingFeature);
/// assert_eq!(err.to_string(), "no Feature line found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GherkinError {
    /// The input holds nothing but comments.
    #[error("no Feature line found")]
    MissingFeature,

    /// The first non-comment line is not a `Feature:` header.
    #[error("no Feature line found: line {line} is a {found} line")]
    ExpectedFeature {
        /// Line of the first non-comment line.
        line: usize,
        /// Its kind.
        found: LineKind,
    },

    /// A second `Background:` inside one Feature.
    #[error("duplicated Background at line {line}: the Feature already has one at line {first}")]
    DuplicateBackground {
        /// Line of the second Background.
        line: usize,
        /// Line of the Background already attached.
        first: usize,
    },

    /// A `Background:` with no step.
    #[error("Background at line {line} has no steps")]
    EmptyBackground {
        /// Line of the Background header.
        line: usize,
    },

    /// A second `Examples:`/`Scenarios:` block under one outline.
    #[error(
        "duplicated {found} at line {line}: the {outline} at line {outline_line} already has \
         an Examples or Scenarios block"
    )]
    DuplicateExamples {
        /// Line of the second block.
        line: usize,
        /// Kind of the second block.
        found: LineKind,
        /// Kind of the owning outline.
        outline: LineKind,
        /// Line of the owning outline.
        outline_line: usize,
    },

    /// An outline that ends without `Examples:`/`Scenarios:`.
    #[error("{outline} at line {line} has no Examples or Scenarios block")]
    MissingExamples {
        /// Line of the outline header.
        line: usize,
        /// Kind of the outline.
        outline: LineKind,
    },

    /// A second DataTable under one Examples block.
    #[error("duplicated DataTable at line {line}: the {owner} at line {owner_line} already has one")]
    DuplicateDataTable {
        /// Line of the second table.
        line: usize,
        /// Kind of the owning block.
        owner: LineKind,
        /// Line of the owning block.
        owner_line: usize,
    },

    /// A second DataTable or DocString after a step.
    #[error(
        "duplicated step argument: {found} at line {line} follows the step at line {step_line}, \
         which already has a DataTable or DocString"
    )]
    DuplicateStepArgument {
        /// Line of the second argument.
        line: usize,
        /// Kind of the second argument.
        found: LineKind,
        /// Line of the step.
        step_line: usize,
    },

    /// End of input reached inside a DocString.
    #[error("ending DocString could not be found for the DocString opened at line {line}")]
    UnterminatedDocString {
        /// Line of the opening delimiter.
        line: usize,
    },

    /// A line whose kind is not a valid child at the current nesting level.
    #[error("line {line} ({found}) does not match an element expected under {parent}")]
    UnexpectedLine {
        /// Offending line.
        line: usize,
        /// Its kind.
        found: LineKind,
        /// Kind of the element being extracted.
        parent: LineKind,
    },

    /// An extraction routine was handed a header of the wrong kind.
    #[error("expected {expected} at line {line} but found {found}")]
    KindMismatch {
        /// Offending line.
        line: usize,
        /// Kind the routine extracts.
        expected: &'static str,
        /// Kind of the line.
        found: LineKind,
    },
}

impl GherkinError {
    /// Source line the error refers to, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MissingFeature => None,
            Self::ExpectedFeature { line, .. }
            | Self::DuplicateBackground { line, .. }
            | Self::EmptyBackground { line }
            | Self::DuplicateExamples { line, .. }
            | Self::MissingExamples { line, .. }
            | Self::DuplicateDataTable { line, .. }
            | Self::DuplicateStepArgument { line, .. }
            | Self::UnterminatedDocString { line }
            | Self::UnexpectedLine { line, .. }
            | Self::KindMismatch { line, .. } => Some(*line),
        }
    }
}

/// Failure to turn a file on disk into a parsed document.
#[derive(Debug, Error)]
pub enum FeatureLoadError {
    /// The file could not be read.
    #[error("failed to read feature file {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid Gherkin.
    #[error("invalid Gherkin in {}: {source}", .path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: GherkinError,
    },
}

impl FeatureLoadError {
    /// File the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_duplicate_background() {
        let err = GherkinError::DuplicateBackground { line: 4, first: 2 };
        assert_eq!(
            err.to_string(),
            "duplicated Background at line 4: the Feature already has one at line 2"
        );
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn formats_unexpected_line_with_kind_names() {
        let err = GherkinError::UnexpectedLine {
            line: 7,
            found: LineKind::Examples,
            parent: LineKind::Scenario,
        };
        assert_eq!(
            err.to_string(),
            "line 7 (Examples) does not match an element expected under Scenario"
        );
    }

    #[test]
    fn formats_duplicate_examples() {
        let err = GherkinError::DuplicateExamples {
            line: 9,
            found: LineKind::Scenarios,
            outline: LineKind::ScenarioTemplate,
            outline_line: 3,
        };
        assert_eq!(
            err.to_string(),
            "duplicated Scenarios at line 9: the Scenario Template at line 3 already has an \
             Examples or Scenarios block"
        );
    }

    #[test]
    fn missing_feature_has_no_line() {
        assert_eq!(GherkinError::MissingFeature.line(), None);
    }

    #[test]
    fn load_errors_expose_their_path() {
        let err = FeatureLoadError::Parse {
            path: PathBuf::from("features/login.feature"),
            source: GherkinError::UnterminatedDocString { line: 12 },
        };
        assert_eq!(err.path(), std::path::Path::new("features/login.feature"));
        assert_eq!(
            err.to_string(),
            "invalid Gherkin in features/login.feature: ending DocString could not be found for \
             the DocString opened at line 12"
        );
    }
}
