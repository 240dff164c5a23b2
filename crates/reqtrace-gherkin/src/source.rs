//! Reading feature files from disk.

use std::path::Path;

use tracing::debug;

use crate::errors::FeatureLoadError;
use crate::line::classify;
use crate::model::FeatureFile;
use crate::parser::parse;

const BOM: char = '\u{feff}';

/// Read a UTF-8 feature file as lines, without terminators or a leading BOM.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be read or is not
/// valid UTF-8.
pub fn read_feature_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let text = text.strip_prefix(BOM).unwrap_or(&text);
    Ok(text.lines().map(ToString::to_string).collect())
}

/// Read, classify and parse one feature file.
///
/// # Errors
///
/// Returns [`FeatureLoadError::Io`] when the file cannot be read and
/// [`FeatureLoadError::Parse`] when its contents are not valid Gherkin.
pub fn load_feature_file(path: &Path) -> Result<FeatureFile, FeatureLoadError> {
    let lines = read_feature_lines(path).map_err(|source| FeatureLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), lines = lines.len(), "read feature file");
    parse(&classify(&lines)).map_err(|source| FeatureLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
