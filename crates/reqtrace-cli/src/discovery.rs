//! Locating `.feature` files below the paths given on the command line.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::CliError;

/// Collect unique, sorted feature files from `paths`.
///
/// Files named explicitly are kept whatever their extension; directories are
/// walked recursively for `.feature` files.
///
/// # Errors
///
/// Returns [`CliError::MissingPath`] for a path that does not exist and
/// [`CliError::Walk`] when a directory cannot be read.
pub fn collect_feature_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    let mut files = BTreeSet::new();
    for path in paths {
        files.extend(gather_features(path)?);
    }
    debug!(count = files.len(), "discovered feature files");
    Ok(files.into_iter().collect())
}

fn gather_features(path: &Path) -> Result<Vec<PathBuf>, CliError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(CliError::MissingPath(path.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.map_err(|source| CliError::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_feature_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_feature_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == OsStr::new("feature"))
}
