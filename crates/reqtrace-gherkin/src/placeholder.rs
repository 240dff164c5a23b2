//! `<name>` placeholders in step text.
//!
//! Scenario Outline steps reference Examples columns with `<column>` tokens.
//! The parser records the referenced names on every step, and outline
//! expansion substitutes them with the values of each Examples row.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Regex matching `<placeholder>` tokens.
///
/// Captures the name without the angle brackets; names may contain spaces and
/// punctuation but may not start with whitespace.
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safe: The regex pattern is a compile-time constant and is valid.
    Regex::new(r"<([^>\s][^>]*)>").unwrap_or_else(|_| unreachable!("placeholder regex is valid"))
});

/// Error raised while substituting placeholders with Examples values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceholderError {
    /// A placeholder names no column of the Examples table.
    #[error(
        "placeholder '<{placeholder}>' at line {line} not found in Examples table; available \
         columns: [{}]",
        .available_columns.join(", ")
    )]
    UnknownColumn {
        /// The placeholder name.
        placeholder: String,
        /// Line of the step using it.
        line: usize,
        /// Header cells of the Examples table.
        available_columns: Vec<String>,
    },
    /// An Examples row does not have one cell per header column.
    #[error("Examples row at line {line} has {found} cells but the header has {expected}")]
    RowWidth {
        /// Line of the offending row.
        line: usize,
        /// Number of header cells.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
}

/// Extract placeholder names in first-occurrence order, without duplicates.
///
/// # Examples
///
/// ```
/// use reqtrace_gherkin::extract_parameters;
///
/// let names = extract_parameters("<user> pays <amount> to <user>");
/// assert_eq!(names, vec!["user".to_string(), "amount".to_string()]);
/// assert!(extract_parameters("a < b and c > d").is_empty());
/// ```
#[must_use]
pub fn extract_parameters(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in PLACEHOLDER_RE.captures_iter(text) {
        let Some(name) = cap.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Return `true` when the text contains at least one placeholder.
#[must_use]
pub fn contains_placeholders(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

/// Substitute every `<column>` token with the matching cell of `row`.
///
/// `line` identifies the step in error messages.
///
/// # Errors
///
/// Returns [`PlaceholderError::UnknownColumn`] when a placeholder names no
/// header column.
pub fn substitute_placeholders(
    text: &str,
    headers: &[String],
    row: &[String],
    line: usize,
) -> Result<String, PlaceholderError> {
    let mut failure = None;
    let replaced = PLACEHOLDER_RE.replace_all(text, |cap: &regex::Captures<'_>| {
        let name = cap.get(1).map_or("", |m| m.as_str());
        let value = headers
            .iter()
            .position(|header| header == name)
            .and_then(|index| row.get(index));
        match value {
            Some(value) => value.clone(),
            None => {
                failure.get_or_insert_with(|| PlaceholderError::UnknownColumn {
                    placeholder: name.to_string(),
                    line,
                    available_columns: headers.to_vec(),
                });
                String::new()
            }
        }
    });
    failure.map_or_else(|| Ok(replaced.into_owned()), Err)
}
