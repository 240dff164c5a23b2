//! Data blocks attached to steps and Examples: tables and DocStrings.

use super::{Comment, Element, ElementCategory};
use crate::line::DocStringMarker;

/// A `|`-delimited table kept as its raw rows.
///
/// The parser never splits cells; [`DataTable::cells`] does so on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    line_number: usize,
    rows: Vec<String>,
    row_lines: Vec<usize>,
    comments: Vec<Comment>,
}

impl DataTable {
    pub(crate) fn new(line_number: usize) -> Self {
        Self {
            line_number,
            rows: Vec::new(),
            row_lines: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, line_number: usize, row: impl Into<String>) {
        self.row_lines.push(line_number);
        self.rows.push(row.into());
    }

    pub(crate) fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Raw rows in source order, surrounding whitespace removed.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Source line of each row, parallel to [`rows`](Self::rows).
    #[must_use]
    pub fn row_lines(&self) -> &[usize] {
        &self.row_lines
    }

    /// Split every row into trimmed cells.
    ///
    /// `\|`, `\\` and `\n` are unescaped; any other backslash is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtrace_gherkin::{FeatureChild, parse_str};
    ///
    /// let doc = parse_str(
    ///     "Feature: F\nScenario Outline: O\nGiven <a>\nExamples:\n| a | b\\|c |\n| 1 | 2 |",
    /// )
    /// .unwrap();
    /// let Some(FeatureChild::Outline(outline)) = doc.feature().children().first() else {
    ///     panic!("expected an outline");
    /// };
    /// let table = outline.examples().and_then(|e| e.table()).unwrap();
    /// assert_eq!(table.cells(), vec![vec!["a", "b|c"], vec!["1", "2"]]);
    /// ```
    #[must_use]
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| split_row(row)).collect()
    }
}

fn split_row(row: &str) -> Vec<String> {
    let body = row.trim().strip_prefix('|').unwrap_or(row);
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('|') => cell.push('|'),
                Some('\\') => cell.push('\\'),
                Some('n') => cell.push('\n'),
                Some(other) => {
                    cell.push('\\');
                    cell.push(other);
                }
                None => cell.push('\\'),
            },
            '|' => cells.push(std::mem::take(&mut cell).trim().to_string()),
            other => cell.push(other),
        }
    }
    if !cell.trim().is_empty() {
        cells.push(cell.trim().to_string());
    }
    cells
}

impl Element for DataTable {
    fn line_number(&self) -> usize {
        self.line_number
    }

    fn category(&self) -> ElementCategory {
        ElementCategory::Data
    }

    fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

/// A fenced block of text.
///
/// Content lines are stored with the opening delimiter's indentation removed.
/// Either marker closes the block whichever one opened it, so both are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocString {
    line_number: usize,
    marker: DocStringMarker,
    closing_marker: DocStringMarker,
    content_type: Option<String>,
    lines: Vec<String>,
}

impl DocString {
    pub(crate) fn new(
        line_number: usize,
        marker: DocStringMarker,
        content_type: Option<String>,
    ) -> Self {
        Self {
            line_number,
            marker,
            closing_marker: marker,
            content_type,
            lines: Vec::new(),
        }
    }

    pub(crate) fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn close_with(&mut self, marker: DocStringMarker) {
        self.closing_marker = marker;
    }

    /// Marker that opened the block.
    #[must_use]
    pub const fn marker(&self) -> DocStringMarker {
        self.marker
    }

    /// Marker that closed the block.
    #[must_use]
    pub const fn closing_marker(&self) -> DocStringMarker {
        self.closing_marker
    }

    /// Content type written after the opening marker, such as `json`.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Content lines in source order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Content lines joined with `\n`.
    #[must_use]
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

impl Element for DocString {
    fn line_number(&self) -> usize {
        self.line_number
    }

    fn category(&self) -> ElementCategory {
        ElementCategory::Data
    }
}

/// The single optional argument a step may carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepArgument {
    /// A data table.
    DataTable(DataTable),
    /// A DocString.
    DocString(DocString),
}

impl StepArgument {
    /// Line of the first row or the opening delimiter.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::DataTable(table) => table.line_number(),
            Self::DocString(doc) => doc.line_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("| a | b |", &["a", "b"])]
    #[case("|a|b|", &["a", "b"])]
    #[case("| x \\| y | z |", &["x | y", "z"])]
    #[case("| back\\\\slash |", &["back\\slash"])]
    #[case("| multi\\nline |", &["multi\nline"])]
    #[case("| keep \\d |", &["keep \\d"])]
    #[case("| | empty |", &["", "empty"])]
    #[case("| open | tail", &["open", "tail"])]
    fn splits_cells(#[case] row: &str, #[case] expected: &[&str]) {
        assert_eq!(split_row(row), expected);
    }

    #[test]
    fn doc_string_content_joins_lines() {
        let mut doc = DocString::new(3, DocStringMarker::Quotes, None);
        doc.push_line("first");
        doc.push_line("  second");
        doc.close_with(DocStringMarker::Backticks);
        assert_eq!(doc.content(), "first\n  second");
        assert_eq!(doc.marker(), DocStringMarker::Quotes);
        assert_eq!(doc.closing_marker(), DocStringMarker::Backticks);
    }
}
