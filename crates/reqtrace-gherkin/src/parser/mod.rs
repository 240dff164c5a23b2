//! Structural parser turning classified lines into a [`FeatureFile`].
//!
//! The parser is a recursive descent over the line sequence. Each extraction
//! routine receives its already-consumed header line, then consumes every
//! following line it accepts as a child. It stops at the first line that may
//! belong to an ancestor and reports an error for a line nothing above it
//! could accept.

mod arguments;
mod containers;


use tracing::debug;

use crate::errors::GherkinError;
use crate::line::{ClassifiedLine, LineKind, classify_text};
use crate::model::{Comment, Description, FeatureFile};

/// Parse classified lines into a document tree.
///
/// Leading comments are attached to the file; the first other line must be a
/// `Feature:` header.
///
/// # Errors
///
/// Returns the first grammar violation, in source order. No partial tree is
/// produced.
pub fn parse(lines: &[ClassifiedLine]) -> Result<FeatureFile, GherkinError> {
    let mut cursor = Cursor::new(lines);
    let mut comments = Vec::new();
    while let Some(line) = cursor.next_if_kind(|kind| kind == LineKind::Comment) {
        comments.push(comment_from(line));
    }
    let Some(header) = cursor.advance() else {
        return Err(GherkinError::MissingFeature);
    };
    if header.kind() != LineKind::Feature {
        return Err(GherkinError::ExpectedFeature {
            line: header.line_number(),
            found: header.kind(),
        });
    }
    let feature = cursor.extract_feature(header)?;
    debug!(
        title = feature.title(),
        children = feature.children().len(),
        "parsed feature"
    );
    Ok(FeatureFile::new(comments, feature))
}

/// Classify and parse an in-memory document.
///
/// # Errors
///
/// See [`parse`].
///
/// # Examples
///
/// ```
/// use reqtrace_gherkin::{Element, parse_str};
///
/// let doc = parse_str("Feature: Login\n  Scenario: ok\n    Given a user\n").unwrap();
/// assert_eq!(doc.feature().title(), "Login");
/// assert_eq!(doc.feature().children().len(), 1);
/// assert_eq!(doc.feature().line_number(), 1);
/// ```
pub fn parse_str(text: &str) -> Result<FeatureFile, GherkinError> {
    parse(&classify_text(text))
}

/// Forward-only position over the classified lines.
struct Cursor<'a> {
    lines: &'a [ClassifiedLine],
    position: usize,
}

impl<'a> Cursor<'a> {
    const fn new(lines: &'a [ClassifiedLine]) -> Self {
        Self { lines, position: 0 }
    }

    fn peek(&self) -> Option<&'a ClassifiedLine> {
        self.lines.get(self.position)
    }

    fn advance(&mut self) -> Option<&'a ClassifiedLine> {
        let line = self.peek()?;
        self.position += 1;
        Some(line)
    }

    fn next_if_kind(&mut self, accept: impl Fn(LineKind) -> bool) -> Option<&'a ClassifiedLine> {
        let line = self.peek()?;
        if accept(line.kind()) {
            self.position += 1;
            Some(line)
        } else {
            None
        }
    }
}

/// Verify a header handed to an extraction routine and map it to its keyword.
fn expect_header<T>(
    line: &ClassifiedLine,
    expected: &'static str,
    map: impl FnOnce(LineKind) -> Option<T>,
) -> Result<T, GherkinError> {
    map(line.kind()).ok_or_else(|| GherkinError::KindMismatch {
        line: line.line_number(),
        expected,
        found: line.kind(),
    })
}

/// Kinds that end the current element because an ancestor may accept them.
const fn closes_block(kind: LineKind) -> bool {
    matches!(
        kind,
        LineKind::Feature
            | LineKind::Background
            | LineKind::Rule
            | LineKind::Scenario
            | LineKind::Example
            | LineKind::ScenarioOutline
            | LineKind::ScenarioTemplate
    )
}

fn comment_from(line: &ClassifiedLine) -> Comment {
    Comment::new(line.line_number(), line.payload())
}

fn description_from(line: &ClassifiedLine) -> Description {
    Description::new(line.line_number(), line.raw())
}
