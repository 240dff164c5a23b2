//! Classified-line representation sitting between raw text and the document
//! tree.

mod classifier;
mod kind;

pub use classifier::{classify, classify_line, classify_text};
pub use kind::{DocStringMarker, LineKind};

/// A non-blank source line tagged with its [`LineKind`].
///
/// Values are immutable once created: the classifier is the only producer and
/// the parser only reads them.
///
/// # Examples
///
/// ```
/// use reqtrace_gherkin::{ClassifiedLine, LineKind};
///
/// let line = ClassifiedLine::new(LineKind::Given, "a user", 3, "    Given a user");
/// assert_eq!(line.kind(), LineKind::Given);
/// assert_eq!(line.payload(), "a user");
/// assert_eq!(line.line_number(), 3);
/// assert_eq!(line.indentation(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    kind: LineKind,
    payload: String,
    line_number: usize,
    raw: String,
}

impl ClassifiedLine {
    /// Create a classified line.
    #[must_use]
    pub fn new(
        kind: LineKind,
        payload: impl Into<String>,
        line_number: usize,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            payload: payload.into(),
            line_number,
            raw: raw.into(),
        }
    }

    /// Kind assigned by the classifier.
    #[must_use]
    pub const fn kind(&self) -> LineKind {
        self.kind
    }

    /// Text following the keyword or marker, or the whole line for
    /// descriptions and table rows.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// 1-based line number in the source file.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }

    /// Untrimmed source text of the line.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Number of leading whitespace characters in the raw line.
    #[must_use]
    pub fn indentation(&self) -> usize {
        self.raw.chars().take_while(|c| c.is_whitespace()).count()
    }
}
