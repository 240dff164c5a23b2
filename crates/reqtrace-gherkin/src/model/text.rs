//! Comment and free-text description lines.

use super::{Element, ElementCategory};

/// A `#` comment attached to the element it trails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    line_number: usize,
    text: String,
}

impl Comment {
    pub(crate) fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }

    /// Comment text without the leading `# `.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for Comment {
    fn line_number(&self) -> usize {
        self.line_number
    }

    fn category(&self) -> ElementCategory {
        ElementCategory::Comment
    }
}

/// An additional description line under a container header.
///
/// The raw line is kept as written, indentation included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    line_number: usize,
    raw: String,
}

impl Description {
    pub(crate) fn new(line_number: usize, raw: impl Into<String>) -> Self {
        Self {
            line_number,
            raw: raw.into(),
        }
    }

    /// The line exactly as it appeared in the source.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The line without surrounding whitespace.
    #[must_use]
    pub fn text(&self) -> &str {
        self.raw.trim()
    }
}

impl Element for Description {
    fn line_number(&self) -> usize {
        self.line_number
    }

    fn category(&self) -> ElementCategory {
        ElementCategory::AdditionalDescription
    }
}
