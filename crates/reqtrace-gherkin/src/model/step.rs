//! Steps and their keywords.

use std::fmt;
use std::str::FromStr;

use super::{Comment, Element, ElementCategory, StepArgument};
use crate::line::LineKind;
use crate::placeholder::extract_parameters;

/// Keyword introducing a step.
///
/// `And`, `But` and `*` continue the previous primary keyword; see
/// [`resolve`](Self::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action.
    When,
    /// Assert the expected outcome.
    Then,
    /// Additional condition sharing the previous keyword.
    And,
    /// Contrasting condition sharing the previous keyword.
    But,
    /// Bullet-style step (`*`).
    Star,
}

impl StepKeyword {
    /// Return the keyword as written in feature files.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtrace_gherkin::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::Star.as_str(), "*");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
            Self::Star => "*",
        }
    }

    /// Map a step [`LineKind`] to its keyword.
    #[must_use]
    pub const fn from_line_kind(kind: LineKind) -> Option<Self> {
        match kind {
            LineKind::Given => Some(Self::Given),
            LineKind::When => Some(Self::When),
            LineKind::Then => Some(Self::Then),
            LineKind::And => Some(Self::And),
            LineKind::But => Some(Self::But),
            LineKind::Star => Some(Self::Star),
            _ => None,
        }
    }

    /// The [`LineKind`] this keyword is classified as.
    #[must_use]
    pub const fn line_kind(self) -> LineKind {
        match self {
            Self::Given => LineKind::Given,
            Self::When => LineKind::When,
            Self::Then => LineKind::Then,
            Self::And => LineKind::And,
            Self::But => LineKind::But,
            Self::Star => LineKind::Star,
        }
    }

    /// Return `true` for `And`, `But` and `*`.
    #[must_use]
    pub const fn is_conjunction(self) -> bool {
        matches!(self, Self::And | Self::But | Self::Star)
    }

    /// Resolve conjunctions to the keyword of the previous primary step.
    ///
    /// Primary keywords update `prev` and are returned unchanged; conjunctions
    /// return the stored keyword, defaulting to `Given` when none was seen.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtrace_gherkin::StepKeyword;
    ///
    /// let mut prev = None;
    /// assert_eq!(StepKeyword::Star.resolve(&mut prev), StepKeyword::Given);
    /// assert_eq!(StepKeyword::When.resolve(&mut prev), StepKeyword::When);
    /// assert_eq!(StepKeyword::But.resolve(&mut prev), StepKeyword::When);
    /// ```
    #[must_use]
    pub fn resolve(self, prev: &mut Option<Self>) -> Self {
        if self.is_conjunction() {
            prev.unwrap_or(Self::Given)
        } else {
            *prev = Some(self);
            self
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StepKeyword`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid step keyword: {}", self.0)
    }
}

impl std::error::Error for StepKeywordParseError {}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Given" => Ok(Self::Given),
            "When" => Ok(Self::When),
            "Then" => Ok(Self::Then),
            "And" => Ok(Self::And),
            "But" => Ok(Self::But),
            "*" => Ok(Self::Star),
            other => Err(StepKeywordParseError(other.to_string())),
        }
    }
}

/// One step line with its optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    keyword: StepKeyword,
    line_number: usize,
    text: String,
    parameters: Vec<String>,
    comments: Vec<Comment>,
    argument: Option<StepArgument>,
}

impl Step {
    pub(crate) fn new(keyword: StepKeyword, line_number: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let parameters = extract_parameters(&text);
        Self {
            keyword,
            line_number,
            text,
            parameters,
            comments: Vec::new(),
            argument: None,
        }
    }

    pub(crate) fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub(crate) fn set_argument(&mut self, argument: StepArgument) {
        debug_assert!(self.argument.is_none(), "step argument already set");
        self.argument = Some(argument);
    }

    /// Keyword as written.
    #[must_use]
    pub const fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// Step text after the keyword.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Names of the `<name>` placeholders in the text, in first-occurrence
    /// order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The attached DataTable or DocString.
    #[must_use]
    pub const fn argument(&self) -> Option<&StepArgument> {
        self.argument.as_ref()
    }

    /// The attached data table, if the argument is one.
    #[must_use]
    pub fn data_table(&self) -> Option<&super::DataTable> {
        match &self.argument {
            Some(StepArgument::DataTable(table)) => Some(table),
            _ => None,
        }
    }

    /// The attached DocString, if the argument is one.
    #[must_use]
    pub fn doc_string(&self) -> Option<&super::DocString> {
        match &self.argument {
            Some(StepArgument::DocString(doc)) => Some(doc),
            _ => None,
        }
    }

    /// Copy of the step with different text, used by outline expansion.
    pub(crate) fn with_text(&self, text: String) -> Self {
        let parameters = extract_parameters(&text);
        Self {
            text,
            parameters,
            ..self.clone()
        }
    }
}

impl Element for Step {
    fn line_number(&self) -> usize {
        self.line_number
    }

    fn category(&self) -> ElementCategory {
        ElementCategory::Step
    }

    fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Given", StepKeyword::Given)]
    #[case(" When ", StepKeyword::When)]
    #[case("Then", StepKeyword::Then)]
    #[case("And", StepKeyword::And)]
    #[case("But", StepKeyword::But)]
    #[case("*", StepKeyword::Star)]
    fn parses_keywords(#[case] input: &str, #[case] expected: StepKeyword) {
        assert_eq!(input.parse::<StepKeyword>(), Ok(expected));
    }

    #[test]
    fn rejects_lowercase_keywords() {
        assert_eq!(
            "given".parse::<StepKeyword>(),
            Err(StepKeywordParseError("given".into()))
        );
    }

    #[test]
    fn round_trips_through_line_kind() {
        for kind in LineKind::STEPS {
            let keyword = StepKeyword::from_line_kind(kind)
                .unwrap_or_else(|| panic!("{kind} should map to a keyword"));
            assert_eq!(keyword.line_kind(), kind);
        }
        assert_eq!(StepKeyword::from_line_kind(LineKind::Feature), None);
    }

    #[test]
    fn resolve_keeps_previous_for_conjunctions() {
        let mut prev = Some(StepKeyword::Then);
        assert_eq!(StepKeyword::And.resolve(&mut prev), StepKeyword::Then);
        assert_eq!(StepKeyword::Star.resolve(&mut prev), StepKeyword::Then);
        assert_eq!(prev, Some(StepKeyword::Then));
    }

    #[test]
    fn extracts_parameters_on_construction() {
        let step = Step::new(StepKeyword::Given, 4, "<user> logs in as <user> with <role>");
        assert_eq!(step.parameters(), ["user", "role"]);
    }

    #[test]
    fn exposes_the_attached_argument_by_kind() {
        let mut step = Step::new(StepKeyword::Given, 1, "x");
        step.set_argument(StepArgument::DataTable(super::super::DataTable::new(2)));
        assert!(step.data_table().is_some());
        assert!(step.doc_string().is_none());
        assert_eq!(step.argument().map(StepArgument::line_number), Some(2));
    }
}
