//! Closed set of line kinds produced by the classifier.
//!
//! Each kind carries the canonical prefix used when rendering a document back
//! to text, and the [`ElementCategory`] that drives default rendering
//! behaviour.

use std::fmt;

use crate::model::ElementCategory;

/// Delimiter family used to open or close a DocString.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocStringMarker {
    /// Three double quotes (`"""`).
    Quotes,
    /// Three backticks (```` ``` ````).
    Backticks,
}

impl DocStringMarker {
    /// Return the delimiter text.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtrace_gherkin::DocStringMarker;
    ///
    /// assert_eq!(DocStringMarker::Quotes.as_str(), "\"\"\"");
    /// assert_eq!(DocStringMarker::Backticks.as_str(), "```");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quotes => "\"\"\"",
            Self::Backticks => "```",
        }
    }

    /// Detect the marker opening `trimmed`, if any.
    pub(crate) fn detect(trimmed: &str) -> Option<Self> {
        [Self::Quotes, Self::Backticks]
            .into_iter()
            .find(|marker| trimmed.starts_with(marker.as_str()))
    }
}

/// Kind assigned to a non-blank source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `And` step.
    And,
    /// `But` step.
    But,
    /// `Given` step.
    Given,
    /// `*` step.
    Star,
    /// `Then` step.
    Then,
    /// `When` step.
    When,
    /// `Background:` header.
    Background,
    /// `Feature:` header.
    Feature,
    /// `Example:` header.
    Example,
    /// `Examples:` header.
    Examples,
    /// `Rule:` header.
    Rule,
    /// `Scenario:` header.
    Scenario,
    /// `Scenarios:` header.
    Scenarios,
    /// `Scenario Outline:` header.
    ScenarioOutline,
    /// `Scenario Template:` header.
    ScenarioTemplate,
    /// `#` comment.
    Comment,
    /// `|`-delimited table row.
    DataTable,
    /// DocString delimiter.
    DocString(DocStringMarker),
    /// Any other text.
    Description,
}

impl LineKind {
    /// Step kinds in the order the classifier tries them.
    pub const STEPS: [Self; 6] = [
        Self::And,
        Self::But,
        Self::Given,
        Self::Star,
        Self::Then,
        Self::When,
    ];

    /// Container kinds in the order the classifier tries them.
    pub const CONTAINERS: [Self; 9] = [
        Self::Background,
        Self::Feature,
        Self::Example,
        Self::Examples,
        Self::Rule,
        Self::Scenario,
        Self::Scenarios,
        Self::ScenarioOutline,
        Self::ScenarioTemplate,
    ];

    /// Canonical prefix written in front of the payload when rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtrace_gherkin::{DocStringMarker, LineKind};
    ///
    /// assert_eq!(LineKind::Star.prefix(), "* ");
    /// assert_eq!(LineKind::ScenarioOutline.prefix(), "Scenario Outline: ");
    /// assert_eq!(LineKind::DocString(DocStringMarker::Backticks).prefix(), "``` ");
    /// ```
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::And => "And ",
            Self::But => "But ",
            Self::Given => "Given ",
            Self::Star => "* ",
            Self::Then => "Then ",
            Self::When => "When ",
            Self::Background => "Background: ",
            Self::Feature => "Feature: ",
            Self::Example => "Example: ",
            Self::Examples => "Examples: ",
            Self::Rule => "Rule: ",
            Self::Scenario => "Scenario: ",
            Self::Scenarios => "Scenarios: ",
            Self::ScenarioOutline => "Scenario Outline: ",
            Self::ScenarioTemplate => "Scenario Template: ",
            Self::Comment => "# ",
            Self::DocString(DocStringMarker::Quotes) => "\"\"\" ",
            Self::DocString(DocStringMarker::Backticks) => "``` ",
            Self::DataTable | Self::Description => "",
        }
    }

    /// Grammar keyword recognised by the classifier, without the trailing
    /// colon for containers.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::And => "And",
            Self::But => "But",
            Self::Given => "Given",
            Self::Star => "*",
            Self::Then => "Then",
            Self::When => "When",
            Self::Background => "Background",
            Self::Feature => "Feature",
            Self::Example => "Example",
            Self::Examples => "Examples",
            Self::Rule => "Rule",
            Self::Scenario => "Scenario",
            Self::Scenarios => "Scenarios",
            Self::ScenarioOutline => "Scenario Outline",
            Self::ScenarioTemplate => "Scenario Template",
            Self::Comment => "#",
            Self::DataTable => "|",
            Self::DocString(marker) => marker.as_str(),
            Self::Description => "",
        }
    }

    /// Category of the element this line introduces.
    #[must_use]
    pub const fn category(self) -> ElementCategory {
        match self {
            Self::And | Self::But | Self::Given | Self::Star | Self::Then | Self::When => {
                ElementCategory::Step
            }
            Self::Background
            | Self::Feature
            | Self::Example
            | Self::Examples
            | Self::Rule
            | Self::Scenario
            | Self::Scenarios
            | Self::ScenarioOutline
            | Self::ScenarioTemplate => ElementCategory::Container,
            Self::Comment => ElementCategory::Comment,
            Self::DataTable | Self::DocString(_) => ElementCategory::Data,
            Self::Description => ElementCategory::AdditionalDescription,
        }
    }

    /// Return `true` for the six step kinds.
    #[must_use]
    pub const fn is_step(self) -> bool {
        matches!(self.category(), ElementCategory::Step)
    }

    /// Return `true` for header kinds ending in a colon.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self.category(), ElementCategory::Container)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comment => f.write_str("Comment"),
            Self::DataTable => f.write_str("DataTable"),
            Self::DocString(_) => f.write_str("DocString"),
            Self::Description => f.write_str("Description"),
            other => f.write_str(other.keyword()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LineKind::Given, ElementCategory::Step)]
    #[case(LineKind::Star, ElementCategory::Step)]
    #[case(LineKind::Scenarios, ElementCategory::Container)]
    #[case(LineKind::Comment, ElementCategory::Comment)]
    #[case(LineKind::DataTable, ElementCategory::Data)]
    #[case(LineKind::DocString(DocStringMarker::Quotes), ElementCategory::Data)]
    #[case(LineKind::Description, ElementCategory::AdditionalDescription)]
    fn assigns_categories(#[case] kind: LineKind, #[case] expected: ElementCategory) {
        assert_eq!(kind.category(), expected);
    }

    #[test]
    fn step_and_container_tables_are_disjoint() {
        assert!(LineKind::STEPS.iter().all(|kind| kind.is_step() && !kind.is_container()));
        assert!(
            LineKind::CONTAINERS
                .iter()
                .all(|kind| kind.is_container() && !kind.is_step())
        );
    }

    #[test]
    fn container_prefixes_end_with_colon_and_space() {
        for kind in LineKind::CONTAINERS {
            assert_eq!(kind.prefix(), format!("{}: ", kind.keyword()));
        }
    }

    #[rstest]
    #[case(LineKind::ScenarioTemplate, "Scenario Template")]
    #[case(LineKind::Star, "*")]
    #[case(LineKind::DocString(DocStringMarker::Backticks), "DocString")]
    #[case(LineKind::Description, "Description")]
    fn displays_diagnostic_names(#[case] kind: LineKind, #[case] expected: &str) {
        assert_eq!(kind.to_string(), expected);
    }

    #[rstest]
    #[case("\"\"\"json", Some(DocStringMarker::Quotes))]
    #[case("```", Some(DocStringMarker::Backticks))]
    #[case("``", None)]
    #[case("text", None)]
    fn detects_doc_string_markers(#[case] input: &str, #[case] expected: Option<DocStringMarker>) {
        assert_eq!(DocStringMarker::detect(input), expected);
    }
}
