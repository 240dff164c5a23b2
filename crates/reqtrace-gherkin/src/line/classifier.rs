//! Ordered, exclusive line classification.
//!
//! Step keywords are tried first, then container keywords, then the marker
//! kinds (comment, table row, DocString delimiter). Anything left over is a
//! description line. The patterns are compiled once and shared read-only, so
//! several files can be classified concurrently.

use std::sync::LazyLock;

use regex::Regex;

use super::{ClassifiedLine, DocStringMarker, LineKind};

struct KeywordPattern {
    kind: LineKind,
    regex: Regex,
}

impl KeywordPattern {
    fn compile(kind: LineKind, source: &str) -> Self {
        // Safe: every source is built from escaped constant keywords.
        let regex = Regex::new(source)
            .unwrap_or_else(|_| unreachable!("keyword pattern for {kind} is valid"));
        Self { kind, regex }
    }

    fn capture<'a>(&self, trimmed: &'a str) -> Option<&'a str> {
        let caps = self.regex.captures(trimmed)?;
        Some(caps.get(1).map_or("", |m| m.as_str().trim()))
    }
}

/// Step keywords followed by at least one whitespace character.
static STEP_PATTERNS: LazyLock<Vec<KeywordPattern>> = LazyLock::new(|| {
    LineKind::STEPS
        .into_iter()
        .map(|kind| {
            let source = format!(r"^{}\s+(.*)$", regex::escape(kind.keyword()));
            KeywordPattern::compile(kind, &source)
        })
        .collect()
});

/// Container keywords followed by a mandatory colon.
static CONTAINER_PATTERNS: LazyLock<Vec<KeywordPattern>> = LazyLock::new(|| {
    LineKind::CONTAINERS
        .into_iter()
        .map(|kind| {
            let source = format!(r"^\s*{}\s*:\s*(.*)$", regex::escape(kind.keyword()));
            KeywordPattern::compile(kind, &source)
        })
        .collect()
});

/// Classify a single raw line.
///
/// Returns `None` for blank lines, which never reach the parser.
///
/// # Examples
///
/// ```
/// use reqtrace_gherkin::{LineKind, classify_line};
///
/// let line = classify_line("  Scenario Outline: eating", 4).unwrap();
/// assert_eq!(line.kind(), LineKind::ScenarioOutline);
/// assert_eq!(line.payload(), "eating");
/// assert!(classify_line("   ", 5).is_none());
/// ```
#[must_use]
pub fn classify_line(raw: &str, line_number: usize) -> Option<ClassifiedLine> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (kind, payload) = match_keyword(&STEP_PATTERNS, trimmed)
        .or_else(|| match_keyword(&CONTAINER_PATTERNS, trimmed))
        .unwrap_or_else(|| classify_other(raw, trimmed));
    Some(ClassifiedLine::new(kind, payload, line_number, raw))
}

fn match_keyword(patterns: &[KeywordPattern], trimmed: &str) -> Option<(LineKind, String)> {
    patterns.iter().find_map(|pattern| {
        pattern
            .capture(trimmed)
            .map(|payload| (pattern.kind, payload.to_string()))
    })
}

fn classify_other(raw: &str, trimmed: &str) -> (LineKind, String) {
    if let Some(rest) = trimmed.strip_prefix('#') {
        let text = rest.strip_prefix(' ').unwrap_or(rest);
        return (LineKind::Comment, text.trim_end().to_string());
    }
    if trimmed.starts_with('|') {
        return (LineKind::DataTable, trimmed.to_string());
    }
    match DocStringMarker::detect(trimmed) {
        Some(marker) => {
            let content_type = trimmed
                .strip_prefix(marker.as_str())
                .unwrap_or_default()
                .trim();
            (LineKind::DocString(marker), content_type.to_string())
        }
        None => (LineKind::Description, raw.to_string()),
    }
}

/// Classify every line of a file, numbering them from 1 and dropping blanks.
///
/// # Examples
///
/// ```
/// use reqtrace_gherkin::{LineKind, classify};
///
/// let lines = classify(["Feature: Login", "", "  Scenario: ok"]);
/// let kinds: Vec<_> = lines.iter().map(|l| (l.kind(), l.line_number())).collect();
/// assert_eq!(kinds, vec![(LineKind::Feature, 1), (LineKind::Scenario, 3)]);
/// ```
pub fn classify<I, S>(raw_lines: I) -> Vec<ClassifiedLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| classify_line(raw.as_ref(), index + 1))
        .collect()
}

/// Classify the lines of an in-memory document.
#[must_use]
pub fn classify_text(text: &str) -> Vec<ClassifiedLine> {
    classify(text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify_one(raw: &str) -> ClassifiedLine {
        classify_line(raw, 1).unwrap_or_else(|| panic!("`{raw}` should not be blank"))
    }

    #[rstest]
    #[case("And more", LineKind::And, "more")]
    #[case("But not that", LineKind::But, "not that")]
    #[case("  Given a user  ", LineKind::Given, "a user")]
    #[case("* anything", LineKind::Star, "anything")]
    #[case("Then\taccess is granted", LineKind::Then, "access is granted")]
    #[case("When they submit", LineKind::When, "they submit")]
    fn classifies_steps(#[case] raw: &str, #[case] kind: LineKind, #[case] payload: &str) {
        let line = classify_one(raw);
        assert_eq!(line.kind(), kind);
        assert_eq!(line.payload(), payload);
    }

    #[rstest]
    #[case("Feature: Login", LineKind::Feature, "Login")]
    #[case("Background:", LineKind::Background, "")]
    #[case("Example: one", LineKind::Example, "one")]
    #[case("Examples:", LineKind::Examples, "")]
    #[case("Rule : business rule", LineKind::Rule, "business rule")]
    #[case("Scenario:   Valid login", LineKind::Scenario, "Valid login")]
    #[case("Scenarios: set", LineKind::Scenarios, "set")]
    #[case("Scenario Outline: eat", LineKind::ScenarioOutline, "eat")]
    #[case("Scenario Template: eat", LineKind::ScenarioTemplate, "eat")]
    fn classifies_containers(#[case] raw: &str, #[case] kind: LineKind, #[case] payload: &str) {
        let line = classify_one(raw);
        assert_eq!(line.kind(), kind);
        assert_eq!(line.payload(), payload);
    }

    #[rstest]
    #[case("# note", LineKind::Comment, "note")]
    #[case("#   indented  ", LineKind::Comment, "  indented")]
    #[case("#", LineKind::Comment, "")]
    #[case("  | a | b |  ", LineKind::DataTable, "| a | b |")]
    #[case("\"\"\"", LineKind::DocString(DocStringMarker::Quotes), "")]
    #[case("```json", LineKind::DocString(DocStringMarker::Backticks), "json")]
    #[case("   free text", LineKind::Description, "   free text")]
    fn classifies_other_kinds(#[case] raw: &str, #[case] kind: LineKind, #[case] payload: &str) {
        let line = classify_one(raw);
        assert_eq!(line.kind(), kind);
        assert_eq!(line.payload(), payload);
    }

    #[rstest]
    #[case("Given")]
    #[case("Givenx something")]
    #[case("given lowercase keyword")]
    #[case("Feature without colon")]
    #[case("*bold*")]
    fn near_misses_fall_back_to_description(#[case] raw: &str) {
        assert_eq!(classify_one(raw).kind(), LineKind::Description);
    }

    #[test]
    fn steps_take_precedence_over_containers() {
        assert_eq!(classify_one("Given Feature: x").kind(), LineKind::Given);
        assert_eq!(classify_one("* Scenario: x").kind(), LineKind::Star);
    }

    #[test]
    fn keeps_raw_text_and_numbers() {
        let lines = classify_text("Feature: F\n\n\n    Given x\r\n");
        let numbers: Vec<_> = lines.iter().map(ClassifiedLine::line_number).collect();
        assert_eq!(numbers, vec![1, 4]);
        assert_eq!(lines.get(1).map(ClassifiedLine::raw), Some("    Given x"));
    }

    #[test]
    fn classification_is_idempotent() {
        let first = classify_one("  Then it works");
        let second = classify_one("  Then it works");
        assert_eq!(first, second);
    }
}
