//! Flat step and scenario listings built from parsed feature files.

use reqtrace_gherkin::{
    Element, ExpandedScenario, Feature, FeatureChild, LineKind, PlaceholderError, Scenario,
    ScenarioOutline, Step, StepKeyword,
};
use serde::Serialize;

/// One step of a feature file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Feature file path as given on the command line.
    pub feature: String,
    /// 1-based source line.
    pub line: usize,
    /// Keyword as written.
    pub keyword: &'static str,
    /// `Given`, `When` or `Then` after resolving conjunctions.
    pub resolved_keyword: &'static str,
    /// Step text.
    pub text: String,
    /// `<name>` placeholders in the text.
    pub parameters: Vec<String>,
}

/// One scenario of a feature file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Feature file path as given on the command line.
    pub feature: String,
    /// Line of the header, or of the Examples row for expanded outlines.
    pub line: usize,
    /// Header keyword, such as `Scenario` or `Scenario Outline`.
    pub keyword: &'static str,
    /// Scenario title.
    pub name: String,
    /// Title of the enclosing Rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Number of steps.
    pub steps: usize,
    /// Examples row index of an expanded outline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_row: Option<usize>,
}

/// List every step of `feature`, Background first.
///
/// Conjunctions resolve against the previous primary keyword of the same
/// Background or scenario.
#[must_use]
pub fn step_reports(path: &str, feature: &Feature) -> Vec<StepReport> {
    let mut reports = Vec::new();
    if let Some(background) = feature.background() {
        push_steps(&mut reports, path, background.steps());
    }
    for child in feature.children() {
        match child {
            FeatureChild::Scenario(scenario) => push_steps(&mut reports, path, scenario.steps()),
            FeatureChild::Rule(rule) => {
                for scenario in rule.children() {
                    push_steps(&mut reports, path, scenario.steps());
                }
            }
            FeatureChild::Outline(outline) => push_steps(&mut reports, path, outline.steps()),
        }
    }
    reports
}

fn push_steps(reports: &mut Vec<StepReport>, path: &str, steps: &[Step]) {
    let mut previous = None;
    reports.extend(steps.iter().map(|step| StepReport {
        feature: path.to_string(),
        line: step.line_number(),
        keyword: step.keyword().as_str(),
        resolved_keyword: step.keyword().resolve(&mut previous).as_str(),
        text: step.text().to_string(),
        parameters: step.parameters().to_vec(),
    }));
}

/// List the scenarios of `feature` in source order.
///
/// With `expand`, each outline is replaced by one entry per Examples row.
///
/// # Errors
///
/// Returns the placeholder error of the first outline that cannot be
/// expanded.
pub fn scenario_reports(
    path: &str,
    feature: &Feature,
    expand: bool,
) -> Result<Vec<ScenarioReport>, PlaceholderError> {
    let mut reports = Vec::new();
    for child in feature.children() {
        match child {
            FeatureChild::Scenario(scenario) => reports.push(scenario_entry(path, scenario, None)),
            FeatureChild::Rule(rule) => reports.extend(
                rule.children()
                    .iter()
                    .map(|scenario| scenario_entry(path, scenario, Some(rule.title()))),
            ),
            FeatureChild::Outline(outline) if expand => {
                reports.extend(
                    outline
                        .expand()?
                        .iter()
                        .map(|expanded| expanded_entry(path, outline, expanded)),
                );
            }
            FeatureChild::Outline(outline) => reports.push(outline_entry(path, outline)),
        }
    }
    Ok(reports)
}

fn scenario_entry(path: &str, scenario: &Scenario, rule: Option<&str>) -> ScenarioReport {
    ScenarioReport {
        feature: path.to_string(),
        line: scenario.line_number(),
        keyword: scenario.keyword().line_kind().keyword(),
        name: scenario.title().to_string(),
        rule: rule.map(ToString::to_string),
        steps: scenario.steps().len(),
        example_row: None,
    }
}

fn outline_entry(path: &str, outline: &ScenarioOutline) -> ScenarioReport {
    ScenarioReport {
        feature: path.to_string(),
        line: outline.line_number(),
        keyword: outline.keyword().line_kind().keyword(),
        name: outline.title().to_string(),
        rule: None,
        steps: outline.steps().len(),
        example_row: None,
    }
}

fn expanded_entry(
    path: &str,
    outline: &ScenarioOutline,
    expanded: &ExpandedScenario,
) -> ScenarioReport {
    ScenarioReport {
        line: expanded.row_line(),
        name: expanded.name().to_string(),
        example_row: Some(expanded.row_index()),
        ..outline_entry(path, outline)
    }
}

/// Keyword column used by the text listing for a resolved step.
#[must_use]
pub fn describe_keyword(report: &StepReport) -> String {
    let conjunction = report
        .keyword
        .parse::<StepKeyword>()
        .is_ok_and(StepKeyword::is_conjunction);
    if conjunction {
        format!("{} ({})", report.keyword, report.resolved_keyword)
    } else {
        report.keyword.to_string()
    }
}

/// Scenario header text, such as `Scenario Outline: eat 5`.
#[must_use]
pub fn describe_scenario(report: &ScenarioReport) -> String {
    let mut text = String::new();
    if let Some(rule) = &report.rule {
        text.push_str(LineKind::Rule.prefix());
        text.push_str(rule);
        text.push_str(" / ");
    }
    text.push_str(report.keyword);
    text.push_str(": ");
    text.push_str(&report.name);
    if let Some(row) = report.example_row {
        text.push_str(&format!(" [example {}]", row + 1));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqtrace_gherkin::parse_str;
    use rstest::{fixture, rstest};

    #[fixture]
    fn feature() -> Feature {
        parse_str(
            "Feature: Shop\n\
             Background:\n\
             Given a catalogue\n\
             * a price list\n\
             Scenario: browse\n\
             When the user searches\n\
             And filters\n\
             Rule: returns\n\
             Example: refund\n\
             Then money comes back\n\
             Scenario Outline: buy <count>\n\
             Given <count> items\n\
             Examples:\n\
             | count |\n\
             | 1     |\n\
             | 3     |\n",
        )
        .unwrap_or_else(|err| panic!("{err}"))
        .feature()
        .clone()
    }

    #[rstest]
    fn steps_resolve_within_their_container(feature: Feature) {
        let reports = step_reports("shop.feature", &feature);
        let summary: Vec<_> = reports
            .iter()
            .map(|r| (r.line, r.keyword, r.resolved_keyword))
            .collect();
        assert_eq!(
            summary,
            [
                (3, "Given", "Given"),
                (4, "*", "Given"),
                (6, "When", "When"),
                (7, "And", "When"),
                (10, "Then", "Then"),
                (12, "Given", "Given"),
            ]
        );
        let last = reports.last().unwrap_or_else(|| panic!("no steps"));
        assert_eq!(last.parameters, ["count"]);
        let conjunction = reports.get(3).unwrap_or_else(|| panic!("no fourth step"));
        assert_eq!(describe_keyword(conjunction), "And (When)");
    }

    #[rstest]
    fn lists_scenarios_with_rules_and_outlines(feature: Feature) {
        let reports =
            scenario_reports("shop.feature", &feature, false).unwrap_or_else(|err| panic!("{err}"));
        let names: Vec<_> = reports.iter().map(describe_scenario).collect();
        assert_eq!(
            names,
            [
                "Scenario: browse",
                "Rule: returns / Example: refund",
                "Scenario Outline: buy <count>",
            ]
        );
    }

    #[rstest]
    fn expands_outline_rows(feature: Feature) {
        let reports =
            scenario_reports("shop.feature", &feature, true).unwrap_or_else(|err| panic!("{err}"));
        let rows: Vec<_> = reports
            .iter()
            .filter(|r| r.example_row.is_some())
            .map(|r| (r.line, describe_scenario(r)))
            .collect();
        assert_eq!(
            rows,
            [
                (15, "Scenario Outline: buy 1 [example 1]".to_string()),
                (16, "Scenario Outline: buy 3 [example 2]".to_string()),
            ]
        );
    }

    #[test]
    fn serialises_optional_fields_only_when_present() {
        let report = ScenarioReport {
            feature: "f.feature".into(),
            line: 2,
            keyword: "Scenario",
            name: "s".into(),
            rule: None,
            steps: 0,
            example_row: None,
        };
        let value = serde_json::to_value(&report).unwrap_or_else(|err| panic!("{err}"));
        assert!(value.get("rule").is_none());
        assert_eq!(value.get("line"), Some(&serde_json::Value::from(2_u64)));
    }
}
