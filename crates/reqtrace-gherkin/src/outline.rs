//! Expansion of Scenario Outlines into one concrete scenario per Examples row.

use tracing::debug;

use crate::model::{Element, ScenarioOutline, Step};
use crate::placeholder::{PlaceholderError, substitute_placeholders};

/// A Scenario Outline instantiated with one Examples row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedScenario {
    name: String,
    steps: Vec<Step>,
    row_index: usize,
    row_line: usize,
}

impl ExpandedScenario {
    /// Outline title with placeholders substituted.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Steps with placeholders substituted; arguments are kept unchanged.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Zero-based index of the data row, header excluded.
    #[must_use]
    pub const fn row_index(&self) -> usize {
        self.row_index
    }

    /// Source line of the data row.
    #[must_use]
    pub const fn row_line(&self) -> usize {
        self.row_line
    }
}

impl ScenarioOutline {
    /// Instantiate the outline once per data row of its Examples table.
    ///
    /// An Examples block without a table, or with only a header row, yields
    /// no scenarios.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceholderError::RowWidth`] when a row does not have one
    /// cell per header column, and [`PlaceholderError::UnknownColumn`] when
    /// the title or a step names a column the table does not have.
    ///
    /// # Examples
    ///
    /// ```
    /// use reqtrace_gherkin::{FeatureChild, parse_str};
    ///
    /// let doc = parse_str(
    ///     "Feature: F\nScenario Outline: eat <n>\nGiven <n> cucumbers\nExamples:\n| n |\n| 5 |\n| 7 |",
    /// )
    /// .unwrap();
    /// let Some(FeatureChild::Outline(outline)) = doc.feature().children().first() else {
    ///     panic!("expected an outline");
    /// };
    /// let expanded = outline.expand().unwrap();
    /// let names: Vec<_> = expanded.iter().map(|s| s.name()).collect();
    /// assert_eq!(names, ["eat 5", "eat 7"]);
    /// assert_eq!(expanded[1].steps()[0].text(), "7 cucumbers");
    /// assert_eq!(expanded[1].row_line(), 7);
    /// ```
    pub fn expand(&self) -> Result<Vec<ExpandedScenario>, PlaceholderError> {
        let Some(table) = self.examples().and_then(|examples| examples.table()) else {
            return Ok(Vec::new());
        };
        let cells = table.cells();
        let mut rows = cells.iter().zip(table.row_lines().iter().copied());
        let Some((headers, _)) = rows.next() else {
            return Ok(Vec::new());
        };
        let expanded = rows
            .enumerate()
            .map(|(row_index, (row, row_line))| {
                if row.len() != headers.len() {
                    return Err(PlaceholderError::RowWidth {
                        line: row_line,
                        expected: headers.len(),
                        found: row.len(),
                    });
                }
                let name = substitute_placeholders(self.title(), headers, row, self.line_number())?;
                let steps = self
                    .steps()
                    .iter()
                    .map(|step| {
                        substitute_placeholders(step.text(), headers, row, step.line_number())
                            .map(|text| step.with_text(text))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(ExpandedScenario {
                    name,
                    steps,
                    row_index,
                    row_line,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(
            line = self.line_number(),
            rows = expanded.len(),
            "expanded scenario outline"
        );
        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{FeatureChild, ScenarioOutline};
    use crate::parse_str;
    use crate::placeholder::PlaceholderError;
    use rstest::{fixture, rstest};

    fn outline_from(text: &str) -> ScenarioOutline {
        let doc = parse_str(text).unwrap_or_else(|err| panic!("{err}"));
        match doc.feature().children().first() {
            Some(FeatureChild::Outline(outline)) => outline.clone(),
            other => panic!("expected an outline, found {other:?}"),
        }
    }

    #[fixture]
    fn login_outline() -> ScenarioOutline {
        outline_from(
            "Feature: Login\n\
             Scenario Template: <user> signs in\n\
             Given the user <user>\n\
             When they enter <password>\n\
             Then they see <page>\n\
             Scenarios:\n\
             | user  | password | page      |\n\
             # admins first\n\
             | admin | s3cret   | dashboard |\n\
             | guest | guest    | welcome   |\n",
        )
    }

    #[rstest]
    fn expands_each_data_row(login_outline: ScenarioOutline) {
        let expanded = login_outline.expand().unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(expanded.len(), 2);
        let first = expanded.first().unwrap_or_else(|| panic!("missing first row"));
        assert_eq!(first.name(), "admin signs in");
        assert_eq!(first.row_index(), 0);
        assert_eq!(first.row_line(), 9);
        let texts: Vec<_> = first.steps().iter().map(|step| step.text()).collect();
        assert_eq!(texts, ["the user admin", "they enter s3cret", "they see dashboard"]);
        assert!(first.steps().iter().all(|step| step.parameters().is_empty()));
    }

    #[test]
    fn reports_short_rows() {
        let outline = outline_from("Feature: F\nScenario Outline: O\nGiven <a>\nExamples:\n| a | b |\n| 1 |\n");
        assert_eq!(
            outline.expand(),
            Err(PlaceholderError::RowWidth {
                line: 6,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn reports_unknown_columns() {
        let outline = outline_from("Feature: F\nScenario Outline: O\nGiven <b>\nExamples:\n| a |\n| 1 |\n");
        assert!(matches!(
            outline.expand(),
            Err(PlaceholderError::UnknownColumn { line: 3, .. })
        ));
    }

    #[test]
    fn examples_without_rows_expand_to_nothing() {
        let outline = outline_from("Feature: F\nScenario Outline: O\nGiven <a>\nExamples:\n| a |\n");
        assert_eq!(outline.expand(), Ok(Vec::new()));
    }
}
