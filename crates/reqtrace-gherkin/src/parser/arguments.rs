//! Extraction of steps and the data blocks attached to them.

use tracing::trace;

use super::{Cursor, comment_from, expect_header};
use crate::errors::GherkinError;
use crate::line::{ClassifiedLine, DocStringMarker, LineKind};
use crate::model::{DataTable, DocString, Element, Step, StepArgument, StepKeyword};

impl<'a> Cursor<'a> {
    /// Extract a step with its comments and optional argument.
    pub(super) fn extract_step(&mut self, header: &'a ClassifiedLine) -> Result<Step, GherkinError> {
        let keyword = expect_header(header, "a step", StepKeyword::from_line_kind)?;
        let mut step = Step::new(keyword, header.line_number(), header.payload());
        while let Some(line) = self.peek() {
            let argument = match line.kind() {
                LineKind::Comment => {
                    self.advance();
                    step.push_comment(comment_from(line));
                    continue;
                }
                LineKind::DataTable | LineKind::DocString(_) => {
                    if step.argument().is_some() {
                        return Err(GherkinError::DuplicateStepArgument {
                            line: line.line_number(),
                            found: line.kind(),
                            step_line: header.line_number(),
                        });
                    }
                    self.advance();
                    self.extract_argument(line)?
                }
                _ => break,
            };
            step.set_argument(argument);
        }
        trace!(
            line = step.line_number(),
            keyword = %step.keyword(),
            text = step.text(),
            "extracted step"
        );
        Ok(step)
    }

    fn extract_argument(&mut self, opener: &'a ClassifiedLine) -> Result<StepArgument, GherkinError> {
        match opener.kind() {
            LineKind::DocString(marker) => self
                .extract_doc_string(opener, marker)
                .map(StepArgument::DocString),
            _ => self.extract_data_table(opener).map(StepArgument::DataTable),
        }
    }

    /// Collect consecutive table rows, comments included, into one table.
    pub(super) fn extract_data_table(
        &mut self,
        first_row: &'a ClassifiedLine,
    ) -> Result<DataTable, GherkinError> {
        expect_header(first_row, "DataTable", |kind| {
            (kind == LineKind::DataTable).then_some(())
        })?;
        let mut table = DataTable::new(first_row.line_number());
        table.push_row(first_row.line_number(), first_row.payload());
        while let Some(line) =
            self.next_if_kind(|kind| matches!(kind, LineKind::DataTable | LineKind::Comment))
        {
            if line.kind() == LineKind::Comment {
                table.push_comment(comment_from(line));
            } else {
                table.push_row(line.line_number(), line.payload());
            }
        }
        Ok(table)
    }

    /// Collect every line up to the next DocString delimiter, whatever its
    /// kind, with the opening delimiter's indentation removed.
    fn extract_doc_string(
        &mut self,
        opener: &'a ClassifiedLine,
        marker: DocStringMarker,
    ) -> Result<DocString, GherkinError> {
        let content_type = Some(opener.payload())
            .filter(|payload| !payload.is_empty())
            .map(ToString::to_string);
        let mut doc = DocString::new(opener.line_number(), marker, content_type);
        let width = opener.indentation();
        loop {
            let Some(line) = self.advance() else {
                return Err(GherkinError::UnterminatedDocString {
                    line: opener.line_number(),
                });
            };
            if let LineKind::DocString(closing) = line.kind() {
                doc.close_with(closing);
                return Ok(doc);
            }
            doc.push_line(strip_indentation(line.raw(), width));
        }
    }
}

/// Remove up to `width` leading whitespace characters.
fn strip_indentation(raw: &str, width: usize) -> &str {
    let mut rest = raw;
    for _ in 0..width {
        let mut chars = rest.chars();
        match chars.next() {
            Some(ch) if ch.is_whitespace() => rest = chars.as_str(),
            _ => break,
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::strip_indentation;
    use rstest::rstest;

    #[rstest]
    #[case("      body", 4, "  body")]
    #[case("  body", 4, "body")]
    #[case("body", 4, "body")]
    #[case("\t  x", 2, " x")]
    fn strips_up_to_width(#[case] raw: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(strip_indentation(raw, width), expected);
    }
}
