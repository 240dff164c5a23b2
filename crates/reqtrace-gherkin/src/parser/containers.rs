//! Extraction of header-introduced elements.

use tracing::debug;

use super::{Cursor, closes_block, comment_from, description_from, expect_header};
use crate::errors::GherkinError;
use crate::line::{ClassifiedLine, LineKind};
use crate::model::{
    Background, Element, Examples, ExamplesKeyword, Feature, FeatureChild, OutlineKeyword, Rule,
    Scenario, ScenarioKeyword, ScenarioOutline,
};

impl<'a> Cursor<'a> {
    pub(super) fn extract_feature(
        &mut self,
        header: &'a ClassifiedLine,
    ) -> Result<Feature, GherkinError> {
        expect_header(header, "Feature", |kind| {
            (kind == LineKind::Feature).then_some(())
        })?;
        let mut feature = Feature::new(header.line_number(), header.payload());
        while let Some(line) = self.advance() {
            match line.kind() {
                LineKind::Description => {
                    feature.push_description(description_from(line));
                }
                LineKind::Comment => feature.push_comment(comment_from(line)),
                LineKind::Background => {
                    if let Some(first) = feature.background() {
                        return Err(GherkinError::DuplicateBackground {
                            line: line.line_number(),
                            first: first.line_number(),
                        });
                    }
                    let background = self.extract_background(line)?;
                    feature.set_background(background);
                }
                LineKind::Scenario => {
                    let scenario = self.extract_scenario(line)?;
                    feature.push_child(FeatureChild::Scenario(scenario));
                }
                LineKind::Rule => {
                    let rule = self.extract_rule(line)?;
                    feature.push_child(FeatureChild::Rule(rule));
                }
                LineKind::ScenarioOutline | LineKind::ScenarioTemplate => {
                    let outline = self.extract_outline(line)?;
                    feature.push_child(FeatureChild::Outline(outline));
                }
                found => {
                    return Err(GherkinError::UnexpectedLine {
                        line: line.line_number(),
                        found,
                        parent: LineKind::Feature,
                    });
                }
            }
        }
        Ok(feature)
    }

    pub(super) fn extract_background(
        &mut self,
        header: &'a ClassifiedLine,
    ) -> Result<Background, GherkinError> {
        expect_header(header, "Background", |kind| {
            (kind == LineKind::Background).then_some(())
        })?;
        let mut background = Background::new(header.line_number(), header.payload());
        while let Some(line) = self.peek() {
            match line.kind() {
                LineKind::Description => background.push_description(description_from(line)),
                LineKind::Comment => background.push_comment(comment_from(line)),
                LineKind::Given | LineKind::And | LineKind::But | LineKind::Star => {
                    self.advance();
                    background.push_step(self.extract_step(line)?);
                    continue;
                }
                kind if closes_block(kind) => break,
                found => {
                    return Err(GherkinError::UnexpectedLine {
                        line: line.line_number(),
                        found,
                        parent: LineKind::Background,
                    });
                }
            }
            self.advance();
        }
        if background.steps().is_empty() {
            return Err(GherkinError::EmptyBackground {
                line: header.line_number(),
            });
        }
        debug!(
            line = header.line_number(),
            steps = background.steps().len(),
            "extracted background"
        );
        Ok(background)
    }

    pub(super) fn extract_scenario(
        &mut self,
        header: &'a ClassifiedLine,
    ) -> Result<Scenario, GherkinError> {
        let keyword =
            expect_header(header, "Scenario or Example", ScenarioKeyword::from_line_kind)?;
        let mut scenario = Scenario::new(keyword, header.line_number(), header.payload());
        while let Some(line) = self.peek() {
            match line.kind() {
                LineKind::Description => scenario.push_description(description_from(line)),
                LineKind::Comment => scenario.push_comment(comment_from(line)),
                kind if kind.is_step() => {
                    self.advance();
                    scenario.push_step(self.extract_step(line)?);
                    continue;
                }
                kind if closes_block(kind) => break,
                found => {
                    return Err(GherkinError::UnexpectedLine {
                        line: line.line_number(),
                        found,
                        parent: header.kind(),
                    });
                }
            }
            self.advance();
        }
        debug!(
            line = header.line_number(),
            title = scenario.title(),
            steps = scenario.steps().len(),
            "extracted scenario"
        );
        Ok(scenario)
    }

    pub(super) fn extract_rule(&mut self, header: &'a ClassifiedLine) -> Result<Rule, GherkinError> {
        expect_header(header, "Rule", |kind| (kind == LineKind::Rule).then_some(()))?;
        let mut rule = Rule::new(header.line_number(), header.payload());
        while let Some(line) = self.peek() {
            match line.kind() {
                LineKind::Description => rule.push_description(description_from(line)),
                LineKind::Comment => rule.push_comment(comment_from(line)),
                LineKind::Scenario | LineKind::Example => {
                    self.advance();
                    rule.push_child(self.extract_scenario(line)?);
                    continue;
                }
                kind if closes_block(kind) => break,
                found => {
                    return Err(GherkinError::UnexpectedLine {
                        line: line.line_number(),
                        found,
                        parent: LineKind::Rule,
                    });
                }
            }
            self.advance();
        }
        debug!(
            line = header.line_number(),
            scenarios = rule.children().len(),
            "extracted rule"
        );
        Ok(rule)
    }

    pub(super) fn extract_outline(
        &mut self,
        header: &'a ClassifiedLine,
    ) -> Result<ScenarioOutline, GherkinError> {
        let keyword = expect_header(
            header,
            "Scenario Outline or Scenario Template",
            OutlineKeyword::from_line_kind,
        )?;
        let mut outline = ScenarioOutline::new(keyword, header.line_number(), header.payload());
        while let Some(line) = self.peek() {
            match line.kind() {
                LineKind::Description => outline.push_description(description_from(line)),
                LineKind::Comment => outline.push_comment(comment_from(line)),
                kind if kind.is_step() => {
                    self.advance();
                    outline.push_step(self.extract_step(line)?);
                    continue;
                }
                LineKind::Examples | LineKind::Scenarios => {
                    if outline.examples().is_some() {
                        return Err(GherkinError::DuplicateExamples {
                            line: line.line_number(),
                            found: line.kind(),
                            outline: header.kind(),
                            outline_line: header.line_number(),
                        });
                    }
                    self.advance();
                    outline.set_examples(self.extract_examples(line)?);
                    continue;
                }
                kind if closes_block(kind) => break,
                found => {
                    return Err(GherkinError::UnexpectedLine {
                        line: line.line_number(),
                        found,
                        parent: header.kind(),
                    });
                }
            }
            self.advance();
        }
        if outline.examples().is_none() {
            return Err(GherkinError::MissingExamples {
                line: header.line_number(),
                outline: header.kind(),
            });
        }
        debug!(
            line = header.line_number(),
            title = outline.title(),
            steps = outline.steps().len(),
            "extracted scenario outline"
        );
        Ok(outline)
    }

    pub(super) fn extract_examples(
        &mut self,
        header: &'a ClassifiedLine,
    ) -> Result<Examples, GherkinError> {
        let keyword =
            expect_header(header, "Examples or Scenarios", ExamplesKeyword::from_line_kind)?;
        let mut examples = Examples::new(keyword, header.line_number(), header.payload());
        while let Some(line) = self.peek() {
            match line.kind() {
                LineKind::Description => examples.push_description(description_from(line)),
                LineKind::Comment => examples.push_comment(comment_from(line)),
                LineKind::DataTable => {
                    if examples.table().is_some() {
                        return Err(GherkinError::DuplicateDataTable {
                            line: line.line_number(),
                            owner: header.kind(),
                            owner_line: header.line_number(),
                        });
                    }
                    self.advance();
                    examples.set_table(self.extract_data_table(line)?);
                    continue;
                }
                LineKind::Examples | LineKind::Scenarios => break,
                kind if closes_block(kind) => break,
                found => {
                    return Err(GherkinError::UnexpectedLine {
                        line: line.line_number(),
                        found,
                        parent: header.kind(),
                    });
                }
            }
            self.advance();
        }
        Ok(examples)
    }
}
