//! Indented debug rendering of the document tree.
//!
//! Every element writes its header line, then its comments, descriptions and
//! children one level deeper. Indentation is two spaces per level. Re-parsing
//! the output yields a tree that renders to the same text.

use crate::line::LineKind;
use crate::model::{
    Background, Comment, DataTable, Description, DocString, Element, Examples, Feature,
    FeatureChild, FeatureFile, Rule, Scenario, ScenarioOutline, Step, StepArgument,
};

const INDENT: &str = "  ";

/// Accumulates rendered lines at the current nesting depth.
#[derive(Debug, Default)]
pub struct Renderer {
    output: String,
    depth: usize,
}

impl Renderer {
    /// Create an empty renderer at depth zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the renderer, returning the text written so far.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }

    /// Write one line verbatim at the current depth.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Write `prefix` followed by `text`, trailing whitespace removed.
    pub fn keyword_line(&mut self, kind: LineKind, text: &str) {
        let mut line = String::with_capacity(kind.prefix().len() + text.len());
        line.push_str(kind.prefix());
        line.push_str(text);
        self.line(line.trim_end());
    }

    /// Run `body` one level deeper.
    pub fn nested(&mut self, body: impl FnOnce(&mut Self)) {
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }

    fn all<T: Render>(&mut self, elements: &[T]) {
        for element in elements {
            element.render_to(self);
        }
    }

    fn container(
        &mut self,
        kind: LineKind,
        title: &str,
        element: &impl Element,
        descriptions: &[Description],
        children: impl FnOnce(&mut Self),
    ) {
        self.keyword_line(kind, title);
        self.nested(|r| {
            r.all(element.comments());
            r.all(descriptions);
            children(r);
        });
    }
}

/// An element that can write itself to a [`Renderer`].
pub trait Render {
    /// Write the element and its children.
    fn render_to(&self, renderer: &mut Renderer);
}

/// Render an element and its children to text.
///
/// # Examples
///
/// ```
/// use reqtrace_gherkin::{parse_str, render};
///
/// let doc = parse_str("Feature: Login\nScenario: ok\nGiven a user   \n").unwrap();
/// assert_eq!(render(&doc), "Feature: Login\n  Scenario: ok\n    Given a user\n");
/// ```
#[must_use]
pub fn render<T: Render + ?Sized>(element: &T) -> String {
    let mut renderer = Renderer::new();
    element.render_to(&mut renderer);
    renderer.finish()
}

impl Render for Comment {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.keyword_line(LineKind::Comment, self.text());
    }
}

impl Render for Description {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.line(self.text());
    }
}

impl Render for FeatureFile {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.all(self.comments());
        self.feature().render_to(renderer);
    }
}

impl Render for Feature {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.container(LineKind::Feature, self.title(), self, self.descriptions(), |r| {
            if let Some(background) = self.background() {
                background.render_to(r);
            }
            r.all(self.children());
        });
    }
}

impl Render for FeatureChild {
    fn render_to(&self, renderer: &mut Renderer) {
        match self {
            Self::Scenario(scenario) => scenario.render_to(renderer),
            Self::Rule(rule) => rule.render_to(renderer),
            Self::Outline(outline) => outline.render_to(renderer),
        }
    }
}

impl Render for Background {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.container(
            LineKind::Background,
            self.title(),
            self,
            self.descriptions(),
            |r| r.all(self.steps()),
        );
    }
}

impl Render for Scenario {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.container(
            self.keyword().line_kind(),
            self.title(),
            self,
            self.descriptions(),
            |r| r.all(self.steps()),
        );
    }
}

impl Render for Rule {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.container(LineKind::Rule, self.title(), self, self.descriptions(), |r| {
            r.all(self.children());
        });
    }
}

impl Render for ScenarioOutline {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.container(
            self.keyword().line_kind(),
            self.title(),
            self,
            self.descriptions(),
            |r| {
                r.all(self.steps());
                if let Some(examples) = self.examples() {
                    examples.render_to(r);
                }
            },
        );
    }
}

impl Render for Examples {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.container(
            self.keyword().line_kind(),
            self.title(),
            self,
            self.descriptions(),
            |r| {
                if let Some(table) = self.table() {
                    table.render_to(r);
                }
            },
        );
    }
}

impl Render for Step {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.keyword_line(self.keyword().line_kind(), self.text());
        renderer.nested(|r| {
            r.all(self.comments());
            if let Some(argument) = self.argument() {
                argument.render_to(r);
            }
        });
    }
}

impl Render for StepArgument {
    fn render_to(&self, renderer: &mut Renderer) {
        match self {
            Self::DataTable(table) => table.render_to(renderer),
            Self::DocString(doc) => doc.render_to(renderer),
        }
    }
}

impl Render for DataTable {
    fn render_to(&self, renderer: &mut Renderer) {
        for row in self.rows() {
            renderer.line(row);
        }
        renderer.all(self.comments());
    }
}

impl Render for DocString {
    fn render_to(&self, renderer: &mut Renderer) {
        renderer.keyword_line(
            LineKind::DocString(self.marker()),
            self.content_type().unwrap_or_default(),
        );
        for line in self.lines() {
            renderer.line(line);
        }
        renderer.line(self.closing_marker().as_str());
    }
}
