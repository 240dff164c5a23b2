//! Header-introduced elements: Feature, Background, Rule, Scenario, Scenario
//! Outline and Examples.

use super::{Comment, DataTable, Description, Element, ElementCategory, Step};
use crate::line::LineKind;

/// Header line, description lines and comments shared by every container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    line_number: usize,
    title: String,
    descriptions: Vec<Description>,
    comments: Vec<Comment>,
}

impl Header {
    fn new(line_number: usize, title: impl Into<String>) -> Self {
        Self {
            line_number,
            title: title.into(),
            descriptions: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// Builder and accessor methods every container gets through its `header`.
macro_rules! container_header {
    ($ty:ty) => {
        impl $ty {
            pub(crate) fn push_description(&mut self, description: Description) {
                self.header.descriptions.push(description);
            }

            pub(crate) fn push_comment(&mut self, comment: Comment) {
                self.header.comments.push(comment);
            }

            /// Text following the header keyword.
            #[must_use]
            pub fn title(&self) -> &str {
                &self.header.title
            }

            /// Additional description lines in source order.
            #[must_use]
            pub fn descriptions(&self) -> &[Description] {
                &self.header.descriptions
            }
        }

        impl Element for $ty {
            fn line_number(&self) -> usize {
                self.header.line_number
            }

            fn category(&self) -> ElementCategory {
                ElementCategory::Container
            }

            fn comments(&self) -> &[Comment] {
                &self.header.comments
            }
        }
    };
}

/// A parsed feature file: leading comments plus its mandatory Feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFile {
    comments: Vec<Comment>,
    feature: Feature,
}

impl FeatureFile {
    pub(crate) fn new(comments: Vec<Comment>, feature: Feature) -> Self {
        Self { comments, feature }
    }

    /// Comments preceding the `Feature:` line.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// The root Feature.
    #[must_use]
    pub const fn feature(&self) -> &Feature {
        &self.feature
    }
}

/// Root grammar element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    header: Header,
    background: Option<Background>,
    children: Vec<FeatureChild>,
}

container_header!(Feature);

impl Feature {
    pub(crate) fn new(line_number: usize, title: impl Into<String>) -> Self {
        Self {
            header: Header::new(line_number, title),
            background: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn set_background(&mut self, background: Background) {
        debug_assert!(self.background.is_none(), "Background already set");
        self.background = Some(background);
    }

    pub(crate) fn push_child(&mut self, child: FeatureChild) {
        self.children.push(child);
    }

    /// The optional Background.
    #[must_use]
    pub const fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Scenarios, Rules and Scenario Outlines in source order.
    #[must_use]
    pub fn children(&self) -> &[FeatureChild] {
        &self.children
    }

    /// Every step of the Feature in source order, Background first.
    pub fn steps(&self) -> impl Iterator<Item = &Step> + '_ {
        self.background
            .iter()
            .flat_map(|background| background.steps().iter())
            .chain(self.children.iter().flat_map(FeatureChild::steps))
    }
}

/// Element allowed directly under a Feature besides its Background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureChild {
    /// A `Scenario:`.
    Scenario(Scenario),
    /// A `Rule:` grouping scenarios.
    Rule(Rule),
    /// A `Scenario Outline:` or `Scenario Template:`.
    Outline(ScenarioOutline),
}

impl FeatureChild {
    /// First line of the child.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Scenario(scenario) => scenario.line_number(),
            Self::Rule(rule) => rule.line_number(),
            Self::Outline(outline) => outline.line_number(),
        }
    }

    /// Steps owned by the child, nested Rule scenarios included.
    pub fn steps(&self) -> Box<dyn Iterator<Item = &Step> + '_> {
        match self {
            Self::Scenario(scenario) => Box::new(scenario.steps().iter()),
            Self::Rule(rule) => Box::new(
                rule.children()
                    .iter()
                    .flat_map(|scenario| scenario.steps().iter()),
            ),
            Self::Outline(outline) => Box::new(outline.steps().iter()),
        }
    }
}

/// Steps run before every scenario of the Feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    header: Header,
    steps: Vec<Step>,
}

container_header!(Background);

impl Background {
    pub(crate) fn new(line_number: usize, title: impl Into<String>) -> Self {
        Self {
            header: Header::new(line_number, title),
            steps: Vec::new(),
        }
    }

    pub(crate) fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Steps in source order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// Keyword used for a concrete scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioKeyword {
    /// `Scenario:`
    Scenario,
    /// `Example:`
    Example,
}

impl ScenarioKeyword {
    /// The [`LineKind`] of the header.
    #[must_use]
    pub const fn line_kind(self) -> LineKind {
        match self {
            Self::Scenario => LineKind::Scenario,
            Self::Example => LineKind::Example,
        }
    }

    pub(crate) const fn from_line_kind(kind: LineKind) -> Option<Self> {
        match kind {
            LineKind::Scenario => Some(Self::Scenario),
            LineKind::Example => Some(Self::Example),
            _ => None,
        }
    }
}

/// A concrete sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    keyword: ScenarioKeyword,
    header: Header,
    steps: Vec<Step>,
}

container_header!(Scenario);

impl Scenario {
    pub(crate) fn new(keyword: ScenarioKeyword, line_number: usize, title: impl Into<String>) -> Self {
        Self {
            keyword,
            header: Header::new(line_number, title),
            steps: Vec::new(),
        }
    }

    pub(crate) fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// `Scenario` or `Example`.
    #[must_use]
    pub const fn keyword(&self) -> ScenarioKeyword {
        self.keyword
    }

    /// Steps in source order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// A business rule grouping scenarios and examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    header: Header,
    children: Vec<Scenario>,
}

container_header!(Rule);

impl Rule {
    pub(crate) fn new(line_number: usize, title: impl Into<String>) -> Self {
        Self {
            header: Header::new(line_number, title),
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, scenario: Scenario) {
        self.children.push(scenario);
    }

    /// Scenarios and Examples, interleaved in source order.
    #[must_use]
    pub fn children(&self) -> &[Scenario] {
        &self.children
    }
}

/// Keyword used for a parameterised scenario; the two spellings are aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineKeyword {
    /// `Scenario Outline:`
    ScenarioOutline,
    /// `Scenario Template:`
    ScenarioTemplate,
}

impl OutlineKeyword {
    /// The [`LineKind`] of the header.
    #[must_use]
    pub const fn line_kind(self) -> LineKind {
        match self {
            Self::ScenarioOutline => LineKind::ScenarioOutline,
            Self::ScenarioTemplate => LineKind::ScenarioTemplate,
        }
    }

    pub(crate) const fn from_line_kind(kind: LineKind) -> Option<Self> {
        match kind {
            LineKind::ScenarioOutline => Some(Self::ScenarioOutline),
            LineKind::ScenarioTemplate => Some(Self::ScenarioTemplate),
            _ => None,
        }
    }
}

/// A scenario replayed once per row of its Examples table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutline {
    keyword: OutlineKeyword,
    header: Header,
    steps: Vec<Step>,
    examples: Option<Examples>,
}

container_header!(ScenarioOutline);

impl ScenarioOutline {
    pub(crate) fn new(keyword: OutlineKeyword, line_number: usize, title: impl Into<String>) -> Self {
        Self {
            keyword,
            header: Header::new(line_number, title),
            steps: Vec::new(),
            examples: None,
        }
    }

    pub(crate) fn push_step(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn set_examples(&mut self, examples: Examples) {
        debug_assert!(self.examples.is_none(), "Examples already set");
        self.examples = Some(examples);
    }

    /// `Scenario Outline` or `Scenario Template`.
    #[must_use]
    pub const fn keyword(&self) -> OutlineKeyword {
        self.keyword
    }

    /// Steps in source order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The Examples or Scenarios block.
    #[must_use]
    pub const fn examples(&self) -> Option<&Examples> {
        self.examples.as_ref()
    }
}

/// Keyword used for an outline's data block; the two spellings are aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamplesKeyword {
    /// `Examples:`
    Examples,
    /// `Scenarios:`
    Scenarios,
}

impl ExamplesKeyword {
    /// The [`LineKind`] of the header.
    #[must_use]
    pub const fn line_kind(self) -> LineKind {
        match self {
            Self::Examples => LineKind::Examples,
            Self::Scenarios => LineKind::Scenarios,
        }
    }

    pub(crate) const fn from_line_kind(kind: LineKind) -> Option<Self> {
        match kind {
            LineKind::Examples => Some(Self::Examples),
            LineKind::Scenarios => Some(Self::Scenarios),
            _ => None,
        }
    }
}

/// Rows feeding a Scenario Outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examples {
    keyword: ExamplesKeyword,
    header: Header,
    table: Option<DataTable>,
}

container_header!(Examples);

impl Examples {
    pub(crate) fn new(keyword: ExamplesKeyword, line_number: usize, title: impl Into<String>) -> Self {
        Self {
            keyword,
            header: Header::new(line_number, title),
            table: None,
        }
    }

    pub(crate) fn set_table(&mut self, table: DataTable) {
        debug_assert!(self.table.is_none(), "DataTable already set");
        self.table = Some(table);
    }

    /// `Examples` or `Scenarios`.
    #[must_use]
    pub const fn keyword(&self) -> ExamplesKeyword {
        self.keyword
    }

    /// The data table, header row first.
    #[must_use]
    pub const fn table(&self) -> Option<&DataTable> {
        self.table.as_ref()
    }
}
