//! Typed document tree produced by the structural parser.
//!
//! Each element kind is its own struct carrying exactly the capabilities the
//! grammar allows it (comments, descriptions, steps, a data table, ...) as
//! plain fields. Elements are assembled by the parser through crate-private
//! builder methods and are read-only once [`parse`](crate::parse) returns.

mod container;
mod data;
mod step;
mod text;

pub use container::{
    Background, Examples, ExamplesKeyword, Feature, FeatureChild, FeatureFile, OutlineKeyword,
    Rule, Scenario, ScenarioKeyword, ScenarioOutline,
};
pub use data::{DataTable, DocString, StepArgument};
pub use step::{Step, StepKeyword, StepKeywordParseError};
pub use text::{Comment, Description};

/// Broad category of an element, driving its default rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    /// Header-introduced element owning children.
    Container,
    /// Given/When/Then/And/But/`*` line.
    Step,
    /// DataTable or DocString block.
    Data,
    /// `#` comment.
    Comment,
    /// Free-text description line.
    AdditionalDescription,
}

/// Behaviour shared by every element of the document tree.
pub trait Element {
    /// First source line occupied by the element.
    fn line_number(&self) -> usize;

    /// Category of the element.
    fn category(&self) -> ElementCategory;

    /// Comments attached to the element; empty for kinds that never own any.
    fn comments(&self) -> &[Comment] {
        &[]
    }
}
