//! Gherkin feature-file parsing for requirement traceability.
//!
//! Text flows through three stages:
//!
//! 1. [`classify`] tags every non-blank line with a [`LineKind`];
//! 2. [`parse`] walks the classified lines once, building a [`FeatureFile`]
//!    and enforcing the grammar's ordering and cardinality rules;
//! 3. [`render`] prints the tree back as indented text.
//!
//! Any grammar violation aborts the parse with a [`GherkinError`] naming the
//! construct and its 1-based source line. The compiled keyword patterns are
//! shared read-only, so independent files can be parsed from several threads.
//!
//! ```
//! use reqtrace_gherkin::{FeatureChild, StepKeyword, parse_str};
//!
//! let doc = parse_str(
//!     "Feature: Login\n  Scenario: Valid login\n    Given a user\n    When they submit\n",
//! )
//! .unwrap();
//! let Some(FeatureChild::Scenario(scenario)) = doc.feature().children().first() else {
//!     panic!("expected a scenario");
//! };
//! let keywords: Vec<_> = scenario.steps().iter().map(|s| s.keyword()).collect();
//! assert_eq!(keywords, [StepKeyword::Given, StepKeyword::When]);
//! ```

mod errors;
mod line;
mod model;
mod outline;
mod parser;
mod placeholder;
mod render;
mod source;

pub use errors::{FeatureLoadError, GherkinError};
pub use line::{ClassifiedLine, DocStringMarker, LineKind, classify, classify_line, classify_text};
pub use model::{
    Background, Comment, DataTable, Description, DocString, Element, ElementCategory, Examples,
    ExamplesKeyword, Feature, FeatureChild, FeatureFile, OutlineKeyword, Rule, Scenario,
    ScenarioKeyword, ScenarioOutline, Step, StepArgument, StepKeyword, StepKeywordParseError,
};
pub use outline::ExpandedScenario;
pub use parser::{parse, parse_str};
pub use placeholder::{
    PlaceholderError, contains_placeholders, extract_parameters, substitute_placeholders,
};
pub use render::{Render, Renderer, render};
pub use source::{load_feature_file, read_feature_lines};
