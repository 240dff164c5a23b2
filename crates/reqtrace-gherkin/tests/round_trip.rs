//! Rendering a parsed document and parsing the output again is stable.
#![expect(clippy::expect_used, reason = "tests fail loudly on parse errors")]

use reqtrace_gherkin::{Element, FeatureChild, FeatureFile, parse_str, render};
use rstest::rstest;

const SHOP: &str = r#"# language: en
# owner: payments
Feature: Checkout
    As a shopper
  I want to pay

  Background: signed in
    # shared setup
    Given a registered user
    And an empty cart

  Scenario: pay by card
    Given a cart with items:
      | item  | price |
      # prices in EUR
      | pen   | 2.50  |
    When the user pays with:
      ```json
        {"card": "4111"}
      """
    Then the order is confirmed

  Rule: refunds
    Within thirty days
    Example: full refund
      * a paid order
      Then a refund is issued

  Scenario Template: discount for <tier>
    Given a <tier> customer
    Scenarios: tiers
      | tier   |
      | gold   |
      | silver |
"#;

fn reparse(doc: &FeatureFile) -> FeatureFile {
    parse_str(&render(doc)).expect("rendered output parses")
}

#[test]
fn rendering_is_a_fixed_point() {
    let doc = parse_str(SHOP).expect("sample parses");
    let first = render(&doc);
    let second = render(&reparse(&doc));
    assert_eq!(first, second);
}

#[test]
fn reparsed_tree_keeps_its_shape() {
    let doc = parse_str(SHOP).expect("sample parses");
    let again = reparse(&doc);
    assert_eq!(again.comments().len(), doc.comments().len());
    let shape = |file: &FeatureFile| -> Vec<(usize, usize)> {
        file.feature()
            .children()
            .iter()
            .map(|child| (child.steps().count(), child.steps().map(|s| s.comments().len()).sum()))
            .collect()
    };
    assert_eq!(shape(&again), shape(&doc));
    let doc_strings = |file: &FeatureFile| -> Vec<String> {
        file.feature()
            .steps()
            .filter_map(|step| step.doc_string().map(|d| d.content()))
            .collect()
    };
    assert_eq!(doc_strings(&again), vec![r#"  {"card": "4111"}"#.to_string()]);
    assert_eq!(doc_strings(&again), doc_strings(&doc));
}

#[test]
fn rendered_sample_is_normalised() {
    let doc = parse_str(SHOP).expect("sample parses");
    let text = render(&doc);
    assert!(text.starts_with("# language: en\n# owner: payments\nFeature: Checkout\n  As a shopper\n"));
    assert!(text.contains("\n      ``` json\n        {\"card\": \"4111\"}\n      \"\"\"\n"));
    assert!(text.contains("\n  Scenario Template: discount for <tier>\n"));
}

#[rstest]
#[case("Feature:\n")]
#[case("Feature: F\nScenario:\nGiven x\n\"\"\"\n\"\"\"\n")]
#[case("Feature: F\nRule: R\n# lonely rule\n")]
#[case("Feature: F\nScenario Outline: O\nGiven <a>\nExamples:\n")]
fn edge_documents_round_trip(#[case] text: &str) {
    let doc = parse_str(text).expect("edge document parses");
    assert_eq!(render(&reparse(&doc)), render(&doc));
    assert_eq!(
        reparse(&doc).feature().children().iter().map(FeatureChild::line_number).count(),
        doc.feature().children().len()
    );
    assert_eq!(reparse(&doc).feature().line_number(), 1);
}
